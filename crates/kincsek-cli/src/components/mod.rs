pub mod init;
pub mod leads;
pub mod tui;

use kincsek_core::{FileStore, get_kincsek_setting};
use std::path::PathBuf;

/// File store rooted at `data_dir`, or at `KINCSEK_DATA_DIR` when not given
pub fn open_file_store(data_dir: Option<PathBuf>) -> FileStore {
    let dir = data_dir.unwrap_or_else(|| PathBuf::from(get_kincsek_setting!(KINCSEK_DATA_DIR)));
    log::debug!("Using data directory {}", dir.display());
    FileStore::new(dir)
}
