use super::open_file_store;
use kincsek_core::{Authenticator, KeyValueStore, MemoryStore, PasswordAuthenticator, SiteContent};
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for running the admin dashboard
#[derive(clap::Args)]
#[command(version, about, long_about = None)]
pub struct TuiArgs {
    /// Directory holding the stored JSON documents.
    /// Falls back to KINCSEK_DATA_DIR
    #[arg(long, short)]
    pub data_dir: Option<PathBuf>,

    /// Keep all data in memory for this session only
    #[arg(long, default_value_t = false, conflicts_with = "data_dir")]
    pub memory: bool,
}

pub async fn handle_tui(args: TuiArgs) -> Result<(), Box<dyn Error>> {
    let storage: Arc<dyn KeyValueStore> = if args.memory {
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(open_file_store(args.data_dir))
    };
    let authenticator: Arc<dyn Authenticator> = Arc::new(PasswordAuthenticator::from_env());
    let content = SiteContent::load(storage.as_ref());

    kincsek_tui::tui_main(storage, authenticator, content).await?;
    Ok(())
}
