use std::error::Error;
use std::io;
use std::path::{Path, PathBuf};

pub static EXAMPLE_DOTENV_CONFIG: &str = r#"# Example Kincsek .env configuration file
# Directory for the stored JSON documents
KINCSEK_DATA_DIR=.kincsek
# Admin password. The dashboard rejects every login while this is empty
KINCSEK_ADMIN_PASSWORD=
KINCSEK_DEFAULT_PROGRAM_CATEGORY=Általános
KINCSEK_DEFAULT_PROGRAM_IMAGE=https://picsum.photos/seed/art/800/600
KINCSEK_RECENT_LEADS_LIMIT=5
"#;

const DOTENV_EXAMPLE_FILE: &str = ".env.example";

fn write_dotenv_example(dir: &Path, force: bool) -> io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(DOTENV_EXAMPLE_FILE);
    if path.exists() && !force {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists, use --force to overwrite", path.display()),
        ));
    }
    std::fs::write(&path, EXAMPLE_DOTENV_CONFIG)?;
    Ok(path)
}

pub fn handle_init(args: InitArgs) -> Result<(), Box<dyn Error>> {
    let path = write_dotenv_example(&args.dir, args.force)?;
    println!("Example .env file written to {}", path.display());
    println!("Copy it to .env and set KINCSEK_ADMIN_PASSWORD before logging in");
    Ok(())
}

/// Arguments for scaffolding a .env.example file
#[derive(clap::Args)]
#[command(version, about, long_about = None)]
pub struct InitArgs {
    /// Directory to write the file into
    #[arg(long, short, default_value = ".")]
    pub dir: PathBuf,

    /// Overwrite an existing .env.example
    #[arg(long, default_value_t = false)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_dotenv_example() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dotenv_example(dir.path(), false).unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        for setting in [
            "KINCSEK_DATA_DIR",
            "KINCSEK_ADMIN_PASSWORD",
            "KINCSEK_DEFAULT_PROGRAM_CATEGORY",
            "KINCSEK_DEFAULT_PROGRAM_IMAGE",
            "KINCSEK_RECENT_LEADS_LIMIT",
        ] {
            assert!(written.contains(setting), "missing {setting}");
        }
    }

    #[test]
    fn test_existing_file_needs_force() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DOTENV_EXAMPLE_FILE), "KEEP=1").unwrap();

        let err = write_dotenv_example(dir.path(), false).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(
            std::fs::read_to_string(dir.path().join(DOTENV_EXAMPLE_FILE)).unwrap(),
            "KEEP=1"
        );

        assert!(write_dotenv_example(dir.path(), true).is_ok());
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("site");
        assert!(write_dotenv_example(&nested, false).is_ok());
        assert!(nested.join(DOTENV_EXAMPLE_FILE).exists());
    }
}
