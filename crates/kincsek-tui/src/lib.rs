use kincsek_core::{Authenticator, KeyValueStore, SiteContent};
use std::io;
use std::sync::Arc;

// Flux architecture modules
mod actions;
mod app;
mod dispatcher;
mod effects;
mod keyboard;
mod logger;
mod stores;
mod ui;

mod common;
mod tui;

pub use app::App;

/// Run the admin dashboard until the user quits.
///
/// `content` is the site content loaded by the caller; leads and the gallery
/// are read from `storage` once the app starts.
pub async fn tui_main(
    storage: Arc<dyn KeyValueStore>,
    authenticator: Arc<dyn Authenticator>,
    content: SiteContent,
) -> io::Result<()> {
    // Install color-eyre for better error messages BEFORE terminal init
    if let Err(e) = color_eyre::install() {
        eprintln!("Warning: Failed to install color-eyre: {}", e);
    }

    let mut terminal = tui::init()?;

    // Creating the app installs the in-memory logger
    let (mut app, action_receiver) = match App::new(storage, authenticator, content) {
        Ok(app) => app,
        Err(e) => {
            let _ = tui::restore();
            eprintln!("Failed to initialize application: {}", e);
            return Err(io::Error::other(e.to_string()));
        }
    };

    let result = app.run(&mut terminal, action_receiver).await;

    // Always restore terminal
    let _ = tui::restore();

    if let Err(e) = result {
        eprintln!("Application error: {:?}", e);
        return Err(e);
    }

    Ok(())
}
