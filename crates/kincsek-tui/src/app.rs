/// Main application struct and event loop
use crate::actions::Action;
use crate::dispatcher::{ActionReceiver, Dispatcher};
use crate::effects::Effects;
use crate::keyboard;
use crate::logger::LogBuffer;
use crate::stores::Stores;
use crate::ui::render_layout;
use kincsek_core::programs::ProgramDefaults;
use kincsek_core::{Authenticator, KeyValueStore, SiteContent};
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// The main application structure following flux architecture
pub struct App {
    dispatcher: Dispatcher,

    /// Every store, shared with effects
    stores: Stores,

    /// Log buffer shown in the footer
    log_buffer: LogBuffer,

    effects: Effects,
}

impl App {
    pub fn new(
        storage: Arc<dyn KeyValueStore>,
        authenticator: Arc<dyn Authenticator>,
        content: SiteContent,
    ) -> Result<(Self, ActionReceiver), Box<dyn std::error::Error>> {
        let (dispatcher, rx) = Dispatcher::new();
        let action_receiver = ActionReceiver::new(rx);

        let log_buffer = crate::logger::init_memory_logger()?;

        let stores = Stores::new(content);
        let effects = Effects::new(
            dispatcher.clone(),
            stores.clone(),
            storage,
            authenticator,
            ProgramDefaults::from_env(),
        );

        Ok((
            Self {
                dispatcher,
                stores,
                log_buffer,
                effects,
            },
            action_receiver,
        ))
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut crate::tui::Tui,
        mut action_receiver: ActionReceiver,
    ) -> io::Result<()> {
        log::info!("Kincsek admin started");

        self.dispatcher.dispatch(Action::ReloadFromStorage);

        loop {
            terminal.draw(|frame| {
                render_layout(frame, &self.stores, &self.log_buffer);
            })?;

            if self.stores.ui.should_exit() {
                break;
            }

            tokio::select! {
                // Poll for keyboard events
                _ = tokio::time::sleep(Duration::from_millis(16)) => {
                    if event::poll(Duration::from_millis(0))? {
                        if let Event::Key(key_event) = event::read()? {
                            // Only process key press events (not release)
                            if key_event.kind == KeyEventKind::Press {
                                if let Some(action) = keyboard::handle_key_event(key_event, &self.stores) {
                                    self.dispatcher.dispatch(action);
                                }
                            }
                        }
                    }
                }

                // Process actions from the dispatcher
                Some(action) = action_receiver.recv() => {
                    self.handle_action(&action);
                }
            }
        }

        log::info!("Kincsek admin closed");
        Ok(())
    }

    /// Route an action to the stores, then to effects
    fn handle_action(&mut self, action: &Action) {
        log::debug!("Handling action: {:?}", action);

        self.stores.reduce(action);
        self.effects.handle(action);
    }
}
