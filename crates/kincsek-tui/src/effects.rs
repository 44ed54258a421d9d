/// Effects module handles side effects (storage reads/writes, authentication)
/// Effects are triggered by Actions and dispatch new Actions with results
use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::stores::Stores;
use kincsek_core::models::{Lead, Program};
use kincsek_core::programs::{self, ProgramDefaults};
use kincsek_core::storage::{self, GALLERY_KEY, LEADS_KEY, load_or_default};
use kincsek_core::{Authenticator, GenericError, KeyValueStore, gallery, leads, site};
use std::sync::Arc;

pub const WRONG_PASSWORD_MESSAGE: &str = "Wrong password!";
pub const FOUNDERS_SAVED_MESSAGE: &str = "Profile images saved!";
pub const ANNOUNCEMENT_SAVED_MESSAGE: &str = "Announcement updated!";

/// Effects handler that executes side effects based on actions
pub struct Effects {
    dispatcher: Dispatcher,
    stores: Stores,
    storage: Arc<dyn KeyValueStore>,
    authenticator: Arc<dyn Authenticator>,
    program_defaults: ProgramDefaults,

    /// Action to run if the open confirmation dialog is accepted
    pending_confirmation: Option<Action>,
}

impl Effects {
    pub fn new(
        dispatcher: Dispatcher,
        stores: Stores,
        storage: Arc<dyn KeyValueStore>,
        authenticator: Arc<dyn Authenticator>,
        program_defaults: ProgramDefaults,
    ) -> Self {
        Self {
            dispatcher,
            stores,
            storage,
            authenticator,
            program_defaults,
            pending_confirmation: None,
        }
    }

    /// Handle an action and trigger appropriate side effects.
    /// Runs after every store has reduced the action.
    pub fn handle(&mut self, action: &Action) {
        match action {
            Action::SubmitLogin => self.verify_login(),

            Action::LoginSucceeded | Action::SwitchTab(_) | Action::ReloadFromStorage => {
                self.reload_from_storage()
            }

            Action::RequestConfirm { on_confirm, .. } => {
                self.pending_confirmation = Some(on_confirm.as_ref().clone());
            }

            Action::ConfirmDialog => {
                if let Some(confirmed) = self.pending_confirmation.take() {
                    self.dispatcher.dispatch(confirmed);
                }
            }

            Action::DismissDialog => {
                self.pending_confirmation = None;
            }

            Action::SetLeadStatus { id, status } => {
                let current = self.stores.leads.get_state().leads;
                let updated = leads::set_status(&current, id, *status);
                if self.persist("leads", |store| storage::save(store, LEADS_KEY, &updated)) {
                    self.dispatcher.dispatch(Action::LeadsCommitted(updated));
                }
            }

            Action::DeleteLead(id) => {
                let current = self.stores.leads.get_state().leads;
                let remaining = leads::remove_lead(&current, id);
                if self.persist("leads", |store| storage::save(store, LEADS_KEY, &remaining)) {
                    log::info!("Deleted lead {}", id);
                    self.dispatcher.dispatch(Action::LeadsCommitted(remaining));
                }
            }

            Action::AddGalleryImage => {
                let state = self.stores.gallery.get_state();
                let Some(images) = gallery::append_image(&state.images, &state.url_input) else {
                    return;
                };
                if self.persist("gallery", |store| storage::save(store, GALLERY_KEY, &images)) {
                    self.dispatcher.dispatch(Action::GalleryImageAdded(images));
                }
            }

            Action::RemoveGalleryImage(index) => {
                let current = self.stores.gallery.get_state().images;
                let images = gallery::remove_image(&current, *index);
                if self.persist("gallery", |store| storage::save(store, GALLERY_KEY, &images)) {
                    self.dispatcher.dispatch(Action::GalleryCommitted(images));
                }
            }

            Action::SaveProgram => self.save_program(),

            Action::DeleteProgram(id) => {
                let current = self.stores.programs.get_state().programs;
                log::info!("Deleting program {}", id);
                self.commit_programs(programs::remove_program(&current, id));
            }

            Action::SaveFounders => {
                let founders = self.stores.settings.get_state().founders_from_draft();
                if self.persist("founders", |store| site::save_founders(store, &founders)) {
                    self.dispatcher.dispatch(Action::FoundersCommitted(founders));
                    self.dispatcher
                        .dispatch(Action::ShowAlert(FOUNDERS_SAVED_MESSAGE.to_string()));
                }
            }

            Action::SaveAnnouncement => {
                let announcement = self.stores.settings.get_state().announcement_from_draft();
                if self.persist("announcement", |store| {
                    site::save_announcement(store, &announcement)
                }) {
                    self.dispatcher
                        .dispatch(Action::AnnouncementCommitted(announcement));
                    self.dispatcher
                        .dispatch(Action::ShowAlert(ANNOUNCEMENT_SAVED_MESSAGE.to_string()));
                }
            }

            _ => {
                // Other actions don't trigger effects
            }
        }
    }

    fn verify_login(&self) {
        let credential = self.stores.auth.get_state().password_input;
        if self.authenticator.verify(&credential) {
            log::info!("Admin logged in");
            self.dispatcher.dispatch(Action::LoginSucceeded);
        } else {
            log::warn!("Rejected login attempt");
            self.dispatcher
                .dispatch(Action::ShowAlert(WRONG_PASSWORD_MESSAGE.to_string()));
        }
    }

    /// Re-read the dashboard-owned lists. Data changed by another process
    /// (e.g. the intake command) shows up here.
    fn reload_from_storage(&self) {
        let leads: Vec<Lead> = load_or_default(self.storage.as_ref(), LEADS_KEY);
        let images: Vec<String> = load_or_default(self.storage.as_ref(), GALLERY_KEY);
        log::debug!(
            "Reloaded {} leads and {} gallery images",
            leads.len(),
            images.len()
        );
        self.dispatcher.dispatch(Action::LeadsLoaded(leads));
        self.dispatcher.dispatch(Action::GalleryLoaded(images));
    }

    fn save_program(&self) {
        let state = self.stores.programs.get_state();
        let Some(draft) = state.draft else {
            return;
        };
        let now_millis = chrono::Utc::now().timestamp_millis();
        match programs::save_draft(&state.programs, &draft, &self.program_defaults, now_millis) {
            Ok(updated) => self.commit_programs(updated),
            Err(e) => {
                log::warn!("Program not saved: {}", e);
                self.dispatcher.dispatch(Action::ShowAlert(e.to_string()));
            }
        }
    }

    /// The editor closes only once the list is stored.
    fn commit_programs(&self, updated: Vec<Program>) {
        if self.persist("programs", |store| site::save_programs(store, &updated)) {
            self.dispatcher.dispatch(Action::ProgramsCommitted(updated));
        }
    }

    /// Run a write against storage, alerting the user when it fails.
    /// Returns whether the write succeeded.
    fn persist<F>(&self, what: &str, write: F) -> bool
    where
        F: FnOnce(&dyn KeyValueStore) -> Result<(), GenericError>,
    {
        match write(self.storage.as_ref()) {
            Ok(()) => {
                log::debug!("Persisted {}", what);
                true
            }
            Err(e) => {
                log::error!("Failed to persist {}: {}", what, e);
                self.dispatcher
                    .dispatch(Action::ShowAlert(format!("Could not save {}: {}", what, e)));
                false
            }
        }
    }
}
