/// Store modules that hold application state
/// Each store is responsible for a slice of the application state
pub mod auth_store;
pub mod gallery_store;
pub mod leads_store;
pub mod programs_store;
pub mod settings_store;
pub mod ui_store;

pub use auth_store::AuthStore;
pub use gallery_store::GalleryStore;
pub use leads_store::LeadsStore;
pub use programs_store::ProgramsStore;
pub use settings_store::SettingsStore;
pub use ui_store::UIStore;

use crate::actions::Action;
use kincsek_core::SiteContent;

/// Handles to every store. Cloning is cheap, the state behind each handle is shared.
#[derive(Clone)]
pub struct Stores {
    pub ui: UIStore,
    pub auth: AuthStore,
    pub leads: LeadsStore,
    pub programs: ProgramsStore,
    pub gallery: GalleryStore,
    pub settings: SettingsStore,
}

impl Stores {
    pub fn new(content: SiteContent) -> Self {
        Self {
            ui: UIStore::new(),
            auth: AuthStore::new(),
            leads: LeadsStore::new(),
            programs: ProgramsStore::new(content.programs),
            gallery: GalleryStore::new(),
            settings: SettingsStore::new(content.founders, content.announcement),
        }
    }

    /// Route an action through every reducer
    pub fn reduce(&self, action: &Action) {
        self.ui.reduce(action);
        self.auth.reduce(action);
        self.leads.reduce(action);
        self.programs.reduce(action);
        self.gallery.reduce(action);
        self.settings.reduce(action);
    }
}
