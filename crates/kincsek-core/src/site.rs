/// Parent-owned site content: programs, founders and the announcement banner.
use crate::exceptions::GenericError;
use crate::models::{Announcement, Founders, Program};
use crate::storage::{
    load_or_default, save, KeyValueStore, ANNOUNCEMENT_KEY, FOUNDERS_KEY, PROGRAMS_KEY,
};
use log::info;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SiteContent {
    pub programs: Vec<Program>,
    pub founders: Founders,
    pub announcement: Announcement,
}

impl SiteContent {
    /// Load every part independently, falling back to defaults for absent or
    /// malformed entries
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let content = Self {
            programs: load_or_default(store, PROGRAMS_KEY),
            founders: load_or_default(store, FOUNDERS_KEY),
            announcement: load_or_default(store, ANNOUNCEMENT_KEY),
        };
        info!(
            "Loaded site content: {} programs, announcement {}",
            content.programs.len(),
            if content.announcement.is_active {
                "active"
            } else {
                "inactive"
            }
        );
        content
    }
}

pub fn save_programs(store: &dyn KeyValueStore, programs: &[Program]) -> Result<(), GenericError> {
    save(store, PROGRAMS_KEY, programs)
}

pub fn save_founders(store: &dyn KeyValueStore, founders: &Founders) -> Result<(), GenericError> {
    save(store, FOUNDERS_KEY, founders)
}

pub fn save_announcement(
    store: &dyn KeyValueStore,
    announcement: &Announcement,
) -> Result<(), GenericError> {
    save(store, ANNOUNCEMENT_KEY, announcement)
}
