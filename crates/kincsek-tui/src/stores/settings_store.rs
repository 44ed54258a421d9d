/// SettingsStore holds the committed founders and announcement together with
/// the draft values edited on the Founders and Settings tabs
use crate::actions::{Action, FieldId};
use kincsek_core::models::{Announcement, AnnouncementType, FounderId, Founders};
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone)]
pub struct SettingsState {
    /// Last saved founders
    pub founders: Founders,

    /// Last saved announcement
    pub announcement: Announcement,

    pub edina_image: String,
    pub zita_image: String,
    pub focused_founder: FounderId,

    pub announcement_text: String,
    pub announcement_active: bool,
    pub announcement_type: AnnouncementType,
}

impl SettingsState {
    pub fn founder_image(&self, id: FounderId) -> &str {
        match id {
            FounderId::Edina => &self.edina_image,
            FounderId::Zita => &self.zita_image,
        }
    }

    /// Founders with both draft images applied
    pub fn founders_from_draft(&self) -> Founders {
        self.founders
            .with_images(self.edina_image.clone(), self.zita_image.clone())
    }

    pub fn announcement_from_draft(&self) -> Announcement {
        Announcement {
            text: self.announcement_text.clone(),
            is_active: self.announcement_active,
            kind: self.announcement_type,
        }
    }
}

#[derive(Clone)]
pub struct SettingsStore {
    state: Arc<RwLock<SettingsState>>,
}

impl SettingsStore {
    /// Drafts start out as copies of the committed values
    pub fn new(founders: Founders, announcement: Announcement) -> Self {
        Self {
            state: Arc::new(RwLock::new(SettingsState {
                edina_image: founders.edina.image.clone(),
                zita_image: founders.zita.image.clone(),
                focused_founder: FounderId::Edina,
                announcement_text: announcement.text.clone(),
                announcement_active: announcement.is_active,
                announcement_type: announcement.kind,
                founders,
                announcement,
            })),
        }
    }

    pub fn get_state(&self) -> SettingsState {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn reduce(&self, action: &Action) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());

        match action {
            Action::FocusFounder(id) => {
                state.focused_founder = *id;
            }

            Action::UpdateInput(FieldId::FounderImage(FounderId::Edina), value) => {
                state.edina_image = value.clone();
            }

            Action::UpdateInput(FieldId::FounderImage(FounderId::Zita), value) => {
                state.zita_image = value.clone();
            }

            Action::UpdateInput(FieldId::AnnouncementText, value) => {
                state.announcement_text = value.clone();
            }

            Action::ToggleAnnouncementActive => {
                state.announcement_active = !state.announcement_active;
            }

            Action::CycleAnnouncementType => {
                state.announcement_type = state.announcement_type.next();
            }

            Action::FoundersCommitted(founders) => {
                state.founders = founders.clone();
            }

            Action::AnnouncementCommitted(announcement) => {
                state.announcement = announcement.clone();
            }

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SettingsStore {
        SettingsStore::new(Founders::default(), Announcement::default())
    }

    #[test]
    fn test_drafts_seeded_from_committed_values() {
        let founders = Founders::default().with_images("e.jpg".into(), "z.jpg".into());
        let announcement = Announcement {
            text: "Nyitva".to_string(),
            is_active: true,
            kind: AnnouncementType::Success,
        };
        let state = SettingsStore::new(founders, announcement.clone()).get_state();
        assert_eq!(state.founder_image(FounderId::Edina), "e.jpg");
        assert_eq!(state.founder_image(FounderId::Zita), "z.jpg");
        assert_eq!(state.announcement_from_draft(), announcement);
    }

    #[test]
    fn test_founder_drafts_do_not_touch_committed() {
        let store = store();
        store.reduce(&Action::UpdateInput(
            FieldId::FounderImage(FounderId::Zita),
            "new.jpg".to_string(),
        ));

        let state = store.get_state();
        assert_eq!(state.zita_image, "new.jpg");
        assert_eq!(state.founders, Founders::default());
        assert_eq!(state.founders_from_draft().zita.image, "new.jpg");
        assert_eq!(
            state.founders_from_draft().edina,
            Founders::default().edina
        );
    }

    #[test]
    fn test_announcement_draft_controls() {
        let store = store();
        store.reduce(&Action::UpdateInput(
            FieldId::AnnouncementText,
            "Zárva".to_string(),
        ));
        store.reduce(&Action::ToggleAnnouncementActive);
        store.reduce(&Action::CycleAnnouncementType);

        let draft = store.get_state().announcement_from_draft();
        assert_eq!(draft.text, "Zárva");
        assert!(draft.is_active);
        assert_eq!(draft.kind, AnnouncementType::Urgent);
        assert_eq!(store.get_state().announcement, Announcement::default());
    }

    #[test]
    fn test_commit_announcement() {
        let store = store();
        let announcement = Announcement {
            text: "Zárva".to_string(),
            is_active: true,
            kind: AnnouncementType::Urgent,
        };
        store.reduce(&Action::AnnouncementCommitted(announcement.clone()));
        assert_eq!(store.get_state().announcement, announcement);
    }
}
