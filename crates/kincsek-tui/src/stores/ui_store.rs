/// UIStore manages UI-specific state (active tab, dialogs, text focus, etc.)
use crate::actions::{Action, FieldId, TabId};
use std::sync::{Arc, RwLock};

/// Modal dialog drawn over the UI until the user answers it
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    Alert(String),
    Confirm(String),
}

/// Internal state for UI
#[derive(Debug, Clone)]
pub struct UIState {
    /// Currently active tab
    pub active_tab: TabId,

    /// Text field receiving keystrokes (if any)
    pub editing: Option<FieldId>,

    /// Whether help overlay is visible
    pub show_help: bool,

    /// Alert or confirmation currently shown
    pub dialog: Option<Dialog>,

    /// Whether the application should exit
    pub should_exit: bool,
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            active_tab: TabId::Overview,
            editing: None,
            show_help: false,
            dialog: None,
            should_exit: false,
        }
    }
}

/// Store that holds UI-related state
#[derive(Clone)]
pub struct UIStore {
    state: Arc<RwLock<UIState>>,
}

impl UIStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(UIState::default())),
        }
    }

    /// Get a read-only snapshot of the current state
    pub fn get_state(&self) -> UIState {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Reducer: handle an action and update state accordingly
    pub fn reduce(&self, action: &Action) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());

        match action {
            Action::SwitchTab(tab_id) => {
                state.active_tab = *tab_id;
                state.editing = None;
            }

            Action::ToggleHelp => {
                state.show_help = !state.show_help;
            }

            Action::StartEditing(field) => {
                state.editing = Some(*field);
            }

            Action::StopEditing => {
                state.editing = None;
            }

            Action::AddGalleryImage if state.editing == Some(FieldId::GalleryUrl) => {
                state.editing = None;
            }

            Action::LoginSucceeded => {
                state.active_tab = TabId::Overview;
                state.editing = None;
            }

            Action::ShowAlert(message) => {
                state.dialog = Some(Dialog::Alert(message.clone()));
            }

            Action::RequestConfirm { message, .. } => {
                state.dialog = Some(Dialog::Confirm(message.clone()));
            }

            Action::ConfirmDialog | Action::DismissDialog => {
                state.dialog = None;
            }

            Action::Quit => {
                state.should_exit = true;
            }

            _ => {
                // Ignore actions not relevant to this store
            }
        }
    }

    /// Check if the application should exit
    pub fn should_exit(&self) -> bool {
        self.state.read().unwrap_or_else(|e| e.into_inner()).should_exit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let store = UIStore::new();
        let state = store.get_state();
        assert_eq!(state.active_tab, TabId::Overview);
        assert_eq!(state.show_help, false);
        assert_eq!(state.dialog, None);
        assert_eq!(state.should_exit, false);
    }

    #[test]
    fn test_switch_tab_stops_editing() {
        let store = UIStore::new();
        store.reduce(&Action::StartEditing(FieldId::LeadSearch));
        store.reduce(&Action::SwitchTab(TabId::Gallery));

        let state = store.get_state();
        assert_eq!(state.active_tab, TabId::Gallery);
        assert_eq!(state.editing, None);
    }

    #[test]
    fn test_toggle_help() {
        let store = UIStore::new();

        store.reduce(&Action::ToggleHelp);
        assert_eq!(store.get_state().show_help, true);

        store.reduce(&Action::ToggleHelp);
        assert_eq!(store.get_state().show_help, false);
    }

    #[test]
    fn test_confirm_dialog_lifecycle() {
        let store = UIStore::new();
        store.reduce(&Action::RequestConfirm {
            message: "Delete this lead?".to_string(),
            on_confirm: Box::new(Action::DeleteLead("1".to_string())),
        });
        assert_eq!(
            store.get_state().dialog,
            Some(Dialog::Confirm("Delete this lead?".to_string()))
        );

        store.reduce(&Action::DismissDialog);
        assert_eq!(store.get_state().dialog, None);
    }

    #[test]
    fn test_adding_gallery_image_leaves_url_field() {
        let store = UIStore::new();
        store.reduce(&Action::StartEditing(FieldId::GalleryUrl));
        store.reduce(&Action::AddGalleryImage);
        assert_eq!(store.get_state().editing, None);
    }

    #[test]
    fn test_quit() {
        let store = UIStore::new();
        store.reduce(&Action::Quit);

        assert_eq!(store.should_exit(), true);
    }
}
