/// Keyboard input handling and key mapping
use crate::actions::{Action, FieldId, TabId};
use crate::stores::Stores;
use crate::stores::ui_store::Dialog;
use kincsek_core::models::{Lead, LeadStatus};
use ratatui::crossterm::event::{KeyCode, KeyEvent};

pub const DELETE_LEAD_PROMPT: &str = "Delete this lead?";

/// Handle keyboard input and return the appropriate Action
pub fn handle_key_event(key_event: KeyEvent, stores: &Stores) -> Option<Action> {
    let ui_state = stores.ui.get_state();

    // An open dialog swallows every key until it is answered
    if let Some(dialog) = &ui_state.dialog {
        return handle_dialog_keys(key_event, dialog);
    }

    if !stores.auth.is_authenticated() {
        return handle_login_keys(key_event, stores);
    }

    if stores.programs.is_editing() {
        return handle_program_editor_keys(key_event, stores);
    }

    if let Some(field) = ui_state.editing {
        return handle_text_input_keys(key_event, field, stores);
    }

    match key_event.code {
        // Global keys
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::ReloadFromStorage),

        // Tab switching
        KeyCode::Char(c @ '1'..='6') => {
            let index = c as usize - '1' as usize;
            Some(Action::SwitchTab(TabId::ALL[index]))
        }
        KeyCode::Tab => Some(Action::SwitchTab(ui_state.active_tab.next())),
        KeyCode::BackTab => Some(Action::SwitchTab(ui_state.active_tab.previous())),

        // Tab-specific keys
        _ => match ui_state.active_tab {
            TabId::Overview => handle_overview_keys(key_event),
            TabId::Leads => handle_leads_keys(key_event, stores),
            TabId::Programs => handle_programs_keys(key_event, stores),
            TabId::Gallery => handle_gallery_keys(key_event, stores),
            TabId::Founders => handle_founders_keys(key_event, stores),
            TabId::Settings => handle_settings_keys(key_event),
        },
    }
}

fn handle_dialog_keys(key_event: KeyEvent, dialog: &Dialog) -> Option<Action> {
    match dialog {
        Dialog::Alert(_) => match key_event.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Action::DismissDialog),
            _ => None,
        },
        Dialog::Confirm(_) => match key_event.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                Some(Action::ConfirmDialog)
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                Some(Action::DismissDialog)
            }
            _ => None,
        },
    }
}

/// Everything typed on the login screen goes into the password field
fn handle_login_keys(key_event: KeyEvent, stores: &Stores) -> Option<Action> {
    let password = stores.auth.get_state().password_input;
    match key_event.code {
        KeyCode::Enter => Some(Action::SubmitLogin),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Backspace => Some(Action::UpdateInput(FieldId::Password, popped(&password))),
        KeyCode::Char(c) if !c.is_control() => {
            Some(Action::UpdateInput(FieldId::Password, pushed(&password, c)))
        }
        _ => None,
    }
}

fn handle_program_editor_keys(key_event: KeyEvent, stores: &Stores) -> Option<Action> {
    let state = stores.programs.get_state();
    let draft = state.draft?;
    let field = state.focused_field;

    match key_event.code {
        KeyCode::Esc => Some(Action::CloseProgramEditor),
        KeyCode::Enter => Some(Action::SaveProgram),
        KeyCode::Tab | KeyCode::Down => Some(Action::FocusProgramField(field.next())),
        KeyCode::BackTab | KeyCode::Up => Some(Action::FocusProgramField(field.previous())),
        KeyCode::Backspace => Some(Action::UpdateProgramDraft(field, popped(draft.get(field)))),
        KeyCode::Char(c) if !c.is_control() => {
            Some(Action::UpdateProgramDraft(field, pushed(draft.get(field), c)))
        }
        _ => None,
    }
}

fn handle_text_input_keys(key_event: KeyEvent, field: FieldId, stores: &Stores) -> Option<Action> {
    let value = current_input(field, stores);
    match key_event.code {
        KeyCode::Enter => match field {
            FieldId::GalleryUrl => Some(Action::AddGalleryImage),
            _ => Some(Action::StopEditing),
        },
        KeyCode::Esc => Some(Action::StopEditing),
        KeyCode::Backspace => Some(Action::UpdateInput(field, popped(&value))),
        KeyCode::Char(c) if !c.is_control() => Some(Action::UpdateInput(field, pushed(&value, c))),
        _ => None,
    }
}

fn handle_overview_keys(key_event: KeyEvent) -> Option<Action> {
    match key_event.code {
        KeyCode::Char('l') => Some(Action::SwitchTab(TabId::Leads)),
        KeyCode::Char('s') => Some(Action::SwitchTab(TabId::Settings)),
        _ => None,
    }
}

fn handle_leads_keys(key_event: KeyEvent, stores: &Stores) -> Option<Action> {
    let state = stores.leads.get_state();
    let selected = stores.leads.get_selected_lead();

    match key_event.code {
        KeyCode::Char('j') | KeyCode::Down => Some(Action::SelectLead(state.selected_index + 1)),
        KeyCode::Char('k') | KeyCode::Up => {
            Some(Action::SelectLead(state.selected_index.saturating_sub(1)))
        }
        KeyCode::Char('/') => Some(Action::StartEditing(FieldId::LeadSearch)),
        KeyCode::Esc if !state.search_term.is_empty() => {
            Some(Action::UpdateInput(FieldId::LeadSearch, String::new()))
        }

        // Status changes
        KeyCode::Char('n') => set_status(selected, LeadStatus::New),
        KeyCode::Char('c') => set_status(selected, LeadStatus::Contacted),
        KeyCode::Char('e') => set_status(selected, LeadStatus::Enrolled),
        KeyCode::Char(' ') => {
            let status = selected.as_ref()?.status.next();
            set_status(selected, status)
        }

        KeyCode::Char('d') | KeyCode::Delete => selected.map(|lead| Action::RequestConfirm {
            message: DELETE_LEAD_PROMPT.to_string(),
            on_confirm: Box::new(Action::DeleteLead(lead.id)),
        }),

        _ => None,
    }
}

fn handle_programs_keys(key_event: KeyEvent, stores: &Stores) -> Option<Action> {
    let state = stores.programs.get_state();
    let selected = stores.programs.get_selected_program();

    match key_event.code {
        KeyCode::Char('j') | KeyCode::Down => {
            Some(Action::SelectProgram(state.selected_index + 1))
        }
        KeyCode::Char('k') | KeyCode::Up => {
            Some(Action::SelectProgram(state.selected_index.saturating_sub(1)))
        }
        KeyCode::Char('a') => Some(Action::OpenProgramEditor(None)),
        KeyCode::Char('e') | KeyCode::Enter => {
            selected.map(|program| Action::OpenProgramEditor(Some(program.id)))
        }
        // Programs are removed without confirmation
        KeyCode::Char('d') | KeyCode::Delete => {
            selected.map(|program| Action::DeleteProgram(program.id))
        }
        _ => None,
    }
}

fn handle_gallery_keys(key_event: KeyEvent, stores: &Stores) -> Option<Action> {
    let state = stores.gallery.get_state();

    match key_event.code {
        KeyCode::Char('j') | KeyCode::Down => {
            Some(Action::SelectGalleryImage(state.selected_index + 1))
        }
        KeyCode::Char('k') | KeyCode::Up => Some(Action::SelectGalleryImage(
            state.selected_index.saturating_sub(1),
        )),
        KeyCode::Char('a') | KeyCode::Char('/') => Some(Action::StartEditing(FieldId::GalleryUrl)),
        KeyCode::Char('d') | KeyCode::Delete if !state.images.is_empty() => {
            Some(Action::RemoveGalleryImage(state.selected_index))
        }
        _ => None,
    }
}

fn handle_founders_keys(key_event: KeyEvent, stores: &Stores) -> Option<Action> {
    let focused = stores.settings.get_state().focused_founder;

    match key_event.code {
        KeyCode::Char('j') | KeyCode::Char('k') | KeyCode::Down | KeyCode::Up => {
            Some(Action::FocusFounder(focused.other()))
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            Some(Action::StartEditing(FieldId::FounderImage(focused)))
        }
        KeyCode::Char('s') => Some(Action::SaveFounders),
        _ => None,
    }
}

fn handle_settings_keys(key_event: KeyEvent) -> Option<Action> {
    match key_event.code {
        KeyCode::Char('e') | KeyCode::Enter => Some(Action::StartEditing(FieldId::AnnouncementText)),
        KeyCode::Char('a') | KeyCode::Char(' ') => Some(Action::ToggleAnnouncementActive),
        KeyCode::Char('t') => Some(Action::CycleAnnouncementType),
        KeyCode::Char('s') => Some(Action::SaveAnnouncement),
        _ => None,
    }
}

fn set_status(selected: Option<Lead>, status: LeadStatus) -> Option<Action> {
    selected.map(|lead| Action::SetLeadStatus {
        id: lead.id,
        status,
    })
}

/// Current text of a single-line field
fn current_input(field: FieldId, stores: &Stores) -> String {
    match field {
        FieldId::Password => stores.auth.get_state().password_input,
        FieldId::LeadSearch => stores.leads.get_state().search_term,
        FieldId::GalleryUrl => stores.gallery.get_state().url_input,
        FieldId::FounderImage(id) => stores.settings.get_state().founder_image(id).to_string(),
        FieldId::AnnouncementText => stores.settings.get_state().announcement_text,
    }
}

fn pushed(value: &str, c: char) -> String {
    let mut s = value.to_string();
    s.push(c);
    s
}

fn popped(value: &str) -> String {
    let mut s = value.to_string();
    s.pop();
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use kincsek_core::SiteContent;
    use kincsek_core::models::{FounderId, ProgramField};
    use ratatui::crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn logged_in() -> Stores {
        let stores = Stores::new(SiteContent::default());
        stores.reduce(&Action::LoginSucceeded);
        stores
    }

    fn lead(id: &str) -> Lead {
        Lead {
            id: id.to_string(),
            name: "Anna".to_string(),
            program_title: "Kerámia".to_string(),
            phone: String::new(),
            email: String::new(),
            timestamp: String::new(),
            status: LeadStatus::New,
        }
    }

    #[test]
    fn test_login_screen_captures_all_characters() {
        let stores = Stores::new(SiteContent::default());
        stores.reduce(&Action::UpdateInput(FieldId::Password, "adm".to_string()));

        assert_eq!(
            handle_key_event(key(KeyCode::Char('q')), &stores),
            Some(Action::UpdateInput(FieldId::Password, "admq".to_string()))
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Backspace), &stores),
            Some(Action::UpdateInput(FieldId::Password, "ad".to_string()))
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Enter), &stores),
            Some(Action::SubmitLogin)
        );
    }

    #[test]
    fn test_number_keys_switch_tabs() {
        let stores = logged_in();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('3')), &stores),
            Some(Action::SwitchTab(TabId::Programs))
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('6')), &stores),
            Some(Action::SwitchTab(TabId::Settings))
        );
        assert_eq!(
            handle_key_event(key(KeyCode::BackTab), &stores),
            Some(Action::SwitchTab(TabId::Settings))
        );
    }

    #[test]
    fn test_dialog_blocks_other_keys() {
        let stores = logged_in();
        stores.reduce(&Action::RequestConfirm {
            message: DELETE_LEAD_PROMPT.to_string(),
            on_confirm: Box::new(Action::DeleteLead("1".to_string())),
        });

        assert_eq!(handle_key_event(key(KeyCode::Char('q')), &stores), None);
        assert_eq!(
            handle_key_event(key(KeyCode::Char('y')), &stores),
            Some(Action::ConfirmDialog)
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Esc), &stores),
            Some(Action::DismissDialog)
        );
    }

    #[test]
    fn test_delete_lead_asks_for_confirmation() {
        let stores = logged_in();
        stores.reduce(&Action::SwitchTab(TabId::Leads));
        stores.reduce(&Action::LeadsLoaded(vec![lead("7")]));

        assert_eq!(
            handle_key_event(key(KeyCode::Char('d')), &stores),
            Some(Action::RequestConfirm {
                message: DELETE_LEAD_PROMPT.to_string(),
                on_confirm: Box::new(Action::DeleteLead("7".to_string())),
            })
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char(' ')), &stores),
            Some(Action::SetLeadStatus {
                id: "7".to_string(),
                status: LeadStatus::Contacted,
            })
        );
    }

    #[test]
    fn test_search_editing_appends_text() {
        let stores = logged_in();
        stores.reduce(&Action::SwitchTab(TabId::Leads));
        stores.reduce(&Action::StartEditing(FieldId::LeadSearch));

        // digits are text while editing, not tab switches
        assert_eq!(
            handle_key_event(key(KeyCode::Char('1')), &stores),
            Some(Action::UpdateInput(FieldId::LeadSearch, "1".to_string()))
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Enter), &stores),
            Some(Action::StopEditing)
        );
    }

    #[test]
    fn test_program_editor_keys() {
        let stores = logged_in();
        stores.reduce(&Action::SwitchTab(TabId::Programs));
        assert_eq!(
            handle_key_event(key(KeyCode::Char('a')), &stores),
            Some(Action::OpenProgramEditor(None))
        );
        stores.reduce(&Action::OpenProgramEditor(None));

        assert_eq!(
            handle_key_event(key(KeyCode::Char('K')), &stores),
            Some(Action::UpdateProgramDraft(ProgramField::Title, "K".to_string()))
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Tab), &stores),
            Some(Action::FocusProgramField(ProgramField::Date))
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Esc), &stores),
            Some(Action::CloseProgramEditor)
        );
    }

    #[test]
    fn test_gallery_enter_adds_image() {
        let stores = logged_in();
        stores.reduce(&Action::SwitchTab(TabId::Gallery));
        assert_eq!(handle_key_event(key(KeyCode::Char('d')), &stores), None);

        stores.reduce(&Action::StartEditing(FieldId::GalleryUrl));
        assert_eq!(
            handle_key_event(key(KeyCode::Enter), &stores),
            Some(Action::AddGalleryImage)
        );
    }

    #[test]
    fn test_founders_focus_toggles() {
        let stores = logged_in();
        stores.reduce(&Action::SwitchTab(TabId::Founders));
        assert_eq!(
            handle_key_event(key(KeyCode::Char('j')), &stores),
            Some(Action::FocusFounder(FounderId::Zita))
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Enter), &stores),
            Some(Action::StartEditing(FieldId::FounderImage(FounderId::Edina)))
        );
    }
}
