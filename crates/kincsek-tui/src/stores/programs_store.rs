/// ProgramsStore mirrors the parent-owned program list and holds the edit draft
use crate::actions::Action;
use kincsek_core::models::{Program, ProgramDraft, ProgramField};
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone)]
pub struct ProgramsState {
    pub programs: Vec<Program>,

    pub selected_index: usize,

    /// Form values while the editor is open; None when it is closed
    pub draft: Option<ProgramDraft>,

    /// Form field receiving keystrokes
    pub focused_field: ProgramField,
}

#[derive(Clone)]
pub struct ProgramsStore {
    state: Arc<RwLock<ProgramsState>>,
}

impl ProgramsStore {
    pub fn new(programs: Vec<Program>) -> Self {
        Self {
            state: Arc::new(RwLock::new(ProgramsState {
                programs,
                selected_index: 0,
                draft: None,
                focused_field: ProgramField::Title,
            })),
        }
    }

    pub fn get_state(&self) -> ProgramsState {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn is_editing(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .draft
            .is_some()
    }

    /// Reducer: handle an action and update state accordingly
    pub fn reduce(&self, action: &Action) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());

        match action {
            Action::SelectProgram(index) => {
                state.selected_index = (*index).min(state.programs.len().saturating_sub(1));
            }

            Action::OpenProgramEditor(None) => {
                state.draft = Some(ProgramDraft::default());
                state.focused_field = ProgramField::Title;
            }

            Action::OpenProgramEditor(Some(id)) => {
                let draft = state
                    .programs
                    .iter()
                    .find(|p| &p.id == id)
                    .map(ProgramDraft::from);
                if draft.is_some() {
                    state.draft = draft;
                    state.focused_field = ProgramField::Title;
                }
            }

            Action::FocusProgramField(field) => {
                state.focused_field = *field;
            }

            Action::UpdateProgramDraft(field, value) => {
                if let Some(draft) = state.draft.as_mut() {
                    draft.set(*field, value.clone());
                }
            }

            Action::CloseProgramEditor => {
                state.draft = None;
            }

            Action::ProgramsCommitted(programs) => {
                state.programs = programs.clone();
                state.draft = None;
                state.selected_index = state
                    .selected_index
                    .min(state.programs.len().saturating_sub(1));
            }

            _ => {
                // Ignore actions not relevant to this store
            }
        }
    }

    pub fn get_selected_program(&self) -> Option<Program> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state.programs.get(state.selected_index).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(id: &str, title: &str) -> Program {
        Program {
            id: id.to_string(),
            title: title.to_string(),
            description: "leírás".to_string(),
            date: "Hétfő".to_string(),
            image_url: "https://example.com/x.jpg".to_string(),
            category: "Kézműves".to_string(),
        }
    }

    #[test]
    fn test_open_create_editor_seeds_empty_draft() {
        let store = ProgramsStore::new(vec![program("1", "Kerámia")]);
        store.reduce(&Action::OpenProgramEditor(None));

        let state = store.get_state();
        assert_eq!(state.draft, Some(ProgramDraft::default()));
        assert_eq!(state.focused_field, ProgramField::Title);
    }

    #[test]
    fn test_open_edit_editor_seeds_from_record() {
        let store = ProgramsStore::new(vec![program("1", "Kerámia"), program("2", "Festés")]);
        store.reduce(&Action::OpenProgramEditor(Some("2".to_string())));

        let draft = store.get_state().draft.unwrap();
        assert_eq!(draft.id, Some("2".to_string()));
        assert_eq!(draft.title, "Festés");
    }

    #[test]
    fn test_close_discards_draft() {
        let store = ProgramsStore::new(vec![program("1", "Kerámia")]);
        store.reduce(&Action::OpenProgramEditor(Some("1".to_string())));
        store.reduce(&Action::UpdateProgramDraft(
            ProgramField::Title,
            "Más".to_string(),
        ));
        store.reduce(&Action::CloseProgramEditor);

        let state = store.get_state();
        assert!(state.draft.is_none());
        assert_eq!(state.programs[0].title, "Kerámia");
    }

    #[test]
    fn test_commit_replaces_list_and_closes_editor() {
        let store = ProgramsStore::new(vec![program("1", "Kerámia"), program("2", "Festés")]);
        store.reduce(&Action::SelectProgram(1));
        store.reduce(&Action::OpenProgramEditor(None));
        store.reduce(&Action::ProgramsCommitted(vec![program("1", "Kerámia")]));

        let state = store.get_state();
        assert!(state.draft.is_none());
        assert_eq!(state.programs.len(), 1);
        assert_eq!(state.selected_index, 0);
    }
}
