/// LeadsStore manages the inquiry list, its search term and the selected row
use crate::actions::{Action, FieldId};
use kincsek_core::leads;
use kincsek_core::models::Lead;
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, Default)]
pub struct LeadsState {
    /// Every lead in stored order
    pub leads: Vec<Lead>,

    /// Filter applied to name and program title
    pub search_term: String,

    /// Selected row within the filtered list
    pub selected_index: usize,
}

impl LeadsState {
    pub fn filtered(&self) -> Vec<Lead> {
        leads::filter_leads(&self.leads, &self.search_term)
            .into_iter()
            .cloned()
            .collect()
    }

    fn clamp_selection(&mut self) {
        let len = leads::filter_leads(&self.leads, &self.search_term).len();
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }
}

#[derive(Clone)]
pub struct LeadsStore {
    state: Arc<RwLock<LeadsState>>,
}

impl LeadsStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(LeadsState::default())),
        }
    }

    pub fn get_state(&self) -> LeadsState {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Reducer: handle an action and update state accordingly
    pub fn reduce(&self, action: &Action) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());

        match action {
            Action::LeadsLoaded(loaded) | Action::LeadsCommitted(loaded) => {
                state.leads = loaded.clone();
                state.clamp_selection();
            }

            Action::UpdateInput(FieldId::LeadSearch, term) => {
                state.search_term = term.clone();
                state.selected_index = 0;
            }

            Action::SelectLead(index) => {
                state.selected_index = *index;
                state.clamp_selection();
            }

            _ => {
                // Ignore actions not relevant to this store
            }
        }
    }

    /// Get the currently selected lead from the filtered list
    pub fn get_selected_lead(&self) -> Option<Lead> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        leads::filter_leads(&state.leads, &state.search_term)
            .get(state.selected_index)
            .map(|l| (*l).clone())
    }
}
