/// AuthStore holds the login gate: the typed password and whether it was accepted
use crate::actions::{Action, FieldId};
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub password_input: String,

    /// Set once a password is accepted; never expires during the session
    pub authenticated: bool,
}

#[derive(Clone)]
pub struct AuthStore {
    state: Arc<RwLock<AuthState>>,
}

impl AuthStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(AuthState::default())),
        }
    }

    pub fn get_state(&self) -> AuthState {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .authenticated
    }

    pub fn reduce(&self, action: &Action) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());

        match action {
            Action::UpdateInput(FieldId::Password, value) => {
                state.password_input = value.clone();
            }

            Action::LoginSucceeded => {
                state.authenticated = true;
                state.password_input.clear();
            }

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_locked() {
        let store = AuthStore::new();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_login_succeeded_unlocks_and_clears_input() {
        let store = AuthStore::new();
        store.reduce(&Action::UpdateInput(FieldId::Password, "secret".to_string()));
        assert_eq!(store.get_state().password_input, "secret");

        store.reduce(&Action::LoginSucceeded);
        let state = store.get_state();
        assert!(state.authenticated);
        assert!(state.password_input.is_empty());
    }

    #[test]
    fn test_submit_alone_does_not_unlock() {
        let store = AuthStore::new();
        store.reduce(&Action::UpdateInput(FieldId::Password, "wrong".to_string()));
        store.reduce(&Action::SubmitLogin);
        assert!(!store.is_authenticated());
        assert_eq!(store.get_state().password_input, "wrong");
    }
}
