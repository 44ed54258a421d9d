use crate::macros::internal_get_kincsek_setting;
use log::warn;

/// Verifies the credential typed into the login gate
pub trait Authenticator: Send + Sync {
    fn verify(&self, credential: &str) -> bool;
}

/// Compares against a single configured password. This is a convenience
/// gate for a single-user local tool, not a security boundary.
pub struct PasswordAuthenticator {
    secret: String,
}

impl PasswordAuthenticator {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Reads the secret from `KINCSEK_ADMIN_PASSWORD`
    pub fn from_env() -> Self {
        let secret = internal_get_kincsek_setting!(KINCSEK_ADMIN_PASSWORD);
        if secret.is_empty() {
            warn!("KINCSEK_ADMIN_PASSWORD is not set, every login attempt will be rejected");
        }
        Self::new(secret)
    }
}

impl Authenticator for PasswordAuthenticator {
    fn verify(&self, credential: &str) -> bool {
        !self.secret.is_empty() && credential == self.secret
    }
}
