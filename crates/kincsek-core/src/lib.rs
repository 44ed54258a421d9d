mod macros;

// public api
pub mod auth;
pub mod config;
pub mod exceptions;
pub mod gallery;
pub mod leads;
pub mod models;
pub mod overview;
pub mod programs;
pub mod site;
pub mod storage;

pub use auth::{Authenticator, PasswordAuthenticator};
pub use exceptions::GenericError;
pub use site::SiteContent;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
