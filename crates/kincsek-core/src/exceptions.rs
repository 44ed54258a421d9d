use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum GenericError {
    /// a form was submitted without its required fields
    #[error("{0}")]
    Validation(String),
    #[error("Storage Error: {0}")]
    Storage(String),
    #[error("Serialization Error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for GenericError {
    fn from(e: std::io::Error) -> Self {
        Self::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for GenericError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}
