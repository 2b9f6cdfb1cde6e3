use thiserror::Error;

#[derive(Debug, Error)]
pub enum CardslimError {
    #[error("Failed to read '{path}': {reason}")]
    Unreadable { path: String, reason: String },

    #[error("Malformed catalog document: {0}")]
    Malformed(String),

    #[error("Missing '{key}' object in catalog document")]
    MissingKey { key: &'static str },

    #[error("Card not found in database: {0}")]
    UnknownCard(String),

    #[error("Card {0} has no pretty name")]
    NoPrettyName(String),
}

impl From<serde_json::Error> for CardslimError {
    fn from(e: serde_json::Error) -> Self {
        CardslimError::Malformed(e.to_string())
    }
}
