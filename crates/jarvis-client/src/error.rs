use thiserror::Error;

use crate::state::FormKind;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Form field not found: {0}")]
    MissingField(&'static str),

    #[error("{0} request already in progress")]
    InFlight(FormKind),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Server rejected the request with status {status}")]
    Rejected { status: u16, detail: Option<String> },

    #[error("Could not parse server response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Server response did not include an access token")]
    MissingToken,

    #[error("Could not save access token: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl AuthError {
    /// Server-provided detail text, when the failure carried one
    pub fn detail(&self) -> Option<&str> {
        match self {
            AuthError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
