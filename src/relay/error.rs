//! Relay failure taxonomy

use thiserror::Error;

/// Message used when the relay gives no usable reason
pub const GENERIC_FAILURE: &str = "Failed to send message";

/// Why a submission did not go through.
///
/// The user sees the same fallback alert for every variant; the distinction
/// only matters for logs.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("could not reach relay: {0}")]
    Transport(String),
    #[error("relay rejected submission ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("relay returned an unreadable response: {0}")]
    MalformedBody(String),
    #[error("relay task failed: {0}")]
    Task(String),
}

impl RelayError {
    /// Short label for structured logging
    pub fn kind(&self) -> &'static str {
        match self {
            RelayError::Transport(_) => "transport",
            RelayError::Rejected { .. } => "rejected",
            RelayError::MalformedBody(_) => "malformed_body",
            RelayError::Task(_) => "task",
        }
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        RelayError::Transport(err.to_string())
    }
}

impl From<tokio::task::JoinError> for RelayError {
    fn from(err: tokio::task::JoinError) -> Self {
        RelayError::Task(err.to_string())
    }
}
