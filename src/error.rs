//! Error types for the messenger core

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MessengerError>;

#[derive(Error, Debug)]
pub enum MessengerError {
    #[error("Invalid message: {reason}")]
    InvalidMessage { reason: String },

    #[error("Invalid chat name: {reason}")]
    InvalidName { reason: String },

    #[error("Unknown message kind: {0}")]
    UnknownKind(String),

    #[error("No chat with id {id}")]
    UnknownChat { id: usize },

    #[error("Session is closed")]
    Closed,

    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed export at line {line}: {reason}")]
    MalformedExport { line: usize, reason: String },
}

impl MessengerError {
    pub(crate) fn invalid_message(reason: impl Into<String>) -> Self {
        Self::InvalidMessage {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_name(reason: impl Into<String>) -> Self {
        Self::InvalidName {
            reason: reason.into(),
        }
    }

    /// True for errors caused by user input, which the shell shows and re-prompts on.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidMessage { .. } | Self::InvalidName { .. } | Self::UnknownKind(_)
        )
    }
}
