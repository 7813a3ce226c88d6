//! Error types for viewvoyage

use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of errors, used by the CLI to pick a message style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // User errors
    ValidationError,
    NotFound,
    NotAuthenticated,
    PromptCancelled,
    InvalidConfig,

    // System errors
    FileError,
    SerializationError,
}

/// Main error type for viewvoyage
#[derive(Error, Debug)]
pub enum ViewVoyageError {
    #[error("Missing fields: {0}")]
    MissingFields(String),

    #[error("Invalid file type for {}: expected {expected}", path.display())]
    InvalidFileType { path: PathBuf, expected: String },

    #[error("Video not found: {0}")]
    NotFound(String),

    #[error("Sign in required")]
    NotAuthenticated,

    #[error("Prompt aborted: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("File error: {0}")]
    File(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ViewVoyageError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MissingFields(_) | Self::InvalidFileType { .. } => ErrorCode::ValidationError,
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::NotAuthenticated => ErrorCode::NotAuthenticated,
            Self::Prompt(_) => ErrorCode::PromptCancelled,
            Self::InvalidConfig(_) => ErrorCode::InvalidConfig,
            Self::File(_) => ErrorCode::FileError,
            Self::Json(_) => ErrorCode::SerializationError,
        }
    }

    /// Whether the error came from user input rather than the environment
    pub fn is_user_error(&self) -> bool {
        matches!(
            self.code(),
            ErrorCode::ValidationError
                | ErrorCode::NotFound
                | ErrorCode::NotAuthenticated
                | ErrorCode::PromptCancelled
        )
    }
}

pub type Result<T> = std::result::Result<T, ViewVoyageError>;
