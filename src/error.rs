//! Custom error types for send-cli
//!
//! `SendError` covers the infrastructure layers (configuration, storage,
//! cryptography). `EditError` is the narrow taxonomy reported by the edit
//! workflow; every infrastructure failure surfaces there as `Internal`.

use std::fmt;

use thiserror::Error;

/// The main error type for send-cli infrastructure operations
#[derive(Error, Debug)]
pub enum SendError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Encryption errors
    #[error("Encryption error: {0}")]
    Encryption(String),
}

impl SendError {
    /// Create a "not found" error for sends
    pub fn send_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Send",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for SendError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SendError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for send-cli operations
pub type SendResult<T> = Result<T, SendError>;

/// The category of an edit failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditErrorKind {
    InvalidInput,
    NotFound,
    PermissionDenied,
    Internal,
}

impl fmt::Display for EditErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "invalid input"),
            Self::NotFound => write!(f, "not found"),
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::Internal => write!(f, "internal error"),
        }
    }
}

/// Failure of the Send edit workflow
///
/// Each variant carries a human-readable message. Nothing below the edit
/// service escapes as anything other than one of these four kinds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// Malformed or missing request, or an attempt to change an immutable field
    #[error("{0}")]
    InvalidInput(String),

    /// No Send exists for the resolved identifier
    #[error("{0}")]
    NotFound(String),

    /// The account lacks the capability the Send requires
    #[error("{0}")]
    PermissionDenied(String),

    /// Cryptography, persistence or any other unexpected failure
    #[error("{0}")]
    Internal(String),
}

impl EditError {
    pub fn kind(&self) -> EditErrorKind {
        match self {
            Self::InvalidInput(_) => EditErrorKind::InvalidInput,
            Self::NotFound(_) => EditErrorKind::NotFound,
            Self::PermissionDenied(_) => EditErrorKind::PermissionDenied,
            Self::Internal(_) => EditErrorKind::Internal,
        }
    }

    /// The message carried by this error
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidInput(m)
            | Self::NotFound(m)
            | Self::PermissionDenied(m)
            | Self::Internal(m) => m,
        }
    }
}

impl From<SendError> for EditError {
    fn from(err: SendError) -> Self {
        Self::Internal(err.to_string())
    }
}
