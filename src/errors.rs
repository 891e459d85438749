// ============================================================================
// ERRORS - Recoverable, page-local failures
// ============================================================================

use thiserror::Error;

/// Login failures, shown inline on the login screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Username and password are required")]
    MissingField,
    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// Add-cargo form failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields ({0} is missing)")]
    MissingRequiredField(&'static str),
}

/// localStorage failures. Never surfaced to the user, only logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("could not write `{key}`: {message}")]
    Write { key: String, message: String },
    #[error("could not remove `{key}`")]
    Remove { key: String },
}
