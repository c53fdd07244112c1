//! Error types for daybook-core

use std::fmt;

use thiserror::Error;

/// Result type alias using daybook-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in daybook-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote store API error
    #[error("Store API error: {0}")]
    Api(String),

    /// Document not found
    #[error("Document not found: {0}")]
    NotFound(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Failure description carried by a `Resource::Failure` and rendered on
/// screen.
///
/// The message is optional; rendering always goes through
/// [`LoadError::display_message`], which falls back to a fixed string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    message: Option<String>,
    cause: Option<String>,
}

impl LoadError {
    /// A failure with a user-facing message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            cause: None,
        }
    }

    /// A failure with a user-facing message and an underlying cause kept
    /// for diagnostics.
    #[must_use]
    pub fn with_cause(message: impl Into<String>, cause: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            cause: Some(cause.into()),
        }
    }

    /// A failure with no usable description.
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            message: None,
            cause: None,
        }
    }

    /// Message to render for the user.
    #[must_use]
    pub fn display_message(&self) -> &str {
        self.message
            .as_deref()
            .filter(|message| !message.trim().is_empty())
            .unwrap_or("Unknown Error")
    }

    /// Underlying cause, if one was recorded.
    #[must_use]
    pub fn cause(&self) -> Option<&str> {
        self.cause.as_deref()
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.display_message())
    }
}

impl std::error::Error for LoadError {}

impl From<Error> for LoadError {
    fn from(error: Error) -> Self {
        match error {
            Error::Http(inner) => {
                Self::with_cause("Could not reach the server", inner.to_string())
            }
            other => Self::new(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_message_falls_back_when_empty() {
        assert_eq!(LoadError::unknown().display_message(), "Unknown Error");
        assert_eq!(LoadError::new("   ").display_message(), "Unknown Error");
    }

    #[test]
    fn display_message_uses_provided_text() {
        let error = LoadError::new("Permission denied");
        assert_eq!(error.display_message(), "Permission denied");
        assert_eq!(error.to_string(), "Permission denied");
    }

    #[test]
    fn from_core_error_keeps_description() {
        let error = LoadError::from(Error::Api("quota exceeded".to_string()));
        assert_eq!(error.display_message(), "Store API error: quota exceeded");
        assert_eq!(error.cause(), None);
    }
}
