//! Error types for the network, storage and form layers.
//!
//! ERROR HANDLING
//! ==============
//! Lower layers keep the cause (`TransportError`, `ApiError`, `StorageError`).
//! Forms collapse them into `FormError`, whose `Display` text is exactly what
//! the page shows. Causes of transport and storage failures are logged, never
//! displayed.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::fmt;

/// The request could not be completed or its body could not be read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("could not encode request body: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Request(String),
    #[error("could not read response body: {0}")]
    Body(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-success status. `message` is the body's `message` field, if any.
    #[error("server rejected request with status {status}")]
    Rejected { status: u16, message: Option<String> },
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("client storage is unavailable")]
    Unavailable,
    #[error("could not write `{key}` to client storage: {reason}")]
    Write { key: String, reason: String },
}

/// Which form produced an error; selects the fallback wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Registration,
}

impl FormKind {
    /// Shown when the server rejects a request without a usable message.
    pub fn fallback_message(self) -> &'static str {
        match self {
            Self::Login => "Login failed",
            Self::Registration => "Registration failed",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Login => "login",
            Self::Registration => "registration",
        })
    }
}

/// User-visible form failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Passwords do not match")]
    PasswordMismatch,
    /// Server-provided message, or the form's fallback.
    #[error("{0}")]
    Rejected(String),
    #[error("An error occurred during {0}")]
    Unavailable(FormKind),
}

impl FormError {
    /// Collapse an API failure into what `kind`'s form displays.
    pub fn from_api(kind: FormKind, err: &ApiError) -> Self {
        match err {
            ApiError::Rejected { message, .. } => Self::Rejected(
                message
                    .as_deref()
                    .filter(|m| !m.is_empty())
                    .unwrap_or(kind.fallback_message())
                    .to_owned(),
            ),
            ApiError::Transport(_) | ApiError::Decode(_) => Self::Unavailable(kind),
        }
    }
}
