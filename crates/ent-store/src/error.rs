//! Store error types.

use thiserror::Error;

/// Errors that can occur when talking to the configuration store.
///
/// `Http` is the transport class (the call never completed); `Api` is a
/// well-formed HTTP error from the store and is what the engine's
/// classification rules inspect.
#[derive(Debug, Error)]
pub enum StoreError {
    /// HTTP transport error. Never suppressed by classification.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store returned a non-success status code.
    #[error("store error ({status} {reason}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// HTTP reason phrase, or the store's `reason` field when present.
        reason: String,
        /// Error message or raw response body.
        message: String,
    },

    /// Failed to parse a store response.
    #[error("parse error: {0}")]
    Parse(String),
}

impl StoreError {
    /// Status code for API errors; `None` for transport and parse errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Reason phrase for API errors.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Api { reason, .. } => Some(reason),
            _ => None,
        }
    }

    /// Message body for API errors.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }

    #[must_use]
    pub const fn is_forbidden(&self) -> bool {
        matches!(self, Self::Api { status: 403, .. })
    }

    /// 400-class rejection: bad request or forbidden. The cloud offering
    /// answers writes to protected entities with either.
    #[must_use]
    pub const fn is_write_rejection(&self) -> bool {
        matches!(self, Self::Api { status: 400 | 403, .. })
    }
}
