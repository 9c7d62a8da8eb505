//! Error type for account API calls.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, HTTP error statuses, and application-level `error`
//! flags all end up here. Handlers never propagate these; they collapse them
//! into a single inline message with `user_message`.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Inline text shown for any failure without a server-supplied message.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("server flagged the response as an error")]
    Rejected,
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Text to show the user for this failure.
    ///
    /// A non-empty server `message` wins verbatim; an HTTP error without one uses
    /// `fallback`; anything else uses the generic retry message.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } if !message.is_empty() => message.clone(),
            Self::Status { .. } => fallback.to_owned(),
            _ => GENERIC_ERROR_MESSAGE.to_owned(),
        }
    }
}
