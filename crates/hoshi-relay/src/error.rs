//! Relay error types.
//!
//! Every error maps to one of the Japanese messages the contact page shows.
//! Internal detail (SMTP responses, HTTP statuses) stays in the error for
//! the logs and never reaches the user.

use thiserror::Error;

/// Which validation rule a submission broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssue {
    /// A required field is missing or blank.
    MissingField,
    /// The email address does not look like an address.
    InvalidEmail,
}

/// Errors produced by the contact relay.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("submission rejected: {issue:?}")]
    Validation { issue: ValidationIssue },

    #[error("relay not configured: {detail}")]
    Configuration { detail: String },

    #[error("delivery failed via {channel}: {detail}")]
    Delivery { channel: &'static str, detail: String },
}

impl RelayError {
    /// The message shown to the person who submitted the form.
    pub fn user_message(&self) -> &'static str {
        match self {
            RelayError::Validation {
                issue: ValidationIssue::MissingField,
            } => "すべての項目を入力してください。",
            RelayError::Validation {
                issue: ValidationIssue::InvalidEmail,
            } => "正しいメールアドレスを入力してください。",
            RelayError::Configuration { .. } | RelayError::Delivery { .. } => {
                "送信に失敗しました。しばらくしてから再度お試しください。"
            }
        }
    }

    /// HTTP status the contact endpoint responds with.
    pub fn status_code(&self) -> u16 {
        match self {
            RelayError::Validation { .. } => 400,
            RelayError::Configuration { .. } | RelayError::Delivery { .. } => 500,
        }
    }
}

/// Result alias for relay operations.
pub type RelayResult<T> = Result<T, RelayError>;

// =============================================================================
// Unit Tests
// =============================================================================
