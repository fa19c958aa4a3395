//! Contact form submissions and the email they become.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{RelayError, RelayResult, ValidationIssue};

/// Subject line of every relayed email.
pub const EMAIL_SUBJECT: &str = "【ホシのキッチン】お問い合わせ";

/// Same shape the contact page checks before submitting: something, an @,
/// something, a dot, something, no whitespace.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// One contact form submission, as posted by the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactRequest {
    /// Checks the submission: all three fields present and non-blank, and
    /// the email address plausible.
    pub fn validate(&self) -> RelayResult<()> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.message.trim().is_empty()
        {
            return Err(RelayError::Validation {
                issue: ValidationIssue::MissingField,
            });
        }
        if !EMAIL_PATTERN.is_match(&self.email) {
            return Err(RelayError::Validation {
                issue: ValidationIssue::InvalidEmail,
            });
        }
        Ok(())
    }

    /// The plain-text email body sent to the restaurant inbox.
    pub fn email_body(&self) -> String {
        format!(
            "\nお問い合わせがありました。\n\n【お名前】\n{}\n\n【メールアドレス】\n{}\n\n【お問い合わせ内容】\n{}\n\n---\nこのメールは「ホシのキッチン」のお問い合わせフォームから送信されました。\n",
            self.name, self.email, self.message
        )
    }
}

/// Returned to the frontend after a successful relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub message: String,
    pub received_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================
