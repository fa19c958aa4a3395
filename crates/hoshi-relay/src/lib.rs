//! # Hoshi Relay
//!
//! Contact form relay: validates submissions and forwards each one as an
//! email to the restaurant inbox.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                             hoshi-relay                                 │
//! │                                                                         │
//! │  ContactRequest ──validate──► ContactRelay ──deliver once──► channel    │
//! │                                    │                           │        │
//! │                                    ▼                     SmtpChannel    │
//! │                                 Receipt                  ApiChannel     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Channel selection is configuration-driven (`SMTP_HOST`, then
//! `MAIL_API_URL`); exactly one channel is active and exactly one delivery
//! attempt is made per submission. User-facing failures always carry the
//! Japanese messages the contact page shows, never transport detail.

pub mod channel;
pub mod config;
pub mod error;
pub mod message;
pub mod relay;

pub use channel::{ApiChannel, DeliveryChannel, OutgoingEmail, SmtpChannel};
pub use config::{ApiConfig, ChannelConfig, RelayConfig, SmtpConfig, DEFAULT_RECIPIENT};
pub use error::{RelayError, RelayResult, ValidationIssue};
pub use message::{ContactRequest, Receipt, EMAIL_SUBJECT};
pub use relay::{ContactRelay, SUCCESS_MESSAGE};
