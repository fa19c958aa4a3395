//! Delivery channels.
//!
//! A channel takes a fully composed email and hands it to an external
//! system. Channels do not retry and do not validate; both belong to the
//! relay layer above.

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use serde::Serialize;

use crate::config::{ApiConfig, SmtpConfig};
use crate::error::{RelayError, RelayResult};

/// A composed email, ready for any channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// One way of getting an email out of the building.
#[async_trait]
pub trait DeliveryChannel: Send + Sync {
    /// Channel name used in logs and error detail.
    fn name(&self) -> &'static str;

    /// Makes exactly one delivery attempt.
    async fn deliver(&self, email: &OutgoingEmail) -> RelayResult<()>;
}

// =============================================================================
// SMTP
// =============================================================================

/// Sends through an authenticated SMTP relay over STARTTLS.
pub struct SmtpChannel {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpChannel {
    pub fn new(config: &SmtpConfig) -> RelayResult<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|err| RelayError::Configuration {
                detail: format!("smtp relay {}: {err}", config.host),
            })?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();
        Ok(SmtpChannel { transport })
    }
}

#[async_trait]
impl DeliveryChannel for SmtpChannel {
    fn name(&self) -> &'static str {
        "smtp"
    }

    async fn deliver(&self, email: &OutgoingEmail) -> RelayResult<()> {
        let from: Mailbox = email.from.parse().map_err(|err| RelayError::Configuration {
            detail: format!("sender address {}: {err}", email.from),
        })?;
        let to: Mailbox = email.to.parse().map_err(|err| RelayError::Configuration {
            detail: format!("recipient address {}: {err}", email.to),
        })?;
        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(&email.subject)
            .body(email.body.clone())
            .map_err(|err| RelayError::Delivery {
                channel: "smtp",
                detail: err.to_string(),
            })?;
        self.transport
            .send(message)
            .await
            .map_err(|err| RelayError::Delivery {
                channel: "smtp",
                detail: err.to_string(),
            })?;
        Ok(())
    }
}

// =============================================================================
// Mail API
// =============================================================================

#[derive(Serialize)]
struct ApiPayload<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

/// Sends by POSTing JSON to a transactional mail API.
pub struct ApiChannel {
    client: reqwest::Client,
    url: String,
    api_key: Option<String>,
}

impl ApiChannel {
    pub fn new(config: &ApiConfig) -> Self {
        ApiChannel {
            client: reqwest::Client::new(),
            url: config.url.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl DeliveryChannel for ApiChannel {
    fn name(&self) -> &'static str {
        "api"
    }

    async fn deliver(&self, email: &OutgoingEmail) -> RelayResult<()> {
        let payload = ApiPayload {
            from: &email.from,
            to: &email.to,
            subject: &email.subject,
            text: &email.body,
        };
        let mut request = self.client.post(&self.url).json(&payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        let response = request.send().await.map_err(|err| RelayError::Delivery {
            channel: "api",
            detail: err.to_string(),
        })?;
        response
            .error_for_status()
            .map_err(|err| RelayError::Delivery {
                channel: "api",
                detail: err.to_string(),
            })?;
        Ok(())
    }
}
