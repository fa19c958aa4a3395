//! The relay itself: validate, compose, deliver once, receipt.

use chrono::Utc;
use tracing::{error, info};

use crate::channel::{ApiChannel, DeliveryChannel, OutgoingEmail, SmtpChannel};
use crate::config::{ChannelConfig, RelayConfig};
use crate::error::RelayResult;
use crate::message::{ContactRequest, Receipt, EMAIL_SUBJECT};

/// Receipt message shown after a successful submission.
pub const SUCCESS_MESSAGE: &str = "お問い合わせを受け付けました。";

/// Forwards contact form submissions to the restaurant inbox.
pub struct ContactRelay {
    channel: Box<dyn DeliveryChannel>,
    sender: String,
    recipient: String,
}

impl ContactRelay {
    /// Builds the relay from environment configuration.
    pub fn from_env() -> RelayResult<Self> {
        Self::new(RelayConfig::load()?)
    }

    /// Builds the relay from explicit configuration.
    pub fn new(config: RelayConfig) -> RelayResult<Self> {
        let channel: Box<dyn DeliveryChannel> = match &config.channel {
            ChannelConfig::Smtp(smtp) => Box::new(SmtpChannel::new(smtp)?),
            ChannelConfig::Api(api) => Box::new(ApiChannel::new(api)),
        };
        Ok(Self::with_channel(channel, config.sender, config.recipient))
    }

    /// Builds the relay around an arbitrary channel. Used by tests.
    pub fn with_channel(
        channel: Box<dyn DeliveryChannel>,
        sender: String,
        recipient: String,
    ) -> Self {
        ContactRelay {
            channel,
            sender,
            recipient,
        }
    }

    /// Handles one submission: validate, compose the email, make exactly
    /// one delivery attempt, and issue a receipt.
    pub async fn submit(&self, request: &ContactRequest) -> RelayResult<Receipt> {
        request.validate()?;

        let email = OutgoingEmail {
            from: self.sender.clone(),
            to: self.recipient.clone(),
            subject: EMAIL_SUBJECT.to_string(),
            body: request.email_body(),
        };
        info!(
            channel = self.channel.name(),
            to = %email.to,
            "relaying contact submission"
        );
        if let Err(err) = self.channel.deliver(&email).await {
            error!(channel = self.channel.name(), %err, "contact delivery failed");
            return Err(err);
        }

        Ok(Receipt {
            message: SUCCESS_MESSAGE.to_string(),
            received_at: Utc::now(),
        })
    }
}
