//! Relay configuration.
//!
//! Loaded from environment variables. Channel selection is by presence:
//! `SMTP_HOST` selects SMTP, otherwise `MAIL_API_URL` selects the mail API,
//! otherwise loading fails. Exactly one channel is ever active.

use std::env;

use crate::error::{RelayError, RelayResult};

/// Inbox the contact form forwards to unless `CONTACT_RECIPIENT` overrides it.
pub const DEFAULT_RECIPIENT: &str = "hoshi.syo@gmail.com";

/// Default sender address unless `MAIL_FROM` overrides it.
pub const DEFAULT_SENDER: &str = "no-reply@hoshi-kitchen.jp";

/// SMTP channel settings.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

/// Mail API channel settings.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub url: String,
    /// Bearer token, when the API requires one.
    pub api_key: Option<String>,
}

/// Which delivery channel is configured.
#[derive(Debug, Clone)]
pub enum ChannelConfig {
    Smtp(SmtpConfig),
    Api(ApiConfig),
}

/// Full relay configuration.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub channel: ChannelConfig,
    pub sender: String,
    pub recipient: String,
}

impl RelayConfig {
    /// Load configuration from environment variables.
    pub fn load() -> RelayResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads through a lookup function so tests can inject an environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> RelayResult<Self> {
        let channel = if let Some(host) = lookup("SMTP_HOST") {
            let port = match lookup("SMTP_PORT") {
                Some(raw) => raw.parse().map_err(|_| RelayError::Configuration {
                    detail: "SMTP_PORT is not a port number".to_string(),
                })?,
                None => 587,
            };
            ChannelConfig::Smtp(SmtpConfig {
                host,
                port,
                username: require(&lookup, "SMTP_USERNAME")?,
                password: require(&lookup, "SMTP_PASSWORD")?,
            })
        } else if let Some(url) = lookup("MAIL_API_URL") {
            ChannelConfig::Api(ApiConfig {
                url,
                api_key: lookup("MAIL_API_KEY"),
            })
        } else {
            return Err(RelayError::Configuration {
                detail: "neither SMTP_HOST nor MAIL_API_URL is set".to_string(),
            });
        };

        Ok(RelayConfig {
            channel,
            sender: lookup("MAIL_FROM").unwrap_or_else(|| DEFAULT_SENDER.to_string()),
            recipient: lookup("CONTACT_RECIPIENT").unwrap_or_else(|| DEFAULT_RECIPIENT.to_string()),
        })
    }
}

fn require(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> RelayResult<String> {
    lookup(key).ok_or_else(|| RelayError::Configuration {
        detail: format!("{key} is not set"),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    fn load(pairs: &[(&str, &str)]) -> RelayResult<RelayConfig> {
        let env = env_of(pairs);
        RelayConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn smtp_presence_selects_smtp() {
        let config = load(&[
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_USERNAME", "mailer"),
            ("SMTP_PASSWORD", "secret"),
            ("MAIL_API_URL", "https://mail.example.com/send"),
        ])
        .unwrap();
        match config.channel {
            ChannelConfig::Smtp(smtp) => {
                assert_eq!(smtp.host, "smtp.example.com");
                assert_eq!(smtp.port, 587);
            }
            ChannelConfig::Api(_) => panic!("SMTP_HOST must win over MAIL_API_URL"),
        }
        assert_eq!(config.recipient, DEFAULT_RECIPIENT);
        assert_eq!(config.sender, DEFAULT_SENDER);
    }

    #[test]
    fn api_is_the_fallback_channel() {
        let config = load(&[
            ("MAIL_API_URL", "https://mail.example.com/send"),
            ("MAIL_API_KEY", "token"),
            ("CONTACT_RECIPIENT", "owner@example.com"),
        ])
        .unwrap();
        match config.channel {
            ChannelConfig::Api(api) => {
                assert_eq!(api.url, "https://mail.example.com/send");
                assert_eq!(api.api_key.as_deref(), Some("token"));
            }
            ChannelConfig::Smtp(_) => panic!("no SMTP_HOST was set"),
        }
        assert_eq!(config.recipient, "owner@example.com");
    }

    #[test]
    fn missing_channel_fails_to_load() {
        let err = load(&[]).unwrap_err();
        assert!(matches!(err, RelayError::Configuration { .. }));
    }

    #[test]
    fn incomplete_smtp_settings_fail_to_load() {
        let err = load(&[("SMTP_HOST", "smtp.example.com")]).unwrap_err();
        assert!(err.to_string().contains("SMTP_USERNAME"));
    }

    #[test]
    fn bad_smtp_port_fails_to_load() {
        let err = load(&[
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_PORT", "not-a-port"),
            ("SMTP_USERNAME", "mailer"),
            ("SMTP_PASSWORD", "secret"),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("SMTP_PORT"));
    }
}
