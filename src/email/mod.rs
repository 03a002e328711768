use std::sync::Arc;

use async_trait::async_trait;
use secrecy::ExposeSecret;

use crate::config::{EmailClientSettings, TransportKind};

mod client;
mod smtp;

pub use client::EmailClient;
pub use smtp::SmtpMailer;

/// Everything a transport needs to deliver one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

#[derive(thiserror::Error, Debug)]
pub enum SendError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Smtp(#[from] lettre::transport::smtp::Error),
    #[error(transparent)]
    Address(#[from] lettre::address::AddressError),
    #[error(transparent)]
    Message(#[from] lettre::error::Error),
    #[error("{0}")]
    Rejected(String),
    #[error("the mail delivery task did not complete: {0}")]
    Aborted(#[from] tokio::task::JoinError),
}

/// The capability of delivering an email somewhere.
#[async_trait]
pub trait EmailTransport: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<(), SendError>;
}

/// Build the transport selected in the configuration.
pub fn transport_from_settings(
    settings: &EmailClientSettings,
) -> Result<Arc<dyn EmailTransport>, SendError> {
    let transport: Arc<dyn EmailTransport> = match settings.transport {
        TransportKind::Smtp => Arc::new(SmtpMailer::new(
            &settings.smtp_host,
            settings.smtp_port,
            &settings.sender_email,
            settings.sender_password.expose_secret(),
        )?),
        TransportKind::Http => Arc::new(EmailClient::new(
            settings.base_url.clone(),
            settings.authorization_token.clone(),
            settings.timeout(),
        )?),
    };

    Ok(transport)
}
