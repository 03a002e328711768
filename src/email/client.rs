use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

use super::{EmailMessage, EmailTransport, SendError};

/// Delivers messages through a Postmark-style JSON email API.
#[derive(Clone)]
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    authorization_token: Secret<String>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html_body: &'a str,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        authorization_token: Secret<String>,
        timeout: Duration,
    ) -> Result<Self, SendError> {
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            base_url,
            authorization_token,
        })
    }

    pub async fn send_email(&self, message: &EmailMessage) -> Result<(), SendError> {
        let url = format!("{}/email", self.base_url);
        let request_body = SendEmailRequest {
            from: &message.from,
            to: &message.to,
            subject: &message.subject,
            html_body: &message.html,
        };

        let response = self
            .http_client
            .post(&url)
            .header(
                "X-Postmark-Server-Token",
                self.authorization_token.expose_secret(),
            )
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let reason = response.text().await.unwrap_or_default();
            return Err(SendError::Rejected(format!(
                "the email API answered {}: {}",
                status, reason
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl EmailTransport for EmailClient {
    async fn send(&self, message: &EmailMessage) -> Result<(), SendError> {
        self.send_email(message).await
    }
}
