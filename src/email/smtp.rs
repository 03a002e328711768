use async_trait::async_trait;
use lettre::{
    message::header::ContentType, transport::smtp::authentication::Credentials, Message,
    SmtpTransport, Transport,
};

use super::{EmailMessage, EmailTransport, SendError};

/// Delivers messages through an SMTP relay such as Gmail.
#[derive(Clone)]
pub struct SmtpMailer {
    mailer: SmtpTransport,
}

impl SmtpMailer {
    /// Without a password the connection is plain and unauthenticated, which is
    /// what local mail catchers expect.
    pub fn new(host: &str, port: u16, username: &str, password: &str) -> Result<Self, SendError> {
        let mailer = if password.is_empty() {
            tracing::info!(
                smtp_host = %host,
                smtp_port = port,
                "SMTP credentials not configured, using an unauthenticated connection"
            );
            SmtpTransport::builder_dangerous(host).port(port).build()
        } else {
            tracing::info!(
                smtp_host = %host,
                smtp_port = port,
                username = %username,
                "SMTP relay configured with STARTTLS"
            );
            let credentials = Credentials::new(username.to_owned(), password.to_owned());
            SmtpTransport::starttls_relay(host)?
                .port(port)
                .credentials(credentials)
                .build()
        };

        Ok(Self { mailer })
    }
}

fn build_message(message: &EmailMessage) -> Result<Message, SendError> {
    let email = Message::builder()
        .from(message.from.parse()?)
        .to(message.to.parse()?)
        .subject(message.subject.as_str())
        .header(ContentType::TEXT_HTML)
        .body(message.html.clone())?;

    Ok(email)
}

#[async_trait]
impl EmailTransport for SmtpMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), SendError> {
        let email = build_message(message)?;
        let mailer = self.mailer.clone();

        // The transport is blocking.
        tokio::task::spawn_blocking(move || mailer.send(&email)).await??;

        Ok(())
    }
}
