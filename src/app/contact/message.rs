use askama::Template;

use crate::{
    config::OwnerSettings,
    domain::{contact::ContactRequest, email::EmailAddress, portfolio::PersonalInfo},
    email::EmailMessage,
};

pub const NOTIFICATION_SUBJECT_PREFIX: &str = "Portfolio Contact: ";

// Visitor input is inserted as typed, hence no escaping.
#[derive(Template)]
#[template(path = "emails/notification.html", escape = "none")]
struct NotificationTemplate<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

#[derive(Template)]
#[template(path = "emails/acknowledgment.html", escape = "none")]
struct AcknowledgmentTemplate<'a> {
    name: &'a str,
    subject: &'a str,
    message: &'a str,
    owner_name: &'a str,
    owner_role: &'a str,
    owner_email: &'a str,
    site_url: &'a str,
    whatsapp_number: &'a str,
    phone: &'a str,
}

/// The summary sent to the owner's own mailbox.
pub fn notification(
    sender: &EmailAddress,
    request: &ContactRequest,
) -> Result<EmailMessage, askama::Error> {
    let html = NotificationTemplate {
        name: request.name(),
        email: request.email(),
        subject: request.subject(),
        message: request.message(),
    }
    .render()?;

    Ok(EmailMessage {
        from: sender.to_string(),
        to: sender.to_string(),
        subject: format!("{}{}", NOTIFICATION_SUBJECT_PREFIX, request.subject()),
        html,
    })
}

/// The auto-reply sent back to the visitor.
///
/// Direct contact numbers come from the portfolio content.
pub fn acknowledgment(
    sender: &EmailAddress,
    owner: &OwnerSettings,
    contact: &PersonalInfo,
    request: &ContactRequest,
) -> Result<EmailMessage, askama::Error> {
    let html = AcknowledgmentTemplate {
        name: request.name(),
        subject: request.subject(),
        message: request.message(),
        owner_name: &owner.name,
        owner_role: &owner.role,
        owner_email: sender.as_ref(),
        site_url: &owner.site_url,
        whatsapp_number: &contact.whatsapp_number,
        phone: &contact.phone,
    }
    .render()?;

    Ok(EmailMessage {
        from: sender.to_string(),
        to: request.email().to_owned(),
        subject: format!("Thank you for contacting {}", owner.name),
        html,
    })
}
