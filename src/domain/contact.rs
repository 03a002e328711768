/// Error message returned whenever one of the contact fields is absent or empty.
pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";

/// A message left by a visitor through the contact form.
///
/// All four fields are guaranteed to be non-empty. Nothing else is checked:
/// the email address in particular is relayed exactly as it was typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    name: String,
    email: String,
    subject: String,
    message: String,
}

impl ContactRequest {
    pub fn new(
        name: Option<String>,
        email: Option<String>,
        subject: Option<String>,
        message: Option<String>,
    ) -> Result<Self, String> {
        match (
            present(name),
            present(email),
            present(subject),
            present(message),
        ) {
            (Some(name), Some(email), Some(subject), Some(message)) => Ok(Self {
                name,
                email,
                subject,
                message,
            }),
            _ => Err(ALL_FIELDS_REQUIRED.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

fn present(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}
