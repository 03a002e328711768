use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::contact::ContactRequest;

pub const DELIVERED: &str =
    "Message sent successfully! You will receive a confirmation email shortly.";

/// The contact form as posted by the browser.
///
/// No schema is enforced: a field can hold any JSON value, and a payload that is not an
/// object has no fields at all.
#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: FormField,
    #[serde(default)]
    pub email: FormField,
    #[serde(default)]
    pub subject: FormField,
    #[serde(default)]
    pub message: FormField,
}

impl ContactForm {
    pub fn from_json(value: Value) -> Self {
        if value.is_object() {
            serde_json::from_value(value).unwrap_or_default()
        } else {
            Self::default()
        }
    }
}

/// The text of a form field, or `None` when the submitted value is falsy
/// (`null`, `false`, `0` or an empty string).
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FormField(Option<String>);

impl FormField {
    pub fn into_inner(self) -> Option<String> {
        self.0
    }
}

impl From<Value> for FormField {
    fn from(value: Value) -> Self {
        let text = match value {
            Value::Null | Value::Bool(false) => None,
            Value::Number(ref n) if n.as_f64() == Some(0.0) => None,
            Value::String(s) => Some(s),
            other => Some(display(&other)),
        };

        // A truthy value can still print as nothing, e.g. `[]`.
        Self(text.filter(|s| !s.is_empty()))
    }
}

/// Text of a value as it reads when interpolated by a browser script.
fn display(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if !n.is_i64() && !n.is_u64() && f.fract() == 0.0 && f.abs() < 1e21 => {
                format!("{:.0}", f)
            }
            _ => n.to_string(),
        },
        Value::Array(items) => items
            .iter()
            .map(display)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_owned(),
    }
}

impl<'de> Deserialize<'de> for FormField {
    fn deserialize<D>(deserializer: D) -> Result<FormField, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(FormField::from)
    }
}

impl TryFrom<ContactForm> for ContactRequest {
    type Error = String;
    fn try_from(value: ContactForm) -> Result<Self, Self::Error> {
        ContactRequest::new(
            value.name.into_inner(),
            value.email.into_inner(),
            value.subject.into_inner(),
            value.message.into_inner(),
        )
    }
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: &'static str,
}

impl ContactResponse {
    pub fn delivered() -> Self {
        Self {
            success: true,
            message: DELIVERED,
        }
    }
}
