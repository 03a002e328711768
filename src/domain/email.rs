use derive_more::Display;
use validator::validate_email;

/// A mailbox address checked for shape.
///
/// Only addresses we own go through this type. Addresses typed by visitors are
/// relayed as they were submitted.
#[derive(Display, Debug, Clone, PartialEq, Eq)]
#[display(fmt = "{}", _0)]
pub struct EmailAddress(String);

impl TryFrom<String> for EmailAddress {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        if validate_email(&value) {
            Ok(Self(value))
        } else {
            Err(format!("{} is not a valid email address", value))
        }
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
