use std::{path::PathBuf, time::Duration};

use secrecy::Secret;
use serde::Deserialize;

use crate::domain::email::EmailAddress;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
    pub owner: OwnerSettings,
    pub runtime_mode: RuntimeMode,
    pub log_level: String,
}

#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
    /// Public URL of the site, used to build the sitemap.
    pub base_url: String,
    pub assets_dir: PathBuf,
    pub portfolio_path: PathBuf,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    Smtp,
    Http,
}

#[derive(Deserialize, Clone)]
pub struct EmailClientSettings {
    pub transport: TransportKind,
    /// The owner's mailbox. Every message is sent from it and notifications are sent to it.
    pub sender_email: String,
    pub sender_password: Secret<String>,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub base_url: String,
    pub authorization_token: Secret<String>,
    pub timeout_milliseconds: u64,
}

impl EmailClientSettings {
    pub fn sender(&self) -> Result<EmailAddress, String> {
        EmailAddress::try_from(self.sender_email.clone())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }
}

/// Signature shown at the bottom of the acknowledgment message.
#[derive(Deserialize, Clone, Debug)]
pub struct OwnerSettings {
    pub name: String,
    pub role: String,
    pub site_url: String,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    Development,
    Production,
}

impl RuntimeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuntimeMode::Development => "development",
            RuntimeMode::Production => "production",
        }
    }

    /// Whether failure responses may carry the underlying error text.
    pub fn exposes_error_details(&self) -> bool {
        !matches!(self, RuntimeMode::Production)
    }
}

impl TryFrom<String> for RuntimeMode {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `development` or `production`.",
                other
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configuration");

    let runtime_mode: RuntimeMode = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "development".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(format!("{}.yaml", runtime_mode.as_str())),
        ))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .set_override("runtime_mode", runtime_mode.as_str())?
        .build()?
        .try_deserialize::<Settings>()
}
