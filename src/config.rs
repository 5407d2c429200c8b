use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use enquiry_contact::Notification;
use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub notification: NotificationConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NotificationConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default = "default_duration_secs")]
    pub duration_secs: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: default_description(),
            duration_secs: default_duration_secs(),
        }
    }
}

impl NotificationConfig {
    pub fn to_notification(&self) -> Notification {
        Notification {
            title: self.title.clone(),
            description: self.description.clone(),
            duration: Duration::from_secs(self.duration_secs),
        }
    }
}

fn default_title() -> String {
    Notification::default().title
}

fn default_description() -> String {
    Notification::default().description
}

fn default_duration_secs() -> u64 {
    Notification::default().duration.as_secs()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (ENQUIRY__NOTIFICATION__TITLE, etc.)
    /// 2. Config file specified by path, CONFIG_PATH, or config/default.toml
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("notification.duration_secs", default_duration_secs())?
            .set_default("observability.log_level", default_log_level())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional: a missing file just means defaults
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("ENQUIRY")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.notification.title.trim().is_empty() {
            return Err("Notification title must not be empty".to_string());
        }
        if self.notification.duration_secs == 0 {
            return Err("Notification duration_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}
