//! Configuration handling for the contact form

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default form relay endpoint
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://formspree.io/f/ragecycles";
/// Number users are told to call when a submission fails
pub const DEFAULT_FALLBACK_PHONE: &str = "(480) 968-8116";
pub const DEFAULT_BUSINESS_NAME: &str = "Rage Cycles";

/// Environment variable overriding the relay endpoint
pub const RELAY_ENDPOINT_ENV: &str = "RAGE_CYCLES_RELAY_ENDPOINT";

/// User configuration for the contact form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContactConfig {
    /// Form relay endpoint URL
    pub relay_endpoint: Option<String>,
    /// Phone number shown when a submission fails
    pub fallback_phone: Option<String>,
    /// Name shown in the header
    pub business_name: Option<String>,
}

impl ContactConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "ragecycles", "rage-cycles-contact")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Log file path; logs never go to the terminal the form is drawn on
    pub fn log_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "ragecycles", "rage-cycles-contact")
            .map(|dirs| dirs.data_local_dir().join("contact.log"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                let config: ContactConfig = serde_json::from_str(&content)?;
                tracing::debug!(path = %path.display(), "loaded config");
                config
            }
            _ => Self::default(),
        };

        if let Ok(endpoint) = std::env::var(RELAY_ENDPOINT_ENV) {
            config.apply_endpoint_override(endpoint);
        }

        Ok(config)
    }

    fn apply_endpoint_override(&mut self, endpoint: String) {
        if !endpoint.trim().is_empty() {
            self.relay_endpoint = Some(endpoint.trim().to_string());
        }
    }

    pub fn relay_endpoint(&self) -> &str {
        self.relay_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_RELAY_ENDPOINT)
    }

    pub fn fallback_phone(&self) -> &str {
        self.fallback_phone
            .as_deref()
            .unwrap_or(DEFAULT_FALLBACK_PHONE)
    }

    pub fn business_name(&self) -> &str {
        self.business_name
            .as_deref()
            .unwrap_or(DEFAULT_BUSINESS_NAME)
    }
}
