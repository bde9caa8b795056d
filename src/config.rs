//! Configuration
//!
//! Layered runtime configuration for the `adcraft` tool: where the generation backend lives,
//! where generated payloads are written, and how logging behaves. Campaign content itself is
//! not configuration; it lives in campaign files (see `campaign_file`).

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdcraftConfig {
    /// Generation backend
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Generation output settings
    #[serde(default)]
    pub generation: GenerationSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Connection settings for the HTTP generation backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Endpoint accepting `{action, params}` requests
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Name of the environment variable holding the API key, if the backend needs one
    #[serde(default = "default_api_key_env")]
    pub api_key_env: Option<String>,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Per-request timeout. Video status checks are short; image renders are not.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_endpoint() -> String {
    "http://localhost:3000/api/gemini".to_string()
}

fn default_api_key_env() -> Option<String> {
    Some("ADCRAFT_API_KEY".to_string())
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_request_timeout_secs() -> u64 {
    120
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key_env: default_api_key_env(),
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl ProviderConfig {
    pub fn validate(&self) -> Result<(), String> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err("Provider endpoint cannot be empty".to_string());
        }
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(format!(
                "Provider endpoint must be an http(s) URL, got '{}'",
                endpoint
            ));
        }
        if self.connect_timeout_secs == 0 {
            return Err("connect_timeout_secs must be greater than zero".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than zero".to_string());
        }
        if let Some(name) = &self.api_key_env {
            if name.trim().is_empty() {
                return Err("api_key_env cannot be blank; omit it instead".to_string());
            }
        }
        Ok(())
    }

    /// API key read from the configured environment variable; unset or blank means none.
    pub fn api_key(&self) -> Option<String> {
        let name = self.api_key_env.as_deref()?;
        std::env::var(name)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }
}

/// Where generated creatives are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSettings {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("creatives")
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

impl AdcraftConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if let Err(e) = self.provider.validate() {
            errors.push(format!("Provider: {}", e));
        }
        if self.generation.output_dir.as_os_str().is_empty() {
            errors.push("Generation: output_dir cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
