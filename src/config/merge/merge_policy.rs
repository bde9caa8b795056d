//! Merge rules: defaults every later source overrides.

use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("provider.endpoint", "http://localhost:3000/api/gemini")?
        .set_default("provider.api_key_env", "ADCRAFT_API_KEY")?
        .set_default("provider.connect_timeout_secs", 10)?
        .set_default("provider.request_timeout_secs", 120)?
        .set_default("generation.output_dir", "creatives")
}
