//! Config loading entry point: merges every source in precedence order and validates the result.

use super::merge::merge_policy;
use super::sources::{environment, global_file, workspace_file};
use super::AdcraftConfig;
use crate::error::ApiError;
use config::{File, FileFormat};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (highest last): defaults, global config file, `config/config.toml`,
    /// `config/<ADCRAFT_ENV>.toml`, then `ADCRAFT__SECTION__KEY` environment variables.
    pub fn load(workspace_root: &Path) -> Result<AdcraftConfig, ApiError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder);

        let config: AdcraftConfig = builder.build()?.try_deserialize()?;
        Self::validated(config)
    }

    /// Load a single config file on top of the defaults.
    pub fn load_from_file(path: &Path) -> Result<AdcraftConfig, ApiError> {
        if !path.exists() {
            return Err(ApiError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let config: AdcraftConfig = merge_policy::builder_with_defaults()?
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Self::validated(config)
    }

    /// Path of the user-level config file, whether or not it exists.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }

    fn validated(config: AdcraftConfig) -> Result<AdcraftConfig, ApiError> {
        config.validate().map_err(|errors| {
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                errors.join("\n")
            ))
        })?;
        debug!(endpoint = %config.provider.endpoint, "Configuration loaded");
        Ok(config)
    }
}
