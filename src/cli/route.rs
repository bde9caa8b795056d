//! CLI route: single route table and run context. Dispatches to domain services and presentation.

use crate::campaign_file;
use crate::catalog;
use crate::config::{AdcraftConfig, ConfigLoader};
use crate::error::ApiError;
use crate::generation::{plan, GenerationOrchestrator, GenerationOutcome};
use crate::provider::{CreativeGenerationClient, HttpCreativeClient};
use crate::types::CampaignConfig;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::runtime::Runtime;
use tracing::{info, warn};

mod studio;

use crate::cli::command_name;
use crate::cli::output::write_creatives;
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    check_format, format_outcome_json, format_outcome_text, format_plan_json, format_plan_text,
    format_platforms_json, format_platforms_text,
};

/// Runtime context for CLI execution: workspace, loaded config, and the async runtime
/// generation runs on. Built from workspace path and optional config path using ConfigLoader only.
pub struct RunContext {
    workspace_root: PathBuf,
    config: AdcraftConfig,
    runtime: Runtime,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        Self::with_config(workspace_root, config)
    }

    pub fn with_config(workspace_root: PathBuf, config: AdcraftConfig) -> Result<Self, ApiError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| ApiError::ConfigError(format!("Failed to create runtime: {}", e)))?;
        Ok(Self {
            workspace_root,
            config,
            runtime,
        })
    }

    pub fn config(&self) -> &AdcraftConfig {
        &self.config
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let started = Instant::now();
        let name = command_name(command);
        info!(command = name, "Command started");
        let result = self.execute_inner(command);
        let duration_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => info!(command = name, duration_ms, "Command finished"),
            Err(e) => warn!(command = name, duration_ms, error = %e, "Command failed"),
        }
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Platforms { format } => self.handle_platforms(format),
            Commands::Plan { campaign, format } => self.handle_plan(campaign, format),
            Commands::Generate {
                campaign,
                out,
                format,
            } => {
                check_format(format)?;
                let config = campaign_file::load(campaign)?;
                let client = HttpCreativeClient::from_config(&self.config.provider)?;
                self.handle_generate(&config, &client, out.as_deref(), format)
            }
            Commands::Studio { campaign } => self.handle_studio(campaign),
        }
    }

    fn handle_platforms(&self, format: &str) -> Result<String, ApiError> {
        check_format(format)?;
        let platforms = catalog::platforms();
        if format == "json" {
            format_platforms_json(&platforms)
        } else {
            Ok(format_platforms_text(&platforms))
        }
    }

    fn handle_plan(&self, campaign: &Path, format: &str) -> Result<String, ApiError> {
        check_format(format)?;
        let config = campaign_file::load(campaign)?;
        let jobs = plan(&config)?;
        if format == "json" {
            format_plan_json(&jobs)
        } else {
            Ok(format_plan_text(&jobs))
        }
    }

    /// Output directory: `--out` wins, otherwise config's output dir under the workspace.
    fn output_dir(&self, out: Option<&Path>) -> PathBuf {
        match out {
            Some(dir) => dir.to_path_buf(),
            None if self.config.generation.output_dir.is_absolute() => {
                self.config.generation.output_dir.clone()
            }
            None => self.workspace_root.join(&self.config.generation.output_dir),
        }
    }

    /// Run a generation against `client`, write payloads, and render the result.
    /// A run with zero creatives is an error carrying the aggregated summary.
    pub fn handle_generate<C>(
        &self,
        config: &CampaignConfig,
        client: &C,
        out: Option<&Path>,
        format: &str,
    ) -> Result<String, ApiError>
    where
        C: CreativeGenerationClient + ?Sized,
    {
        check_format(format)?;
        let outcome = self.run_generation(config, client)?;
        if outcome.is_total_failure() {
            let summary = outcome.error_summary().unwrap_or_default();
            return Err(ApiError::NoCreatives(summary));
        }

        let dir = self.output_dir(out);
        let written = write_creatives(&outcome.creatives, &dir)?;
        info!(
            dir = %dir.display(),
            files = written.len(),
            "Creatives written"
        );
        if format == "json" {
            format_outcome_json(&outcome, &written)
        } else {
            Ok(format_outcome_text(&outcome, &written))
        }
    }

    fn run_generation<C>(
        &self,
        config: &CampaignConfig,
        client: &C,
    ) -> Result<GenerationOutcome, ApiError>
    where
        C: CreativeGenerationClient + ?Sized,
    {
        let orchestrator = GenerationOrchestrator::new();
        let narrate = |message: &str| eprintln!("{}", message);
        self.runtime
            .block_on(orchestrator.run(config, client, &narrate))
    }
}
