//! Shared test utilities for integration tests
//!
//! A scripted generation client, campaign builders, and environment isolation for
//! config loading.

use adcraft::catalog;
use adcraft::error::GenerationError;
use adcraft::generation::{ImageBrief, VideoBrief};
use adcraft::provider::{CreativeGenerationClient, OperationHandle};
use adcraft::types::{AssetRef, CampaignConfig, MediaPayload, Variation};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::path::Path;

/// Generation client whose answers are scripted per job.
#[derive(Default)]
pub struct ScriptedClient {
    image_failures: Mutex<HashMap<(String, Option<Variation>), GenerationError>>,
    start_failures: Mutex<HashMap<String, GenerationError>>,
    poll_script: Mutex<VecDeque<bool>>,
    fetch_failure: Mutex<Option<GenerationError>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_image(self, platform: &str, variation: Option<Variation>, err: GenerationError) -> Self {
        self.image_failures
            .lock()
            .insert((platform.to_string(), variation), err);
        self
    }

    pub fn fail_video_start(self, platform: &str, err: GenerationError) -> Self {
        self.start_failures.lock().insert(platform.to_string(), err);
        self
    }

    pub fn fail_video_fetch(self, err: GenerationError) -> Self {
        *self.fetch_failure.lock() = Some(err);
        self
    }

    /// Successive `done` flags returned by status checks; exhausted script means done.
    pub fn with_polls(self, polls: &[bool]) -> Self {
        self.poll_script.lock().extend(polls.iter().copied());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn calls_of(&self, kind: &str) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| c.starts_with(kind))
            .count()
    }
}

#[async_trait]
impl CreativeGenerationClient for ScriptedClient {
    async fn generate_image(&self, brief: &ImageBrief) -> Result<MediaPayload, GenerationError> {
        let tag = format!(
            "{}:{}",
            brief.platform.name,
            brief.variation.map(|v| v.as_str()).unwrap_or("-")
        );
        self.calls.lock().push(format!("image:{}", tag));
        // Yield so concurrently dispatched jobs interleave.
        tokio::task::yield_now().await;
        self.calls.lock().push(format!("image_done:{}", tag));
        let key = (brief.platform.name.clone(), brief.variation);
        if let Some(err) = self.image_failures.lock().remove(&key) {
            return Err(err);
        }
        Ok(MediaPayload::new("image/png", brief.prompt.as_bytes().to_vec()))
    }

    async fn start_video(&self, brief: &VideoBrief) -> Result<OperationHandle, GenerationError> {
        self.calls
            .lock()
            .push(format!("start_video:{}", brief.platform.name));
        if let Some(err) = self.start_failures.lock().remove(&brief.platform.name) {
            return Err(err);
        }
        Ok(OperationHandle::pending(format!(
            "operations/{}",
            brief.platform.name
        )))
    }

    async fn poll_video(&self, handle: &OperationHandle) -> Result<OperationHandle, GenerationError> {
        self.calls.lock().push(format!("poll:{}", handle.name));
        let done = self.poll_script.lock().pop_front().unwrap_or(true);
        if done {
            Ok(OperationHandle::finished(
                handle.name.clone(),
                Some("https://media.example.com/video.mp4".to_string()),
            ))
        } else {
            Ok(handle.clone())
        }
    }

    async fn fetch_video_bytes(&self, download_uri: &str) -> Result<MediaPayload, GenerationError> {
        self.calls.lock().push(format!("fetch:{}", download_uri));
        if let Some(err) = self.fetch_failure.lock().take() {
            return Err(err);
        }
        Ok(MediaPayload::new("video/mp4", vec![0, 0, 0, 24]))
    }

    async fn suggest_taglines(&self, _description: &str) -> Result<Vec<String>, GenerationError> {
        self.calls.lock().push("suggest_taglines".to_string());
        Ok(vec!["Run the city".to_string(), "Own the night".to_string()])
    }

    fn client_name(&self) -> &str {
        "scripted"
    }
}

/// Complete campaign for the named catalog platforms.
pub fn campaign(platforms: &[&str], ab_test: bool) -> CampaignConfig {
    let mut config = CampaignConfig::default();
    config.brand.name = "Kinetic".to_string();
    config.brand.tone = "Energetic".to_string();
    config.brand.logo = Some(AssetRef::new("logo.png", "image/png", vec![1, 2, 3]));
    config.campaign.product_description = "Carbon running shoe".to_string();
    config.campaign.product_photo = Some(AssetRef::new("shoe.png", "image/png", vec![4, 5]));
    config.campaign.tagline = "Run the city".to_string();
    config.campaign.ab_test = ab_test;
    config.campaign.platforms = platforms
        .iter()
        .map(|name| catalog::find_platform(name).unwrap())
        .collect();
    config
}

/// Write a campaign file plus its assets into `dir`; returns the campaign file path.
pub fn write_campaign_file(dir: &Path, platforms: &[&str], ab_test: bool) -> std::path::PathBuf {
    std::fs::create_dir_all(dir.join("assets")).unwrap();
    std::fs::write(dir.join("assets/logo.png"), [137u8, 80, 78, 71]).unwrap();
    std::fs::write(dir.join("assets/shoe.webp"), [82u8, 73, 70, 70]).unwrap();
    let platform_list = platforms
        .iter()
        .map(|p| format!("\"{}\"", p))
        .collect::<Vec<_>>()
        .join(", ");
    let path = dir.join("campaign.toml");
    std::fs::write(
        &path,
        format!(
            r#"
[brand]
name = "Kinetic"
logo = "assets/logo.png"
tone = "Energetic"

[campaign]
product_description = "Carbon running shoe"
product_photo = "assets/shoe.webp"
tagline = "Run the city"
platforms = [{}]
ab_test = {}
"#,
            platform_list, ab_test
        ),
    )
    .unwrap();
    path
}

/// Global mutex to serialize environment variable access across all tests
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const ISOLATED_VARS: &[&str] = &[
    "XDG_CONFIG_HOME",
    "ADCRAFT_ENV",
    "ADCRAFT__PROVIDER__ENDPOINT",
    "ADCRAFT__GENERATION__OUTPUT_DIR",
];

/// Run `f` with XDG_CONFIG_HOME pointed at `config_home` and adcraft overrides cleared.
/// The previous environment is restored afterwards.
pub fn with_isolated_env<F, R>(config_home: &Path, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock();
    let saved: Vec<(&str, Option<String>)> = ISOLATED_VARS
        .iter()
        .map(|name| (*name, std::env::var(name).ok()))
        .collect();
    for name in ISOLATED_VARS {
        std::env::remove_var(name);
    }
    std::env::set_var("XDG_CONFIG_HOME", config_home);

    let result = f();

    for (name, value) in saved {
        match value {
            Some(value) => std::env::set_var(name, value),
            None => std::env::remove_var(name),
        }
    }
    result
}
