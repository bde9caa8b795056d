//! Outcome accounting under arbitrary per-job failures

use adcraft::catalog;
use adcraft::error::GenerationError;
use adcraft::generation::{plan, GenerationOrchestrator, ImageBrief, VideoBrief};
use adcraft::progress::ProgressLog;
use adcraft::provider::{CreativeGenerationClient, OperationHandle};
use adcraft::types::{AssetRef, CampaignConfig, MediaPayload, Variation};
use async_trait::async_trait;
use proptest::prelude::*;
use std::collections::HashSet;

type JobKey = (String, Option<Variation>);

/// Fails exactly the jobs whose key is in `failing`; everything else succeeds.
struct MaskedClient {
    failing: HashSet<JobKey>,
}

#[async_trait]
impl CreativeGenerationClient for MaskedClient {
    async fn generate_image(&self, brief: &ImageBrief) -> Result<MediaPayload, GenerationError> {
        tokio::task::yield_now().await;
        if self
            .failing
            .contains(&(brief.platform.name.clone(), brief.variation))
        {
            return Err(GenerationError::Provider("masked".to_string()));
        }
        Ok(MediaPayload::new("image/png", vec![1]))
    }

    async fn start_video(&self, brief: &VideoBrief) -> Result<OperationHandle, GenerationError> {
        if self.failing.contains(&(brief.platform.name.clone(), None)) {
            return Err(GenerationError::Transport("masked".to_string()));
        }
        Ok(OperationHandle::pending("operations/video"))
    }

    async fn poll_video(&self, handle: &OperationHandle) -> Result<OperationHandle, GenerationError> {
        Ok(OperationHandle::finished(
            handle.name.clone(),
            Some("https://media.example.com/v.mp4".to_string()),
        ))
    }

    async fn fetch_video_bytes(&self, _: &str) -> Result<MediaPayload, GenerationError> {
        Ok(MediaPayload::new("video/mp4", vec![0, 0, 0, 24]))
    }

    fn client_name(&self) -> &str {
        "masked"
    }
}

fn campaign(selection: &[usize], ab_test: bool) -> CampaignConfig {
    let platforms = catalog::platforms();
    let mut config = CampaignConfig::default();
    config.brand.name = "Kinetic".to_string();
    config.brand.logo = Some(AssetRef::new("logo.png", "image/png", vec![1]));
    config.campaign.product_photo = Some(AssetRef::new("shoe.png", "image/png", vec![2]));
    config.campaign.ab_test = ab_test;
    config.campaign.platforms = selection
        .iter()
        .map(|i| platforms[i % platforms.len()].clone())
        .collect();
    config
}

/// Every planned job ends up as exactly one creative or one failure, and failures keep
/// plan order whatever the completion order was.
#[test]
fn test_outcome_accounts_for_every_job_property() {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .unwrap();
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(
                proptest::collection::vec(0usize..6, 1..8),
                any::<bool>(),
                proptest::collection::vec(any::<bool>(), 12),
            ),
            |(selection, ab_test, mask)| {
                let config = campaign(&selection, ab_test);
                let jobs = plan(&config).unwrap();
                let failing_jobs: Vec<JobKey> = jobs
                    .iter()
                    .zip(mask.iter().cycle())
                    .filter(|(_, fail)| **fail)
                    .map(|(job, _)| (job.platform.name.clone(), job.variation))
                    .collect();
                let client = MaskedClient {
                    failing: failing_jobs.iter().cloned().collect(),
                };

                let outcome = runtime
                    .block_on(GenerationOrchestrator::new().run(
                        &config,
                        &client,
                        &ProgressLog::new(),
                    ))
                    .unwrap();

                prop_assert_eq!(outcome.creatives.len() + outcome.failures.len(), jobs.len());
                prop_assert_eq!(outcome.total_jobs(), jobs.len());
                let failed: Vec<JobKey> = outcome
                    .failures
                    .iter()
                    .map(|f| (f.platform_name.clone(), f.variation))
                    .collect();
                prop_assert_eq!(failed, failing_jobs);
                prop_assert_eq!(outcome.is_total_failure(), outcome.creatives.is_empty());
                Ok(())
            },
        )
        .unwrap();
}
