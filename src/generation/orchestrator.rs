//! Generation orchestrator: runs a campaign's job plan against a creative generation client.
//! Owns fan-out, per-job failure capture, and result ordering; the backend stays behind the client trait.

use crate::error::{ApiError, GenerationError};
use crate::generation::brief::{image_brief, video_brief};
use crate::generation::outcome::{
    creative_id, sort_creatives, Creative, GenerationOutcome, ImageCreative, JobFailure,
    VideoCreative,
};
use crate::generation::plan::{plan, GenerationJob};
use crate::progress::ProgressSink;
use crate::provider::CreativeGenerationClient;
use crate::types::{CampaignConfig, JobKind};
use futures::stream::{FuturesUnordered, StreamExt};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Fixed wait between video status checks.
pub const VIDEO_POLL_INTERVAL: Duration = Duration::from_secs(15);

const QUOTA_GUIDANCE: &str =
    "API quota exceeded. Please check your plan and billing details with your provider.";

/// Drives every planned job of a campaign to a creative or a failure.
pub struct GenerationOrchestrator {
    poll_interval: Duration,
}

impl Default for GenerationOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationOrchestrator {
    pub fn new() -> Self {
        Self {
            poll_interval: VIDEO_POLL_INTERVAL,
        }
    }

    pub fn with_poll_interval(poll_interval: Duration) -> Self {
        Self { poll_interval }
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Plan, dispatch every job at once, and reconcile the results.
    ///
    /// Only a planning failure is returned as an error; job failures land in
    /// `GenerationOutcome::failures`.
    pub async fn run<C, P>(
        &self,
        config: &CampaignConfig,
        client: &C,
        on_progress: &P,
    ) -> Result<GenerationOutcome, ApiError>
    where
        C: CreativeGenerationClient + ?Sized,
        P: ProgressSink + ?Sized,
    {
        let jobs = plan(config)?;
        let started = Instant::now();
        info!(
            total_jobs = jobs.len(),
            client = client.client_name(),
            "Generation started"
        );

        let mut in_flight = FuturesUnordered::new();
        for (index, job) in jobs.iter().enumerate() {
            debug!(
                index,
                platform = %job.platform.name,
                kind = job.kind.as_str(),
                variation = ?job.variation,
                "Job dispatched"
            );
            in_flight.push(async move {
                let result = self.run_job(config, job, client, on_progress).await;
                (index, result)
            });
        }

        let mut settled: Vec<(usize, Result<Creative, GenerationError>)> =
            Vec::with_capacity(jobs.len());
        while let Some((index, result)) = in_flight.next().await {
            let job = &jobs[index];
            match &result {
                Ok(creative) => info!(
                    platform = %job.platform.name,
                    kind = job.kind.as_str(),
                    creative_id = creative.id(),
                    "Job completed"
                ),
                Err(err) => warn!(
                    platform = %job.platform.name,
                    kind = job.kind.as_str(),
                    error = %err,
                    "Job failed"
                ),
            }
            settled.push((index, result));
        }
        drop(in_flight);
        // Completion order back to dispatch order.
        settled.sort_by_key(|(index, _)| *index);

        let mut outcome = GenerationOutcome::default();
        for (index, result) in settled {
            match result {
                Ok(creative) => outcome.creatives.push(creative),
                Err(err) => outcome.failures.push(failure_for(&jobs[index], &err)),
            }
        }
        sort_creatives(&mut outcome.creatives);

        if !outcome.creatives.is_empty() {
            on_progress.report(&format!(
                "Generated {} creatives! Finalizing...",
                outcome.creatives.len()
            ));
        }
        info!(
            generated = outcome.creatives.len(),
            failed = outcome.failures.len(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Generation completed"
        );
        Ok(outcome)
    }

    async fn run_job<C, P>(
        &self,
        config: &CampaignConfig,
        job: &GenerationJob,
        client: &C,
        on_progress: &P,
    ) -> Result<Creative, GenerationError>
    where
        C: CreativeGenerationClient + ?Sized,
        P: ProgressSink + ?Sized,
    {
        match job.kind {
            JobKind::Image => self.run_image_job(config, job, client, on_progress).await,
            JobKind::Video => self.run_video_job(config, job, client, on_progress).await,
        }
    }

    async fn run_image_job<C, P>(
        &self,
        config: &CampaignConfig,
        job: &GenerationJob,
        client: &C,
        on_progress: &P,
    ) -> Result<Creative, GenerationError>
    where
        C: CreativeGenerationClient + ?Sized,
        P: ProgressSink + ?Sized,
    {
        let brief = image_brief(config, job).ok_or_else(|| {
            GenerationError::InvalidInput(
                "Logo and product photo are required to generate creatives".to_string(),
            )
        })?;
        let suffix = match job.variation {
            Some(variation) => format!(" (variation {})", variation),
            None => String::new(),
        };
        on_progress.report(&format!(
            "Generating image creative for {}{}...",
            job.platform.name, suffix
        ));
        let payload = client.generate_image(&brief).await?;
        if payload.data.is_empty() {
            return Err(GenerationError::MissingPayload(format!(
                "No image was returned for {}",
                job.platform.name
            )));
        }
        Ok(Creative::Image(ImageCreative {
            id: creative_id(
                &job.platform.name,
                job.variation,
                JobKind::Image,
                chrono::Utc::now().timestamp_millis(),
            ),
            platform_name: job.platform.name.clone(),
            dimensions: job.platform.dimensions.clone(),
            payload,
            variation: job.variation,
        }))
    }

    async fn run_video_job<C, P>(
        &self,
        config: &CampaignConfig,
        job: &GenerationJob,
        client: &C,
        on_progress: &P,
    ) -> Result<Creative, GenerationError>
    where
        C: CreativeGenerationClient + ?Sized,
        P: ProgressSink + ?Sized,
    {
        let platform = &job.platform.name;
        on_progress.report(&format!("Building video prompt for {}...", platform));
        let brief = video_brief(config, job).ok_or_else(|| {
            GenerationError::InvalidInput("A product photo is required to generate a video".to_string())
        })?;

        on_progress.report(&format!(
            "Starting video generation for {}... (this may take a few minutes)",
            platform
        ));
        let mut operation = client.start_video(&brief).await?;

        let mut attempt = 0u32;
        while !operation.done {
            attempt += 1;
            on_progress.report(&format!(
                "Checking video status for {}... (Attempt {})",
                platform, attempt
            ));
            tokio::time::sleep(self.poll_interval).await;
            operation = client.poll_video(&operation).await?;
            debug!(platform = %platform, attempt, done = operation.done, "Video status checked");
        }

        on_progress.report(&format!("Video for {} is ready! Finalizing...", platform));
        let download_uri = operation.download_uri.as_deref().ok_or_else(|| {
            GenerationError::MissingPayload(
                "Video generation completed, but no download link was provided".to_string(),
            )
        })?;
        let payload = client.fetch_video_bytes(download_uri).await?;

        Ok(Creative::Video(VideoCreative {
            id: creative_id(
                platform,
                None,
                JobKind::Video,
                chrono::Utc::now().timestamp_millis(),
            ),
            platform_name: platform.clone(),
            payload,
            variation: None,
        }))
    }
}

fn failure_for(job: &GenerationJob, err: &GenerationError) -> JobFailure {
    let quota_exhausted = err.is_quota_exhausted();
    let message = if quota_exhausted {
        QUOTA_GUIDANCE.to_string()
    } else {
        err.to_string()
    };
    JobFailure {
        platform_name: job.platform.name.clone(),
        kind: job.kind,
        variation: job.variation,
        reason: format!("{} failed: {}", job.label(), message),
        quota_exhausted,
    }
}
