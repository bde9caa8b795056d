//! Job planning: expand a campaign configuration into a flat, stably ordered job list.

use crate::error::ValidationError;
use crate::types::{CampaignConfig, JobKind, Platform, Variation};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One planned unit of generation work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationJob {
    pub platform: Platform,
    pub kind: JobKind,
    pub variation: Option<Variation>,
}

impl GenerationJob {
    /// Human-readable job label used in narration and failure reasons.
    pub fn label(&self) -> String {
        let kind = match self.kind {
            JobKind::Image => "Image",
            JobKind::Video => "Video",
        };
        match self.variation {
            Some(variation) => format!("{} for {} (variation {})", kind, self.platform.name, variation),
            None => format!("{} for {}", kind, self.platform.name),
        }
    }
}

/// Plan the jobs for `config`.
///
/// Platforms keep their selection order (repeated names are dropped); an image platform
/// yields variation A then B when A/B testing is on. Video platforms always yield one job.
pub fn plan(config: &CampaignConfig) -> Result<Vec<GenerationJob>, ValidationError> {
    let platforms = &config.campaign.platforms;
    if platforms.is_empty() {
        return Err(ValidationError::NoPlatforms);
    }

    let has_logo = config.brand.logo.is_some();
    let has_photo = config.campaign.product_photo.is_some();

    let mut seen = HashSet::new();
    let mut jobs = Vec::with_capacity(platforms.len() * 2);
    for platform in platforms {
        if !seen.insert(platform.name.as_str()) {
            continue;
        }

        if platform.is_video {
            if !has_photo {
                return Err(ValidationError::MissingProductPhoto {
                    platform: platform.name.clone(),
                });
            }
            jobs.push(GenerationJob {
                platform: platform.clone(),
                kind: JobKind::Video,
                variation: None,
            });
            continue;
        }

        if !has_logo || !has_photo {
            return Err(ValidationError::MissingImageAssets {
                platform: platform.name.clone(),
            });
        }
        if config.campaign.ab_test {
            for variation in [Variation::A, Variation::B] {
                jobs.push(GenerationJob {
                    platform: platform.clone(),
                    kind: JobKind::Image,
                    variation: Some(variation),
                });
            }
        } else {
            jobs.push(GenerationJob {
                platform: platform.clone(),
                kind: JobKind::Image,
                variation: None,
            });
        }
    }

    Ok(jobs)
}

/// Count summary of a job list, used by plan previews.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub image_jobs: usize,
    pub video_jobs: usize,
}

impl PlanSummary {
    pub fn of(jobs: &[GenerationJob]) -> Self {
        jobs.iter().fold(Self::default(), |mut acc, job| {
            match job.kind {
                JobKind::Image => acc.image_jobs += 1,
                JobKind::Video => acc.video_jobs += 1,
            }
            acc
        })
    }

    pub fn total(&self) -> usize {
        self.image_jobs + self.video_jobs
    }
}
