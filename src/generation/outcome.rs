//! Generation results: creatives, per-job failures, and the aggregated outcome of a run.

use crate::types::{JobKind, MediaPayload, Variation};
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCreative {
    pub id: String,
    pub platform_name: String,
    pub dimensions: String,
    pub payload: MediaPayload,
    pub variation: Option<Variation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoCreative {
    pub id: String,
    pub platform_name: String,
    pub payload: MediaPayload,
    pub variation: Option<Variation>,
}

/// A successfully generated artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Creative {
    Image(ImageCreative),
    Video(VideoCreative),
}

impl Creative {
    pub fn id(&self) -> &str {
        match self {
            Creative::Image(image) => &image.id,
            Creative::Video(video) => &video.id,
        }
    }

    pub fn platform_name(&self) -> &str {
        match self {
            Creative::Image(image) => &image.platform_name,
            Creative::Video(video) => &video.platform_name,
        }
    }

    pub fn variation(&self) -> Option<Variation> {
        match self {
            Creative::Image(image) => image.variation,
            Creative::Video(video) => video.variation,
        }
    }

    pub fn kind(&self) -> JobKind {
        match self {
            Creative::Image(_) => JobKind::Image,
            Creative::Video(_) => JobKind::Video,
        }
    }

    pub fn payload(&self) -> &MediaPayload {
        match self {
            Creative::Image(image) => &image.payload,
            Creative::Video(video) => &video.payload,
        }
    }
}

/// Build a creative id from platform name, variation, and creation time.
pub fn creative_id(platform_name: &str, variation: Option<Variation>, kind: JobKind, millis: i64) -> String {
    let slug = platform_name.replace(' ', "-");
    match kind {
        JobKind::Image => format!(
            "{}-{}-{}",
            slug,
            variation.unwrap_or(Variation::A),
            millis
        ),
        JobKind::Video => format!("{}-{}", slug, millis),
    }
}

/// Presentation order: platform name ascending, then variation with an absent tag
/// ranking as variation A.
pub fn presentation_order(a: &Creative, b: &Creative) -> Ordering {
    a.platform_name()
        .cmp(b.platform_name())
        .then_with(|| {
            let left = a.variation().unwrap_or(Variation::A);
            let right = b.variation().unwrap_or(Variation::A);
            left.cmp(&right)
        })
}

/// Stable sort into presentation order.
pub fn sort_creatives(creatives: &mut [Creative]) {
    creatives.sort_by(presentation_order);
}

/// A job that did not produce a creative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobFailure {
    pub platform_name: String,
    pub kind: JobKind,
    pub variation: Option<Variation>,
    pub reason: String,
    pub quota_exhausted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    /// Every job produced a creative.
    Complete,
    /// Some creatives were produced and some jobs failed.
    Partial,
    /// No creative was produced.
    Failed,
}

/// Result of one orchestration run. Creatives are in presentation order;
/// failures are in dispatch order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationOutcome {
    pub creatives: Vec<Creative>,
    pub failures: Vec<JobFailure>,
}

impl GenerationOutcome {
    pub fn total_jobs(&self) -> usize {
        self.creatives.len() + self.failures.len()
    }

    pub fn status(&self) -> OutcomeStatus {
        match (self.creatives.is_empty(), self.failures.is_empty()) {
            (true, _) => OutcomeStatus::Failed,
            (false, true) => OutcomeStatus::Complete,
            (false, false) => OutcomeStatus::Partial,
        }
    }

    pub fn is_total_failure(&self) -> bool {
        self.status() == OutcomeStatus::Failed
    }

    pub fn has_quota_failure(&self) -> bool {
        self.failures.iter().any(|f| f.quota_exhausted)
    }

    /// Combined user-facing message; `None` when every job succeeded.
    pub fn error_summary(&self) -> Option<String> {
        if self.failures.is_empty() {
            if self.creatives.is_empty() {
                return Some(
                    "Generation completed, but no valid creatives were returned. Try adjusting the prompt or inputs."
                        .to_string(),
                );
            }
            return None;
        }
        let reasons: Vec<&str> = self.failures.iter().map(|f| f.reason.as_str()).collect();
        Some(format!(
            "Generation finished with {} error(s): {}",
            self.failures.len(),
            reasons.join("; ")
        ))
    }
}
