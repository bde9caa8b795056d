//! Job plan rendering.

use super::shared::{table, to_json, variation_label};
use crate::error::ApiError;
use crate::generation::{GenerationJob, PlanSummary};
use serde_json::json;

pub fn format_plan_text(jobs: &[GenerationJob]) -> String {
    let summary = PlanSummary::of(jobs);
    let mut table = table(vec!["#", "Platform", "Kind", "Variation", "Size"]);
    for (index, job) in jobs.iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            job.platform.name.clone(),
            job.kind.as_str().to_string(),
            variation_label(job.variation).to_string(),
            job.platform.dimensions.clone(),
        ]);
    }
    format!(
        "{}\n{} job(s): {} image, {} video",
        table,
        summary.total(),
        summary.image_jobs,
        summary.video_jobs
    )
}

pub fn format_plan_json(jobs: &[GenerationJob]) -> Result<String, ApiError> {
    to_json(&json!({
        "summary": PlanSummary::of(jobs),
        "jobs": jobs,
    }))
}
