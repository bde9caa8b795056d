//! Generation run rendering: creatives table, failures, and the aggregated summary.

use super::shared::{table, to_json, variation_label};
use crate::error::ApiError;
use crate::generation::{Creative, GenerationOutcome, OutcomeStatus};
use owo_colors::OwoColorize;
use serde_json::json;
use std::path::PathBuf;

fn size_of(creative: &Creative) -> &str {
    match creative {
        Creative::Image(image) => &image.dimensions,
        Creative::Video(_) => "video",
    }
}

fn status_label(status: OutcomeStatus) -> String {
    match status {
        OutcomeStatus::Complete => format!("{}", "Complete".green().bold()),
        OutcomeStatus::Partial => format!("{}", "Partial".yellow().bold()),
        OutcomeStatus::Failed => format!("{}", "Failed".red().bold()),
    }
}

/// `written` holds the file for each creative, in the same order.
pub fn format_outcome_text(outcome: &GenerationOutcome, written: &[PathBuf]) -> String {
    let mut out = String::new();
    if !outcome.creatives.is_empty() {
        let mut table = table(vec!["Platform", "Variation", "Kind", "Size", "File"]);
        for (index, creative) in outcome.creatives.iter().enumerate() {
            let file = written
                .get(index)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "-".to_string());
            table.add_row(vec![
                creative.platform_name().to_string(),
                variation_label(creative.variation()).to_string(),
                creative.kind().as_str().to_string(),
                size_of(creative).to_string(),
                file,
            ]);
        }
        out.push_str(&table.to_string());
        out.push('\n');
    }

    out.push_str(&format!(
        "{}: {} of {} job(s) produced a creative",
        status_label(outcome.status()),
        outcome.creatives.len(),
        outcome.total_jobs()
    ));
    if let Some(summary) = outcome.error_summary() {
        out.push('\n');
        out.push_str(&summary);
    }
    out
}

pub fn format_outcome_json(
    outcome: &GenerationOutcome,
    written: &[PathBuf],
) -> Result<String, ApiError> {
    let creatives: Vec<_> = outcome
        .creatives
        .iter()
        .enumerate()
        .map(|(index, creative)| {
            json!({
                "id": creative.id(),
                "platform": creative.platform_name(),
                "variation": creative.variation(),
                "kind": creative.kind(),
                "size": size_of(creative),
                "mime_type": creative.payload().mime_type,
                "bytes": creative.payload().data.len(),
                "file": written.get(index),
            })
        })
        .collect();
    to_json(&json!({
        "status": outcome.status(),
        "creatives": creatives,
        "failures": outcome.failures,
        "error_summary": outcome.error_summary(),
    }))
}
