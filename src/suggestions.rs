//! Copy suggestions: taglines for a product and campaign concepts for a brand.

use crate::error::{ApiError, ValidationError};
use crate::provider::CreativeGenerationClient;
use tracing::debug;

/// Most suggestions surfaced to the user per request.
pub const MAX_SUGGESTIONS: usize = 3;

/// Tagline ideas for a product. A blank description yields nothing and skips the backend.
pub async fn tagline_suggestions<C>(
    client: &C,
    product_description: &str,
) -> Result<Vec<String>, ApiError>
where
    C: CreativeGenerationClient + ?Sized,
{
    let description = product_description.trim();
    if description.is_empty() {
        return Ok(Vec::new());
    }
    let raw = client.suggest_taglines(description).await?;
    let suggestions = tidy(raw);
    debug!(count = suggestions.len(), "Tagline suggestions received");
    Ok(suggestions)
}

/// Campaign concept ideas. Brand name and tone are both required.
pub async fn campaign_prompt_suggestions<C>(
    client: &C,
    brand_name: &str,
    tone: &str,
) -> Result<Vec<String>, ApiError>
where
    C: CreativeGenerationClient + ?Sized,
{
    let brand_name = brand_name.trim();
    let tone = tone.trim();
    if brand_name.is_empty() {
        return Err(ValidationError::MissingField("brand name").into());
    }
    if tone.is_empty() {
        return Err(ValidationError::MissingField("tone").into());
    }
    let raw = client.suggest_campaign_prompts(brand_name, tone).await?;
    let suggestions = tidy(raw);
    debug!(count = suggestions.len(), "Campaign prompt suggestions received");
    Ok(suggestions)
}

fn tidy(raw: Vec<String>) -> Vec<String> {
    raw.into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .take(MAX_SUGGESTIONS)
        .collect()
}
