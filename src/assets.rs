//! Brand asset tooling: background removal and stylizing for the product photo, plus logo
//! and mascot candidates.
//!
//! Every operation returns new `AssetRef`s; callers decide whether to commit them to the
//! campaign. Labels of derived assets sit next to the asset they came from so a saved
//! campaign file can point at them.

use crate::error::{ApiError, ValidationError};
use crate::provider::CreativeGenerationClient;
use crate::types::{AssetRef, CampaignConfig, MediaPayload};
use std::path::Path;
use tracing::debug;

/// Directory label for candidates that have no source asset.
pub const GENERATED_DIR: &str = "generated";

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(value)
    }
}

/// `assets/shoe.webp` + `no_bg` + png payload → `assets/shoe_no_bg.png`.
pub fn derived_label(source_label: &str, suffix: &str, payload: &MediaPayload) -> String {
    let source = Path::new(source_label);
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("asset");
    let file_name = format!("{}_{}.{}", stem, suffix, payload.extension());
    match source.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => parent.join(file_name).to_string_lossy().into_owned(),
        None => file_name,
    }
}

fn candidates(kind: &str, payloads: Vec<MediaPayload>) -> Vec<AssetRef> {
    payloads
        .into_iter()
        .filter(|p| !p.data.is_empty())
        .enumerate()
        .map(|(index, payload)| {
            let label = format!(
                "{}/{}_option_{}.{}",
                GENERATED_DIR,
                kind,
                index + 1,
                payload.extension()
            );
            AssetRef::new(label, payload.mime_type, payload.data)
        })
        .collect()
}

/// Product photo with its background removed.
pub async fn remove_product_background<C>(
    client: &C,
    config: &CampaignConfig,
) -> Result<AssetRef, ApiError>
where
    C: CreativeGenerationClient + ?Sized,
{
    let photo = config
        .campaign
        .product_photo
        .as_ref()
        .ok_or(ValidationError::MissingField("product photo"))?;
    let payload = client.remove_background(photo).await?;
    let label = derived_label(&photo.label, "no_bg", &payload);
    debug!(source = %photo.label, label = %label, "Product background removed");
    Ok(AssetRef::new(label, payload.mime_type, payload.data))
}

/// Product photo restaged on a backdrop drawn from the brand palette, logo included.
pub async fn stylize_product_photo<C>(
    client: &C,
    config: &CampaignConfig,
) -> Result<AssetRef, ApiError>
where
    C: CreativeGenerationClient + ?Sized,
{
    let photo = config
        .campaign
        .product_photo
        .as_ref()
        .ok_or(ValidationError::MissingField("product photo"))?;
    let logo = config
        .brand
        .logo
        .as_ref()
        .ok_or(ValidationError::MissingField("logo"))?;
    let payload = client
        .stylize_product_photo(photo, logo, &config.brand.color_palette)
        .await?;
    let label = derived_label(&photo.label, "stylized", &payload);
    debug!(source = %photo.label, label = %label, "Product photo stylized");
    Ok(AssetRef::new(label, payload.mime_type, payload.data))
}

/// Logo candidates for a brand. A blank brand name yields nothing and skips the backend.
pub async fn logo_variations<C>(client: &C, brand_name: &str) -> Result<Vec<AssetRef>, ApiError>
where
    C: CreativeGenerationClient + ?Sized,
{
    let brand_name = brand_name.trim();
    if brand_name.is_empty() {
        return Ok(Vec::new());
    }
    let options = candidates("logo", client.logo_variations(brand_name).await?);
    debug!(count = options.len(), "Logo variations received");
    Ok(options)
}

/// Mascot candidates. Brand name, product description and tone are all required.
pub async fn mascot_suggestions<C>(
    client: &C,
    config: &CampaignConfig,
) -> Result<Vec<AssetRef>, ApiError>
where
    C: CreativeGenerationClient + ?Sized,
{
    let brand_name = required(&config.brand.name, "brand name")?;
    let description = required(&config.campaign.product_description, "product description")?;
    let tone = required(&config.brand.tone, "tone")?;
    let options = candidates(
        "mascot",
        client.mascot_suggestions(brand_name, description, tone).await?,
    );
    debug!(count = options.len(), "Mascot suggestions received");
    Ok(options)
}
