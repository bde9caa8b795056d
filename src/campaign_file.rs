//! Campaign files: the TOML document the CLI reads a `CampaignConfig` from.
//!
//! ```toml
//! [brand]
//! name = "Kinetic"
//! logo = "assets/logo.png"
//! tone = "Energetic"
//!
//! [campaign]
//! product_description = "Carbon running shoe"
//! product_photo = "assets/shoe.jpg"
//! platforms = ["Instagram Story", "Promotional Video"]
//! ```
//!
//! Asset paths are resolved against the directory holding the file. Fields left out take
//! the values of a fresh campaign form.

use crate::catalog;
use crate::error::ApiError;
use crate::types::{AssetRef, CampaignConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CampaignDocument {
    #[serde(default)]
    pub brand: BrandSection,
    #[serde(default)]
    pub campaign: CampaignSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BrandSection {
    pub name: Option<String>,
    pub logo: Option<PathBuf>,
    pub mascot: Option<PathBuf>,
    pub color_palette: Option<String>,
    pub font_style: Option<String>,
    pub tone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CampaignSection {
    pub product_description: Option<String>,
    pub product_photo: Option<PathBuf>,
    pub preset: Option<String>,
    pub custom_preset: Option<String>,
    pub platforms: Option<Vec<String>>,
    pub tagline: Option<String>,
    pub cta: Option<String>,
    pub seasonal_overlay: Option<String>,
    pub ab_test: Option<bool>,
    pub logo_placement: Option<String>,
    pub tagline_placement: Option<String>,
    pub mascot_placement: Option<String>,
    pub video_prompt: Option<String>,
    pub video_aspect_ratio: Option<String>,
}

/// Read and resolve a campaign file.
pub fn load(path: &Path) -> Result<CampaignConfig, ApiError> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        ApiError::CampaignFile(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let config = parse(&text, base_dir)?;
    debug!(
        campaign = %path.display(),
        platforms = config.campaign.platforms.len(),
        "Campaign file loaded"
    );
    Ok(config)
}

/// Parse campaign TOML, loading asset files relative to `base_dir`.
pub fn parse(text: &str, base_dir: &Path) -> Result<CampaignConfig, ApiError> {
    let document: CampaignDocument = toml::from_str(text)
        .map_err(|e| ApiError::CampaignFile(format!("Invalid campaign file: {}", e)))?;
    resolve(document, base_dir)
}

fn resolve(document: CampaignDocument, base_dir: &Path) -> Result<CampaignConfig, ApiError> {
    let mut config = CampaignConfig::default();
    let CampaignDocument { brand, campaign } = document;

    let target = &mut config.brand;
    if let Some(name) = brand.name {
        target.name = name;
    }
    target.logo = brand.logo.map(|p| load_asset(base_dir, &p)).transpose()?;
    target.mascot = brand.mascot.map(|p| load_asset(base_dir, &p)).transpose()?;
    if let Some(palette) = brand.color_palette {
        target.color_palette = palette;
    }
    if let Some(font) = brand.font_style {
        target.font_style = font;
    }
    if let Some(tone) = brand.tone {
        target.tone = tone;
    }

    let target = &mut config.campaign;
    if let Some(description) = campaign.product_description {
        target.product_description = description;
    }
    target.product_photo = campaign
        .product_photo
        .map(|p| load_asset(base_dir, &p))
        .transpose()?;
    if let Some(preset) = campaign.preset {
        if !catalog::is_known_preset(&preset) {
            return Err(ApiError::CampaignFile(format!(
                "Unknown preset '{}' (expected one of: {})",
                preset,
                catalog::PRESETS.join(", ")
            )));
        }
        target.preset = preset;
    }
    if let Some(custom) = campaign.custom_preset {
        target.custom_preset = custom;
    }
    if let Some(names) = campaign.platforms {
        target.platforms = names
            .iter()
            .map(|name| {
                catalog::find_platform(name).ok_or_else(|| {
                    ApiError::CampaignFile(format!("Unknown platform '{}'", name))
                })
            })
            .collect::<Result<_, _>>()?;
    }
    if let Some(tagline) = campaign.tagline {
        target.tagline = tagline;
    }
    target.cta = campaign.cta;
    if let Some(overlay) = campaign.seasonal_overlay {
        target.seasonal_overlay = overlay;
    }
    if let Some(ab_test) = campaign.ab_test {
        target.ab_test = ab_test;
    }
    target.logo_placement = campaign.logo_placement;
    target.tagline_placement = campaign.tagline_placement;
    target.mascot_placement = campaign.mascot_placement;
    target.video_prompt = campaign.video_prompt;
    if let Some(ratio) = campaign.video_aspect_ratio {
        if !catalog::is_known_aspect_ratio(&ratio) {
            return Err(ApiError::CampaignFile(format!(
                "Unsupported video aspect ratio '{}'",
                ratio
            )));
        }
        target.video_aspect_ratio = ratio;
    }

    Ok(config)
}

fn load_asset(base_dir: &Path, relative: &Path) -> Result<AssetRef, ApiError> {
    let path = base_dir.join(relative);
    let data = std::fs::read(&path).map_err(|e| {
        ApiError::CampaignFile(format!("Failed to read asset {}: {}", path.display(), e))
    })?;
    Ok(AssetRef::new(
        relative.to_string_lossy(),
        mime_type_for(relative),
        data,
    ))
}

/// MIME type from a file extension.
pub fn mime_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}

/// Document for `config`, with asset paths taken from each asset's label.
pub fn to_document(config: &CampaignConfig) -> CampaignDocument {
    let brand = &config.brand;
    let campaign = &config.campaign;
    CampaignDocument {
        brand: BrandSection {
            name: Some(brand.name.clone()),
            logo: brand.logo.as_ref().map(|a| PathBuf::from(&a.label)),
            mascot: brand.mascot.as_ref().map(|a| PathBuf::from(&a.label)),
            color_palette: Some(brand.color_palette.clone()),
            font_style: Some(brand.font_style.clone()),
            tone: Some(brand.tone.clone()),
        },
        campaign: CampaignSection {
            product_description: Some(campaign.product_description.clone()),
            product_photo: campaign.product_photo.as_ref().map(|a| PathBuf::from(&a.label)),
            preset: Some(campaign.preset.clone()),
            custom_preset: Some(campaign.custom_preset.clone()),
            platforms: Some(campaign.platforms.iter().map(|p| p.name.clone()).collect()),
            tagline: Some(campaign.tagline.clone()),
            cta: campaign.cta.clone(),
            seasonal_overlay: Some(campaign.seasonal_overlay.clone()),
            ab_test: Some(campaign.ab_test),
            logo_placement: campaign.logo_placement.clone(),
            tagline_placement: campaign.tagline_placement.clone(),
            mascot_placement: campaign.mascot_placement.clone(),
            video_prompt: campaign.video_prompt.clone(),
            video_aspect_ratio: Some(campaign.video_aspect_ratio.clone()),
        },
    }
}

/// Write `config` back out as a campaign file. Assets whose label does not name an existing
/// file beside `path` (generated or reworked in the studio) are written there first.
pub fn save(config: &CampaignConfig, path: &Path) -> Result<(), ApiError> {
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let assets = [
        config.brand.logo.as_ref(),
        config.brand.mascot.as_ref(),
        config.campaign.product_photo.as_ref(),
    ];
    for asset in assets.into_iter().flatten() {
        write_missing_asset(base_dir, asset)?;
    }
    let text = toml::to_string_pretty(&to_document(config))
        .map_err(|e| ApiError::CampaignFile(format!("Failed to serialize campaign: {}", e)))?;
    std::fs::write(path, text)?;
    Ok(())
}

fn write_missing_asset(base_dir: &Path, asset: &AssetRef) -> Result<(), ApiError> {
    let target = base_dir.join(&asset.label);
    if target.exists() {
        return Ok(());
    }
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&target, &asset.data)?;
    debug!(asset = %target.display(), bytes = asset.len(), "Asset written");
    Ok(())
}
