//! Studio edits: single-step changes to a campaign, each recorded as one undoable snapshot.

use crate::history::ConfigStore;
use crate::types::{AssetRef, CampaignConfig, Platform};
use tracing::debug;

/// One user edit in the studio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudioEdit {
    SetBrandName(String),
    SetTone(String),
    SetFontStyle(String),
    SetLogo(AssetRef),
    SetMascot(AssetRef),
    SetTagline(String),
    SetProductDescription(String),
    /// Replaces the product photo, e.g. with a background-removed or stylized rendition.
    SetProductPhoto(AssetRef),
    /// Catalog preset name; "Custom" switches to `custom_preset`.
    SetPreset(String),
    /// Switches to the "Custom" preset with the given style description.
    SetCustomPreset(String),
    /// Blank clears the call to action.
    SetCta(String),
    SetSeasonalOverlay(String),
    SetVideoAspectRatio(String),
    /// Selected platforms are removed; others are appended to the selection.
    TogglePlatform(Platform),
    SetAbTest(bool),
}

impl StudioEdit {
    /// Short description for menus and logs.
    pub fn describe(&self) -> String {
        match self {
            StudioEdit::SetBrandName(_) => "brand name".to_string(),
            StudioEdit::SetTone(_) => "tone".to_string(),
            StudioEdit::SetFontStyle(font) => format!("font style ({})", font),
            StudioEdit::SetLogo(asset) => format!("logo ({})", asset.label),
            StudioEdit::SetMascot(asset) => format!("mascot ({})", asset.label),
            StudioEdit::SetTagline(_) => "tagline".to_string(),
            StudioEdit::SetProductDescription(_) => "product description".to_string(),
            StudioEdit::SetProductPhoto(asset) => format!("product photo ({})", asset.label),
            StudioEdit::SetPreset(preset) => format!("preset ({})", preset),
            StudioEdit::SetCustomPreset(_) => "custom preset".to_string(),
            StudioEdit::SetCta(_) => "call to action".to_string(),
            StudioEdit::SetSeasonalOverlay(_) => "seasonal overlay".to_string(),
            StudioEdit::SetVideoAspectRatio(ratio) => format!("video aspect ratio ({})", ratio),
            StudioEdit::TogglePlatform(platform) => format!("platform {}", platform.name),
            StudioEdit::SetAbTest(on) => format!("A/B test {}", if *on { "on" } else { "off" }),
        }
    }
}

/// Apply `edit` to the current snapshot and commit the result.
pub fn apply_edit(store: &mut ConfigStore, edit: StudioEdit) {
    let description = edit.describe();
    store.commit_with(|current| edited(current, edit));
    debug!(edit = %description, cursor = store.cursor(), "Studio edit applied");
}

fn edited(current: &CampaignConfig, edit: StudioEdit) -> CampaignConfig {
    let mut next = current.clone();
    match edit {
        StudioEdit::SetBrandName(name) => next.brand.name = name,
        StudioEdit::SetTone(tone) => next.brand.tone = tone,
        StudioEdit::SetFontStyle(font) => next.brand.font_style = font,
        StudioEdit::SetLogo(asset) => next.brand.logo = Some(asset),
        StudioEdit::SetMascot(asset) => next.brand.mascot = Some(asset),
        StudioEdit::SetTagline(tagline) => next.campaign.tagline = tagline,
        StudioEdit::SetProductDescription(description) => {
            next.campaign.product_description = description
        }
        StudioEdit::SetProductPhoto(asset) => next.campaign.product_photo = Some(asset),
        StudioEdit::SetPreset(preset) => next.campaign.preset = preset,
        StudioEdit::SetCustomPreset(custom) => {
            next.campaign.preset = crate::catalog::CUSTOM_PRESET.to_string();
            next.campaign.custom_preset = custom;
        }
        StudioEdit::SetCta(cta) => {
            let cta = cta.trim();
            next.campaign.cta = if cta.is_empty() {
                None
            } else {
                Some(cta.to_string())
            };
        }
        StudioEdit::SetSeasonalOverlay(overlay) => next.campaign.seasonal_overlay = overlay,
        StudioEdit::SetVideoAspectRatio(ratio) => next.campaign.video_aspect_ratio = ratio,
        StudioEdit::TogglePlatform(platform) => {
            let platforms = &mut next.campaign.platforms;
            if platforms.iter().any(|p| p.name == platform.name) {
                platforms.retain(|p| p.name != platform.name);
            } else {
                platforms.push(platform);
            }
        }
        StudioEdit::SetAbTest(on) => next.campaign.ab_test = on,
    }
    next
}
