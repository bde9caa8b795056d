//! Studio screen: the current campaign snapshot and history position.

use crate::history::ConfigStore;
use crate::types::AssetRef;
use owo_colors::OwoColorize;

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

fn asset_line(asset: Option<&AssetRef>) -> String {
    match asset {
        Some(asset) => format!("{} ({} bytes)", asset.label, asset.len()),
        None => "-".to_string(),
    }
}

pub fn format_studio_state(store: &ConfigStore) -> String {
    let config = store.current();
    let brand = &config.brand;
    let campaign = &config.campaign;
    let platforms: Vec<&str> = campaign.platforms.iter().map(|p| p.name.as_str()).collect();

    let lines = [
        format!("{}", "Campaign".bold().underline()),
        format!("  Brand:       {}", or_dash(&brand.name)),
        format!("  Tone:        {}", or_dash(&brand.tone)),
        format!("  Font:        {}", or_dash(&brand.font_style)),
        format!("  Logo:        {}", asset_line(brand.logo.as_ref())),
        format!("  Mascot:      {}", asset_line(brand.mascot.as_ref())),
        format!("  Product:     {}", or_dash(&campaign.product_description)),
        format!("  Photo:       {}", asset_line(campaign.product_photo.as_ref())),
        format!("  Tagline:     {}", or_dash(&campaign.tagline)),
        format!("  CTA:         {}", or_dash(campaign.cta.as_deref().unwrap_or(""))),
        format!("  Style:       {}", or_dash(config.visual_style())),
        format!("  Seasonal:    {}", or_dash(&campaign.seasonal_overlay)),
        format!("  Video ratio: {}", or_dash(&campaign.video_aspect_ratio)),
        format!(
            "  Platforms:   {}",
            if platforms.is_empty() {
                "-".to_string()
            } else {
                platforms.join(", ")
            }
        ),
        format!("  A/B test:    {}", if campaign.ab_test { "on" } else { "off" }),
        format!(
            "  History:     {}/{}{}{}",
            store.cursor() + 1,
            store.len(),
            if store.can_undo() { "  [undo]" } else { "" },
            if store.can_redo() { "  [redo]" } else { "" }
        ),
    ];
    lines.join("\n")
}
