//! Creative briefs: the natural-language prompt plus reference assets sent to the backend.
//!
//! Each brief also carries the campaign snapshot it was composed from, for backends that
//! build their own prompt from the structured campaign.

use crate::generation::plan::GenerationJob;
use crate::types::{AssetRef, CampaignConfig, Platform, Variation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBrief {
    pub platform: Platform,
    pub variation: Option<Variation>,
    pub prompt: String,
    pub product_photo: AssetRef,
    pub logo: AssetRef,
    pub mascot: Option<AssetRef>,
    pub campaign: CampaignConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoBrief {
    pub platform: Platform,
    pub prompt: String,
    pub aspect_ratio: String,
    pub product_photo: AssetRef,
    pub campaign: CampaignConfig,
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

/// Compose the image brief for `job`. Returns `None` when the required assets are absent;
/// the planner rejects such configurations before dispatch.
pub fn image_brief(config: &CampaignConfig, job: &GenerationJob) -> Option<ImageBrief> {
    let logo = config.brand.logo.clone()?;
    let product_photo = config.campaign.product_photo.clone()?;
    let mascot = config.brand.mascot.clone();
    let prompt = image_prompt(config, &job.platform, job.variation, mascot.is_some());
    Some(ImageBrief {
        platform: job.platform.clone(),
        variation: job.variation,
        prompt,
        product_photo,
        logo,
        mascot,
        campaign: config.clone(),
    })
}

pub fn image_prompt(
    config: &CampaignConfig,
    platform: &Platform,
    variation: Option<Variation>,
    has_mascot: bool,
) -> String {
    let brand = &config.brand;
    let campaign = &config.campaign;
    let seasonal = if campaign.seasonal_overlay.trim().is_empty() {
        "None"
    } else {
        campaign.seasonal_overlay.trim()
    };

    let mut lines = vec![
        format!(
            "Create a striking advertising creative for {} ({}).",
            platform.name, platform.dimensions
        ),
        format!("- Brand: {}", brand.name),
        format!("- Product: {}", campaign.product_description),
        format!(
            "- Key visuals: feature the supplied product photo as the hero and place the supplied logo tastefully.{}",
            if has_mascot {
                " Work the brand mascot into the scene."
            } else {
                ""
            }
        ),
        format!("- Tagline: \"{}\"", campaign.tagline),
        format!("- Color palette: draw the main colors from {}.", brand.color_palette),
        format!("- Typography: set all text in a {} typeface.", brand.font_style),
        format!(
            "- Tone and style: the mood is {}; follow the '{}' visual preset.",
            brand.tone,
            config.visual_style()
        ),
        format!("- Seasonal element: {}", seasonal),
    ];

    if let Some(cta) = non_blank(campaign.cta.as_ref()) {
        lines.push(format!(
            "- Call to action: include a button or text reading \"{}\".",
            cta
        ));
    }
    if let Some(placement) = non_blank(campaign.logo_placement.as_ref()) {
        lines.push(format!("- Logo placement: {}.", placement));
    }
    if let Some(placement) = non_blank(campaign.tagline_placement.as_ref()) {
        lines.push(format!("- Tagline placement: {}.", placement));
    }
    if has_mascot {
        if let Some(placement) = non_blank(campaign.mascot_placement.as_ref()) {
            lines.push(format!("- Mascot placement: {}.", placement));
        }
    }
    if variation == Some(Variation::B) {
        lines.push(
            "- A/B test: this is Variation B. It must be a distinctly different composition from Variation A: change the layout, background treatment, color emphasis, or call-to-action position."
                .to_string(),
        );
    }
    lines.push(format!(
        "- Composition: balance every element for a {} aspect ratio. Keep it clean and professional, with no placeholder text. Return only the finished image.",
        platform.aspect_ratio
    ));

    lines.join("\n")
}

/// Compose the video brief. An explicit, non-blank video prompt wins over the composed one.
pub fn video_brief(config: &CampaignConfig, job: &GenerationJob) -> Option<VideoBrief> {
    let product_photo = config.campaign.product_photo.clone()?;
    let prompt = match non_blank(config.campaign.video_prompt.as_ref()) {
        Some(explicit) => explicit.to_string(),
        None => video_prompt(config),
    };
    Some(VideoBrief {
        platform: job.platform.clone(),
        prompt,
        aspect_ratio: video_aspect_ratio(config).to_string(),
        product_photo,
        campaign: config.clone(),
    })
}

fn video_aspect_ratio(config: &CampaignConfig) -> &str {
    let ratio = config.campaign.video_aspect_ratio.trim();
    if ratio.is_empty() {
        crate::catalog::DEFAULT_VIDEO_ASPECT_RATIO
    } else {
        ratio
    }
}

pub fn video_prompt(config: &CampaignConfig) -> String {
    let brand = &config.brand;
    let campaign = &config.campaign;
    let mut lines = vec![
        format!(
            "Produce a short 10-15 second promotional video for a {} product.",
            brand.name
        ),
        format!(
            "- Product: {}. The supplied image is the star of the video.",
            campaign.product_description
        ),
        format!("- Aspect ratio: {}.", video_aspect_ratio(config)),
        format!("- Tone: {}.", brand.tone),
        format!(
            "- Style: '{}' aesthetic with motion graphics in the brand colors: \"{}\".",
            config.visual_style(),
            brand.color_palette
        ),
        format!(
            "- Tagline: animate \"{}\" on screen in a {} style font.",
            campaign.tagline, brand.font_style
        ),
        "- Pacing: dynamic and engaging, made for social feeds.".to_string(),
    ];
    if let Some(cta) = non_blank(campaign.cta.as_ref()) {
        lines.push(format!(
            "- Call to action: end on a clear call to action reading \"{}\".",
            cta
        ));
    }
    lines.join("\n")
}
