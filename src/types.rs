//! Campaign data model shared by planning, generation, and the configuration history.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Opaque binary asset (logo, mascot, product photo). Bytes are shared read-only.
#[derive(Clone, PartialEq, Eq)]
pub struct AssetRef {
    pub label: String,
    pub mime_type: String,
    pub data: Arc<[u8]>,
}

impl AssetRef {
    pub fn new(label: impl Into<String>, mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            label: label.into(),
            mime_type: mime_type.into(),
            data: Arc::from(data),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl fmt::Debug for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetRef")
            .field("label", &self.label)
            .field("mime_type", &self.mime_type)
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// Target format for a creative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub name: String,
    /// Pixel size ("1200x675") or duration text for video platforms.
    pub dimensions: String,
    pub aspect_ratio: String,
    #[serde(default)]
    pub is_video: bool,
}

impl Platform {
    pub fn image(name: &str, dimensions: &str, aspect_ratio: &str) -> Self {
        Self {
            name: name.to_string(),
            dimensions: dimensions.to_string(),
            aspect_ratio: aspect_ratio.to_string(),
            is_video: false,
        }
    }

    pub fn video(name: &str, duration: &str, aspect_ratio: &str) -> Self {
        Self {
            name: name.to_string(),
            dimensions: duration.to_string(),
            aspect_ratio: aspect_ratio.to_string(),
            is_video: true,
        }
    }
}

/// A/B identity of an image job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Variation {
    A,
    B,
}

impl Variation {
    pub fn as_str(self) -> &'static str {
        match self {
            Variation::A => "A",
            Variation::B => "B",
        }
    }
}

impl fmt::Display for Variation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobKind {
    Image,
    Video,
}

impl JobKind {
    pub fn as_str(self) -> &'static str {
        match self {
            JobKind::Image => "image",
            JobKind::Video => "video",
        }
    }
}

/// Generated media bytes with their MIME type.
#[derive(Clone, PartialEq, Eq)]
pub struct MediaPayload {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl MediaPayload {
    pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data,
        }
    }

    /// File extension matching the MIME type, used when writing creatives to disk.
    pub fn extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "image/png" => "png",
            "image/jpeg" => "jpg",
            "image/webp" => "webp",
            "image/gif" => "gif",
            "video/mp4" => "mp4",
            "video/webm" => "webm",
            _ => "bin",
        }
    }
}

impl fmt::Debug for MediaPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaPayload")
            .field("mime_type", &self.mime_type)
            .field("bytes", &self.data.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandAssets {
    pub name: String,
    pub logo: Option<AssetRef>,
    pub mascot: Option<AssetRef>,
    pub color_palette: String,
    pub font_style: String,
    pub tone: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignDetails {
    pub product_description: String,
    pub product_photo: Option<AssetRef>,
    pub preset: String,
    /// Visual style text used when `preset` is "Custom".
    pub custom_preset: String,
    /// Ordered selection; the planner drops repeated names.
    pub platforms: Vec<Platform>,
    pub tagline: String,
    pub cta: Option<String>,
    pub seasonal_overlay: String,
    pub ab_test: bool,
    pub logo_placement: Option<String>,
    pub tagline_placement: Option<String>,
    pub mascot_placement: Option<String>,
    pub video_prompt: Option<String>,
    pub video_aspect_ratio: String,
}

/// One snapshot of everything the user has configured for a campaign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignConfig {
    pub brand: BrandAssets,
    pub campaign: CampaignDetails,
}

impl CampaignConfig {
    pub fn visual_style(&self) -> &str {
        if self.campaign.preset == crate::catalog::CUSTOM_PRESET {
            &self.campaign.custom_preset
        } else {
            &self.campaign.preset
        }
    }

    pub fn has_platform(&self, name: &str) -> bool {
        self.campaign.platforms.iter().any(|p| p.name == name)
    }
}

impl Default for CampaignConfig {
    fn default() -> Self {
        let platforms = crate::catalog::platforms().into_iter().take(2).collect();
        Self {
            brand: BrandAssets {
                name: String::new(),
                logo: None,
                mascot: None,
                color_palette: "Vibrant orange, sleek black, and clean white".to_string(),
                font_style: "Modern Sans-Serif".to_string(),
                tone: String::new(),
            },
            campaign: CampaignDetails {
                product_description: String::new(),
                product_photo: None,
                preset: "Minimal Luxe".to_string(),
                custom_preset: String::new(),
                platforms,
                tagline: String::new(),
                cta: None,
                seasonal_overlay: String::new(),
                ab_test: false,
                logo_placement: None,
                tagline_placement: None,
                mascot_placement: None,
                video_prompt: None,
                video_aspect_ratio: crate::catalog::DEFAULT_VIDEO_ASPECT_RATIO.to_string(),
            },
        }
    }
}
