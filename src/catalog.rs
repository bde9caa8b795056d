//! Static catalog of target platforms, visual presets, font styles, and video aspect ratios.

use crate::types::Platform;

pub const CUSTOM_PRESET: &str = "Custom";

pub const DEFAULT_VIDEO_ASPECT_RATIO: &str = "16:9";

pub const PRESETS: &[&str] = &[
    "Urban Gen Z",
    "Minimal Luxe",
    "Afro-Futurist",
    "Retro Pop",
    CUSTOM_PRESET,
];

/// (name, description)
pub const FONT_STYLES: &[(&str, &str)] = &[
    ("Modern Sans-Serif", "Clean, geometric, and minimalist."),
    ("Elegant Serif", "Classic, sophisticated, and high-contrast."),
    ("Bold Display", "Heavy, impactful, and attention-grabbing."),
    ("Playful Script", "Casual, handwritten, and friendly."),
    ("Tech Grotesk", "Futuristic, digital, and slightly quirky."),
    ("Retro Slab", "Vintage, blocky, and confident."),
];

/// (label, ratio)
pub const VIDEO_ASPECT_RATIOS: &[(&str, &str)] = &[
    ("Landscape", "16:9"),
    ("Portrait", "9:16"),
    ("Square", "1:1"),
];

/// All selectable platforms in display order.
pub fn platforms() -> Vec<Platform> {
    vec![
        Platform::image("X (formerly Twitter)", "1200x675", "16:9"),
        Platform::image("Instagram Story", "1080x1920", "9:16"),
        Platform::image("TikTok Poster", "1080x1920", "9:16"),
        Platform::video("Promotional Video", "10-15 seconds", "16:9"),
        Platform::image("LinkedIn Banner", "1584x396", "4:1"),
        Platform::image("Billboard/OOH", "6000x3000", "2:1"),
    ]
}

/// Look up a platform by its exact name.
pub fn find_platform(name: &str) -> Option<Platform> {
    platforms().into_iter().find(|p| p.name == name)
}

pub fn is_known_preset(preset: &str) -> bool {
    PRESETS.contains(&preset)
}

pub fn is_known_aspect_ratio(ratio: &str) -> bool {
    VIDEO_ASPECT_RATIOS.iter().any(|(_, value)| *value == ratio)
}
