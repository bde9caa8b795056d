//! Platform catalog listing.

use super::shared::{table, to_json};
use crate::error::ApiError;
use crate::types::Platform;

pub fn format_platforms_text(platforms: &[Platform]) -> String {
    let mut table = table(vec!["Platform", "Kind", "Size", "Aspect Ratio"]);
    for platform in platforms {
        let kind = if platform.is_video { "video" } else { "image" };
        table.add_row(vec![
            platform.name.as_str(),
            kind,
            platform.dimensions.as_str(),
            platform.aspect_ratio.as_str(),
        ]);
    }
    table.to_string()
}

pub fn format_platforms_json(platforms: &[Platform]) -> Result<String, ApiError> {
    to_json(platforms)
}
