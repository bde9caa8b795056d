//! CLI presentation: text and json formatters per command family.

mod catalog;
mod generation;
mod plan;
mod shared;
mod studio;

pub use catalog::{format_platforms_json, format_platforms_text};
pub use generation::{format_outcome_json, format_outcome_text};
pub use plan::{format_plan_json, format_plan_text};
pub use shared::check_format;
pub use studio::format_studio_state;
