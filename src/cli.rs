//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; single route table dispatches to domain services.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::{map_error, write_creatives};
pub use parse::{Cli, Commands};
pub use presentation::{
    format_outcome_json, format_outcome_text, format_plan_json, format_plan_text,
    format_platforms_json, format_platforms_text, format_studio_state,
};
pub use route::RunContext;
