//! CLI domain: parse, route, output, and presentation only.
//! No domain orchestration; single route table dispatches to domain services.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{AnswerArgs, Cli, Commands};
pub use presentation::{
    format_follow_up, format_manifest_result, format_scaffold_preview, format_scaffold_summary,
};
pub use route::RunContext;
