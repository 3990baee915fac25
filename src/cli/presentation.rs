//! CLI presentation: text formatters per command.

mod scaffold;

pub use scaffold::{
    format_follow_up, format_manifest_result, format_scaffold_preview, format_scaffold_summary,
};
