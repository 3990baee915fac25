//! Init and manifest presentation: preview, summary and follow-up formatters.

use crate::manifest::{ManifestSync, MANIFEST_FILE};
use crate::scaffold::{FileAction, ScaffoldPreview, ScaffoldSummary, FOLLOW_UP, GITIGNORE_FILE};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

pub fn format_scaffold_preview(preview: &ScaffoldPreview) -> String {
    let mut output = format!("{}\n\n", format_section_heading("Scaffold Preview"));

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["File", "Action"]);
    if let Some(action) = preview.manifest {
        let label = match action {
            FileAction::Updated => "add missing keys",
            _ => "create",
        };
        table.add_row(vec![MANIFEST_FILE, label]);
    }
    for file in &preview.files {
        table.add_row(vec![file.as_str(), "create"]);
    }
    if !preview.gitignore_additions.is_empty() {
        let label = format!("append {}", preview.gitignore_additions.join(", "));
        table.add_row(vec![GITIGNORE_FILE.to_string(), label]);
    }

    let nothing_to_write = preview.manifest.is_none()
        && preview.files.is_empty()
        && preview.gitignore_additions.is_empty();
    if nothing_to_write {
        output.push_str("All files already exist.\n\n");
    } else {
        output.push_str(&format!("{}\n\n", table));
    }

    output.push_str(&format!("Would run: {}\n", preview.install_command));
    output.push_str("Run 'boilerplate init' to scaffold the project.\n");
    output
}

pub fn format_scaffold_summary(summary: &ScaffoldSummary) -> String {
    let mut output = String::from("Scaffolding project...\n\n");

    for file in &summary.files {
        match file.action {
            FileAction::Created => {
                output.push_str(&format!("  {} {}\n", "✓".green(), file.path));
            }
            FileAction::Updated => {
                output.push_str(&format!("  {} {} (updated)\n", "✓".green(), file.path));
            }
            FileAction::Skipped => {
                output.push_str(&format!(
                    "  {} {} (already exists, skipped)\n",
                    "⊘".yellow(),
                    file.path
                ));
            }
        }
    }
    output.push('\n');

    match &summary.installed {
        Some(packages) if packages.is_empty() => {
            output.push_str("Installed existing dependencies.\n\n");
        }
        Some(packages) => {
            output.push_str(&format!(
                "Installed dev dependencies: {}\n\n",
                packages.join(", ")
            ));
        }
        None => output.push_str("Package installation skipped.\n\n"),
    }

    output.push_str(&format_follow_up());
    output
}

pub fn format_manifest_result(sync: &ManifestSync) -> String {
    match (sync.existed, sync.changed) {
        (false, _) => format!("{} {} (created)", "✓".green(), MANIFEST_FILE),
        (true, true) => format!("{} {} (added missing keys)", "✓".green(), MANIFEST_FILE),
        (true, false) => format!("{} {} already complete", "⊘".yellow(), MANIFEST_FILE),
    }
}

/// The checklist of steps left for the user.
pub fn format_follow_up() -> String {
    let mut output = format!("{}\n", format_section_heading("Next steps"));
    for step in FOLLOW_UP {
        output.push_str(&format!("  - {}\n", step));
    }
    output
}
