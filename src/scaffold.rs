//! Scaffolding pipeline
//!
//! Runs the scaffolding steps in a fixed order: manifest, stub sources, package
//! installation, documents, `.gitignore`. Existing files are never overwritten.
//! The first failing step aborts the run.

use crate::config::ToolConfig;
use crate::error::ScaffoldError;
use crate::install::InstallPlan;
use crate::manifest::{self, MANIFEST_FILE, TEST_ENTRY};
use crate::settings::ProjectSettings;
use crate::template::{self, Template};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const GITIGNORE_FILE: &str = ".gitignore";
pub const FAVICON_FILE: &str = "favicon.ico";
const README_ALTERNATIVE: &str = "README.markdown";
const STRICT_STUB: &str = "'use strict'\n";

/// Steps left for the user after scaffolding.
pub const FOLLOW_UP: &[&str] = &[
    "Add the repo to GitHub",
    "Add the repo to Travis",
    "npm publish",
    "Enhance your README",
];

/// A 1x1 32-bit icon.
const FAVICON: [u8; 70] = [
    // ICONDIR: reserved, type = icon, one image
    0x00, 0x00, 0x01, 0x00, 0x01, 0x00,
    // ICONDIRENTRY: 1x1, no palette, 1 plane, 32 bpp, 48 bytes at offset 22
    0x01, 0x01, 0x00, 0x00, 0x01, 0x00, 0x20, 0x00, 0x30, 0x00, 0x00, 0x00, 0x16, 0x00, 0x00, 0x00,
    // BITMAPINFOHEADER: 40 bytes, width 1, height 2 (XOR + AND), 1 plane, 32 bpp
    0x28, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x01, 0x00, 0x20, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // pixel (BGRA)
    0x33, 0x99, 0xff, 0xff,
    // AND mask row, padded to 32 bits
    0x00, 0x00, 0x00, 0x00,
];

/// What happened to a file during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileAction {
    Created,
    Updated,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    pub path: String,
    pub action: FileAction,
}

/// Summary of a scaffolding run
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScaffoldSummary {
    pub files: Vec<FileOutcome>,
    /// Packages passed to the package manager; `None` when installation was skipped
    pub installed: Option<Vec<String>>,
}

impl ScaffoldSummary {
    fn record(&mut self, path: impl Into<String>, action: FileAction) {
        self.files.push(FileOutcome {
            path: path.into(),
            action,
        });
    }

    pub fn with_action(&self, action: FileAction) -> Vec<&str> {
        self.files
            .iter()
            .filter(|f| f.action == action)
            .map(|f| f.path.as_str())
            .collect()
    }

    pub fn action_for(&self, path: &str) -> Option<FileAction> {
        self.files.iter().find(|f| f.path == path).map(|f| f.action)
    }
}

/// Preview of what a run would do
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldPreview {
    pub manifest: Option<FileAction>,
    pub files: Vec<String>,
    pub gitignore_additions: Vec<String>,
    pub install_command: String,
}

/// Options that change which steps run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScaffoldOptions {
    pub skip_install: bool,
}

/// A file the pipeline writes when absent.
struct PlannedFile {
    name: String,
    /// Other names that also count as the file being present
    alternatives: &'static [&'static str],
    contents: Vec<u8>,
}

impl PlannedFile {
    fn new(name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            alternatives: &[],
            contents: contents.into(),
        }
    }

    fn from_template(template: &Template, settings: &ProjectSettings) -> Self {
        Self::new(template.file_name, template.render(&settings.template_values()))
    }

    fn exists_in(&self, root: &Path) -> bool {
        root.join(&self.name).exists()
            || self.alternatives.iter().any(|alt| root.join(alt).exists())
    }
}

/// Runs the scaffolding steps for one project directory.
pub struct Scaffolder<'a> {
    root: &'a Path,
    settings: &'a ProjectSettings,
    config: &'a ToolConfig,
}

impl<'a> Scaffolder<'a> {
    pub fn new(root: &'a Path, settings: &'a ProjectSettings, config: &'a ToolConfig) -> Self {
        Self {
            root,
            settings,
            config,
        }
    }

    pub fn install_plan(&self) -> InstallPlan {
        InstallPlan::for_settings(self.settings, &self.config.package_manager)
    }

    /// Run every step in order.
    pub fn run(&self, options: ScaffoldOptions) -> Result<ScaffoldSummary, ScaffoldError> {
        let mut summary = ScaffoldSummary::default();

        self.sync_manifest(&mut summary)?;

        for file in self.source_files() {
            self.write_if_missing(&file, &mut summary)?;
        }

        if options.skip_install {
            info!("skipping package installation");
        } else {
            let plan = self.install_plan();
            plan.run(self.root)?;
            summary.installed = Some(plan.packages);
        }

        for file in self.document_files() {
            self.write_if_missing(&file, &mut summary)?;
        }

        self.update_gitignore(&mut summary)?;

        Ok(summary)
    }

    /// Report what `run` would do without touching the filesystem.
    pub fn preview(&self) -> Result<ScaffoldPreview, ScaffoldError> {
        let defaults = manifest::build_defaults(self.settings, &self.config.package);
        let sync = manifest::preview_manifest(self.root, &defaults)?;
        let manifest = match (sync.existed, sync.changed) {
            (false, _) => Some(FileAction::Created),
            (true, true) => Some(FileAction::Updated),
            (true, false) => None,
        };

        let files = self
            .source_files()
            .into_iter()
            .chain(self.document_files())
            .filter(|file| !file.exists_in(self.root))
            .map(|file| file.name)
            .collect();

        let existing = read_optional(&self.root.join(GITIGNORE_FILE))?;
        let gitignore_additions = gitignore_additions(&existing, self.settings.tests)
            .into_iter()
            .map(str::to_string)
            .collect();

        Ok(ScaffoldPreview {
            manifest,
            files,
            gitignore_additions,
            install_command: self.install_plan().command_line(),
        })
    }

    fn sync_manifest(&self, summary: &mut ScaffoldSummary) -> Result<(), ScaffoldError> {
        let defaults = manifest::build_defaults(self.settings, &self.config.package);
        let sync = manifest::sync_manifest(self.root, &defaults)?;
        let action = match (sync.existed, sync.changed) {
            (false, _) => FileAction::Created,
            (true, true) => FileAction::Updated,
            (true, false) => FileAction::Skipped,
        };
        summary.record(MANIFEST_FILE, action);
        Ok(())
    }

    fn source_files(&self) -> Vec<PlannedFile> {
        let mut files = Vec::new();
        if self.settings.tests {
            files.push(PlannedFile::new(TEST_ENTRY, STRICT_STUB));
        }
        // A project named `tests` has `tests.js` as its main file too
        if !(self.settings.tests && self.settings.main == TEST_ENTRY) {
            files.push(PlannedFile::new(self.settings.main.clone(), STRICT_STUB));
        }
        if self.settings.browser {
            files.push(PlannedFile::new(FAVICON_FILE, FAVICON.to_vec()));
        }
        files
    }

    fn document_files(&self) -> Vec<PlannedFile> {
        let mut readme = PlannedFile::from_template(&template::README, self.settings);
        readme.alternatives = &[README_ALTERNATIVE];
        vec![
            PlannedFile::from_template(&template::LICENSE, self.settings),
            readme,
            PlannedFile::from_template(&template::TRAVIS, self.settings),
        ]
    }

    fn write_if_missing(
        &self,
        file: &PlannedFile,
        summary: &mut ScaffoldSummary,
    ) -> Result<(), ScaffoldError> {
        if file.exists_in(self.root) {
            debug!(file = %file.name, "already exists, skipping");
            summary.record(file.name.clone(), FileAction::Skipped);
            return Ok(());
        }

        info!("writing {}", file.name);
        write_file(&self.root.join(&file.name), &file.contents)?;
        summary.record(file.name.clone(), FileAction::Created);
        Ok(())
    }

    fn update_gitignore(&self, summary: &mut ScaffoldSummary) -> Result<(), ScaffoldError> {
        let path = self.root.join(GITIGNORE_FILE);
        let existed = path.exists();
        let existing = read_optional(&path)?;
        let additions = gitignore_additions(&existing, self.settings.tests);

        if additions.is_empty() {
            summary.record(GITIGNORE_FILE, FileAction::Skipped);
            return Ok(());
        }

        let mut content = existing;
        if !content.is_empty() && !content.ends_with('\n') {
            content.push('\n');
        }
        for entry in &additions {
            content.push_str(entry);
            content.push('\n');
        }

        info!("writing {}", GITIGNORE_FILE);
        write_file(&path, content.as_bytes())?;
        let action = if existed {
            FileAction::Updated
        } else {
            FileAction::Created
        };
        summary.record(GITIGNORE_FILE, action);
        Ok(())
    }
}

/// Entries missing from a `.gitignore` body.
pub fn gitignore_additions(existing: &str, tests: bool) -> Vec<&'static str> {
    let present: Vec<&str> = existing.lines().map(str::trim).collect();
    let mut wanted = vec!["node_modules"];
    if tests {
        wanted.push("coverage");
    }
    wanted
        .into_iter()
        .filter(|entry| !present.contains(entry))
        .collect()
}

fn read_optional(path: &Path) -> Result<String, ScaffoldError> {
    if !path.exists() {
        return Ok(String::new());
    }
    std::fs::read_to_string(path).map_err(|e| ScaffoldError::ReadFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), ScaffoldError> {
    std::fs::write(path, contents).map_err(|e| ScaffoldError::WriteFailed {
        path: PathBuf::from(path),
        source: e,
    })
}
