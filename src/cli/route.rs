//! CLI route: single route table and run context. Dispatches to domain services and presentation.

use crate::cli::parse::{AnswerArgs, Commands};
use crate::config::{ConfigLoader, ToolConfig};
use crate::error::ScaffoldError;
use crate::git;
use crate::manifest;
use crate::prompt::{collect_answers, DefaultsPrompter, Prompter, TerminalPrompter};
use crate::scaffold::{ScaffoldOptions, Scaffolder};
use crate::settings::{ProjectContext, ProjectSettings};
use std::path::PathBuf;
use tracing::info;

/// Runtime context for CLI execution: project directory and loaded configuration.
pub struct RunContext {
    project_root: PathBuf,
    config: ToolConfig,
}

impl RunContext {
    /// Create run context from the project directory and optional config path. Uses ConfigLoader only.
    pub fn new(project_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ScaffoldError> {
        let project_root =
            dunce::canonicalize(&project_root).map_err(|e| ScaffoldError::ReadFailed {
                path: project_root.clone(),
                source: e,
            })?;
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&project_root)?,
        };
        Ok(Self {
            project_root,
            config,
        })
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ScaffoldError> {
        match command {
            Commands::Init {
                answers,
                skip_install,
                list,
                format,
            } => self.handle_init(answers, *skip_install, *list, format),
            Commands::Manifest { answers, dry_run } => self.handle_manifest(answers, *dry_run),
        }
    }

    fn handle_init(
        &self,
        answers: &AnswerArgs,
        skip_install: bool,
        list: bool,
        format: &str,
    ) -> Result<String, ScaffoldError> {
        let settings = self.settings(answers)?;
        let scaffolder = Scaffolder::new(&self.project_root, &settings, &self.config);

        if list {
            let preview = scaffolder.preview()?;
            return if format == "json" {
                Ok(serde_json::to_string_pretty(&preview)?)
            } else {
                Ok(super::format_scaffold_preview(&preview))
            };
        }

        info!(project = %settings.title, "Scaffolding project");
        let summary = scaffolder.run(ScaffoldOptions { skip_install })?;
        if format == "json" {
            Ok(serde_json::to_string_pretty(&summary)?)
        } else {
            Ok(super::format_scaffold_summary(&summary))
        }
    }

    fn handle_manifest(&self, answers: &AnswerArgs, dry_run: bool) -> Result<String, ScaffoldError> {
        let settings = self.settings(answers)?;
        let defaults = manifest::build_defaults(&settings, &self.config.package);

        if dry_run {
            let sync = manifest::preview_manifest(&self.project_root, &defaults)?;
            return manifest::render_manifest(&sync.manifest);
        }

        let sync = manifest::sync_manifest(&self.project_root, &defaults)?;
        Ok(super::format_manifest_result(&sync))
    }

    /// Resolve the author, ask the remaining questions, and derive settings.
    fn settings(&self, answers: &AnswerArgs) -> Result<ProjectSettings, ScaffoldError> {
        let explicit = answers.author.as_deref().or(self.config.author.as_deref());
        let author = git::resolve_author(explicit, &self.project_root)?;
        let context = ProjectContext::discover(&self.project_root, author)?;

        let mut prompter: Box<dyn Prompter> = if answers.yes {
            Box::new(DefaultsPrompter)
        } else {
            Box::new(TerminalPrompter)
        };
        let collected = collect_answers(prompter.as_mut(), &answers.presets())?;

        Ok(ProjectSettings::new(
            &context,
            collected,
            &self.config.package.repository_host,
        ))
    }
}
