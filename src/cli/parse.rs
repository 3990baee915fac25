//! CLI parse: clap types for boilerplate. No behavior beyond flag value parsing.

use crate::prompt::AnswerPresets;
use crate::settings::parse_yes_no;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// boilerplate CLI - scaffold an npm package in an existing directory
#[derive(Parser, Debug)]
#[command(name = "boilerplate")]
#[command(about = "Scaffold package.json, docs, CI config and stubs for an npm package")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Project directory (its name becomes the package name)
    #[arg(long, default_value = ".", global = true)]
    pub dir: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask the setup questions and scaffold the project
    Init {
        #[command(flatten)]
        answers: AnswerArgs,

        /// Do not run the package manager
        #[arg(long)]
        skip_install: bool,

        /// List what would be created without writing anything
        #[arg(long)]
        list: bool,

        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Create or complete package.json only
    Manifest {
        #[command(flatten)]
        answers: AnswerArgs,

        /// Print the merged manifest instead of writing it
        #[arg(long)]
        dry_run: bool,
    },
}

/// Answers that can be given up front instead of at the prompt.
#[derive(Args, Debug, Clone, Default)]
pub struct AnswerArgs {
    /// Package description
    #[arg(long)]
    pub description: Option<String>,

    /// Space-delimited keywords
    #[arg(long)]
    pub keywords: Option<String>,

    /// Set up tests (y/n)
    #[arg(long, value_parser = parse_tests_flag)]
    pub tests: Option<bool>,

    /// Build for the browser (y/n)
    #[arg(long, value_parser = parse_browser_flag)]
    pub browser: Option<bool>,

    /// Author name (defaults to config, then git user.name)
    #[arg(long)]
    pub author: Option<String>,

    /// Accept the default for every unanswered question
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl AnswerArgs {
    pub fn presets(&self) -> AnswerPresets {
        AnswerPresets {
            description: self.description.clone(),
            keywords: self.keywords.clone(),
            tests: self.tests,
            browser: self.browser,
        }
    }
}

fn parse_tests_flag(value: &str) -> Result<bool, String> {
    parse_yes_no("--tests", value).map_err(|e| e.to_string())
}

fn parse_browser_flag(value: &str) -> Result<bool, String> {
    parse_yes_no("--browser", value).map_err(|e| e.to_string())
}
