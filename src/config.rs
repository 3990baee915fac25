//! Configuration System
//!
//! Layered configuration for the tool itself: built-in defaults, a global file
//! in the user's config directory, a `.boilerplate.toml` in the project
//! directory, and `BOILERPLATE_*` environment variables, in increasing order of
//! precedence.

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod paths;
mod sources;

pub use facade::ConfigLoader;
pub use paths::{config_home, global_config_path, PROJECT_CONFIG_FILE};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Author name; when unset it is read from `git config user.name`
    #[serde(default)]
    pub author: Option<String>,

    /// Values used when synthesizing the package manifest
    #[serde(default)]
    pub package: PackageConfig,

    /// Package manager invocation
    #[serde(default)]
    pub package_manager: PackageManagerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Manifest defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageConfig {
    /// Initial `version` for a new manifest
    #[serde(default = "default_version")]
    pub version: String,

    /// Base URL of the code host; repository URLs are `<host>/<author>/<title>`
    #[serde(default = "default_repository_host")]
    pub repository_host: String,
}

fn default_version() -> String {
    "0.0.1".to_string()
}

fn default_repository_host() -> String {
    "https://github.com".to_string()
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            repository_host: default_repository_host(),
        }
    }
}

/// How development dependencies get installed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageManagerConfig {
    #[serde(default = "default_program")]
    pub program: String,

    /// Arguments placed before the package names
    #[serde(default = "default_install_args")]
    pub install_args: Vec<String>,

    /// Installed when the project has tests
    #[serde(default = "default_test_packages")]
    pub test_packages: Vec<String>,

    /// Installed when the project targets the browser
    #[serde(default = "default_browser_packages")]
    pub browser_packages: Vec<String>,
}

fn default_program() -> String {
    "npm".to_string()
}

fn default_install_args() -> Vec<String> {
    vec![
        "install".to_string(),
        "--save-dev".to_string(),
        "--verbose".to_string(),
    ]
}

fn default_test_packages() -> Vec<String> {
    vec!["istanbul".to_string(), "nodeunit".to_string()]
}

fn default_browser_packages() -> Vec<String> {
    vec!["browserify".to_string()]
}

impl Default for PackageManagerConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            install_args: default_install_args(),
            test_packages: default_test_packages(),
            browser_packages: default_browser_packages(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Package(String),
    PackageManager(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Package(msg) => write!(f, "package: {}", msg),
            ValidationError::PackageManager(msg) => write!(f, "package_manager: {}", msg),
            ValidationError::Logging(msg) => write!(f, "logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ToolConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.package.version.trim().is_empty() {
            errors.push(ValidationError::Package("version cannot be empty".to_string()));
        }
        if !self.package.repository_host.starts_with("http://")
            && !self.package.repository_host.starts_with("https://")
        {
            errors.push(ValidationError::Package(format!(
                "repository_host must be an http(s) URL, got '{}'",
                self.package.repository_host
            )));
        }
        if self.package_manager.program.trim().is_empty() {
            errors.push(ValidationError::PackageManager(
                "program cannot be empty".to_string(),
            ));
        }
        if !["json", "text"].contains(&self.logging.format.as_str()) {
            errors.push(ValidationError::Logging(format!(
                "format must be 'json' or 'text', got '{}'",
                self.logging.format
            )));
        }
        if !["stdout", "stderr", "file"].contains(&self.logging.output.as_str()) {
            errors.push(ValidationError::Logging(format!(
                "output must be 'stdout', 'stderr' or 'file', got '{}'",
                self.logging.output
            )));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
