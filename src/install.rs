//! Development dependency installation through the package manager.

use crate::config::PackageManagerConfig;
use crate::error::ScaffoldError;
use crate::settings::ProjectSettings;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// Packages to install as development dependencies.
pub fn dev_dependencies(settings: &ProjectSettings, config: &PackageManagerConfig) -> Vec<String> {
    let mut packages = Vec::new();
    if settings.tests {
        packages.extend(config.test_packages.iter().cloned());
    }
    if settings.browser {
        packages.extend(config.browser_packages.iter().cloned());
    }
    packages
}

/// A fully resolved package manager invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    pub program: String,
    pub args: Vec<String>,
    pub packages: Vec<String>,
}

impl InstallPlan {
    pub fn new(config: &PackageManagerConfig, packages: Vec<String>) -> Self {
        let mut args = config.install_args.clone();
        args.extend(packages.iter().cloned());
        Self {
            program: config.program.clone(),
            args,
            packages,
        }
    }

    pub fn for_settings(settings: &ProjectSettings, config: &PackageManagerConfig) -> Self {
        Self::new(config, dev_dependencies(settings, config))
    }

    /// The command line as a single display string.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the package manager in `dir`, streaming its output to the terminal.
    pub fn run(&self, dir: &Path) -> Result<(), ScaffoldError> {
        info!(command = %self.command_line(), "installing packages");
        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| ScaffoldError::CommandSpawn {
                program: self.program.clone(),
                source: e,
            })?;

        if !status.success() {
            return Err(ScaffoldError::CommandFailed {
                program: self.program.clone(),
                status: status.to_string(),
            });
        }

        debug!(packages = ?self.packages, "Package installation finished");
        Ok(())
    }
}
