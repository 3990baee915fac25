//! Author lookup through the local git configuration.

use crate::error::ScaffoldError;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Read `user.name` from git, as seen from `dir`.
pub fn user_name(dir: &Path) -> Result<String, ScaffoldError> {
    let output = Command::new("git")
        .args(["config", "--get", "user.name"])
        .current_dir(dir)
        .output()
        .map_err(|e| ScaffoldError::GitIdentity(format!("failed to run git: {}", e)))?;

    if !output.status.success() {
        return Err(ScaffoldError::GitIdentity(
            "git config user.name is not set".to_string(),
        ));
    }

    let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if name.is_empty() {
        return Err(ScaffoldError::GitIdentity(
            "git config user.name is empty".to_string(),
        ));
    }

    debug!(author = %name, "Resolved author from git config");
    Ok(name)
}

/// Resolve the author: an explicit value wins, then git.
pub fn resolve_author(explicit: Option<&str>, dir: &Path) -> Result<String, ScaffoldError> {
    match explicit.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => Ok(name.to_string()),
        None => user_name(dir),
    }
}
