//! Package manifest synthesis
//!
//! Builds the default `package.json` tree from the project settings and merges
//! it into whatever manifest already exists, writing only when keys were added.

mod merge;

pub use merge::{merge_defaults, ConfigTree};

use crate::config::PackageConfig;
use crate::error::ScaffoldError;
use crate::settings::ProjectSettings;
use serde_json::{json, Value};
use std::path::Path;
use tracing::{debug, info};

pub const MANIFEST_FILE: &str = "package.json";
pub const LICENSE_ID: &str = "MIT";
pub const TEST_ENTRY: &str = "tests.js";

/// Build the defaults tree for a project manifest.
pub fn build_defaults(settings: &ProjectSettings, package: &PackageConfig) -> ConfigTree {
    let mut scripts = ConfigTree::new();
    if settings.browser {
        scripts.insert(
            "build".to_string(),
            Value::String(format!(
                "./node_modules/browserify/bin/cmd.js -s {} -r ./ > {}.browser.js",
                settings.camel_title, settings.main
            )),
        );
    }
    if settings.tests {
        scripts.insert(
            "test".to_string(),
            Value::String(format!(
                "./node_modules/istanbul/lib/cli.js cover node_modules/nodeunit/bin/nodeunit -- ./{}",
                TEST_ENTRY
            )),
        );
    }

    let repository_url = settings.repository_url.clone();
    let mut defaults = ConfigTree::new();
    defaults.insert("name".to_string(), json!(settings.title));
    defaults.insert("version".to_string(), json!(package.version));
    defaults.insert("description".to_string(), json!(settings.description));
    defaults.insert("bin".to_string(), json!(settings.main));
    defaults.insert("main".to_string(), json!(settings.main));
    defaults.insert("scripts".to_string(), Value::Object(scripts));
    defaults.insert("keywords".to_string(), json!(settings.keywords));
    defaults.insert(
        "repository".to_string(),
        json!({ "type": "git", "url": repository_url }),
    );
    defaults.insert("author".to_string(), json!(settings.author));
    defaults.insert("license".to_string(), json!(LICENSE_ID));
    defaults.insert(
        "bugs".to_string(),
        json!({ "url": format!("{}/issues", repository_url) }),
    );
    defaults.insert("homepage".to_string(), json!(repository_url));
    defaults
}

/// Load an existing manifest, or an empty tree when there is none.
pub fn load_manifest(path: &Path) -> Result<ConfigTree, ScaffoldError> {
    if !path.exists() {
        debug!(path = %path.display(), "No existing manifest");
        return Ok(ConfigTree::new());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ScaffoldError::ReadFailed {
        path: path.to_path_buf(),
        source: e,
    })?;
    let parsed: Value =
        serde_json::from_str(&content).map_err(|e| ScaffoldError::ManifestParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    match parsed {
        Value::Object(map) => Ok(map),
        other => Err(ScaffoldError::ManifestParse {
            path: path.to_path_buf(),
            reason: format!("expected a JSON object at the top level, found {}", kind(&other)),
        }),
    }
}

/// Serialize a manifest as two-space indented JSON with a trailing newline.
pub fn render_manifest(manifest: &ConfigTree) -> Result<String, ScaffoldError> {
    let mut text = serde_json::to_string_pretty(manifest)?;
    text.push('\n');
    Ok(text)
}

pub fn write_manifest(path: &Path, manifest: &ConfigTree) -> Result<(), ScaffoldError> {
    let text = render_manifest(manifest)?;
    std::fs::write(path, text).map_err(|e| ScaffoldError::WriteFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Result of merging defaults into the on-disk manifest.
#[derive(Debug, Clone)]
pub struct ManifestSync {
    pub manifest: ConfigTree,
    pub existed: bool,
    pub changed: bool,
}

/// Merge defaults into the manifest under `root` without writing.
pub fn preview_manifest(root: &Path, defaults: &ConfigTree) -> Result<ManifestSync, ScaffoldError> {
    let path = root.join(MANIFEST_FILE);
    let existed = path.exists();
    let mut manifest = load_manifest(&path)?;
    let changed = merge_defaults(defaults, &mut manifest);
    Ok(ManifestSync {
        manifest,
        existed,
        changed,
    })
}

/// Merge defaults into the manifest under `root`, writing it back if changed.
pub fn sync_manifest(root: &Path, defaults: &ConfigTree) -> Result<ManifestSync, ScaffoldError> {
    let sync = preview_manifest(root, defaults)?;
    if sync.changed {
        info!("writing {}", MANIFEST_FILE);
        write_manifest(&root.join(MANIFEST_FILE), &sync.manifest)?;
    } else {
        debug!("{} already has every default key", MANIFEST_FILE);
    }
    Ok(sync)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
