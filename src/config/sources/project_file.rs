//! Project config file source: <project>/.boilerplate.toml

use crate::config::paths::PROJECT_CONFIG_FILE;
use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use config::FileFormat;
use std::path::Path;
use tracing::debug;

/// Add the project config file to builder when present.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    project_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = project_root.join(PROJECT_CONFIG_FILE);
    if !path.exists() {
        return Ok(builder);
    }
    debug!(config_path = %path.display(), "Loading project configuration");
    Ok(builder.add_source(File::from(path).format(FileFormat::Toml).required(false)))
}
