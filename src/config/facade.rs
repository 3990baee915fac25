//! Config loading facade: builds the layered source stack and deserializes it.

use super::merge::builder_with_defaults;
use super::sources::{environment, global_file, project_file};
use super::ToolConfig;
use crate::error::ScaffoldError;
use config::{File, FileFormat};
use std::path::Path;

/// Loads `ToolConfig` from its sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a project directory.
    ///
    /// Precedence (lowest to highest): defaults, global file, project file,
    /// environment.
    pub fn load(project_root: &Path) -> Result<ToolConfig, ScaffoldError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = project_file::add_to_builder(builder, project_root)?;
        let builder = environment::add_to_builder(builder);

        let config: ToolConfig = builder.build()?.try_deserialize()?;
        Self::validated(config)
    }

    /// Load configuration from one explicit file over the defaults.
    pub fn load_from_file(path: &Path) -> Result<ToolConfig, ScaffoldError> {
        let config: ToolConfig = builder_with_defaults()?
            .add_source(File::from(path).format(FileFormat::Toml).required(true))
            .build()?
            .try_deserialize()?;
        Self::validated(config)
    }

    fn validated(config: ToolConfig) -> Result<ToolConfig, ScaffoldError> {
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ScaffoldError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(config)
    }
}
