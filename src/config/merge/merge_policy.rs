//! Merge rules: defaults, override order, conflict handling.
//!
//! Later sources override earlier ones key by key; tables merge, lists are
//! replaced whole.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("package.version", "0.0.1")?
        .set_default("package.repository_host", "https://github.com")?
        .set_default("package_manager.program", "npm")?
        .set_default(
            "package_manager.install_args",
            vec!["install", "--save-dev", "--verbose"],
        )
}
