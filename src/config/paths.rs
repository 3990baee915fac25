//! Configuration file locations.

use std::path::PathBuf;

/// Project-level configuration file, looked up in the project directory.
pub const PROJECT_CONFIG_FILE: &str = ".boilerplate.toml";

/// `$XDG_CONFIG_HOME`, falling back to `~/.config`, then the platform config dir.
pub fn config_home() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    if let Some(home) = std::env::var_os("HOME").filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(home).join(".config"));
    }
    directories::BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path to the global config file: `<config_home>/boilerplate/config.toml`.
pub fn global_config_path() -> Option<PathBuf> {
    config_home().map(|dir| dir.join("boilerplate").join("config.toml"))
}
