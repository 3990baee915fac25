//! boilerplate: npm package scaffolding
//!
//! Prompts for a few project settings, then creates or completes
//! `package.json`, LICENSE, README, CI configuration, entry-point stubs and
//! `.gitignore` in an existing directory, and installs development
//! dependencies through the package manager. Existing files are never
//! overwritten; manifests only gain missing keys.

pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod install;
pub mod logging;
pub mod manifest;
pub mod prompt;
pub mod scaffold;
pub mod settings;
pub mod template;
