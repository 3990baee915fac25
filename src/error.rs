//! Error types for the project scaffolding tool.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by any scaffolding step. Every variant aborts the run.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to get user input: {0}")]
    PromptFailed(String),

    #[error("Invalid answer for '{question}': {answer:?} (expected y or n)")]
    InvalidAnswer { question: String, answer: String },

    #[error("Could not determine author: {0}. Set `git config user.name` or pass --author")]
    GitIdentity(String),

    #[error("Failed to parse manifest {path}: {reason}")]
    ManifestParse { path: PathBuf, reason: String },

    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to start {program}: {source}")]
    CommandSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} failed with {status}")]
    CommandFailed { program: String, status: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<config::ConfigError> for ScaffoldError {
    fn from(err: config::ConfigError) -> Self {
        ScaffoldError::ConfigError(err.to_string())
    }
}

impl From<dialoguer::Error> for ScaffoldError {
    fn from(err: dialoguer::Error) -> Self {
        ScaffoldError::PromptFailed(err.to_string())
    }
}
