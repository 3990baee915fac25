//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ScaffoldError;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ScaffoldError) -> String {
    format!("Error: {}", e)
}
