//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::DappQLError;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &DappQLError) -> String {
    match e {
        DappQLError::ConfigError(msg) => format!("Configuration error:\n{}", msg),
        other => other.to_string(),
    }
}
