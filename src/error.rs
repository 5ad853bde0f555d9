//! Error types for the DappQL query layer.
//!
//! Resolution and delegation never fail; these errors cover parsing of primitive
//! values, configuration loading, and logging setup. Failures produced by a cache
//! engine travel inside `QueryState` as an [`EngineError`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by the ambient parts of the crate (parsing, config, logging).
#[derive(Debug, Error)]
pub enum DappQLError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid network id: {0}")]
    InvalidNetwork(String),

    #[error("Invalid refresh policy: {0}")]
    InvalidRefresh(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<config::ConfigError> for DappQLError {
    fn from(err: config::ConfigError) -> Self {
        DappQLError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for DappQLError {
    fn from(err: serde_json::Error) -> Self {
        DappQLError::SerializationError(err.to_string())
    }
}

impl From<toml::ser::Error> for DappQLError {
    fn from(err: toml::ser::Error) -> Self {
        DappQLError::SerializationError(err.to_string())
    }
}

/// Failure reported by a cache engine for one query.
///
/// The facade never constructs, wraps, or inspects these; it only hands them back.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct EngineError {
    /// Provider or RPC error code, when the engine has one.
    pub code: Option<i64>,
    pub message: String,
}

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: i64, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: message.into(),
        }
    }
}
