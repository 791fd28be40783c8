//! Runtime error types.

use std::path::PathBuf;

use linkcfg_core::ConfigError;
use thiserror::Error;

/// Errors that can occur while loading and preparing the configuration.
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Registry, schema or validation failure from the core engine.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A configuration file was named but does not exist.
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// The file extension has no enabled format provider.
    #[error("Unsupported or disabled configuration file format: .{0}")]
    UnsupportedFormat(String),

    /// Failed to resolve the configuration directory.
    #[error("Failed to resolve configuration directory: {0}")]
    Io(#[from] std::io::Error),

    /// A source layer could not be read or parsed.
    #[error("Failed to load configuration: {0}")]
    Source(#[from] figment::Error),
}

/// Result type for runtime operations.
pub type RuntimeResult<T> = Result<T, RuntimeError>;
