//! Engine error handling
//!
//! Configuration and construction problems surface through a single error
//! enum. Per-tick sampling functions are total over their documented domains
//! and never return errors.

use thiserror::Error;

/// Result alias used throughout the engine
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors raised at configuration and construction time
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid configuration: {field}")]
    InvalidConfig { field: String },

    #[error("non-finite depth coefficient on layer {layer}")]
    NonFiniteDepth { layer: String },

    #[error("failed to read config file: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
