//! Unified error type for all logmate operations.

use crate::level::ParseLevelError;
use crate::registry::{BoxError, ProviderKind};
use std::path::PathBuf;

/// Error type for logmate operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A Mate was asked for a logical name it has no configuration for.
    #[error("logger not found: {0}")]
    LoggerNotFound(String),
    /// No factory is registered under the requested provider name.
    #[error("unknown {kind} provider: {name}")]
    UnknownProvider { kind: ProviderKind, name: String },
    /// A registered factory refused to build its component.
    #[error("{kind} provider '{name}' failed: {source}")]
    Provider {
        kind: ProviderKind,
        name: String,
        #[source]
        source: BoxError,
    },
    /// The configured level string is not a known severity.
    #[error("invalid level: {0}")]
    InvalidLevel(#[from] ParseLevelError),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML config parsing error.
    #[error("parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
    /// Cyclic include detected in config sources.
    #[error("cyclic include: {}", .0.display())]
    CyclicInclude(PathBuf),
    /// Format/serialization error.
    #[error("format error: {0}")]
    Format(String),
}

impl Error {
    /// True for the two provider-resolution variants.
    #[must_use]
    pub const fn is_provider_error(&self) -> bool {
        matches!(self, Self::UnknownProvider { .. } | Self::Provider { .. })
    }
}
