//! Error types for source loading and startup.

use std::path::PathBuf;

use kui_core::ConfigurationError;
use thiserror::Error;

/// Failure to turn an external input into a property source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The config file could not be read.
    #[error("I/O error reading config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file extension is not `.toml` or `.properties`.
    #[error("unsupported config file format: {0} (expected .toml or .properties)")]
    UnsupportedFormat(PathBuf),

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// A `.properties` line has no `=` or `:` separator, or an empty key.
    #[error("malformed line {line} in {origin}: expected 'key=value'")]
    MalformedLine { origin: String, line: usize },

    /// A `--set` argument is not of the form `key=value`.
    #[error("malformed override '{0}': expected 'key=value'")]
    MalformedOverride(String),
}

/// Anything that can stop the settings from being resolved at startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}
