//! Infrastructure layer for kui-settings.
//!
//! Handles all I/O needed to resolve the settings at startup.
//!
//! # Responsibilities
//!
//! - Reading and flattening the config file (`file_source`)
//! - Collecting `UI_*` environment variables (`env_source`)
//! - Parsing `--set key=value` overrides (`override_source`)
//! - Layering those sources by precedence and binding the store (`startup`)

pub mod env_source;
pub mod error;
pub mod file_source;
pub mod override_source;
pub mod startup;

pub use error::{SourceError, StartupError};
pub use startup::{assemble_sources, load_settings, StartupOptions};
