//! Startup assembly: layer the property sources and bind the store.
//!
//! Precedence, highest first:
//!
//! 1. `--set key=value` overrides
//! 2. `UI_*` environment variables
//! 3. the config file
//! 4. built-in defaults
//!
//! Startup is fail-fast: any source or binding error aborts it and nothing is
//! bound.

use std::path::PathBuf;

use kui_core::{PropertySources, SettingsStore};
use tracing::info;

use super::env_source::env_source;
use super::error::{SourceError, StartupError};
use super::file_source::load_file_source;
use super::override_source::override_source;

/// Where to look for configuration at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupOptions {
    /// Optional `.toml` or `.properties` file.
    pub config_file: Option<PathBuf>,
    /// Whether `UI_*` environment variables are consulted.
    pub read_env: bool,
    /// Raw `key=value` overrides in command-line order.
    pub overrides: Vec<String>,
}

/// Builds the layered property sources described by `options`.
///
/// `env_vars` is the environment to read when `options.read_env` is set; pass
/// [`process_env_vars()`](super::env_source::process_env_vars) in production.
///
/// # Errors
///
/// Returns the first [`SourceError`] raised while reading the file or parsing
/// the overrides.
pub fn assemble_sources<I>(
    options: &StartupOptions,
    env_vars: I,
) -> Result<PropertySources, SourceError>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut sources = PropertySources::new();

    if let Some(path) = &options.config_file {
        let file = load_file_source(path)?;
        info!("loaded {} properties from {}", file.len(), path.display());
        sources.add_last(file);
    }

    if options.read_env {
        let env = env_source(env_vars);
        if !env.is_empty() {
            info!("loaded {} properties from the environment", env.len());
        }
        sources.add_first(env);
    }

    if !options.overrides.is_empty() {
        sources.add_first(override_source(&options.overrides)?);
    }

    Ok(sources)
}

/// Assembles the sources and binds a [`SettingsStore`] from them.
///
/// # Errors
///
/// Returns [`StartupError::Source`] or [`StartupError::Configuration`].
pub fn load_settings<I>(options: &StartupOptions, env_vars: I) -> Result<SettingsStore, StartupError>
where
    I: IntoIterator<Item = (String, String)>,
{
    let sources = assemble_sources(options, env_vars)?;
    Ok(SettingsStore::load(&sources)?)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
