//! The settings store: bound once at startup, read from anywhere afterwards.
//!
//! A [`SettingsStore`] is either *unbound* (created with `default()`, serving
//! the documented defaults) or *bound* (created by [`SettingsStore::load`]).
//! There is no way to rebind an existing store; build a new one instead.
//!
//! The bound value is immutable and held behind an `Arc`, so the store can be
//! cloned into every request handler and read concurrently without a lock.

use std::sync::Arc;

use tracing::info;

use crate::binding::binder::{bind_ui_settings, ConfigurationError};
use crate::binding::property::PropertySources;
use crate::domain::settings::UiSettings;

/// Read-only holder of the console's [`UiSettings`].
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    settings: Arc<UiSettings>,
    bound: bool,
}

impl SettingsStore {
    /// Binds the settings from `sources` and returns a bound store.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigurationError`] raised by the binder.  No store (and
    /// therefore no partially bound value) is produced in that case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kui_core::{PropertySource, PropertySources, SettingsStore};
    ///
    /// let sources = PropertySources::from(PropertySource::new("inline").with("ui.title", "Ops"));
    /// let store = SettingsStore::load(&sources).unwrap();
    /// assert!(store.is_bound());
    /// assert_eq!(store.get().title, "Ops");
    /// ```
    pub fn load(sources: &PropertySources) -> Result<Self, ConfigurationError> {
        let settings = bind_ui_settings(sources)?;
        info!(
            "ui settings bound from {} source(s): title='{}', {} custom menu item(s)",
            sources.len(),
            settings.title,
            settings.custom_menu_items.len()
        );
        Ok(Self::from_settings(settings))
    }

    /// Wraps an already-built value in a bound store.
    pub fn from_settings(settings: UiSettings) -> Self {
        Self {
            settings: Arc::new(settings),
            bound: true,
        }
    }

    /// Returns a shared handle to the current settings.  Never fails.
    pub fn get(&self) -> Arc<UiSettings> {
        Arc::clone(&self.settings)
    }

    /// Borrows the current settings.
    pub fn settings(&self) -> &UiSettings {
        &self.settings
    }

    /// `true` once the store has been populated by [`load`](Self::load) or
    /// [`from_settings`](Self::from_settings).
    pub fn is_bound(&self) -> bool {
        self.bound
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
