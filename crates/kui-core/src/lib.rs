//! # kui-core
//!
//! Shared library for the Kafka console containing the UI settings model, the
//! property model used to describe externally supplied configuration, and the
//! binder that overlays that configuration onto the documented defaults.
//!
//! This crate performs no I/O.  Reading files or the process environment is the
//! job of the outer application (see the `kui-settings` crate); this crate only
//! sees an in-memory list of `key = value` pairs.
//!
//! # Architecture overview
//!
//! - **`domain`** – The settings records themselves (`UiSettings`, `UserMenu`,
//!   `SocialLinks`, `CustomMenuItem`) with their defaults.  Everything here is
//!   plain data.
//!
//! - **`binding`** – Property names (`ui.user-menu.enabled`,
//!   `ui.custom-menu-items[0].label`), property values, ordered property
//!   sources, and the binder that turns them into a `UiSettings` or a
//!   `ConfigurationError`.
//!
//! - **`store`** – The `SettingsStore`: bound once at startup and read from
//!   anywhere afterwards.

pub mod binding;
pub mod domain;
pub mod store;

// Re-export the most-used types at the crate root so callers can write
// `kui_core::UiSettings` instead of `kui_core::domain::settings::UiSettings`.
pub use binding::binder::{bind_ui_settings, is_ui_setting, ConfigurationError, UI_PREFIX};
pub use binding::property::{PropertyName, PropertySource, PropertySources, PropertyValue};
pub use domain::settings::{CustomMenuItem, SocialLinks, UiSettings, UserMenu};
pub use store::SettingsStore;
