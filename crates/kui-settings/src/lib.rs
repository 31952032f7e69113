//! kui-settings library crate.
//!
//! Resolves the console's UI settings at process startup: it gathers property
//! sources from a config file, the process environment and command-line
//! overrides, binds them with `kui-core`, and renders the result in the shape
//! the front-end consumes.
//!
//! # Architecture
//!
//! ```text
//! config file (.toml / .properties)   UI_* env vars   --set key=value
//!            ↓                              ↓               ↓
//! [kui-settings]
//!   ├── infrastructure/   Turn each input into a PropertySource, layer them
//!   │                     by precedence, bind a SettingsStore
//!   └── application/      Render bound settings (JSON document, properties)
//!            ↓
//! [kui-core]  UiSettings, PropertySources, binder, SettingsStore
//! ```
//!
//! # Layer rules
//!
//! - `application` depends on `kui-core` only and performs no I/O.
//! - `infrastructure` reads files and the environment and depends on
//!   everything else.

/// Application layer: rendering of bound settings.
pub mod application;

/// Infrastructure layer: property source adapters and startup assembly.
pub mod infrastructure;
