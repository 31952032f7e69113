//! Domain entities for the console's UI settings.
//!
//! This module contains plain data with no infrastructure dependencies.  The
//! records mirror the `ui` configuration namespace one to one: every nested
//! group of keys (`ui.user-menu.*`, `ui.social-links.*`) is a nested struct.

/// The settings records and their defaults.
///
/// See [`settings::UiSettings`] for the root type.
pub mod settings;
