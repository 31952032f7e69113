//! Property binding: from flat `key = value` sources to a typed [`UiSettings`].
//!
//! [`UiSettings`]: crate::domain::settings::UiSettings

pub mod binder;
pub mod property;

pub use binder::{bind_ui_settings, is_ui_setting, ConfigurationError, UI_PREFIX};
pub use property::{
    NameElement, PropertyName, PropertyNameError, PropertySource, PropertySources, PropertyValue,
};
