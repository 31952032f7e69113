//! The binder: overlays recognised `ui.*` properties onto the defaults.
//!
//! Binding happens in two passes:
//!
//! 1. **Resolve.**  Sources are walked lowest precedence first, so for every
//!    scalar key the value left standing is the one from the highest-precedence
//!    source.  Custom menu items are a list and are never merged across
//!    sources: the highest-precedence source that declares any item supplies
//!    the whole list.
//! 2. **Coerce.**  Each winning value is converted to its field's type and
//!    written into a fresh `UiSettings::default()`.
//!
//! Only the values that survive resolution are coerced, so a malformed value
//! in the config file that is overridden from the environment is never an
//! error.  Binding is all-or-nothing: on error no settings value is returned.
//!
//! # Recognised keys
//!
//! | Key                                  | Type            |
//! |--------------------------------------|-----------------|
//! | `ui.title`                           | string          |
//! | `ui.user-menu.enabled`               | boolean         |
//! | `ui.user-menu.account-url`           | optional string |
//! | `ui.user-menu.logout-url`            | optional string |
//! | `ui.social-links.enabled`            | boolean         |
//! | `ui.social-links.github-url`         | string          |
//! | `ui.social-links.discord-url`        | string          |
//! | `ui.social-links.product-hunt-url`   | string          |
//! | `ui.custom-menu-items[i].label`      | optional string |
//! | `ui.custom-menu-items[i].url`        | optional string |
//! | `ui.custom-menu-items[i].icon`       | optional string |
//!
//! Keys are matched in relaxed form (see [`PropertyName`]).  Anything else
//! under `ui.` is ignored, as is everything outside it, including keys that
//! do not parse as property names (`ui.theme[dark].accent`).  Only a value that
//! cannot be coerced to its field's type fails the bind.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::{debug, warn};

use crate::binding::property::{NameElement, PropertyName, PropertySources, PropertyValue};
use crate::domain::settings::{CustomMenuItem, UiSettings};

/// The configuration namespace this binder reads.
pub const UI_PREFIX: &str = "ui";

const MENU_ITEMS_ELEMENT: &str = "custommenuitems";

/// Scalar fields of [`UiSettings`], by canonical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScalarField {
    Title,
    UserMenuEnabled,
    UserMenuAccountUrl,
    UserMenuLogoutUrl,
    SocialLinksEnabled,
    GithubUrl,
    DiscordUrl,
    ProductHuntUrl,
}

impl ScalarField {
    fn from_canonical(canonical: &str) -> Option<Self> {
        let field = match canonical {
            "ui.title" => ScalarField::Title,
            "ui.usermenu.enabled" => ScalarField::UserMenuEnabled,
            "ui.usermenu.accounturl" => ScalarField::UserMenuAccountUrl,
            "ui.usermenu.logouturl" => ScalarField::UserMenuLogoutUrl,
            "ui.sociallinks.enabled" => ScalarField::SocialLinksEnabled,
            "ui.sociallinks.githuburl" => ScalarField::GithubUrl,
            "ui.sociallinks.discordurl" => ScalarField::DiscordUrl,
            "ui.sociallinks.producthunturl" => ScalarField::ProductHuntUrl,
            _ => return None,
        };
        Some(field)
    }
}

/// Fields of one `ui.custom-menu-items[i]` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItemField {
    Label,
    Url,
    Icon,
}

impl MenuItemField {
    fn from_canonical(element: &str) -> Option<Self> {
        match element {
            "label" => Some(MenuItemField::Label),
            "url" => Some(MenuItemField::Url),
            "icon" => Some(MenuItemField::Icon),
            _ => None,
        }
    }
}

/// Error raised when external configuration cannot be bound.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// A value could not be coerced to the type of its field.
    #[error("failed to bind property '{key}' from {origin}: expected {expected}, got {found} '{value}'")]
    TypeMismatch {
        key: String,
        origin: String,
        expected: &'static str,
        found: &'static str,
        value: String,
    },
}

impl ConfigurationError {
    /// The offending key as it was written in its source.
    pub fn key(&self) -> &str {
        match self {
            ConfigurationError::TypeMismatch { key, .. } => key,
        }
    }
}

impl UiSettings {
    /// Binds settings from `sources`.  Equivalent to [`bind_ui_settings`].
    ///
    /// # Errors
    ///
    /// See [`bind_ui_settings`].
    pub fn bind(sources: &PropertySources) -> Result<Self, ConfigurationError> {
        bind_ui_settings(sources)
    }
}

/// A winning value together with the name and source it came from.
struct Resolved<'a> {
    name: PropertyName,
    value: &'a PropertyValue,
    origin: &'a str,
}

impl Resolved<'_> {
    fn boolean(&self) -> Result<bool, ConfigurationError> {
        self.value
            .to_bool()
            .ok_or_else(|| ConfigurationError::TypeMismatch {
                key: self.name.as_str().to_string(),
                origin: self.origin.to_string(),
                expected: "boolean",
                found: self.value.type_name(),
                value: self.value.to_text(),
            })
    }

    fn text(&self) -> String {
        self.value.to_text()
    }

    /// Empty text means "unset".
    fn optional_text(&self) -> Option<String> {
        match self.value {
            PropertyValue::Text(s) if s.is_empty() => None,
            other => Some(other.to_text()),
        }
    }
}

/// Binds a [`UiSettings`] from `sources`, starting from the defaults.
///
/// # Errors
///
/// Returns [`ConfigurationError::TypeMismatch`] when a winning value cannot be
/// coerced to its field's type (only the two `enabled` flags can fail).
///
/// # Examples
///
/// ```rust
/// use kui_core::{bind_ui_settings, PropertySource, PropertySources};
///
/// let sources = PropertySources::from(
///     PropertySource::new("inline").with("ui.user-menu.enabled", true),
/// );
/// let settings = bind_ui_settings(&sources).unwrap();
/// assert!(settings.user_menu.enabled);
/// assert!(settings.social_links.enabled);
/// ```
pub fn bind_ui_settings(sources: &PropertySources) -> Result<UiSettings, ConfigurationError> {
    let mut scalars: BTreeMap<String, Resolved<'_>> = BTreeMap::new();
    let mut menu_items: Option<Vec<(usize, MenuItemField, Resolved<'_>)>> = None;

    for source in sources.iter().rev() {
        let mut source_items = Vec::new();

        for (key, value) in source.entries() {
            let Some(name) = parse_ui_name(key, source.name()) else {
                continue;
            };
            let resolved = Resolved {
                name,
                value,
                origin: source.name(),
            };

            if is_menu_items_key(&resolved.name) {
                match menu_item_field(&resolved.name) {
                    Some((index, field)) => source_items.push((index, field, resolved)),
                    None => debug!(
                        "ignoring unrecognised menu item property '{}' from {}",
                        resolved.name,
                        source.name()
                    ),
                }
            } else {
                scalars.insert(resolved.name.canonical(), resolved);
            }
        }

        if !source_items.is_empty() {
            menu_items = Some(source_items);
        }
    }

    let mut settings = UiSettings::default();
    for (canonical, resolved) in &scalars {
        apply_scalar(&mut settings, canonical, resolved)?;
    }
    if let Some(items) = menu_items {
        settings.custom_menu_items = collect_menu_items(items);
    }

    for key in settings.user_menu.missing_links() {
        warn!("user menu is enabled but '{key}' is not set");
    }

    Ok(settings)
}

/// Parses `key` and keeps it only when it lies under `ui.`.
fn parse_ui_name(key: &str, origin: &str) -> Option<PropertyName> {
    match PropertyName::parse(key) {
        Ok(name) if name.is_under(UI_PREFIX) => Some(name),
        Ok(_) => None,
        Err(e) => {
            if PropertyName::leading_element(key) == UI_PREFIX {
                debug!("ignoring unparseable property '{}' from {origin}: {e}", key.trim());
            }
            None
        }
    }
}

/// Returns `true` when `key` names a setting the binder reads, in any
/// relaxed spelling.
///
/// ```rust
/// use kui_core::is_ui_setting;
///
/// assert!(is_ui_setting("ui.userMenu.enabled"));
/// assert!(is_ui_setting("ui.custom-menu-items[3].icon"));
/// assert!(!is_ui_setting("ui.user.menu.enabled"));
/// ```
pub fn is_ui_setting(key: &str) -> bool {
    match PropertyName::parse(key) {
        Ok(name) if name.is_under(UI_PREFIX) => {
            if is_menu_items_key(&name) {
                menu_item_field(&name).is_some()
            } else {
                ScalarField::from_canonical(&name.canonical()).is_some()
            }
        }
        _ => false,
    }
}

fn is_menu_items_key(name: &PropertyName) -> bool {
    matches!(name.elements().get(1), Some(NameElement::Name(n)) if n == MENU_ITEMS_ELEMENT)
}

/// Extracts `(index, field)` from `ui.custom-menu-items[index].field`; `None`
/// for any other shape or an unknown field.
fn menu_item_field(name: &PropertyName) -> Option<(usize, MenuItemField)> {
    match name.elements() {
        [_, _, NameElement::Index(index), NameElement::Name(field)] => {
            MenuItemField::from_canonical(field).map(|field| (*index, field))
        }
        _ => None,
    }
}

fn apply_scalar(
    settings: &mut UiSettings,
    canonical: &str,
    resolved: &Resolved<'_>,
) -> Result<(), ConfigurationError> {
    let Some(field) = ScalarField::from_canonical(canonical) else {
        debug!(
            "ignoring unrecognised property '{}' from {}",
            resolved.name, resolved.origin
        );
        return Ok(());
    };
    match field {
        ScalarField::Title => settings.title = resolved.text(),
        ScalarField::UserMenuEnabled => settings.user_menu.enabled = resolved.boolean()?,
        ScalarField::UserMenuAccountUrl => settings.user_menu.account_url = resolved.optional_text(),
        ScalarField::UserMenuLogoutUrl => settings.user_menu.logout_url = resolved.optional_text(),
        ScalarField::SocialLinksEnabled => settings.social_links.enabled = resolved.boolean()?,
        ScalarField::GithubUrl => settings.social_links.github_url = resolved.text(),
        ScalarField::DiscordUrl => settings.social_links.discord_url = resolved.text(),
        ScalarField::ProductHuntUrl => settings.social_links.product_hunt_url = resolved.text(),
    }
    debug!("bound '{}' from {}", resolved.name, resolved.origin);
    Ok(())
}

/// Groups item fields by index and returns the items in index order.
fn collect_menu_items(entries: Vec<(usize, MenuItemField, Resolved<'_>)>) -> Vec<CustomMenuItem> {
    let mut by_index: BTreeMap<usize, CustomMenuItem> = BTreeMap::new();

    for (index, field, resolved) in entries {
        let item = by_index.entry(index).or_default();
        let value = resolved.optional_text();
        match field {
            MenuItemField::Label => item.label = value,
            MenuItemField::Url => item.url = value,
            MenuItemField::Icon => item.icon = value,
        }
    }

    let contiguous = by_index.keys().copied().eq(0..by_index.len());
    if !contiguous {
        let indices: Vec<usize> = by_index.keys().copied().collect();
        warn!("custom menu item indices {indices:?} are not contiguous; items were compacted");
    }

    by_index.into_values().collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
