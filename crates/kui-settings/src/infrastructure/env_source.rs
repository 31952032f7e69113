//! Environment variable source.
//!
//! Any variable whose name starts with `UI_` is turned into a property key:
//! the name is lower-cased, each `_` becomes `.`, and purely numeric segments
//! become list indices.
//!
//! | Variable                       | Property key                      |
//! |--------------------------------|-----------------------------------|
//! | `UI_TITLE`                     | `ui.title`                        |
//! | `UI_USERMENU_ENABLED`          | `ui.usermenu.enabled`             |
//! | `UI_SOCIALLINKS_GITHUBURL`     | `ui.sociallinks.githuburl`        |
//! | `UI_CUSTOMMENUITEMS_0_LABEL`   | `ui.custommenuitems[0].label`     |
//!
//! Because property names are matched in relaxed form, these keys bind to the
//! same fields as their kebab-case spellings.  Note that `UI_USER_MENU_ENABLED`
//! does *not* work: it maps to `ui.user.menu.enabled`.  A `UI_*` variable that
//! does not address a known setting is logged at `warn` and otherwise ignored.

use std::ffi::OsString;

use kui_core::{is_ui_setting, PropertySource};
use tracing::{debug, warn};

/// Prefix a variable name must carry to be considered.
pub const ENV_PREFIX: &str = "UI_";

/// Name given to the environment source in error messages.
pub const ENV_SOURCE_NAME: &str = "environment";

/// Maps an environment variable name to a property key, or `None` if the
/// variable is not a `UI_*` variable or has an empty segment (`UI__X`).
pub fn env_key(var: &str) -> Option<String> {
    if !var.starts_with(ENV_PREFIX) {
        return None;
    }

    let mut key = String::new();
    for segment in var.split('_') {
        if segment.is_empty() {
            return None;
        }
        if !key.is_empty() && segment.chars().all(|c| c.is_ascii_digit()) {
            key.push('[');
            key.push_str(segment);
            key.push(']');
        } else {
            if !key.is_empty() {
                key.push('.');
            }
            key.push_str(&segment.to_ascii_lowercase());
        }
    }
    Some(key)
}

/// Builds the environment source from `(name, value)` pairs.
///
/// Variables are sorted by name first so that the source, and the log lines
/// it produces, do not depend on the platform's environment ordering.
pub fn env_source<I>(vars: I) -> PropertySource
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut vars: Vec<(String, String)> = vars
        .into_iter()
        .filter(|(name, _)| name.starts_with(ENV_PREFIX))
        .collect();
    vars.sort();

    let mut source = PropertySource::new(ENV_SOURCE_NAME);
    for (name, value) in vars {
        match env_key(&name) {
            Some(key) => {
                if is_ui_setting(&key) {
                    debug!("environment variable {name} maps to '{key}'");
                } else {
                    warn!(
                        "environment variable {name} maps to '{key}', which is not a known ui \
                         setting; use underscores only between elements, e.g. UI_USERMENU_ENABLED"
                    );
                }
                source.insert(key, value);
            }
            None => warn!("ignoring environment variable {name}: empty name segment"),
        }
    }
    source
}

/// Reads the process environment.  Variables whose name or value is not valid
/// UTF-8 are skipped.
pub fn process_env_vars() -> Vec<(String, String)> {
    std::env::vars_os()
        .filter_map(|(name, value): (OsString, OsString)| {
            Some((name.into_string().ok()?, value.into_string().ok()?))
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
