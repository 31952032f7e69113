//! Rendering of bound settings.
//!
//! Two output shapes are supported:
//!
//! - **JSON** – the application-info document read by the front-end:
//!   `{"ui": {"title": ..., "userMenu": {...}, "socialLinks": {...}, "customMenuItems": [...]}}`.
//! - **Properties** – one canonical `ui.*` key per line, values escaped in
//!   `.properties` style.  Settings produced by binding reload from this output
//!   to an equal value.  An optional field set to the empty string would reload
//!   as unset, but binding never produces one.

use serde::Serialize;

use kui_core::UiSettings;

/// Output shape selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Properties,
}

/// The document the front-end fetches; settings live under `ui`.
#[derive(Serialize)]
struct AppInfoDocument<'a> {
    ui: &'a UiSettings,
}

/// Renders `settings` in the requested `format`.
///
/// # Errors
///
/// Returns a `serde_json` error if JSON serialization fails.
pub fn render(settings: &UiSettings, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => render_json(settings),
        OutputFormat::Properties => Ok(render_properties(settings)),
    }
}

/// Pretty-printed application-info JSON.
///
/// # Errors
///
/// Returns a `serde_json` error if serialization fails.
pub fn render_json(settings: &UiSettings) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&AppInfoDocument { ui: settings })
}

/// Flat `key=value` lines using the kebab-case key names.  Unset optional
/// fields are left out; a menu item with no field set is written as an empty
/// label so it keeps its place in the list.
pub fn render_properties(settings: &UiSettings) -> String {
    let mut lines = vec![
        format!("ui.title={}", escape_value(&settings.title)),
        format!("ui.user-menu.enabled={}", settings.user_menu.enabled),
    ];
    if let Some(url) = &settings.user_menu.account_url {
        lines.push(format!("ui.user-menu.account-url={}", escape_value(url)));
    }
    if let Some(url) = &settings.user_menu.logout_url {
        lines.push(format!("ui.user-menu.logout-url={}", escape_value(url)));
    }

    let links = &settings.social_links;
    lines.push(format!("ui.social-links.enabled={}", links.enabled));
    lines.push(format!("ui.social-links.github-url={}", escape_value(&links.github_url)));
    lines.push(format!("ui.social-links.discord-url={}", escape_value(&links.discord_url)));
    lines.push(format!(
        "ui.social-links.product-hunt-url={}",
        escape_value(&links.product_hunt_url)
    ));

    for (i, item) in settings.custom_menu_items.iter().enumerate() {
        let fields = [("label", &item.label), ("url", &item.url), ("icon", &item.icon)];
        if fields.iter().all(|(_, value)| value.is_none()) {
            lines.push(format!("ui.custom-menu-items[{i}].label="));
            continue;
        }
        for (field, value) in fields {
            if let Some(value) = value {
                lines.push(format!("ui.custom-menu-items[{i}].{field}={}", escape_value(value)));
            }
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Escapes a value so the properties reader returns it unchanged: backslashes,
/// line breaks, tabs, other control characters and leading whitespace.
fn escape_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for (i, c) in value.chars().enumerate() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{000C}' => out.push_str("\\f"),
            ' ' if i == 0 => out.push_str("\\ "),
            c if c.is_control() || (i == 0 && c.is_whitespace()) => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units).iter() {
                    out.push_str(&format!("\\u{unit:04X}"));
                }
            }
            c => out.push(c),
        }
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
