//! UI settings records.
//!
//! [`UiSettings`] is the branding and navigation configuration of the
//! console's front-end shell: the page title, the user menu (account and
//! logout links), the social links shown in the navigation bar, and any extra
//! menu entries an operator wants to add.
//!
//! Every field has a default, so `UiSettings::default()` is a complete, valid
//! value even when no configuration at all was supplied.
//!
//! # Serialized form
//!
//! The front-end reads these settings from the application-info document
//! under a `ui` member, using camelCase names:
//!
//! ```json
//! {
//!   "title": "Kafka Console",
//!   "userMenu": { "enabled": false },
//!   "socialLinks": { "enabled": true, "githubUrl": "https://github.com/kafbat/kafka-ui", ... },
//!   "customMenuItems": []
//! }
//! ```
//!
//! Unset optional fields are omitted rather than written as `null`.

use serde::Serialize;

/// Default page title shown in the browser tab and the navigation bar.
pub const DEFAULT_TITLE: &str = "Kafka Console";
/// Default GitHub link shown in the navigation bar.
pub const DEFAULT_GITHUB_URL: &str = "https://github.com/kafbat/kafka-ui";
/// Default Discord invite shown in the navigation bar.
pub const DEFAULT_DISCORD_URL: &str = "https://discord.com/invite/4DWzD7pGE5";
/// Default Product Hunt link shown in the navigation bar.
pub const DEFAULT_PRODUCT_HUNT_URL: &str = "https://producthunt.com/products/ui-for-apache-kafka";

// ── Settings schema types ─────────────────────────────────────────────────────

/// Root of the `ui` configuration namespace.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UiSettings {
    /// Title of the console (`ui.title`).
    pub title: String,
    /// Account/logout links (`ui.user-menu.*`).
    pub user_menu: UserMenu,
    /// External community links (`ui.social-links.*`).
    pub social_links: SocialLinks,
    /// Operator-defined navigation entries (`ui.custom-menu-items[i].*`), in
    /// declaration order.
    pub custom_menu_items: Vec<CustomMenuItem>,
}

/// The user menu in the top-right corner of the shell.
///
/// Disabled with no links by default.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserMenu {
    /// Gates display of the account and logout links.
    pub enabled: bool,
    /// Where "Account" points.  Only meaningful when `enabled` is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_url: Option<String>,
    /// Where "Log out" points.  Only meaningful when `enabled` is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logout_url: Option<String>,
}

/// Social links rendered as icons in the navigation bar.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    /// Gates display of all three links.
    pub enabled: bool,
    pub github_url: String,
    pub discord_url: String,
    pub product_hunt_url: String,
}

/// One operator-defined navigation entry.
///
/// All three fields are optional: an entry may be declared with only some of
/// them, and the rendering layer decides what to do with an incomplete one.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomMenuItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Icon name understood by the front-end.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}
fn default_github_url() -> String {
    DEFAULT_GITHUB_URL.to_string()
}
fn default_discord_url() -> String {
    DEFAULT_DISCORD_URL.to_string()
}
fn default_product_hunt_url() -> String {
    DEFAULT_PRODUCT_HUNT_URL.to_string()
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            user_menu: UserMenu::default(),
            social_links: SocialLinks::default(),
            custom_menu_items: Vec::new(),
        }
    }
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self {
            enabled: true,
            github_url: default_github_url(),
            discord_url: default_discord_url(),
            product_hunt_url: default_product_hunt_url(),
        }
    }
}

impl UserMenu {
    /// Returns the canonical names of the link keys that are required by an
    /// enabled menu but have not been set.
    ///
    /// A disabled menu never reports missing links.
    pub fn missing_links(&self) -> Vec<&'static str> {
        if !self.enabled {
            return Vec::new();
        }
        let mut missing = Vec::new();
        if self.account_url.is_none() {
            missing.push("ui.user-menu.account-url");
        }
        if self.logout_url.is_none() {
            missing.push("ui.user-menu.logout-url");
        }
        missing
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
