//! Integration tests for resolving UI settings from real files.
//!
//! Each test writes its config into a fresh directory under the system temp
//! dir, runs the same startup path the binary uses, and checks the bound
//! settings.

use std::path::{Path, PathBuf};

use kui_core::{CustomMenuItem, UiSettings};
use kui_settings::application::{render_json, render_properties};
use kui_settings::infrastructure::{load_settings, SourceError, StartupError, StartupOptions};
use uuid::Uuid;

/// Temp directory removed on drop.
struct TempDir(PathBuf);

impl TempDir {
    fn new() -> Self {
        let dir = std::env::temp_dir().join(format!("kui_test_{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        Self(dir)
    }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.0.join(name);
        std::fs::write(&path, content).expect("write config");
        path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        std::fs::remove_dir_all(&self.0).ok();
    }
}

fn file_only(path: &Path) -> StartupOptions {
    StartupOptions {
        config_file: Some(path.to_path_buf()),
        read_env: false,
        overrides: Vec::new(),
    }
}

const TOML_CONFIG: &str = r#"
[ui]
title = "Acme Kafka"

[ui.user-menu]
enabled = true
account-url = "https://sso.acme/account"
logout-url = "https://sso.acme/logout"

[ui.social-links]
enabled = false

[[ui.custom-menu-items]]
label = "Grafana"
url = "https://grafana.acme"
icon = "chart"

[[ui.custom-menu-items]]
label = "Runbook"
url = "https://wiki.acme/kafka"
"#;

const PROPERTIES_CONFIG: &str = "\
# Same settings as TOML_CONFIG
ui.title=Acme Kafka
ui.user-menu.enabled=true
ui.user-menu.account-url=https://sso.acme/account
ui.user-menu.logout-url=https://sso.acme/logout
ui.social-links.enabled=false
ui.custom-menu-items[0].label=Grafana
ui.custom-menu-items[0].url=https://grafana.acme
ui.custom-menu-items[0].icon=chart
ui.custom-menu-items[1].label=Runbook
ui.custom-menu-items[1].url=https://wiki.acme/kafka
";

fn expected_acme() -> UiSettings {
    let mut settings = UiSettings::default();
    settings.title = "Acme Kafka".to_string();
    settings.user_menu.enabled = true;
    settings.user_menu.account_url = Some("https://sso.acme/account".to_string());
    settings.user_menu.logout_url = Some("https://sso.acme/logout".to_string());
    settings.social_links.enabled = false;
    settings.custom_menu_items = vec![
        CustomMenuItem {
            label: Some("Grafana".to_string()),
            url: Some("https://grafana.acme".to_string()),
            icon: Some("chart".to_string()),
        },
        CustomMenuItem {
            label: Some("Runbook".to_string()),
            url: Some("https://wiki.acme/kafka".to_string()),
            icon: None,
        },
    ];
    settings
}

#[test]
fn test_toml_file_binds_all_fields() {
    // Arrange
    let dir = TempDir::new();
    let path = dir.write("ui.toml", TOML_CONFIG);

    // Act
    let store = load_settings(&file_only(&path), Vec::new()).expect("bind");

    // Assert
    assert_eq!(*store.settings(), expected_acme());
}

#[test]
fn test_properties_file_binds_same_as_toml() {
    let dir = TempDir::new();
    let path = dir.write("application.properties", PROPERTIES_CONFIG);

    let store = load_settings(&file_only(&path), Vec::new()).expect("bind");

    assert_eq!(*store.settings(), expected_acme());
}

#[test]
fn test_rendered_properties_reload_to_equal_settings() {
    // Arrange: bind from TOML, render as properties, write that back out
    let dir = TempDir::new();
    let toml_path = dir.write("ui.toml", TOML_CONFIG);
    let first = load_settings(&file_only(&toml_path), Vec::new()).expect("bind toml");
    let props_path = dir.write("dump.properties", &render_properties(first.settings()));

    // Act
    let second = load_settings(&file_only(&props_path), Vec::new()).expect("bind properties");

    // Assert
    assert_eq!(*first.settings(), *second.settings());
}

#[test]
fn test_rendered_properties_reload_awkward_values() {
    // Arrange
    let mut settings = UiSettings::default();
    settings.title = "  Acme\nKafka\t\\ ops = prod: # ".to_string();
    settings.user_menu.account_url = Some("https://sso/\u{e9}t\u{e9}?a=b\\".to_string());
    settings.custom_menu_items = vec![
        CustomMenuItem::default(),
        CustomMenuItem {
            label: Some("\u{3000}B".to_string()),
            url: None,
            icon: Some("!star".to_string()),
        },
    ];
    let dir = TempDir::new();
    let path = dir.write("dump.properties", &render_properties(&settings));

    // Act
    let reloaded = load_settings(&file_only(&path), Vec::new()).expect("bind properties");

    // Assert
    assert_eq!(*reloaded.settings(), settings);
}

#[test]
fn test_properties_continuations_and_escapes_bind() {
    let dir = TempDir::new();
    let path = dir.write(
        "application.properties",
        "ui.title = Acme \\\n    Kafka\nui.custom-menu-items[0].url = https\\://grafana.acme/d?x\\=1\n",
    );

    let store = load_settings(&file_only(&path), Vec::new()).expect("bind");

    assert_eq!(store.settings().title, "Acme Kafka");
    assert_eq!(
        store.settings().custom_menu_items[0].url.as_deref(),
        Some("https://grafana.acme/d?x=1")
    );
}

#[test]
fn test_unparseable_ui_variable_does_not_fail_startup() {
    let options = StartupOptions {
        read_env: true,
        ..StartupOptions::default()
    };
    let env = vec![
        ("UI_CUSTOMMENUITEMS_99999999999999999999999_LABEL".to_string(), "x".to_string()),
        ("UI_TITLE".to_string(), "Ops".to_string()),
    ];

    let store = load_settings(&options, env).expect("bind");

    assert_eq!(store.settings().title, "Ops");
    assert!(store.settings().custom_menu_items.is_empty());
}

#[test]
fn test_environment_and_overrides_layer_over_file() {
    // Arrange
    let dir = TempDir::new();
    let path = dir.write("ui.toml", TOML_CONFIG);
    let options = StartupOptions {
        config_file: Some(path),
        read_env: true,
        overrides: vec!["ui.title=Staging Kafka".to_string()],
    };
    let env = vec![
        ("UI_TITLE".to_string(), "Env Kafka".to_string()),
        ("UI_SOCIALLINKS_ENABLED".to_string(), "true".to_string()),
        ("UI_CUSTOMMENUITEMS_0_LABEL".to_string(), "Env item".to_string()),
    ];

    // Act
    let store = load_settings(&options, env).expect("bind");
    let settings = store.settings();

    // Assert
    assert_eq!(settings.title, "Staging Kafka");
    assert!(settings.social_links.enabled);
    // The environment declared a menu list, so it replaces the file's list.
    assert_eq!(
        settings.custom_menu_items,
        vec![CustomMenuItem {
            label: Some("Env item".to_string()),
            url: None,
            icon: None,
        }]
    );
    // Untouched file values survive.
    assert_eq!(settings.user_menu.logout_url.as_deref(), Some("https://sso.acme/logout"));
}

#[test]
fn test_bad_boolean_in_file_names_key_and_file() {
    // Arrange
    let dir = TempDir::new();
    let path = dir.write("ui.toml", "[ui.user-menu]\nenabled = \"sometimes\"\n");

    // Act
    let err = load_settings(&file_only(&path), Vec::new()).unwrap_err();

    // Assert
    let message = err.to_string();
    assert!(matches!(err, StartupError::Configuration(_)));
    assert!(message.contains("ui.user-menu.enabled"), "{message}");
    assert!(message.contains("ui.toml"), "{message}");
}

#[test]
fn test_malformed_toml_is_source_error() {
    let dir = TempDir::new();
    let path = dir.write("ui.toml", "[ui\ntitle = ");

    let err = load_settings(&file_only(&path), Vec::new()).unwrap_err();

    assert!(matches!(err, StartupError::Source(SourceError::Toml(_))));
}

#[test]
fn test_json_document_matches_front_end_shape() {
    let dir = TempDir::new();
    let path = dir.write("ui.toml", TOML_CONFIG);
    let store = load_settings(&file_only(&path), Vec::new()).expect("bind");

    let json: serde_json::Value =
        serde_json::from_str(&render_json(store.settings()).expect("render")).expect("parse");

    assert_eq!(json["ui"]["title"], "Acme Kafka");
    assert_eq!(json["ui"]["userMenu"]["logoutUrl"], "https://sso.acme/logout");
    assert_eq!(json["ui"]["socialLinks"]["enabled"], false);
    assert_eq!(json["ui"]["customMenuItems"][1]["label"], "Runbook");
    assert!(json["ui"]["customMenuItems"][1].get("icon").is_none());
}
