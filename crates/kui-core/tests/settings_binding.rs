//! Integration tests for binding UI settings through the public API.
//!
//! These tests exercise the property model, the binder and the settings store
//! together, the way the startup code of the console uses them.

use kui_core::domain::settings::{
    DEFAULT_DISCORD_URL, DEFAULT_GITHUB_URL, DEFAULT_PRODUCT_HUNT_URL, DEFAULT_TITLE,
};
use kui_core::{
    ConfigurationError, CustomMenuItem, PropertySource, PropertySources, PropertyValue,
    SettingsStore, UiSettings,
};

fn sources_of(pairs: &[(&str, PropertyValue)]) -> PropertySources {
    PropertySources::from(PropertySource::from_pairs(
        "test",
        pairs.iter().map(|(k, v)| (*k, v.clone())),
    ))
}

#[test]
fn test_load_with_empty_source_yields_documented_defaults() {
    let store = SettingsStore::load(&sources_of(&[])).expect("bind");
    let settings = store.get();

    assert_eq!(settings.title, DEFAULT_TITLE);
    assert!(!settings.user_menu.enabled);
    assert_eq!(settings.user_menu.account_url, None);
    assert_eq!(settings.user_menu.logout_url, None);
    assert!(settings.social_links.enabled);
    assert_eq!(settings.social_links.github_url, DEFAULT_GITHUB_URL);
    assert_eq!(settings.social_links.discord_url, DEFAULT_DISCORD_URL);
    assert_eq!(settings.social_links.product_hunt_url, DEFAULT_PRODUCT_HUNT_URL);
    assert!(settings.custom_menu_items.is_empty());
}

#[test]
fn test_each_single_override_changes_only_its_field() {
    // Each case: key, value, and the expected settings built from the defaults.
    let cases: Vec<(&str, PropertyValue, UiSettings)> = vec![
        ("ui.title", "Ops".into(), {
            let mut s = UiSettings::default();
            s.title = "Ops".to_string();
            s
        }),
        ("ui.user-menu.enabled", true.into(), {
            let mut s = UiSettings::default();
            s.user_menu.enabled = true;
            s
        }),
        ("ui.user-menu.account-url", "https://a".into(), {
            let mut s = UiSettings::default();
            s.user_menu.account_url = Some("https://a".to_string());
            s
        }),
        ("ui.user-menu.logout-url", "https://l".into(), {
            let mut s = UiSettings::default();
            s.user_menu.logout_url = Some("https://l".to_string());
            s
        }),
        ("ui.social-links.enabled", false.into(), {
            let mut s = UiSettings::default();
            s.social_links.enabled = false;
            s
        }),
        ("ui.social-links.github-url", "https://g".into(), {
            let mut s = UiSettings::default();
            s.social_links.github_url = "https://g".to_string();
            s
        }),
        ("ui.social-links.discord-url", "https://d".into(), {
            let mut s = UiSettings::default();
            s.social_links.discord_url = "https://d".to_string();
            s
        }),
        ("ui.social-links.product-hunt-url", "https://p".into(), {
            let mut s = UiSettings::default();
            s.social_links.product_hunt_url = "https://p".to_string();
            s
        }),
    ];

    for (key, value, expected) in cases {
        let store = SettingsStore::load(&sources_of(&[(key, value)])).expect("bind");
        assert_eq!(*store.settings(), expected, "override of {key}");
    }
}

#[test]
fn test_custom_menu_items_keep_declaration_order() {
    // Arrange
    let sources = sources_of(&[
        ("ui.custom-menu-items[0].label", "Grafana".into()),
        ("ui.custom-menu-items[0].url", "https://grafana.internal".into()),
        ("ui.custom-menu-items[0].icon", "chart".into()),
        ("ui.custom-menu-items[1].label", "Runbook".into()),
        ("ui.custom-menu-items[1].url", "https://wiki.internal/kafka".into()),
        ("ui.custom-menu-items[2].label", "On-call".into()),
    ]);

    // Act
    let store = SettingsStore::load(&sources).expect("bind");

    // Assert
    let labels: Vec<_> = store
        .settings()
        .custom_menu_items
        .iter()
        .map(|item| item.label.clone().unwrap_or_default())
        .collect();
    assert_eq!(labels, vec!["Grafana", "Runbook", "On-call"]);
    assert_eq!(
        store.settings().custom_menu_items[0],
        CustomMenuItem {
            label: Some("Grafana".to_string()),
            url: Some("https://grafana.internal".to_string()),
            icon: Some("chart".to_string()),
        }
    );
}

#[test]
fn test_non_boolean_enabled_fails_without_exposing_a_value() {
    for key in ["ui.user-menu.enabled", "ui.social-links.enabled"] {
        // Arrange: valid overrides alongside one malformed flag
        let sources = sources_of(&[("ui.title", "Half bound".into()), (key, "definitely".into())]);

        // Act
        let result = SettingsStore::load(&sources);

        // Assert
        match result {
            Err(ConfigurationError::TypeMismatch { key: k, .. }) => assert_eq!(k, key),
            other => panic!("expected type mismatch for {key}, got {other:?}"),
        }
    }
}

#[test]
fn test_load_twice_gives_equal_values() {
    let sources = sources_of(&[
        ("ui.title", "Twice".into()),
        ("ui.user-menu.enabled", "yes".into()),
        ("ui.custom-menu-items[0].label", "A".into()),
    ]);

    let first = SettingsStore::load(&sources).expect("first bind");
    let second = SettingsStore::load(&sources).expect("second bind");

    assert_eq!(*first.get(), *second.get());
}

#[test]
fn test_user_menu_scenario() {
    let sources = sources_of(&[
        ("ui.user-menu.enabled", true.into()),
        ("ui.user-menu.account-url", "https://x/acct".into()),
    ]);

    let settings = SettingsStore::load(&sources).expect("bind").get();

    assert!(settings.user_menu.enabled);
    assert_eq!(settings.user_menu.account_url.as_deref(), Some("https://x/acct"));
    assert_eq!(settings.user_menu.logout_url, None);
    assert!(settings.social_links.enabled);
    assert_eq!(settings.social_links.github_url, DEFAULT_GITHUB_URL);
}

#[test]
fn test_layered_sources_resolve_by_precedence() {
    // Arrange: command line > environment > file
    let mut sources = PropertySources::new();
    sources.add_last(
        PropertySource::new("file")
            .with("ui.title", "File title")
            .with("ui.social-links.enabled", false)
            .with("ui.custom-menu-items[0].label", "From file"),
    );
    sources.add_first(PropertySource::new("environment").with("UI.SOCIALLINKS.ENABLED", "true"));
    sources.add_first(PropertySource::new("command line").with("ui.title", "CLI title"));

    // Act
    let settings = UiSettings::bind(&sources).expect("bind");

    // Assert
    assert_eq!(settings.title, "CLI title");
    assert!(settings.social_links.enabled);
    assert_eq!(settings.custom_menu_items.len(), 1);
}
