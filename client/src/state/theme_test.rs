use super::*;
use crate::util::storage::MemoryStore;

#[test]
fn theme_default_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn parse_accepts_known_values_only() {
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse(" light "), Some(Theme::Light));
    assert_eq!(Theme::parse("solarized"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn toggled_flips_between_variants() {
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
}

#[test]
fn icon_matches_theme() {
    assert!(Theme::Light.icon_markup().contains("bx-sun"));
    assert!(Theme::Dark.icon_markup().contains("bx-moon"));
}

#[test]
fn only_light_applies_light_class() {
    assert!(Theme::Light.applies_light_class());
    assert!(!Theme::Dark.applies_light_class());
}

#[test]
fn load_defaults_to_dark_when_unset() {
    let store = MemoryStore::new();
    assert_eq!(ThemePreference::new(&store).load(), Theme::Dark);
}

#[test]
fn load_ignores_unknown_stored_value() {
    let store = MemoryStore::new();
    store.set(STORAGE_KEY, "sepia");
    assert_eq!(ThemePreference::new(&store).load(), Theme::Dark);
}

#[test]
fn save_then_reload_returns_same_theme() {
    for theme in [Theme::Dark, Theme::Light] {
        let store = MemoryStore::new();
        ThemePreference::new(&store).save(theme);
        // A fresh preference over the same store stands in for a page reload.
        assert_eq!(ThemePreference::new(&store).load(), theme);
        assert_eq!(store.get(STORAGE_KEY).as_deref(), Some(theme.as_str()));
    }
}

#[test]
fn toggle_persists_new_value() {
    let store = MemoryStore::new();
    let pref = ThemePreference::new(&store);
    assert_eq!(pref.toggle(Theme::Dark), Theme::Light);
    assert_eq!(pref.load(), Theme::Light);
    assert_eq!(pref.toggle(Theme::Light), Theme::Dark);
    assert_eq!(pref.load(), Theme::Dark);
}
