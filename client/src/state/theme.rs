//! Dark/light theme preference.
//!
//! The theme is a single flag persisted under [`STORAGE_KEY`]. Light mode is
//! expressed as a `light` class on the document element; dark is the absence
//! of it.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::storage::KeyValueStore;

pub const STORAGE_KEY: &str = "site-theme";
pub const LIGHT_CLASS: &str = "light";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Icon shown in the toggle control: a sun while light, a moon while dark.
    #[must_use]
    pub fn icon_markup(self) -> &'static str {
        match self {
            Self::Light => "<i class='bx bx-sun'></i>",
            Self::Dark => "<i class='bx bx-moon'></i>",
        }
    }

    #[must_use]
    pub fn applies_light_class(self) -> bool {
        self == Self::Light
    }
}

/// Theme persistence over any [`KeyValueStore`].
pub struct ThemePreference<S> {
    store: S,
}

impl<S: KeyValueStore> ThemePreference<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored theme, or [`Theme::Dark`] when unset or unrecognized.
    pub fn load(&self) -> Theme {
        self.store
            .get(STORAGE_KEY)
            .as_deref()
            .and_then(Theme::parse)
            .unwrap_or_default()
    }

    pub fn save(&self, theme: Theme) {
        self.store.set(STORAGE_KEY, theme.as_str());
    }

    /// Flip `current`, persist the result, and return it.
    pub fn toggle(&self, current: Theme) -> Theme {
        let next = current.toggled();
        self.save(next);
        next
    }
}
