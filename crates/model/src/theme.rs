//! Light/dark theme state and its persistence seam

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

/// Color scheme applied through the root element's `data-theme` attribute
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a persisted value. Anything other than `"dark"` falls back to light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Icon shown on the toggle button: the sun offers a way out of dark mode,
    /// the moon a way into it.
    pub const fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon theme-icon",
            Self::Dark => "fas fa-sun theme-icon",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key/value preference storage (`localStorage` in the browser)
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory store, used where no browser storage exists
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.set(key, value);
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// Current theme bound to the store it is persisted in
pub struct ThemeState<S: PreferenceStore> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: PreferenceStore> ThemeState<S> {
    /// Read the persisted theme once; absent or unknown values mean light.
    pub fn load(store: S, key: &str) -> Self {
        let current = Theme::from_stored(store.get(key).as_deref());
        Self {
            store,
            key: key.to_string(),
            current,
        }
    }

    pub const fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and overwrite the persisted value
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.store.set(&self.key, self.current.as_str());
        self.current
    }

    pub const fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const KEY: &str = "portfolio-theme";

    #[test]
    fn test_defaults_to_light_when_absent() {
        let state = ThemeState::load(MemoryStore::new(), KEY);
        assert_eq!(state.current(), Theme::Light);
        // Nothing is written until the first toggle
        assert_eq!(state.store().get(KEY), None);
    }

    #[test]
    fn test_unknown_value_is_light() {
        assert_eq!(Theme::from_stored(Some("sepia")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("DARK")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists() {
        let mut state = ThemeState::load(MemoryStore::new(), KEY);
        assert_eq!(state.toggle(), Theme::Dark);
        assert_eq!(state.store().get(KEY).as_deref(), Some("dark"));
        assert_eq!(state.toggle(), Theme::Light);
        assert_eq!(state.store().get(KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_icon_classes() {
        assert_eq!(Theme::Dark.icon_class(), "fas fa-sun theme-icon");
        assert_eq!(Theme::Light.icon_class(), "fas fa-moon theme-icon");
    }

    proptest! {
        #[test]
        fn toggle_twice_restores_value_and_icon(stored in prop_oneof![Just("light"), Just("dark")]) {
            let mut state = ThemeState::load(MemoryStore::with_entry(KEY, stored), KEY);
            let icon = state.current().icon_class();
            state.toggle();
            state.toggle();
            let persisted = state.store().get(KEY);
            prop_assert_eq!(persisted.as_deref(), Some(stored));
            prop_assert_eq!(state.current().icon_class(), icon);
        }
    }
}
