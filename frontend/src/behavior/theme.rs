use std::fmt;

use crate::config;
use crate::error::DomError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Interprets a stored preference. An empty value counts as no preference,
    /// anything other than "dark" means light.
    pub fn from_stored(value: &str) -> Option<Theme> {
        match value {
            "" => None,
            "dark" => Some(Theme::Dark),
            _ => Some(Theme::Light),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Glyph on the toggle button: it offers the other mode.
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key-value storage for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), DomError>;
}

/// `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalPreferences;

impl PreferenceStore for LocalPreferences {
    fn get(&self, key: &str) -> Option<String> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let storage = window.local_storage()?.ok_or(DomError::NoStorage)?;
        storage.set_item(key, value)?;
        Ok(())
    }
}

/// Startup theme: the stored choice wins, otherwise the system preference.
pub fn check_preference(store: &impl PreferenceStore, prefers_dark: bool) -> Theme {
    match store
        .get(config::THEME_STORAGE_KEY)
        .and_then(|value| Theme::from_stored(&value))
    {
        Some(theme) => theme,
        None if prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// Flips `current` and persists the result. The new theme is returned even
/// when persisting fails.
pub fn toggle_theme(current: Theme, store: &impl PreferenceStore) -> (Theme, Result<(), DomError>) {
    let next = current.toggled();
    let saved = store.set(config::THEME_STORAGE_KEY, next.as_str());
    (next, saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryPreferences(RefCell<HashMap<String, String>>);

    impl MemoryPreferences {
        fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store.0.borrow_mut().insert(key.to_string(), value.to_string());
            store
        }
    }

    impl PreferenceStore for MemoryPreferences {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), DomError> {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn stored_preference_beats_system_preference() {
        let store = MemoryPreferences::with("theme", "light");
        assert_eq!(check_preference(&store, true), Theme::Light);

        let store = MemoryPreferences::with("theme", "dark");
        assert_eq!(check_preference(&store, false), Theme::Dark);
    }

    #[test]
    fn falls_back_to_system_preference() {
        let store = MemoryPreferences::default();
        assert_eq!(check_preference(&store, true), Theme::Dark);
        assert_eq!(check_preference(&store, false), Theme::Light);

        let empty = MemoryPreferences::with("theme", "");
        assert_eq!(check_preference(&empty, true), Theme::Dark);
    }

    #[test]
    fn unknown_stored_value_means_light() {
        let store = MemoryPreferences::with("theme", "sepia");
        assert_eq!(check_preference(&store, true), Theme::Light);
    }

    #[test]
    fn toggle_persists_new_theme() {
        let store = MemoryPreferences::default();
        let (next, saved) = toggle_theme(Theme::Light, &store);
        assert!(saved.is_ok());
        assert_eq!(next, Theme::Dark);
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn double_toggle_restores_flag_and_stored_value() {
        let store = MemoryPreferences::with("theme", "dark");
        let start = check_preference(&store, false);

        let (once, _) = toggle_theme(start, &store);
        let (twice, _) = toggle_theme(once, &store);

        assert_eq!(twice, start);
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn glyph_offers_the_other_mode() {
        assert_eq!(Theme::Dark.toggle_glyph(), "☀️");
        assert_eq!(Theme::Light.toggle_glyph(), "🌙");
    }
}
