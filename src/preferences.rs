//! Preference Persistence
//!
//! The language choice survives panel reloads in browser local storage.

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

/// Key/value store for user preferences
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn save(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            log::warn!("[PREFS] localStorage unavailable, '{}' not saved", key);
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("[PREFS] failed to save '{}'", key);
        }
    }
}

/// In-memory store for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl PreferenceStore for MemoryPreferences {
    fn load(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

/// Saved language, if it is one we can display
pub fn saved_language(store: &impl PreferenceStore, key: &str) -> Option<String> {
    store.load(key).filter(|lang| crate::i18n::is_registered(lang))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_language_requires_registered_table() {
        let prefs = MemoryPreferences::default();
        assert_eq!(saved_language(&prefs, "stash_lang"), None);

        prefs.save("stash_lang", "de");
        assert_eq!(saved_language(&prefs, "stash_lang"), None);

        prefs.save("stash_lang", "en");
        assert_eq!(saved_language(&prefs, "stash_lang"), Some("en".to_string()));
    }
}
