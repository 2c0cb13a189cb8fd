//! Persisted single-value preferences.
//!
//! Components receive a [`PreferenceStore`] instead of touching
//! `localStorage` directly, so tests can swap in [`MemoryPreference`].

use std::cell::RefCell;

pub trait PreferenceStore {
    fn get(&self) -> Option<String>;
    fn set(&self, value: &str);
}

/// One `localStorage` key.
pub struct BrowserPreference {
    key: &'static str,
}

impl BrowserPreference {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    /// Whether `localStorage` can be reached at all (it throws in some
    /// private browsing modes).
    pub fn is_available() -> bool {
        Self::storage().is_some()
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl PreferenceStore for BrowserPreference {
    fn get(&self) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(self.key).ok().flatten())
    }

    fn set(&self, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(self.key, value).is_err() {
                    log::warn!("could not persist preference `{}`", self.key);
                }
            }
            None => log::warn!("localStorage unavailable, `{}` not persisted", self.key),
        }
    }
}

/// In-memory store for tests and storage-less environments.
#[derive(Default)]
pub struct MemoryPreference {
    value: RefCell<Option<String>>,
}

impl MemoryPreference {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: RefCell::new(Some(value.to_string())),
        }
    }
}

impl PreferenceStore for MemoryPreference {
    fn get(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn set(&self, value: &str) {
        *self.value.borrow_mut() = Some(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_preference() {
        let store = MemoryPreference::default();
        assert_eq!(store.get(), None);
        store.set("light");
        assert_eq!(store.get().as_deref(), Some("light"));
        store.set("dark");
        assert_eq!(store.get().as_deref(), Some("dark"));
    }
}
