//! # sessionStorage preference store — web platform
//!
//! [`SessionPrefs`] is the [`PrefStore`] implementation used in the browser.
//! Values live in `window.sessionStorage`, so they are scoped to the current
//! browsing session and dropped when the tab closes.
//!
//! Every operation re-acquires the storage handle from the window and
//! swallows failures: with storage blocked or unavailable the form simply
//! starts from its defaults.

use crate::prefs::PrefStore;

/// sessionStorage-backed [`PrefStore`].
#[derive(Clone, Debug, Default)]
pub struct SessionPrefs;

impl SessionPrefs {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.session_storage().ok().flatten()
    }
}

impl PrefStore for SessionPrefs {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }
}
