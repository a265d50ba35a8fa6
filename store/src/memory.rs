use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::prefs::PrefStore;

/// In-memory [`PrefStore`] for tests and non-browser targets.
#[derive(Clone, Debug, Default)]
pub struct MemoryPrefs {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStore for MemoryPrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_and_clones_share_state() {
        let store = MemoryPrefs::new();
        assert_eq!(store.get("k"), None);

        store.set("k", "one");
        store.set("k", "two");
        assert_eq!(store.get("k"), Some("two".to_string()));

        let alias = store.clone();
        alias.set("k", "three");
        assert_eq!(store.get("k"), Some("three".to_string()));
    }
}
