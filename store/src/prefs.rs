//! # Session-scoped search preferences
//!
//! Two filter fields, the travel date and the party size, are mirrored into
//! a session-scoped store so they survive navigation within one browsing
//! session. The form's in-memory state is authoritative: the store is a
//! write-through cache that is read exactly once, when the form mounts, and
//! never consulted again afterwards.

/// String key/value store backing [`SearchPrefs`].
///
/// Implementations swallow storage failures; an unavailable backend degrades
/// to "nothing persisted" rather than surfacing errors into the form.
pub trait PrefStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

pub(crate) const DATE_KEY: &str = "tour.date";
pub(crate) const TOURISTS_KEY: &str = "tour.tourists";

/// Typed access to the mirrored filter fields.
pub struct SearchPrefs<S> {
    store: S,
}

impl<S: PrefStore> SearchPrefs<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persisted travel date (ISO calendar date), if any.
    pub fn date(&self) -> Option<String> {
        self.store.get(DATE_KEY).filter(|date| !date.is_empty())
    }

    pub fn set_date(&self, date: &str) {
        self.store.set(DATE_KEY, date);
    }

    /// Persisted party size, if any. Values that do not parse as a positive
    /// count are treated as absent.
    pub fn tourists(&self) -> Option<u32> {
        self.store
            .get(TOURISTS_KEY)?
            .parse()
            .ok()
            .filter(|count| *count >= 1)
    }

    pub fn set_tourists(&self, tourists: u32) {
        self.store.set(TOURISTS_KEY, &tourists.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryPrefs;

    #[test]
    fn date_and_tourists_round_trip() {
        let prefs = SearchPrefs::new(MemoryPrefs::new());

        assert_eq!(prefs.date(), None);
        assert_eq!(prefs.tourists(), None);

        prefs.set_date("2024-07-01");
        prefs.set_tourists(4);

        assert_eq!(prefs.date(), Some("2024-07-01".to_string()));
        assert_eq!(prefs.tourists(), Some(4));
    }

    #[test]
    fn empty_date_reads_as_absent() {
        let prefs = SearchPrefs::new(MemoryPrefs::new());
        prefs.set_date("");
        assert_eq!(prefs.date(), None);
    }

    #[test]
    fn unparseable_or_zero_party_size_reads_as_absent() {
        let store = MemoryPrefs::new();
        store.set(TOURISTS_KEY, "a few");
        assert_eq!(SearchPrefs::new(store.clone()).tourists(), None);

        store.set(TOURISTS_KEY, "0");
        assert_eq!(SearchPrefs::new(store).tourists(), None);
    }
}
