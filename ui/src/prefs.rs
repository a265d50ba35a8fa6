//! Shared preference-store constructor for all platforms.
//!
//! Returns a [`store::SearchPrefs`] backed by the appropriate
//! [`store::PrefStore`]:
//! - **Web** (WASM): browser `sessionStorage` via [`store::SessionPrefs`]
//! - **Native** (tests, tooling): process-local [`store::MemoryPrefs`]

use store::SearchPrefs;

/// Create a platform-appropriate search-preference store.
pub fn make_prefs() -> SearchPrefs<impl store::PrefStore> {
    #[cfg(target_arch = "wasm32")]
    {
        SearchPrefs::new(store::SessionPrefs::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        SearchPrefs::new(store::MemoryPrefs::new())
    }
}
