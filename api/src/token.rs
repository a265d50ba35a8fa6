//! # Bearer-token persistence
//!
//! The admin API credential survives page reloads in the browser's
//! persistent storage. The auth context loads it once at startup and owns it
//! from then on; requests read the token from the context, never from
//! storage directly. On native targets (tests, tooling) the token lives in a
//! process-local cell instead.
//!
//! Storage failures are swallowed: with storage unavailable the app simply
//! starts signed out.

const TOKEN_KEY: &str = "auth_token";

/// Read the persisted token, if any.
#[cfg(target_arch = "wasm32")]
pub fn load_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok().flatten()?;
    storage.get_item(TOKEN_KEY).ok().flatten()
}

/// Persist the token, or clear it when `None`.
#[cfg(target_arch = "wasm32")]
pub fn store_token(token: Option<&str>) {
    let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
    let Some(storage) = storage else {
        return;
    };
    let _ = match token {
        Some(token) => storage.set_item(TOKEN_KEY, token),
        None => storage.remove_item(TOKEN_KEY),
    };
}

#[cfg(not(target_arch = "wasm32"))]
static PROCESS_TOKEN: std::sync::Mutex<Option<String>> = std::sync::Mutex::new(None);

/// Read the persisted token, if any.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_token() -> Option<String> {
    PROCESS_TOKEN.lock().unwrap().clone()
}

/// Persist the token, or clear it when `None`.
#[cfg(not(target_arch = "wasm32"))]
pub fn store_token(token: Option<&str>) {
    *PROCESS_TOKEN.lock().unwrap() = token.map(str::to_string);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trips_and_clears() {
        store_token(Some("secret"));
        assert_eq!(load_token(), Some("secret".to_string()));

        store_token(None);
        assert_eq!(load_token(), None);
    }
}
