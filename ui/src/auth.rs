//! Authentication context for the UI.
//!
//! Components never read the token from browser storage themselves; the
//! provider loads it once at startup and everything downstream gets it from
//! context. A token updated through the signal is picked up by the next
//! request, because API clients are built per request.

use dioxus::prelude::*;

/// Credential state shared through context.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthSession {
    /// Bearer token for the admin API, if the user is signed in.
    pub token: Option<String>,
}

/// Get the current auth session.
pub fn use_auth() -> Signal<AuthSession> {
    use_context::<Signal<AuthSession>>()
}

/// Provider component that owns the auth session.
/// Wrap the app with this component before using [`use_auth`].
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth = use_signal(|| AuthSession {
        token: api::token::load_token(),
    });

    use_context_provider(|| auth);

    rsx! {
        {children}
    }
}
