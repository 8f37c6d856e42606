//! Session token handle backed by `localStorage`.
//!
//! The token is an opaque bearer credential: present means "try authenticated
//! calls", absent means protected views must redirect to login. Validity is
//! decided lazily by the backend's response to the next authenticated call;
//! there is no client-side expiry tracking.
//!
//! `Session` is a `Copy` handle around a reactive signal mirroring one
//! storage key, created once in `App` and shared via context. Every write
//! goes through the handle so storage and signal never diverge.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "friendgift.token";

use leptos::prelude::*;

/// Handle to the single session token.
///
/// Writers: the login/registration success path (`set`), logout and the API
/// client's 401/403 invalidation (`clear`). Everyone else only reads.
#[derive(Clone, Copy, Debug)]
pub struct Session {
    token: RwSignal<Option<String>>,
}

impl Session {
    /// Create the handle, restoring any token persisted by a previous visit.
    pub fn restore() -> Self {
        Self {
            token: RwSignal::new(read_stored_token()),
        }
    }

    /// Current token, if any. Reactive: guards re-evaluate when it changes.
    pub fn token(&self) -> Option<String> {
        self.token.get()
    }

    /// Whether a token is present. Presence, not validity.
    pub fn is_authenticated(&self) -> bool {
        self.token.with(Option::is_some)
    }

    /// Store a freshly issued token and persist it across reloads.
    pub fn set(&self, token: String) {
        write_stored_token(Some(&token));
        self.token.set(Some(token));
    }

    /// Drop the credential, both in memory and in storage.
    ///
    /// Disposal-tolerant: the API client may invalidate from an async tail
    /// after the owning view went away.
    pub fn clear(&self) {
        write_stored_token(None);
        let _ = self.token.try_set(None);
    }

    /// Non-reactive read for async paths that must not track.
    pub fn token_untracked(&self) -> Option<String> {
        self.token.get_untracked()
    }
}

/// Read the persisted token from localStorage.
fn read_stored_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(value) = storage.get_item(STORAGE_KEY) {
                return value.filter(|v| !v.is_empty());
            }
        }
        None
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Write or remove the persisted token.
fn write_stored_token(token: Option<&str>) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                match token {
                    Some(value) => {
                        let _ = storage.set_item(STORAGE_KEY, value);
                    }
                    None => {
                        let _ = storage.remove_item(STORAGE_KEY);
                    }
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}
