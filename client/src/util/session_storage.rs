//! Browser localStorage access for persisted credentials.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow stores the bearer token and the serialized user under fixed
//! keys. The app shell seeds `AuthState` from them at startup and logout
//! removes them. Outside the browser every helper is a no-op.

#[cfg(test)]
#[path = "session_storage_test.rs"]
mod session_storage_test;

use serde::de::DeserializeOwned;

use crate::state::auth::{AuthState, CurrentUser};

pub const TOKEN_KEY: &str = "auth_token";
pub const USER_KEY: &str = "auth_user";

/// Read the raw string stored under `key`.
pub fn load_raw(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Load a JSON value stored under `key`. Malformed values read as absent.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    parse_json(&load_raw(key)?)
}

fn parse_json<T: DeserializeOwned>(raw: &str) -> Option<T> {
    serde_json::from_str(raw).ok()
}

/// Remove each of `keys`, ignoring storage failures.
pub fn remove_keys(keys: &[&str]) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        for key in keys {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = keys;
    }
}

/// Build the initial auth snapshot from stored credentials.
pub fn load_session() -> AuthState {
    session_from_parts(load_raw(TOKEN_KEY), load_raw(USER_KEY).as_deref())
}

fn session_from_parts(token: Option<String>, user_json: Option<&str>) -> AuthState {
    let user = user_json.and_then(parse_json::<CurrentUser>);
    let token = token.filter(|t| !t.is_empty());
    AuthState { user, token }
}

/// Remove stored credentials.
pub fn clear_credentials() {
    remove_keys(&[TOKEN_KEY, USER_KEY]);
}
