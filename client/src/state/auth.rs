//! Auth-session snapshot for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The snapshot is owned by the app shell and provided as context. Widgets read
//! it to personalize navigation; only logout mutates it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

/// Role assumed when no user is signed in.
pub const DEFAULT_ROLE: &str = "Student";

/// The signed-in user as persisted by the login flow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

/// Authentication state: current user plus the bearer token, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<CurrentUser>,
    pub token: Option<String>,
}

impl AuthState {
    /// Role string used for menu personalization. A missing user or a blank
    /// role reads as the default role.
    pub fn role(&self) -> &str {
        self.user
            .as_ref()
            .map(|user| user.role.as_str())
            .filter(|role| !role.is_empty())
            .unwrap_or(DEFAULT_ROLE)
    }

    /// Drop the user and token. Called by logout before credentials are
    /// removed from storage.
    pub fn clear(&mut self) {
        self.user = None;
        self.token = None;
    }
}
