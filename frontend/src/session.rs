//! Admin session context.
//!
//! The login flow (served outside this app) stores a bearer token and the
//! signed-in admin's profile in `localStorage`. Instead of components
//! reaching into that shared storage ad hoc, the session is read once at
//! startup into an explicit `Session` value and injected into the admin
//! pages through props. The token is attached to every authenticated request
//! and is never logged or sent anywhere else.

use std::fmt;

use serde::Deserialize;
use web_sys::Storage;

const TOKEN_KEY: &str = "admin_token";
const PROFILE_KEY: &str = "admin_profile";
const LOGIN_PATH: &str = "/login";

#[derive(Clone, PartialEq)]
pub struct Session {
    token: String,
    pub admin_id: i64,
    pub email: String,
    pub is_super_admin: bool,
}

/// Profile blob written by the login flow alongside the token.
#[derive(Deserialize)]
struct StoredProfile {
    id: i64,
    email: String,
    #[serde(default)]
    is_super_admin: bool,
}

impl Session {
    /// Reads the stored token and profile. Returns `None` when either is
    /// missing or unreadable; admin pages then show the sign-in prompt.
    pub fn load() -> Option<Session> {
        let storage = local_storage()?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
        let raw_profile = storage.get_item(PROFILE_KEY).ok().flatten()?;
        let profile: StoredProfile = serde_json::from_str(&raw_profile).ok()?;
        Some(Session {
            token,
            admin_id: profile.id,
            email: profile.email,
            is_super_admin: profile.is_super_admin,
        })
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

// The token must never leak through debug formatting.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("admin_id", &self.admin_id)
            .field("email", &self.email)
            .field("is_super_admin", &self.is_super_admin)
            .finish()
    }
}

/// Clears the stored credentials and sends the browser to the login route.
/// Called on any 401/403 response; there is no client-side retry.
pub fn expire_to_login() {
    if let Some(storage) = local_storage() {
        storage.remove_item(TOKEN_KEY).ok();
        storage.remove_item(PROFILE_KEY).ok();
    }
    if let Some(window) = web_sys::window() {
        window.location().set_href(LOGIN_PATH).ok();
    }
}

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let session = Session {
            token: "secret-bearer-token".into(),
            admin_id: 1,
            email: "root@disclosure.example".into(),
            is_super_admin: true,
        };
        let rendered = format!("{session:?}");
        assert!(!rendered.contains("secret-bearer-token"));
        assert!(rendered.contains("<redacted>"));
    }
}
