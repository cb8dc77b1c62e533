//! # Session Model
//!
//! Pure state for "who is logged in, what can they do, and how is the UI
//! themed". Persistence lives in `inventario-client`; this module only
//! defines the state and its four-operation contract.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Session Lifecycle                                  │
//! │                                                                         │
//! │  process start ──► Session::default()  (unauthenticated)                │
//! │                          │                                              │
//! │         login OK ──► set_auth(user, token, roles, permissions)          │
//! │                          │                                              │
//! │            logout ──► logout()  (identity cleared, dark_mode kept)      │
//! │                          │                                              │
//! │  toggle_dark_mode() at any point, independent of auth state             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariant
//! `user` and `token` are both present or both absent - never one without
//! the other. The only mutators are `set_auth` (sets both) and `logout`
//! (clears both), so the invariant holds by construction.

use serde::{Deserialize, Serialize};

use crate::types::User;

/// The client-held record of the authenticated identity, its authorization
/// grants, and the UI theme preference.
///
/// All fields default to the unauthenticated state, which also makes a
/// malformed persisted session rehydrate safely field-by-field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    /// Identity record, absent when unauthenticated.
    pub user: Option<User>,

    /// Opaque bearer credential, absent when unauthenticated.
    pub token: Option<String>,

    /// Role names held by the user.
    pub roles: Vec<String>,

    /// Permission names held by the user.
    pub permissions: Vec<String>,

    /// UI theme preference. Independent of auth state; survives logout.
    pub dark_mode: bool,
}

impl Session {
    /// Creates an empty, unauthenticated session.
    pub fn new() -> Self {
        Session::default()
    }

    /// Replaces identity, credential and grants atomically from a successful
    /// login (or profile-update) response.
    ///
    /// Pure in-memory assignment; cannot fail.
    pub fn set_auth(
        &mut self,
        user: User,
        token: String,
        roles: Vec<String>,
        permissions: Vec<String>,
    ) {
        self.user = Some(user);
        self.token = Some(token);
        self.roles = roles;
        self.permissions = permissions;
    }

    /// Clears identity, credential and grants. `dark_mode` is untouched.
    pub fn logout(&mut self) {
        self.user = None;
        self.token = None;
        self.roles.clear();
        self.permissions.clear();
    }

    /// Flips the theme preference.
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// True when a credential is held.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Set-membership check against the current roles.
    pub fn has_role(&self, name: &str) -> bool {
        self.roles.iter().any(|r| r == name)
    }

    /// Set-membership check against the current permissions.
    pub fn has_permission(&self, name: &str) -> bool {
        self.permissions.iter().any(|p| p == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User {
            id: 1,
            name: "Ana".to_string(),
            email: "ana@inventario.com".to_string(),
        }
    }

    #[test]
    fn test_set_auth_grants_roles_and_permissions() {
        let mut session = Session::new();
        session.set_auth(
            test_user(),
            "tok-123".to_string(),
            vec!["admin".to_string()],
            vec!["products.create".to_string()],
        );

        assert!(session.is_authenticated());
        assert!(session.has_role("admin"));
        assert!(!session.has_role("vendedor"));
        assert!(session.has_permission("products.create"));
        assert!(!session.has_permission("users.delete"));
    }

    #[test]
    fn test_logout_clears_all_grants() {
        let mut session = Session::new();
        session.set_auth(
            test_user(),
            "tok-123".to_string(),
            vec!["admin".to_string(), "vendedor".to_string()],
            vec!["products.create".to_string()],
        );

        session.logout();

        assert!(!session.is_authenticated());
        assert!(session.user.is_none());
        assert!(session.token.is_none());
        assert!(!session.has_role("admin"));
        assert!(!session.has_role("vendedor"));
        assert!(!session.has_permission("products.create"));
    }

    #[test]
    fn test_dark_mode_survives_logout() {
        let mut session = Session::new();
        session.toggle_dark_mode();
        session.set_auth(test_user(), "tok".to_string(), vec![], vec![]);

        session.logout();

        assert!(session.dark_mode);
    }

    #[test]
    fn test_toggle_dark_mode_twice_round_trips() {
        let mut session = Session::new();
        let original = session.dark_mode;
        session.toggle_dark_mode();
        session.toggle_dark_mode();
        assert_eq!(session.dark_mode, original);
    }

    #[test]
    fn test_user_and_token_always_paired() {
        let mut session = Session::new();
        assert_eq!(session.user.is_some(), session.token.is_some());

        session.set_auth(test_user(), "tok".to_string(), vec![], vec![]);
        assert_eq!(session.user.is_some(), session.token.is_some());

        session.logout();
        assert_eq!(session.user.is_some(), session.token.is_some());
    }

    #[test]
    fn test_rehydrates_from_partial_json() {
        // A session file written by an older build may miss fields entirely.
        let session: Session = serde_json::from_str(r#"{"dark_mode": true}"#).unwrap();
        assert!(session.dark_mode);
        assert!(!session.is_authenticated());
    }
}
