//! # Session Store
//!
//! Durable wrapper around the pure [`Session`] model: the single source of
//! truth for "who is logged in, what can they do, and how is the UI themed",
//! readable by every view and mutable only through the operations below.
//!
//! ## Persistence Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Session Persistence                                   │
//! │                                                                         │
//! │  process start ──► SessionStore::load(path)                             │
//! │                       │                                                 │
//! │                       ├── file present & valid ──► rehydrated session   │
//! │                       └── absent / malformed ────► empty default        │
//! │                                                    (never an error)     │
//! │                                                                         │
//! │  every mutation (set_auth / logout / toggle_dark_mode)                  │
//! │                       │                                                 │
//! │                       └──► serialize full session to session.json       │
//! │                                                                         │
//! │  A reload therefore preserves login and theme without a network call.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Note
//! The store is an explicit collaborator handed to the gateway and the views
//! by the composition root - deliberately NOT a process-wide static. The
//! in-memory mutation always applies; a failed disk write is logged and
//! swallowed, matching the contract that these operations cannot fail.

use std::path::PathBuf;
use std::sync::RwLock;

use tracing::{debug, info, warn};

use inventario_core::{Session, User};

/// Thread-safe, persisted session state.
///
/// ## Why RwLock?
/// Reads vastly outnumber writes: every request reads the token, while
/// mutations happen only on login/logout/theme toggle.
#[derive(Debug)]
pub struct SessionStore {
    session: RwLock<Session>,
    path: PathBuf,
}

impl SessionStore {
    /// Loads the session from `path`, falling back to the unauthenticated
    /// default when the file is absent or malformed.
    pub fn load(path: PathBuf) -> Self {
        let session = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<Session>(&contents) {
                Ok(session) => {
                    debug!(?path, authenticated = session.is_authenticated(), "Session rehydrated");
                    session
                }
                Err(e) => {
                    warn!(?path, error = %e, "Malformed session file, starting unauthenticated");
                    Session::default()
                }
            },
            Err(_) => {
                debug!(?path, "No session file, starting unauthenticated");
                Session::default()
            }
        };

        SessionStore {
            session: RwLock::new(session),
            path,
        }
    }

    // =========================================================================
    // Mutations (each one persists)
    // =========================================================================

    /// Replaces identity, credential and grants atomically.
    pub fn set_auth(&self, user: User, token: String, roles: Vec<String>, permissions: Vec<String>) {
        self.mutate(|s| s.set_auth(user, token, roles, permissions));
        info!("Session authenticated");
    }

    /// Clears identity, credential and grants; the theme flag is untouched.
    pub fn logout(&self) {
        self.mutate(Session::logout);
        info!("Session cleared");
    }

    /// Flips the theme preference and returns the new value.
    pub fn toggle_dark_mode(&self) -> bool {
        self.mutate(Session::toggle_dark_mode);
        self.with(|s| s.dark_mode)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Runs a closure against the current session state.
    pub fn with<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        let session = self.session.read().expect("session lock poisoned");
        f(&session)
    }

    /// Current bearer token, read fresh (never cached by callers).
    pub fn token(&self) -> Option<String> {
        self.with(|s| s.token.clone())
    }

    /// Current identity, if authenticated.
    pub fn current_user(&self) -> Option<User> {
        self.with(|s| s.user.clone())
    }

    /// True when a credential is held.
    pub fn is_authenticated(&self) -> bool {
        self.with(Session::is_authenticated)
    }

    /// Current theme preference.
    pub fn dark_mode(&self) -> bool {
        self.with(|s| s.dark_mode)
    }

    /// Set-membership check against the current roles.
    pub fn has_role(&self, name: &str) -> bool {
        self.with(|s| s.has_role(name))
    }

    /// Set-membership check against the current permissions.
    pub fn has_permission(&self, name: &str) -> bool {
        self.with(|s| s.has_permission(name))
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn mutate(&self, f: impl FnOnce(&mut Session)) {
        let snapshot = {
            let mut session = self.session.write().expect("session lock poisoned");
            f(&mut session);
            session.clone()
        };
        self.persist(&snapshot);
    }

    fn persist(&self, session: &Session) {
        let result = (|| -> std::io::Result<()> {
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let contents = serde_json::to_string_pretty(session)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            std::fs::write(&self.path, contents)
        })();

        if let Err(e) = result {
            warn!(path = ?self.path, error = %e, "Failed to persist session");
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

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
    fn test_missing_file_starts_unauthenticated() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::load(dir.path().join("session.json"));
        assert!(!store.is_authenticated());
        assert!(!store.dark_mode());
    }

    #[test]
    fn test_malformed_file_starts_unauthenticated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{ this is not json").unwrap();

        let store = SessionStore::load(path);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_login_survives_simulated_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = SessionStore::load(path.clone());
        store.set_auth(
            test_user(),
            "tok-abc".to_string(),
            vec!["admin".to_string()],
            vec!["products.create".to_string()],
        );

        // Simulated reload: a second store rehydrates from the same file.
        let reloaded = SessionStore::load(path);
        assert!(reloaded.is_authenticated());
        assert_eq!(reloaded.token().as_deref(), Some("tok-abc"));
        assert!(reloaded.has_role("admin"));
        assert!(reloaded.has_permission("products.create"));
        assert_eq!(reloaded.current_user().unwrap().name, "Ana");
    }

    #[test]
    fn test_dark_mode_survives_reload_and_logout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = SessionStore::load(path.clone());
        assert!(store.toggle_dark_mode());
        store.set_auth(test_user(), "tok".to_string(), vec![], vec![]);
        store.logout();

        let reloaded = SessionStore::load(path);
        assert!(reloaded.dark_mode());
        assert!(!reloaded.is_authenticated());
    }

    #[test]
    fn test_toggle_twice_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = SessionStore::load(path.clone());
        let original = store.dark_mode();
        store.toggle_dark_mode();
        store.toggle_dark_mode();

        assert_eq!(SessionStore::load(path).dark_mode(), original);
    }

    #[test]
    fn test_logout_clears_persisted_grants() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = SessionStore::load(path.clone());
        store.set_auth(test_user(), "tok".to_string(), vec!["admin".to_string()], vec![]);
        store.logout();

        let reloaded = SessionStore::load(path);
        assert!(reloaded.token().is_none());
        assert!(!reloaded.has_role("admin"));
    }
}
