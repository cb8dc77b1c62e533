//! # Auth Endpoints
//!
//! Login, logout and profile updates.
//!
//! ## Login Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /login {email, password}                                          │
//! │       │                                                                 │
//! │       ├── 200 {user, token, roles, permissions}                         │
//! │       │        │                                                        │
//! │       │        └──► SessionStore::set_auth (atomic, persisted)          │
//! │       │                                                                 │
//! │       └── 401 ──► generic "invalid credentials" - the backend never     │
//! │                   reveals whether the email or the password was wrong   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use inventario_core::User;

use crate::error::ApiResult;
use crate::gateway::Gateway;

/// Login form payload.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Profile form payload. Password fields are omitted from the request
/// entirely when the user is not changing their password.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_confirmation: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProfileResponse {
    user: User,
}

/// Typed contract for the auth endpoints.
#[derive(Debug, Clone)]
pub struct AuthApi {
    gateway: Gateway,
}

impl AuthApi {
    pub fn new(gateway: Gateway) -> Self {
        AuthApi { gateway }
    }

    /// Authenticates and populates the session store atomically.
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse> {
        let response: LoginResponse = self.gateway.post("/login", credentials).await?;

        self.gateway.session().set_auth(
            response.user.clone(),
            response.token.clone(),
            response.roles.clone(),
            response.permissions.clone(),
        );

        info!(user = %response.user.email, "Logged in");
        Ok(response)
    }

    /// Logs out, best-effort on the backend side.
    ///
    /// Local logout is authoritative: if the invalidation call fails for any
    /// reason the session is cleared anyway and the failure is only logged.
    pub async fn logout(&self) {
        if let Err(e) = self.gateway.post_empty("/logout").await {
            warn!(error = %e, "Backend logout failed; clearing local session anyway");
        }
        self.gateway.session().logout();
    }

    /// Updates the authenticated user's profile and returns the fresh
    /// identity record. The caller re-runs `set_auth` with the existing
    /// token and grants to propagate the new name/email.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<User> {
        let response: ProfileResponse = self.gateway.put_json("/profile", update).await?;
        Ok(response.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_update_omits_unchanged_password() {
        let update = ProfileUpdate {
            name: "Ana".to_string(),
            email: "ana@inventario.com".to_string(),
            password: None,
            password_confirmation: None,
        };

        let json = serde_json::to_string(&update).unwrap();
        assert!(!json.contains("password"));
    }

    #[test]
    fn test_login_response_tolerates_missing_grant_lists() {
        let json = r#"{
            "user": {"id": 1, "name": "Ana", "email": "ana@inventario.com"},
            "token": "tok-abc"
        }"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert!(response.roles.is_empty());
        assert!(response.permissions.is_empty());
    }
}
