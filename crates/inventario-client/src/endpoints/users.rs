//! User administration endpoints, plus the role list for the user form.

use serde::Serialize;

use inventario_core::{Role, User};

use crate::endpoints::ListEnvelope;
use crate::error::ApiResult;
use crate::gateway::Gateway;

/// User form payload. `password` and `role` are omitted from the request
/// when unchanged; the backend requires both on create and answers 422 if
/// they are missing there.
#[derive(Debug, Clone, Serialize)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UsersApi {
    gateway: Gateway,
}

impl UsersApi {
    pub fn new(gateway: Gateway) -> Self {
        UsersApi { gateway }
    }

    pub async fn list(&self) -> ApiResult<Vec<User>> {
        let envelope: ListEnvelope<User> = self.gateway.get("/users").await?;
        Ok(envelope.into_items())
    }

    /// Roles assignable in the user form.
    pub async fn roles(&self) -> ApiResult<Vec<Role>> {
        let envelope: ListEnvelope<Role> = self.gateway.get("/roles").await?;
        Ok(envelope.into_items())
    }

    pub async fn create(&self, input: &UserInput) -> ApiResult<()> {
        self.gateway.post_unit("/users", input).await
    }

    pub async fn update(&self, id: i64, input: &UserInput) -> ApiResult<()> {
        self.gateway.put_unit(&format!("/users/{}", id), input).await
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.gateway.delete(&format!("/users/{}", id)).await
    }
}
