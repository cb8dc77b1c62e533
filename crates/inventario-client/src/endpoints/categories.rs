//! Category endpoints: flat list plus create/update/delete.

use serde::Serialize;

use inventario_core::Category;

use crate::endpoints::ListEnvelope;
use crate::error::ApiResult;
use crate::gateway::Gateway;

/// Category form payload.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CategoriesApi {
    gateway: Gateway,
}

impl CategoriesApi {
    pub fn new(gateway: Gateway) -> Self {
        CategoriesApi { gateway }
    }

    pub async fn list(&self) -> ApiResult<Vec<Category>> {
        let envelope: ListEnvelope<Category> = self.gateway.get("/categories").await?;
        Ok(envelope.into_items())
    }

    pub async fn create(&self, input: &CategoryInput) -> ApiResult<()> {
        self.gateway.post_unit("/categories", input).await
    }

    pub async fn update(&self, id: i64, input: &CategoryInput) -> ApiResult<()> {
        self.gateway.put_unit(&format!("/categories/{}", id), input).await
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.gateway.delete(&format!("/categories/{}", id)).await
    }
}
