//! Supplier endpoints: flat list plus create/update/delete.

use serde::Serialize;

use inventario_core::Supplier;

use crate::endpoints::ListEnvelope;
use crate::error::ApiResult;
use crate::gateway::Gateway;

/// Supplier form payload. Contact fields are optional free text.
#[derive(Debug, Clone, Serialize)]
pub struct SupplierInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SuppliersApi {
    gateway: Gateway,
}

impl SuppliersApi {
    pub fn new(gateway: Gateway) -> Self {
        SuppliersApi { gateway }
    }

    pub async fn list(&self) -> ApiResult<Vec<Supplier>> {
        let envelope: ListEnvelope<Supplier> = self.gateway.get("/suppliers").await?;
        Ok(envelope.into_items())
    }

    pub async fn create(&self, input: &SupplierInput) -> ApiResult<()> {
        self.gateway.post_unit("/suppliers", input).await
    }

    pub async fn update(&self, id: i64, input: &SupplierInput) -> ApiResult<()> {
        self.gateway.put_unit(&format!("/suppliers/{}", id), input).await
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.gateway.delete(&format!("/suppliers/{}", id)).await
    }
}
