//! # Sale Endpoints
//!
//! List/detail of persisted sales, draft submission, and cancellation of a
//! persisted sale. The in-memory draft itself lives in `inventario-core`;
//! this module is only its wire contract.

use tracing::{debug, info};

use inventario_core::{CreateSaleRequest, Sale};

use crate::endpoints::{ItemEnvelope, ListEnvelope};
use crate::error::ApiResult;
use crate::gateway::Gateway;

#[derive(Debug, Clone)]
pub struct SalesApi {
    gateway: Gateway,
}

impl SalesApi {
    pub fn new(gateway: Gateway) -> Self {
        SalesApi { gateway }
    }

    pub async fn list(&self) -> ApiResult<Vec<Sale>> {
        let envelope: ListEnvelope<Sale> = self.gateway.get("/sales").await?;
        Ok(envelope.into_items())
    }

    /// Detail for receipt rendering (includes line items and the seller).
    pub async fn get(&self, id: i64) -> ApiResult<Sale> {
        let envelope: ItemEnvelope<Sale> = self.gateway.get(&format!("/sales/{}", id)).await?;
        Ok(envelope.into_item())
    }

    /// Submits a draft as one atomic request.
    ///
    /// The response body is ignored on purpose: the backend is authoritative
    /// for the persisted sale, its totals and the stock decrement, and the
    /// caller refreshes the sale list instead of trusting a local echo.
    pub async fn create(&self, request: &CreateSaleRequest) -> ApiResult<()> {
        debug!(items = request.items.len(), "Submitting sale draft");
        self.gateway.post_unit("/sales", request).await?;
        info!(items = request.items.len(), "Sale registered");
        Ok(())
    }

    /// Cancels a persisted sale, restoring its stock backend-side.
    ///
    /// Destructive: callers must confirm with the user before dispatching.
    /// A refusal (e.g. sale already cancelled) surfaces the backend's
    /// message verbatim as [`ApiError::Business`](crate::ApiError::Business).
    pub async fn cancel(&self, id: i64) -> ApiResult<()> {
        self.gateway.put_empty(&format!("/sales/{}/cancel", id)).await?;
        info!(sale_id = id, "Sale cancelled");
        Ok(())
    }
}
