//! Read-only report aggregates consumed by the dashboard and reports views.

use inventario_core::{CategoryReport, Product, ReportSummary};

use crate::endpoints::ListEnvelope;
use crate::error::ApiResult;
use crate::gateway::Gateway;

#[derive(Debug, Clone)]
pub struct ReportsApi {
    gateway: Gateway,
}

impl ReportsApi {
    pub fn new(gateway: Gateway) -> Self {
        ReportsApi { gateway }
    }

    /// Headline counters plus total inventory value.
    pub async fn summary(&self) -> ApiResult<ReportSummary> {
        self.gateway.get("/reports/summary").await
    }

    /// Product/stock totals per category.
    pub async fn by_category(&self) -> ApiResult<Vec<CategoryReport>> {
        let envelope: ListEnvelope<CategoryReport> =
            self.gateway.get("/reports/by-category").await?;
        Ok(envelope.into_items())
    }

    /// Products at or below their minimum stock.
    pub async fn low_stock(&self) -> ApiResult<Vec<Product>> {
        let envelope: ListEnvelope<Product> = self.gateway.get("/reports/low-stock").await?;
        Ok(envelope.into_items())
    }
}
