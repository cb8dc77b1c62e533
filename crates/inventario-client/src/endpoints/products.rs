//! # Product Endpoints
//!
//! Paginated product CRUD. The list endpoint is the only paginated one in
//! the API and also powers the catalog used by the sale form's advisory
//! total, so it is the hottest path in the client.

use serde::Serialize;
use tracing::debug;

use inventario_core::{Money, Product};

use crate::endpoints::{ItemEnvelope, Page};
use crate::error::ApiResult;
use crate::gateway::Gateway;

/// Product form payload for create and update.
///
/// Sent as-is; required-field and range validation is the backend's job and
/// comes back as a 422 field map.
#[derive(Debug, Clone, Serialize)]
pub struct ProductInput {
    pub name: String,
    pub sku: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Money>,
    pub stock: i64,
    pub stock_min: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<i64>,
    pub active: bool,
}

/// Typed contract for the product endpoints.
#[derive(Debug, Clone)]
pub struct ProductsApi {
    gateway: Gateway,
}

impl ProductsApi {
    pub fn new(gateway: Gateway) -> Self {
        ProductsApi { gateway }
    }

    /// Paginated list with optional name/SKU search.
    pub async fn list(&self, search: Option<&str>, page: u32) -> ApiResult<Page<Product>> {
        debug!(?search, page, "Listing products");

        let mut query = vec![("page", page.to_string())];
        if let Some(term) = search {
            query.push(("search", term.to_string()));
        }

        self.gateway.get_query("/products", &query).await
    }

    /// Catalog snapshot for the sale form: the first page, unfiltered.
    ///
    /// The sale form only needs prices and stock labels for its advisory
    /// estimate; the backend rechecks everything at submit time.
    pub async fn catalog(&self) -> ApiResult<Vec<Product>> {
        Ok(self.list(None, 1).await?.data)
    }

    /// Single product for the edit form prefill.
    pub async fn get(&self, id: i64) -> ApiResult<Product> {
        let envelope: ItemEnvelope<Product> =
            self.gateway.get(&format!("/products/{}", id)).await?;
        Ok(envelope.into_item())
    }

    pub async fn create(&self, input: &ProductInput) -> ApiResult<()> {
        self.gateway.post_unit("/products", input).await
    }

    pub async fn update(&self, id: i64, input: &ProductInput) -> ApiResult<()> {
        self.gateway.put_unit(&format!("/products/{}", id), input).await
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.gateway.delete(&format!("/products/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_input_serializes_price_as_decimal_string() {
        let input = ProductInput {
            name: "Coca-Cola 330ml".to_string(),
            sku: "COKE-330".to_string(),
            description: None,
            price: Money::from_cents(1050),
            cost: Some(Money::from_cents(650)),
            stock: 24,
            stock_min: 10,
            category_id: Some(2),
            supplier_id: None,
            active: true,
        };

        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["price"], "10.50");
        assert_eq!(json["cost"], "6.50");
        assert!(json.get("description").is_none());
        assert!(json.get("supplier_id").is_none());
    }
}
