//! # Endpoint Contracts
//!
//! One module per entity, mirroring the dashboard's pages. Each module owns
//! the request/response types for its slice of the REST API and goes through
//! the [`Gateway`](crate::gateway::Gateway) for every call.
//!
//! ## Envelope Tolerance
//! The backend is not uniform about envelopes:
//! - `GET /products` returns a paginated `{data, meta}` envelope
//! - other list endpoints return either a bare array or `{data: [...]}`
//! - detail endpoints return either the record or `{data: record}`
//!
//! The untagged enums below absorb all of it so endpoint code stays typed.

pub mod auth;
pub mod categories;
pub mod products;
pub mod reports;
pub mod sales;
pub mod stock;
pub mod suppliers;
pub mod users;

pub use auth::{AuthApi, Credentials, LoginResponse, ProfileUpdate};
pub use categories::{CategoriesApi, CategoryInput};
pub use products::{ProductInput, ProductsApi};
pub use reports::ReportsApi;
pub use sales::SalesApi;
pub use stock::{StockApi, StockMovementInput};
pub use suppliers::{SupplierInput, SuppliersApi};
pub use users::{UserInput, UsersApi};

use serde::Deserialize;

// =============================================================================
// List Envelopes
// =============================================================================

/// A list response that may or may not be wrapped in `{data: [...]}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Wrapped { data: Vec<T> },
    Bare(Vec<T>),
}

impl<T> ListEnvelope<T> {
    /// Unwraps to the item list regardless of envelope shape.
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListEnvelope::Wrapped { data } => data,
            ListEnvelope::Bare(items) => items,
        }
    }
}

/// A detail response that may or may not be wrapped in `{data: record}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ItemEnvelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> ItemEnvelope<T> {
    pub fn into_item(self) -> T {
        match self {
            ItemEnvelope::Wrapped { data } => data,
            ItemEnvelope::Bare(item) => item,
        }
    }
}

// =============================================================================
// Pagination
// =============================================================================

/// Paginated envelope returned by the product list endpoint.
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: PageMeta,
}

/// Pagination metadata. `from`/`to` are null on an empty page.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    pub from: Option<i64>,
    pub to: Option<i64>,
    pub total: i64,
    pub last_page: i64,
}

impl Default for PageMeta {
    fn default() -> Self {
        PageMeta {
            from: None,
            to: None,
            total: 0,
            last_page: 1,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use inventario_core::Category;

    #[test]
    fn test_list_envelope_accepts_both_shapes() {
        let wrapped: ListEnvelope<Category> =
            serde_json::from_str(r#"{"data": [{"id": 1, "name": "Bebidas"}]}"#).unwrap();
        assert_eq!(wrapped.into_items().len(), 1);

        let bare: ListEnvelope<Category> =
            serde_json::from_str(r#"[{"id": 1, "name": "Bebidas"}]"#).unwrap();
        assert_eq!(bare.into_items()[0].name, "Bebidas");
    }

    #[test]
    fn test_item_envelope_accepts_both_shapes() {
        let wrapped: ItemEnvelope<Category> =
            serde_json::from_str(r#"{"data": {"id": 1, "name": "Bebidas"}}"#).unwrap();
        assert_eq!(wrapped.into_item().id, 1);

        let bare: ItemEnvelope<Category> =
            serde_json::from_str(r#"{"id": 2, "name": "Snacks"}"#).unwrap();
        assert_eq!(bare.into_item().id, 2);
    }

    #[test]
    fn test_page_meta_parses_backend_shape() {
        let json = r#"{
            "data": [{"id": 1, "name": "Bebidas"}],
            "meta": {"from": 1, "to": 10, "total": 42, "last_page": 5}
        }"#;
        let page: Page<Category> = serde_json::from_str(json).unwrap();
        assert_eq!(page.meta.total, 42);
        assert_eq!(page.meta.last_page, 5);
    }

    #[test]
    fn test_page_tolerates_missing_meta() {
        let page: Page<Category> = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert_eq!(page.meta.total, 0);
        assert_eq!(page.meta.last_page, 1);
        assert!(page.meta.from.is_none());
    }
}
