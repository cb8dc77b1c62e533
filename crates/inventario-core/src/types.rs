//! # Domain Types
//!
//! Core domain types used throughout the Inventario client. These mirror the
//! backend's JSON records; the backend is authoritative for every field.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      Sale       │   │  StockMovement  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id, sku        │   │  id             │   │  id             │       │
//! │  │  price (Money)  │   │  customer_name  │   │  type           │       │
//! │  │  stock/stock_min│   │  status, total  │   │  before/after   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   SaleStatus    │   │  MovementType   │   │  ReportSummary  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Completada     │   │  Entrada        │   │  counts +       │       │
//! │  │  Cancelada      │   │  Salida, Ajuste │   │  total_value    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Deserialization Tolerance
//! Different endpoints ship different slices of the same record (the low-stock
//! report omits prices, list rows omit relations). Optional and defaulted
//! fields keep one `Product` type decodable everywhere.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Identity
// =============================================================================

/// An authenticated staff member, as returned by login and profile endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// A role assignable to users (e.g. "admin", "vendedor").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
}

// =============================================================================
// Catalog Entities
// =============================================================================

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A supplier. All contact fields are optional free text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// A product record.
///
/// ## Field Notes
/// - `price`/`cost` arrive as two-decimal strings or numbers; see [`Money`]
/// - `stock` is the backend-maintained current level; the client never
///   mutates it directly (stock movements do, server-side)
/// - relation fields (`category`, `supplier`) are present only when the
///   endpoint eager-loads them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Money,
    #[serde(default)]
    pub cost: Option<Money>,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub stock_min: i64,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub supplier_id: Option<i64>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub supplier: Option<Supplier>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

impl Product {
    /// True when current stock has fallen to or below the configured minimum.
    ///
    /// Advisory display helper; the low-stock report itself is computed by
    /// the backend.
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.stock_min
    }
}

// =============================================================================
// Sale Status
// =============================================================================

/// The status of a persisted sale, in the backend's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaleStatus {
    /// Sale went through; stock was decremented.
    Completada,
    /// Sale was cancelled; stock was restored.
    Cancelada,
}

impl SaleStatus {
    /// Only completed sales can be cancelled (the backend rejects the rest).
    pub fn is_cancellable(&self) -> bool {
        matches!(self, SaleStatus::Completada)
    }
}

impl std::fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaleStatus::Completada => write!(f, "completada"),
            SaleStatus::Cancelada => write!(f, "cancelada"),
        }
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A persisted sale, as returned by the list and detail endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub status: SaleStatus,
    pub total: Money,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub items: Vec<SaleItem>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A line item within a persisted sale.
///
/// `price` and `subtotal` are the backend's frozen figures at sale time, not
/// the product's current price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleItem {
    #[serde(default)]
    pub product_id: Option<i64>,
    #[serde(default)]
    pub product: Option<Product>,
    pub price: Money,
    pub quantity: i64,
    pub subtotal: Money,
}

// =============================================================================
// Stock Movements
// =============================================================================

/// Kind of stock movement, in the backend's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    /// Stock increase (purchase, return).
    Entrada,
    /// Stock decrease (sale, damage).
    Salida,
    /// Absolute reset: quantity becomes the new stock level.
    Ajuste,
}

impl MovementType {
    /// For `Ajuste` the quantity field is the NEW stock level, not a delta.
    pub fn is_absolute(&self) -> bool {
        matches!(self, MovementType::Ajuste)
    }
}

impl std::fmt::Display for MovementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MovementType::Entrada => write!(f, "entrada"),
            MovementType::Salida => write!(f, "salida"),
            MovementType::Ajuste => write!(f, "ajuste"),
        }
    }
}

impl std::str::FromStr for MovementType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "entrada" => Ok(MovementType::Entrada),
            "salida" => Ok(MovementType::Salida),
            "ajuste" => Ok(MovementType::Ajuste),
            other => Err(format!(
                "unknown movement type: '{}'. Valid options: entrada, salida, ajuste",
                other
            )),
        }
    }
}

/// A recorded stock movement. `stock_before`/`stock_after` are computed and
/// returned by the backend; the client only ever submits the request side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockMovement {
    pub id: i64,
    #[serde(default)]
    pub product_id: Option<i64>,
    #[serde(default)]
    pub product: Option<Product>,
    #[serde(rename = "type")]
    pub movement_type: MovementType,
    pub quantity: i64,
    #[serde(default)]
    pub stock_before: i64,
    #[serde(default)]
    pub stock_after: i64,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Report Aggregates
// =============================================================================

/// Headline inventory counters for the dashboard and reports page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_products: i64,
    pub total_categories: i64,
    pub total_suppliers: i64,
    pub low_stock: i64,
    pub total_value: Money,
}

/// Per-category product/stock totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryReport {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub products_count: i64,
    #[serde(default)]
    pub products_sum_stock: Option<i64>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_type_parsing() {
        assert_eq!("entrada".parse::<MovementType>().unwrap(), MovementType::Entrada);
        assert_eq!("SALIDA".parse::<MovementType>().unwrap(), MovementType::Salida);
        assert_eq!("ajuste".parse::<MovementType>().unwrap(), MovementType::Ajuste);
        assert!("venta".parse::<MovementType>().is_err());
    }

    #[test]
    fn test_sale_status_wire_format() {
        let status: SaleStatus = serde_json::from_str("\"completada\"").unwrap();
        assert_eq!(status, SaleStatus::Completada);
        assert!(status.is_cancellable());

        let cancelled: SaleStatus = serde_json::from_str("\"cancelada\"").unwrap();
        assert!(!cancelled.is_cancellable());
    }

    #[test]
    fn test_product_decodes_full_record() {
        // Shape of a row from GET /products (price as a decimal string)
        let json = r#"{
            "id": 7,
            "name": "Coca-Cola 330ml",
            "sku": "COKE-330",
            "description": null,
            "price": "10.00",
            "cost": "6.50",
            "stock": 24,
            "stock_min": 10,
            "category_id": 2,
            "supplier_id": null,
            "active": true,
            "category": {"id": 2, "name": "Bebidas"}
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 7);
        assert_eq!(product.price.cents(), 1000);
        assert_eq!(product.cost.unwrap().cents(), 650);
        assert!(!product.is_low_stock());
        assert_eq!(product.category.unwrap().name, "Bebidas");
    }

    #[test]
    fn test_product_decodes_low_stock_slice() {
        // The low-stock report omits price/cost/relations entirely
        let json = r#"{"id": 3, "name": "Chips", "sku": "CHIP-01", "stock": 2, "stock_min": 5}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.is_low_stock());
        assert!(product.price.is_zero());
        assert!(product.active);
    }

    #[test]
    fn test_stock_movement_decodes_type_field() {
        let json = r#"{
            "id": 1,
            "product_id": 7,
            "type": "entrada",
            "quantity": 10,
            "stock_before": 5,
            "stock_after": 15,
            "reason": "Compra a proveedor"
        }"#;
        let movement: StockMovement = serde_json::from_str(json).unwrap();
        assert_eq!(movement.movement_type, MovementType::Entrada);
        assert_eq!(movement.stock_after, 15);
    }

    #[test]
    fn test_summary_accepts_numeric_total_value() {
        let json = r#"{
            "total_products": 42,
            "total_categories": 5,
            "total_suppliers": 3,
            "low_stock": 4,
            "total_value": 1234.5
        }"#;
        let summary: ReportSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_value.cents(), 123450);
    }
}
