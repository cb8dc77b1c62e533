//! # Stock Movement Endpoints
//!
//! Stock is never mutated directly: every change is a recorded movement
//! (entrada = increase, salida = decrease, ajuste = absolute reset) and the
//! backend computes the before/after levels.

use serde::Serialize;
use tracing::debug;

use inventario_core::{MovementType, StockMovement};

use crate::endpoints::{ItemEnvelope, ListEnvelope};
use crate::error::ApiResult;
use crate::gateway::Gateway;

/// Stock movement form payload.
#[derive(Debug, Clone, Serialize)]
pub struct StockMovementInput {
    pub product_id: i64,
    #[serde(rename = "type")]
    pub movement_type: MovementType,
    /// For `ajuste` this is the NEW stock level, otherwise a delta.
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StockApi {
    gateway: Gateway,
}

impl StockApi {
    pub fn new(gateway: Gateway) -> Self {
        StockApi { gateway }
    }

    /// Lists movements, optionally filtered by type.
    pub async fn list(&self, filter: Option<MovementType>) -> ApiResult<Vec<StockMovement>> {
        debug!(?filter, "Listing stock movements");

        let query: Vec<(&str, String)> = match filter {
            Some(kind) => vec![("type", kind.to_string())],
            None => Vec::new(),
        };

        let envelope: ListEnvelope<StockMovement> =
            self.gateway.get_query("/stock-movements", &query).await?;
        Ok(envelope.into_items())
    }

    /// Records a movement. The returned record carries the backend-computed
    /// `stock_before`/`stock_after` for immediate display.
    pub async fn create(&self, input: &StockMovementInput) -> ApiResult<StockMovement> {
        let envelope: ItemEnvelope<StockMovement> =
            self.gateway.post("/stock-movements", input).await?;
        Ok(envelope.into_item())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_serializes_type_in_backend_vocabulary() {
        let input = StockMovementInput {
            product_id: 7,
            movement_type: MovementType::Entrada,
            quantity: 10,
            reason: Some("Compra a proveedor".to_string()),
        };

        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["type"], "entrada");
        assert_eq!(json["product_id"], 7);
    }

    #[test]
    fn test_input_omits_empty_reason() {
        let input = StockMovementInput {
            product_id: 7,
            movement_type: MovementType::Ajuste,
            quantity: 50,
            reason: None,
        };

        let json = serde_json::to_value(&input).unwrap();
        assert!(json.get("reason").is_none());
    }
}
