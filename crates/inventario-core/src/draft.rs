//! # Sale Draft Engine
//!
//! In-memory model of one sale being composed, before anything is persisted.
//! The draft is owned exclusively by the sale-creation view and discarded on
//! submit success or explicit cancel.
//!
//! ## Draft Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Sale Draft Lifecycle                                │
//! │                                                                         │
//! │  ┌──────────┐  add/remove/set  ┌──────────┐   submit    ┌──────────┐   │
//! │  │  Fresh   │─────────────────►│ Editing  │────────────►│Submitting│   │
//! │  │ (1 line) │                  │          │             │          │   │
//! │  └──────────┘                  └────▲─────┘             └────┬─────┘   │
//! │       ▲                             │                        │         │
//! │       │        reset() after        │  backend 422 /         │         │
//! │       │        backend success      │  business rejection    │         │
//! │       └─────────────────────────────┴────────────────────────┘         │
//! │                                                                         │
//! │  Rejection leaves the draft UNTOUCHED so the user corrects and          │
//! │  resubmits. cancel_draft = reset() with no network call.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At least one line is always present. Removing the last remaining line
//!   is a no-op; the engine defends this even though the view also hides
//!   the control, since callers may not.
//! - No field-level validation happens while editing. Positive quantities
//!   and valid product ids are enforced by the backend at submit time, which
//!   answers with per-field errors.
//! - The computed total is an ADVISORY estimate from the supplied catalog
//!   snapshot; the backend recomputes the authoritative total at persistence
//!   time, and the two may differ if prices changed concurrently.

use serde::Serialize;

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Draft Line
// =============================================================================

/// One product+quantity pair within a draft.
///
/// Both fields are optional because the form lets either be empty while
/// editing: a fresh line has no product selected, and the quantity input can
/// be cleared. Unset fields simply contribute zero to the estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftLine {
    pub product_id: Option<i64>,
    pub quantity: Option<i64>,
}

impl DraftLine {
    /// A fresh line: no product selected, quantity 1.
    pub const fn empty() -> Self {
        DraftLine {
            product_id: None,
            quantity: Some(1),
        }
    }
}

// =============================================================================
// Sale Draft
// =============================================================================

/// The mutable state of one in-progress sale.
///
/// `lines` is private so every mutation goes through the operations below,
/// which uphold the at-least-one-line invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleDraft {
    /// Optional customer name; empty means "general customer".
    pub customer_name: String,

    /// Optional free-text notes.
    pub notes: String,

    lines: Vec<DraftLine>,
}

impl SaleDraft {
    /// Creates a fresh draft: one unset line with quantity 1.
    pub fn new() -> Self {
        SaleDraft {
            customer_name: String::new(),
            notes: String::new(),
            lines: vec![DraftLine::empty()],
        }
    }

    /// Read-only view of the lines, in insertion (= display) order.
    pub fn lines(&self) -> &[DraftLine] {
        &self.lines
    }

    /// Number of lines currently in the draft.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Appends a fresh line to the end of the sequence. Always succeeds.
    pub fn add_line(&mut self) {
        self.lines.push(DraftLine::empty());
    }

    /// Removes the line at `index`.
    ///
    /// ## Behavior
    /// - More than one line and `index` in range: the line is removed.
    /// - Last remaining line, or `index` out of range: no-op.
    ///
    /// Returns whether a line was actually removed.
    pub fn remove_line(&mut self, index: usize) -> bool {
        if self.lines.len() <= 1 || index >= self.lines.len() {
            return false;
        }
        self.lines.remove(index);
        true
    }

    /// Sets the product of the line at `index`. Other lines are unaffected.
    ///
    /// Returns false (and changes nothing) if `index` is out of range.
    pub fn set_product(&mut self, index: usize, product_id: Option<i64>) -> bool {
        match self.lines.get_mut(index) {
            Some(line) => {
                line.product_id = product_id;
                true
            }
            None => false,
        }
    }

    /// Sets the quantity of the line at `index`. Other lines are unaffected.
    ///
    /// No range check on the value itself - validation is deferred to the
    /// backend at submit time.
    pub fn set_quantity(&mut self, index: usize, quantity: Option<i64>) -> bool {
        match self.lines.get_mut(index) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Advisory estimate for a single line: `price × quantity` against the
    /// supplied catalog, or zero when the product is unknown or the quantity
    /// is unset/zero.
    pub fn line_estimate(&self, index: usize, catalog: &[Product]) -> Money {
        self.lines
            .get(index)
            .map(|line| Self::estimate(line, catalog))
            .unwrap_or_else(Money::zero)
    }

    /// Advisory estimate of the whole draft: the sum of every line estimate,
    /// exact to the cent.
    ///
    /// Pure and side-effect free; recomputed from scratch on every call
    /// rather than cached, so it can never go stale against the draft.
    pub fn compute_total(&self, catalog: &[Product]) -> Money {
        self.lines
            .iter()
            .map(|line| Self::estimate(line, catalog))
            .sum()
    }

    fn estimate(line: &DraftLine, catalog: &[Product]) -> Money {
        let product = line
            .product_id
            .and_then(|id| catalog.iter().find(|p| p.id == id));

        match (product, line.quantity) {
            (Some(product), Some(qty)) if qty != 0 => product.price.multiply_quantity(qty),
            _ => Money::zero(),
        }
    }

    /// Discards all draft state and returns to the fresh one-line state.
    ///
    /// Used both for explicit cancel and after a successful submit.
    pub fn reset(&mut self) {
        *self = SaleDraft::new();
    }

    /// Builds the submission payload for `POST /sales`.
    ///
    /// Fields are sent as-is, unset ones included: the backend is the
    /// validator and answers with per-field errors for anything invalid.
    pub fn to_request(&self) -> CreateSaleRequest {
        CreateSaleRequest {
            customer_name: self.customer_name.clone(),
            notes: self.notes.clone(),
            items: self
                .lines
                .iter()
                .map(|line| SaleItemInput {
                    product_id: line.product_id,
                    quantity: line.quantity,
                })
                .collect(),
        }
    }
}

impl Default for SaleDraft {
    fn default() -> Self {
        SaleDraft::new()
    }
}

// =============================================================================
// Submission Payload
// =============================================================================

/// Wire payload for `POST /sales`: one atomic request carrying the customer
/// name, notes and the full line-item list.
#[derive(Debug, Clone, Serialize)]
pub struct CreateSaleRequest {
    pub customer_name: String,
    pub notes: String,
    pub items: Vec<SaleItemInput>,
}

/// One line item of the submission payload.
#[derive(Debug, Clone, Serialize)]
pub struct SaleItemInput {
    pub product_id: Option<i64>,
    pub quantity: Option<i64>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: i64, price_cents: i64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            sku: Some(format!("SKU-{}", id)),
            description: None,
            price: Money::from_cents(price_cents),
            cost: None,
            stock: 100,
            stock_min: 5,
            category_id: None,
            supplier_id: None,
            active: true,
            category: None,
            supplier: None,
            created_at: None,
        }
    }

    #[test]
    fn test_fresh_draft_has_one_unset_line() {
        let draft = SaleDraft::new();
        assert_eq!(draft.line_count(), 1);
        assert_eq!(draft.lines()[0], DraftLine::empty());
        assert_eq!(draft.lines()[0].quantity, Some(1));
    }

    #[test]
    fn test_add_line_appends_fresh_line() {
        let mut draft = SaleDraft::new();
        draft.set_product(0, Some(7));

        draft.add_line();

        assert_eq!(draft.line_count(), 2);
        assert_eq!(draft.lines()[1], DraftLine::empty());
    }

    #[test]
    fn test_remove_line_decreases_count_when_multiple() {
        let mut draft = SaleDraft::new();
        draft.add_line();
        draft.add_line();

        assert!(draft.remove_line(1));
        assert_eq!(draft.line_count(), 2);
    }

    #[test]
    fn test_remove_last_remaining_line_is_noop() {
        let mut draft = SaleDraft::new();
        draft.set_product(0, Some(7));

        assert!(!draft.remove_line(0));
        assert_eq!(draft.line_count(), 1);
        // The surviving line keeps its state; no reset happened.
        assert_eq!(draft.lines()[0].product_id, Some(7));
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut draft = SaleDraft::new();
        draft.add_line();

        assert!(!draft.remove_line(5));
        assert_eq!(draft.line_count(), 2);
    }

    #[test]
    fn test_add_then_remove_last_round_trips() {
        let mut draft = SaleDraft::new();
        draft.customer_name = "Ana".to_string();
        draft.set_product(0, Some(7));
        draft.set_quantity(0, Some(3));
        let before = draft.clone();

        draft.add_line();
        draft.remove_line(draft.line_count() - 1);

        assert_eq!(draft, before);
    }

    #[test]
    fn test_set_product_and_quantity_target_one_line() {
        let mut draft = SaleDraft::new();
        draft.add_line();

        assert!(draft.set_product(1, Some(9)));
        assert!(draft.set_quantity(1, Some(4)));

        assert_eq!(draft.lines()[0], DraftLine::empty());
        assert_eq!(draft.lines()[1].product_id, Some(9));
        assert_eq!(draft.lines()[1].quantity, Some(4));

        assert!(!draft.set_product(7, Some(1)));
        assert!(!draft.set_quantity(7, Some(1)));
    }

    #[test]
    fn test_compute_total_scenario() {
        // Draft {items: [{product_id: 7, quantity: 3}]}, catalog price 10.00
        let mut draft = SaleDraft::new();
        draft.set_product(0, Some(7));
        draft.set_quantity(0, Some(3));

        let catalog = vec![test_product(7, 1000)];
        assert_eq!(draft.compute_total(&catalog).to_string(), "30.00");
    }

    #[test]
    fn test_compute_total_empty_product_draft_is_zero() {
        let draft = SaleDraft::new();
        let catalog = vec![test_product(7, 1000)];
        assert_eq!(draft.compute_total(&catalog).to_string(), "0.00");
    }

    #[test]
    fn test_compute_total_skips_unknown_product_and_unset_quantity() {
        let mut draft = SaleDraft::new();
        draft.set_product(0, Some(999)); // not in catalog
        draft.set_quantity(0, Some(5));
        draft.add_line();
        draft.set_product(1, Some(7));
        draft.set_quantity(1, None); // cleared input
        draft.add_line();
        draft.set_product(2, Some(7));
        draft.set_quantity(2, Some(2));

        let catalog = vec![test_product(7, 550)];
        assert_eq!(draft.compute_total(&catalog).cents(), 1100);
    }

    #[test]
    fn test_compute_total_invariant_under_reordering() {
        let catalog = vec![test_product(1, 199), test_product(2, 350), test_product(3, 1000)];

        let mut forward = SaleDraft::new();
        forward.set_product(0, Some(1));
        forward.set_quantity(0, Some(2));
        forward.add_line();
        forward.set_product(1, Some(2));
        forward.set_quantity(1, Some(1));
        forward.add_line();
        forward.set_product(2, Some(3));
        forward.set_quantity(2, Some(4));

        let mut reversed = SaleDraft::new();
        reversed.set_product(0, Some(3));
        reversed.set_quantity(0, Some(4));
        reversed.add_line();
        reversed.set_product(1, Some(2));
        reversed.set_quantity(1, Some(1));
        reversed.add_line();
        reversed.set_product(2, Some(1));
        reversed.set_quantity(2, Some(2));

        assert_eq!(
            forward.compute_total(&catalog),
            reversed.compute_total(&catalog)
        );
    }

    #[test]
    fn test_line_estimate_per_row() {
        let mut draft = SaleDraft::new();
        draft.set_product(0, Some(7));
        draft.set_quantity(0, Some(2));

        let catalog = vec![test_product(7, 1050)];
        assert_eq!(draft.line_estimate(0, &catalog).to_string(), "21.00");
        assert!(draft.line_estimate(9, &catalog).is_zero());
    }

    #[test]
    fn test_reset_returns_to_fresh_state() {
        let mut draft = SaleDraft::new();
        draft.customer_name = "Ana".to_string();
        draft.notes = "urgente".to_string();
        draft.add_line();
        draft.set_product(0, Some(7));

        draft.reset();

        assert_eq!(draft, SaleDraft::new());
    }

    #[test]
    fn test_to_request_preserves_order_and_unset_fields() {
        let mut draft = SaleDraft::new();
        draft.customer_name = "Ana".to_string();
        draft.set_product(0, Some(7));
        draft.set_quantity(0, Some(3));
        draft.add_line(); // left unset on purpose

        let request = draft.to_request();
        assert_eq!(request.customer_name, "Ana");
        assert_eq!(request.items.len(), 2);
        assert_eq!(request.items[0].product_id, Some(7));
        assert_eq!(request.items[0].quantity, Some(3));
        assert_eq!(request.items[1].product_id, None);
    }
}
