//! # Sale Workflow
//!
//! Owns one [`SaleDraft`] and drives its submit/cancel protocol against the
//! backend through the gateway.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Sale Workflow States                               │
//! │                                                                         │
//! │   Editing ──── submit() ────► Submitting (one in-flight POST /sales)    │
//! │      ▲                              │                                   │
//! │      │                     success  │  rejection (422 / business)       │
//! │      │                        │     │                                   │
//! │      │            draft reset,│     │ draft left UNTOUCHED,             │
//! │      │            caller      │     │ backend message surfaced          │
//! │      │            refreshes   │     │ verbatim for correction           │
//! │      │            sale list   ▼     ▼                                   │
//! │      └──────────────────── Editing again                                │
//! │                                                                         │
//! │   cancel_draft(): local discard, no network call                        │
//! │   cancel_sale(id): backend-side cancel of an already-persisted sale     │
//! │                    (distinct operation; confirm with the user first)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Double submissions are not deduplicated here: a rapid second submit
//! issues a second request and the backend's semantics govern the outcome.

use inventario_core::{Money, Product, SaleDraft};

use crate::error::ApiResult;
use crate::gateway::Gateway;

/// Composition state for one sale being created.
#[derive(Debug)]
pub struct SaleWorkflow {
    gateway: Gateway,
    draft: SaleDraft,
}

impl SaleWorkflow {
    /// Starts with a fresh one-line draft.
    pub fn new(gateway: Gateway) -> Self {
        SaleWorkflow {
            gateway,
            draft: SaleDraft::new(),
        }
    }

    /// Read access to the draft for rendering.
    pub fn draft(&self) -> &SaleDraft {
        &self.draft
    }

    /// Mutable access for the editing operations (add/remove/set).
    pub fn draft_mut(&mut self) -> &mut SaleDraft {
        &mut self.draft
    }

    /// Advisory total against a catalog snapshot; pure passthrough.
    pub fn estimated_total(&self, catalog: &[Product]) -> Money {
        self.draft.compute_total(catalog)
    }

    /// Submits the draft as one atomic request.
    ///
    /// On success the draft is reset to a fresh instance and the caller
    /// should refresh the sale list. On ANY failure the draft is left
    /// untouched so the user can correct and resubmit.
    pub async fn submit(&mut self) -> ApiResult<()> {
        let request = self.draft.to_request();
        self.gateway.sales().create(&request).await?;
        self.draft.reset();
        Ok(())
    }

    /// Discards the draft immediately. No network call.
    pub fn cancel_draft(&mut self) {
        self.draft.reset();
    }

    /// Requests cancellation of an already-persisted sale (stock restored
    /// backend-side). Destructive: the view must obtain user confirmation
    /// before calling. Backend refusals surface verbatim.
    pub async fn cancel_sale(&self, sale_id: i64) -> ApiResult<()> {
        self.gateway.sales().cancel(sale_id).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::error::ApiError;
    use crate::session::SessionStore;
    use std::sync::Arc;

    /// Gateway pointed at a port nothing listens on: every request fails at
    /// the transport layer without leaving the machine.
    fn offline_gateway(dir: &tempfile::TempDir) -> Gateway {
        let mut config = ClientConfig::default();
        config.api.base_url = "http://127.0.0.1:1/api".to_string();
        config.api.timeout_secs = 2;
        config.api.connect_timeout_secs = 1;

        let store = Arc::new(SessionStore::load(dir.path().join("session.json")));
        Gateway::new(&config, store).unwrap()
    }

    #[test]
    fn test_cancel_draft_resets_without_network() {
        let dir = tempfile::tempdir().unwrap();
        let mut workflow = SaleWorkflow::new(offline_gateway(&dir));

        workflow.draft_mut().customer_name = "Ana".to_string();
        workflow.draft_mut().add_line();
        workflow.cancel_draft();

        assert_eq!(*workflow.draft(), SaleDraft::new());
    }

    #[tokio::test]
    async fn test_failed_submit_leaves_draft_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let mut workflow = SaleWorkflow::new(offline_gateway(&dir));

        workflow.draft_mut().customer_name = "Ana".to_string();
        workflow.draft_mut().set_product(0, Some(7));
        workflow.draft_mut().set_quantity(0, Some(3));
        let before = workflow.draft().clone();

        let result = workflow.submit().await;

        assert!(matches!(result, Err(ApiError::Transport(_))));
        assert_eq!(*workflow.draft(), before);
    }
}
