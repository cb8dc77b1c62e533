//! # inventario-core: Pure Client Logic for Inventario
//!
//! This crate is the **heart** of the Inventario admin client. It contains
//! every piece of client-side logic as pure functions with zero I/O
//! dependencies. All authoritative business rules (stock arithmetic,
//! persisted totals, permission enforcement) live in the backend API;
//! what remains here is the state the client genuinely owns.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Inventario Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/console                                 │   │
//! │  │    login ──► products ──► sales new ──► reports                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 inventario-client                               │   │
//! │  │    Gateway (REST) • SessionStore (disk) • endpoints             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ inventario-core (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   money   │  │   draft   │  │  session  │   │   │
//! │  │   │  Product  │  │   Money   │  │ SaleDraft │  │  Session  │   │   │
//! │  │   │   Sale    │  │  decimal  │  │ DraftLine │  │  grants   │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Sale, StockMovement, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`draft`] - In-progress sale composition and its advisory total
//! - [`session`] - Who is logged in, what they may do, how the UI is themed
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, terminal access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Advisory Only**: Totals computed here are estimates; the backend's
//!    persisted figures are authoritative

// =============================================================================
// Module Declarations
// =============================================================================

pub mod draft;
pub mod money;
pub mod session;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use inventario_core::Money` instead of
// `use inventario_core::money::Money`

pub use draft::{CreateSaleRequest, DraftLine, SaleDraft, SaleItemInput};
pub use money::{Money, ParseMoneyError};
pub use session::Session;
pub use types::*;
