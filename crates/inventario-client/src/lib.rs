//! # inventario-client: Backend Access Layer
//!
//! Everything between the pure core and the backend REST API: the gateway
//! that speaks HTTP, the endpoint contracts each view relies on, the
//! persisted session store, and the client configuration.
//!
//! ## Module Organization
//! ```text
//! inventario_client/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── config.rs       ◄─── ClientConfig (TOML file + env overrides)
//! ├── error.rs        ◄─── ApiError taxonomy + response normalization
//! ├── session.rs      ◄─── SessionStore (persisted across restarts)
//! ├── gateway.rs      ◄─── Gateway (bearer auth, timeouts, logging)
//! ├── workflow.rs     ◄─── SaleWorkflow (draft submit/cancel protocol)
//! └── endpoints/
//!     ├── mod.rs      ◄─── shared envelopes (lists, pagination)
//!     ├── auth.rs     ◄─── login / logout / profile
//!     ├── products.rs ◄─── paginated product CRUD
//!     ├── categories.rs
//!     ├── suppliers.rs
//!     ├── users.rs    ◄─── users + roles
//!     ├── sales.rs    ◄─── sale list/detail/create/cancel
//!     ├── stock.rs    ◄─── stock movements
//!     └── reports.rs  ◄─── read-only aggregates
//! ```
//!
//! ## Design Rule
//! The session is an explicit collaborator: the [`Gateway`] is constructed
//! with a [`SessionStore`] handle and reads the bearer token fresh on every
//! call. There is no ambient global anywhere in this crate.

pub mod config;
pub mod endpoints;
pub mod error;
pub mod gateway;
pub mod session;
pub mod workflow;

pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use gateway::Gateway;
pub use session::SessionStore;
pub use workflow::SaleWorkflow;
