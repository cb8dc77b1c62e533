//! # Console Commands
//!
//! One module per page of the original dashboard. Every handler follows the
//! same cycle: fetch through the gateway, render, map validation failures to
//! fields, refetch after a mutation.

pub mod auth;
pub mod categories;
pub mod products;
pub mod reports;
pub mod sales;
pub mod stock;
pub mod suppliers;
pub mod users;

use inventario_client::{Gateway, SessionStore};

use crate::render::Theme;

/// Everything a page handler needs, passed explicitly (no globals).
pub struct Context {
    pub gateway: Gateway,
    pub json: bool,
}

impl Context {
    /// The session collaborator behind the gateway.
    pub fn session(&self) -> &SessionStore {
        self.gateway.session()
    }

    /// Theme derived from the persisted dark-mode flag.
    pub fn theme(&self) -> Theme {
        Theme::new(self.session().dark_mode())
    }
}
