//! Pizzetta cart domain.
//!
//! Everything the storefront UI needs to reason about a shopping cart,
//! with no DOM or JS dependencies: line items, totals, the persistence
//! seam, and checkout validation. The WASM crate supplies the
//! `localStorage`-backed [`CartBackend`]; tests run against
//! [`InMemoryBackend`].

pub mod cart;
pub mod checkout;
pub mod storage;
pub mod store;

pub use cart::{Cart, LineItem, QtyChange};
pub use checkout::{
    CheckoutError, CheckoutRequest, OrderRecord, PAYMENT_STATUS_PENDING, validate_checkout,
};
pub use storage::{CartBackend, InMemoryBackend, StorageError};
pub use store::CartStore;
