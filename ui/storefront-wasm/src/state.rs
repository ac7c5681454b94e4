//! Cart store singleton.
//!
//! The store lives in a `RefCell`-wrapped `thread_local!` (WASM is
//! single-threaded) over a `localStorage` backend. It loads once, lazily, on
//! first access.

use pz_cart_core::{CartBackend, CartStore, StorageError};
use std::cell::RefCell;

/// The single durable slot the whole cart serializes into.
pub const CART_KEY: &str = "pz_cart";

pub struct LocalStorageBackend;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

impl CartBackend for LocalStorageBackend {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(CART_KEY).ok()?
    }

    fn store(&self, raw: &str) -> Result<(), StorageError> {
        let Some(storage) = local_storage() else {
            return Err(StorageError::Unavailable);
        };
        storage
            .set_item(CART_KEY, raw)
            .map_err(|e| StorageError::WriteRejected(format!("{e:?}")))
    }
}

thread_local! {
    static STORE: RefCell<CartStore<LocalStorageBackend>> =
        RefCell::new(CartStore::open(LocalStorageBackend));
}

/// Run a closure with shared read access to the store.
pub fn with_store<F, R>(f: F) -> R
where
    F: FnOnce(&CartStore<LocalStorageBackend>) -> R,
{
    STORE.with(|s| f(&s.borrow()))
}

/// Run a closure with mutable access to the store.
pub fn with_store_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut CartStore<LocalStorageBackend>) -> R,
{
    STORE.with(|s| f(&mut s.borrow_mut()))
}
