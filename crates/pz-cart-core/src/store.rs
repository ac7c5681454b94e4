//! The cart store: in-memory cart plus its durable backend.
//!
//! This is the single mutation interface the UI layer talks to. Every
//! mutating operation synchronously rewrites the whole persisted slot; the
//! caller re-renders afterwards. A failed write is reported, not fatal: the
//! in-memory cart stays authoritative for the session.

use crate::cart::{Cart, QtyChange};
use crate::storage::{CartBackend, StorageError};

pub struct CartStore<B: CartBackend> {
    backend: B,
    cart: Cart,
}

impl<B: CartBackend> CartStore<B> {
    /// Load the persisted cart, or start empty when the slot is absent or
    /// holds something unreadable.
    pub fn open(backend: B) -> Self {
        let cart = backend
            .load()
            .map(|raw| Cart::from_json(&raw))
            .unwrap_or_default();
        Self { backend, cart }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn add_item(
        &mut self,
        name: &str,
        price: &str,
        image: &str,
        qty: u32,
    ) -> Result<(), StorageError> {
        self.cart.add(name, price, image, qty);
        self.persist()
    }

    pub fn remove_item(&mut self, name: &str) -> Result<bool, StorageError> {
        let removed = self.cart.remove(name);
        self.persist()?;
        Ok(removed)
    }

    pub fn set_quantity(&mut self, name: &str, qty: u32) -> Result<QtyChange, StorageError> {
        let change = self.cart.set_qty(name, qty);
        self.persist()?;
        Ok(change)
    }

    /// Empty the cart. Only a successful checkout calls this.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.cart.clear();
        self.persist()
    }

    fn persist(&self) -> Result<(), StorageError> {
        self.backend.store(&self.cart.to_json())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryBackend;

    #[test]
    fn opens_empty_when_the_slot_is_absent() {
        let store = CartStore::open(InMemoryBackend::default());
        assert!(store.cart().is_empty());
    }

    #[test]
    fn opens_empty_when_the_slot_holds_garbage() {
        let backend = InMemoryBackend::default();
        backend.store("][ definitely not a cart").unwrap();

        let store = CartStore::open(backend);
        assert!(store.cart().is_empty());
    }

    #[test]
    fn reopening_the_same_slot_reproduces_the_list() {
        let backend = InMemoryBackend::default();

        let mut store = CartStore::open(backend.clone());
        store.add_item("Margherita", "10", "img/m.png", 2).unwrap();
        store.add_item("Quattro Formaggi", "15", "img/q.png", 1).unwrap();
        store.set_quantity("Margherita", 4).unwrap();

        let reopened = CartStore::open(backend);
        assert_eq!(reopened.cart(), store.cart());
        assert_eq!(reopened.cart().total_qty(), 5);
    }

    #[test]
    fn every_mutation_rewrites_the_slot() {
        let backend = InMemoryBackend::default();
        let mut store = CartStore::open(backend.clone());

        store.add_item("Margherita", "10", "img/m.png", 2).unwrap();
        assert_eq!(CartStore::open(backend.clone()).cart().total_qty(), 2);

        store.set_quantity("Margherita", 0).unwrap();
        assert!(CartStore::open(backend.clone()).cart().is_empty());

        store.add_item("Diavola", "13", "img/d.png", 1).unwrap();
        store.clear().unwrap();
        assert!(CartStore::open(backend).cart().is_empty());
    }

    #[test]
    fn failed_writes_are_reported_but_keep_the_session_cart() {
        struct RejectingBackend;

        impl CartBackend for RejectingBackend {
            fn load(&self) -> Option<String> {
                None
            }
            fn store(&self, _raw: &str) -> Result<(), StorageError> {
                Err(StorageError::WriteRejected("quota exceeded".to_string()))
            }
        }

        let mut store = CartStore::open(RejectingBackend);
        let result = store.add_item("Margherita", "10", "img/m.png", 2);

        assert!(result.is_err());
        assert_eq!(store.cart().total_qty(), 2);
    }
}
