//! Persistence seam.
//!
//! The whole cart lives in one key-value slot, serialized as a single JSON
//! array. Backends only move strings; (de)serialization stays in the store.

use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage write rejected: {0}")]
    WriteRejected(String),
}

/// A durable slot for the serialized cart. Reads that find nothing return
/// `None`; writes overwrite unconditionally (last-writer-wins, no merge).
pub trait CartBackend {
    fn load(&self) -> Option<String>;
    fn store(&self, raw: &str) -> Result<(), StorageError>;
}

/// Shared in-memory slot, used by tests to simulate persist-then-reload.
/// Clones share the same slot.
#[derive(Clone, Default)]
pub struct InMemoryBackend {
    slot: Rc<RefCell<Option<String>>>,
}

impl CartBackend for InMemoryBackend {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn store(&self, raw: &str) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(raw.to_string());
        Ok(())
    }
}
