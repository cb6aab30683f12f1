//! Durable key-value slots.
//!
//! A [`Storage`] plays the role of the browser's `localStorage`: a flat map of
//! named slots holding strings. The key store keeps its whole collection in a
//! single slot and rewrites it on every change.
//!
//! Three implementations are provided:
//!
//! - [`MemoryStorage`] — in-memory, for tests and throwaway sessions
//! - [`FileStorage`] — one JSON file per slot in a directory
//! - [`SqliteStorage`] — one row per slot in a SQLite database

mod file;
mod memory;
mod sqlite;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

use crate::error::StorageError;

/// A named-slot string store.
pub trait Storage {
    /// Read a slot. Returns `Ok(None)` if the slot was never written.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a slot, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a slot. Removing a missing slot is not an error.
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}
