//! Local store for demo API keys.
//!
//! Keeps an ordered list of [`ApiKeyRecord`]s in a single named slot of a
//! [`Storage`] backend, the way the browser widget keeps them in
//! `localStorage`. Every change rewrites the whole slot.
//!
//! # Example
//!
//! ```rust
//! use key_store::{KeyStore, MemoryStorage, StoreOptions};
//!
//! let mut store = KeyStore::open(MemoryStorage::new(), StoreOptions::default()).unwrap();
//! let record = store
//!     .generate("550e8400-e29b-41d4-a716-446655440000", "Laptop")
//!     .unwrap();
//!
//! store.set_active(&record.id, false).unwrap();
//! assert!(!store.find(&record.id).unwrap().is_active);
//!
//! // Reopening the same backend sees the same list
//! let reopened = KeyStore::open(store.into_storage(), StoreOptions::default()).unwrap();
//! assert_eq!(reopened.len(), 1);
//! ```

pub mod configuration;
pub mod error;
pub mod notify;
pub mod record;
pub mod storage;
pub mod store;

pub use configuration::{Config, KeyConfig, StorageBackend};
pub use error::{KeyStoreError, Result, StorageError};
pub use notify::{LogNotifier, Notification, Notifier, Severity};
pub use record::{ApiKeyRecord, KeyDetails};
pub use storage::{FileStorage, MemoryStorage, SqliteStorage, Storage};
pub use store::{KeyStore, StoreOptions};
