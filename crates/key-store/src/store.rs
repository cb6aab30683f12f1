//! The key store: an ordered list of API key records kept in one storage slot.
//!
//! Every mutating operation rewrites the whole collection before returning,
//! so the in-memory list and the slot never drift apart.

use api_key::{KeyFormat, NetworkId};
use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use uuid::Uuid;

use crate::error::{KeyStoreError, Result};
use crate::record::{ApiKeyRecord, KeyDetails};
use crate::storage::Storage;

/// Slot holding the serialized collection.
pub const DEFAULT_SLOT: &str = "localplayer_api_keys";
/// Label used when the user leaves the name blank.
pub const DEFAULT_NAME: &str = "Untitled";
pub const DEFAULT_RATE_LIMIT: &str = "1000/hour";
pub const DEFAULT_EXPIRES_IN: &str = "1 year";
pub const DEFAULT_ENDPOINT_BASE: &str = "https://localplayer.vercel.app/api/";

/// Key values drawn before giving up on finding an unused one.
const MAX_KEY_ATTEMPTS: usize = 16;

/// Settings applied to new records and to persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    pub slot: String,
    pub format: KeyFormat,
    pub default_name: String,
    pub rate_limit: String,
    pub expires_in: String,
    pub endpoint_base: String,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            slot: DEFAULT_SLOT.to_string(),
            format: KeyFormat::default(),
            default_name: DEFAULT_NAME.to_string(),
            rate_limit: DEFAULT_RATE_LIMIT.to_string(),
            expires_in: DEFAULT_EXPIRES_IN.to_string(),
            endpoint_base: DEFAULT_ENDPOINT_BASE.to_string(),
        }
    }
}

/// Owns the API key collection and its storage backend.
pub struct KeyStore<S: Storage> {
    storage: S,
    options: StoreOptions,
    keys: Vec<ApiKeyRecord>,
    rng: SmallRng,
}

impl<S: Storage> KeyStore<S> {
    /// Open a store over `storage` and load whatever the slot holds.
    pub fn open(storage: S, options: StoreOptions) -> Result<Self> {
        Self::with_rng(storage, options, SmallRng::from_entropy())
    }

    /// Like [`KeyStore::open`] with a caller-provided generator for key values.
    pub fn with_rng(storage: S, options: StoreOptions, rng: SmallRng) -> Result<Self> {
        let mut store = Self {
            storage,
            options,
            keys: Vec::new(),
            rng,
        };
        store.load()?;
        Ok(store)
    }

    /// Replace the in-memory list with the slot contents.
    ///
    /// A missing or blank slot leaves the store empty. A slot that doesn't
    /// parse is reported as [`KeyStoreError::Corrupt`] and the list is left
    /// untouched.
    pub fn load(&mut self) -> Result<()> {
        match self.storage.get_item(&self.options.slot)? {
            Some(stored) if !stored.trim().is_empty() => {
                self.keys = serde_json::from_str(&stored).map_err(KeyStoreError::Corrupt)?;
                log::debug!(
                    "Loaded {} API keys from slot {}",
                    self.keys.len(),
                    self.options.slot
                );
            }
            _ => {
                self.keys.clear();
                log::debug!("Slot {} is empty", self.options.slot);
            }
        }
        Ok(())
    }

    /// Write the full collection to the slot.
    pub fn save(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.keys).map_err(KeyStoreError::Serialize)?;
        self.storage.set_item(&self.options.slot, &json)?;
        log::debug!(
            "Saved {} API keys to slot {}",
            self.keys.len(),
            self.options.slot
        );
        Ok(())
    }

    /// The collection in the slot format, pretty-printed.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.keys).map_err(KeyStoreError::Serialize)
    }

    /// Create a key for `network_uuid`, append it and persist.
    ///
    /// `name` is trimmed and replaced by the default label when blank.
    /// Validation failures leave the collection unchanged.
    pub fn generate(&mut self, network_uuid: &str, name: &str) -> Result<ApiKeyRecord> {
        let network = NetworkId::parse(network_uuid)?;

        let name = match name.trim() {
            "" => self.options.default_name.clone(),
            trimmed => trimmed.to_string(),
        };

        let key = self.unused_key()?;
        let record = ApiKeyRecord {
            id: self.unused_id(),
            key,
            name,
            network_uuid: network.into_string(),
            created_at: Utc::now(),
            is_active: true,
            rate_limit: self.options.rate_limit.clone(),
            expires_in: self.options.expires_in.clone(),
        };

        self.keys.push(record.clone());
        if let Err(e) = self.save() {
            self.keys.pop();
            return Err(e);
        }

        log::info!(
            "Generated API key {} ({}) for network {}",
            record.id,
            record.name,
            record.network_uuid
        );
        Ok(record)
    }

    fn unused_key(&mut self) -> Result<String> {
        for _ in 0..MAX_KEY_ATTEMPTS {
            let key = api_key::generate(&self.options.format, &mut self.rng);
            if self.find_by_key(&key).is_none() {
                return Ok(key);
            }
            log::warn!("Generated key collides with an existing one, drawing again");
        }
        Err(KeyStoreError::KeyCollision(MAX_KEY_ATTEMPTS))
    }

    fn unused_id(&self) -> String {
        loop {
            // UUIDv7 starts with the creation time in milliseconds
            let id = Uuid::now_v7().to_string();
            if self.find(&id).is_none() {
                return id;
            }
        }
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[ApiKeyRecord] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Lookup a record by id.
    pub fn find(&self, id: &str) -> Option<&ApiKeyRecord> {
        self.keys.iter().find(|record| record.id == id)
    }

    /// Lookup a record by its key value.
    pub fn find_by_key(&self, key: &str) -> Option<&ApiKeyRecord> {
        self.keys.iter().find(|record| record.key == key)
    }

    /// Lookup a record by key value when `reference` looks like one, by id otherwise.
    pub fn resolve(&self, reference: &str) -> Result<&ApiKeyRecord> {
        let found = if api_key::parse(reference, &self.options.format).is_ok() {
            self.find_by_key(reference)
        } else {
            self.find(reference)
        };
        found.ok_or_else(|| KeyStoreError::NotFound(reference.to_string()))
    }

    /// Open the details view of a record, by id or key value.
    pub fn details(&self, reference: &str) -> Result<KeyDetails> {
        let record = self.resolve(reference)?;
        Ok(KeyDetails::new(record, &self.options.endpoint_base))
    }

    /// Set the active flag of the record with `id` and persist.
    pub fn set_active(&mut self, id: &str, active: bool) -> Result<()> {
        let record = self
            .keys
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or_else(|| KeyStoreError::NotFound(id.to_string()))?;
        let previous = std::mem::replace(&mut record.is_active, active);

        if let Err(e) = self.save() {
            if let Some(record) = self.keys.iter_mut().find(|record| record.id == id) {
                record.is_active = previous;
            }
            return Err(e);
        }
        log::info!(
            "API key {} {}",
            id,
            if active { "activated" } else { "deactivated" }
        );
        Ok(())
    }

    /// Remove the record with `id`, keeping the order of the rest, and persist.
    pub fn delete(&mut self, id: &str) -> Result<ApiKeyRecord> {
        let index = self
            .keys
            .iter()
            .position(|record| record.id == id)
            .ok_or_else(|| KeyStoreError::NotFound(id.to_string()))?;
        let removed = self.keys.remove(index);

        if let Err(e) = self.save() {
            self.keys.insert(index, removed);
            return Err(e);
        }
        log::info!("Deleted API key {}", id);
        Ok(removed)
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give the backend back, e.g. to reopen it as a fresh store.
    pub fn into_storage(self) -> S {
        self.storage
    }
}
