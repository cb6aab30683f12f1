use std::path::{Path, PathBuf};

use api_key::{DEFAULT_HEX_LEN, DEFAULT_PREFIX, KeyFormat};
use serde::Deserialize;

use crate::error::{KeyStoreError, Result};
use crate::storage::{FileStorage, MemoryStorage, SqliteStorage, Storage};
use crate::store::{
    DEFAULT_ENDPOINT_BASE, DEFAULT_EXPIRES_IN, DEFAULT_NAME, DEFAULT_RATE_LIMIT, DEFAULT_SLOT,
    KeyStore, StoreOptions,
};

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub slot: String,
    pub storage: StorageBackend,
    pub keys: KeyConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            slot: DEFAULT_SLOT.to_string(),
            storage: StorageBackend::default(),
            keys: KeyConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase", deny_unknown_fields)]
pub enum StorageBackend {
    Memory,
    File { dir: PathBuf },
    Sqlite { path: PathBuf },
}

impl Default for StorageBackend {
    fn default() -> Self {
        StorageBackend::File {
            dir: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyConfig {
    pub prefix: String,
    pub hex_len: usize,
    pub default_name: String,
    pub rate_limit: String,
    pub expires_in: String,
    pub endpoint_base: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            hex_len: DEFAULT_HEX_LEN,
            default_name: DEFAULT_NAME.to_string(),
            rate_limit: DEFAULT_RATE_LIMIT.to_string(),
            expires_in: DEFAULT_EXPIRES_IN.to_string(),
            endpoint_base: DEFAULT_ENDPOINT_BASE.to_string(),
        }
    }
}

impl Config {
    /// Read and validate a YAML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.slot.trim().is_empty() {
            return Err(KeyStoreError::Config("slot name must not be empty".to_string()));
        }
        if self.keys.prefix.is_empty() {
            return Err(KeyStoreError::Config("key prefix must not be empty".to_string()));
        }
        if self.keys.hex_len == 0 {
            return Err(KeyStoreError::Config(
                "key hex_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            slot: self.slot.clone(),
            format: KeyFormat::new(self.keys.prefix.clone()).with_hex_len(self.keys.hex_len),
            default_name: self.keys.default_name.clone(),
            rate_limit: self.keys.rate_limit.clone(),
            expires_in: self.keys.expires_in.clone(),
            endpoint_base: self.keys.endpoint_base.clone(),
        }
    }

    /// Open the configured backend. Relative paths are taken from `base_path`.
    pub fn open_storage(&self, base_path: &Path) -> Result<Box<dyn Storage>> {
        let resolve = |path: &Path| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                base_path.join(path)
            }
        };

        let storage: Box<dyn Storage> = match &self.storage {
            StorageBackend::Memory => Box::new(MemoryStorage::new()),
            StorageBackend::File { dir } => Box::new(FileStorage::open(resolve(dir))?),
            StorageBackend::Sqlite { path } => Box::new(SqliteStorage::open(resolve(path))?),
        };
        Ok(storage)
    }

    pub fn open_store(&self, base_path: &Path) -> Result<KeyStore<Box<dyn Storage>>> {
        KeyStore::open(self.open_storage(base_path)?, self.store_options())
    }
}
