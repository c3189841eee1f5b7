use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::RwLock;

use async_trait::async_trait;
use keyring::{Entry, Error as KeyringError};
use log::{debug, error};

use crate::constants::KEYRING_SERVICE_NAME;
use crate::error::{AppError, AppResult};

/// Key-value storage backing the session: one entry for the token, one for
/// the serialized profile.
#[async_trait]
pub trait SessionStorage: Send + Sync + Debug {
    async fn set_item(&self, key: &str, value: &str) -> AppResult<()>;
    async fn get_item(&self, key: &str) -> AppResult<Option<String>>;
    async fn remove_item(&self, key: &str) -> AppResult<()>;
}

/// Persistent storage in the OS keyring, one credential per key.
#[derive(Debug, Default)]
pub struct KeyringStorage;

impl KeyringStorage {
    fn entry(key: &str) -> AppResult<Entry> {
        Entry::new(KEYRING_SERVICE_NAME, key).map_err(|e| {
            error!(
                "Failed to create keyring entry - OS: {:?}, Error: {}",
                std::env::consts::OS,
                e
            );
            AppError::StorageError(format!("Failed to create keyring entry: {}", e))
        })
    }
}

#[async_trait]
impl SessionStorage for KeyringStorage {
    async fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        let entry = Self::entry(key)?;
        entry.set_password(value).map_err(|e| {
            error!("Failed to store `{}` in keyring: {}", key, e);
            AppError::StorageError(format!("Failed to store `{}`: {}", key, e))
        })?;
        debug!("Stored `{}` in OS keyring", key);
        Ok(())
    }

    async fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        let entry = Self::entry(key)?;
        match entry.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(KeyringError::NoEntry) => {
                debug!("No `{}` entry in keyring", key);
                Ok(None)
            }
            Err(e) => {
                error!("Keyring error reading `{}`: {}", key, e);
                Err(AppError::StorageError(format!(
                    "Failed to retrieve `{}` from keyring: {}",
                    key, e
                )))
            }
        }
    }

    async fn remove_item(&self, key: &str) -> AppResult<()> {
        let entry = Self::entry(key)?;
        match entry.delete_credential() {
            Ok(()) | Err(KeyringError::NoEntry) => Ok(()),
            Err(e) => {
                error!("Failed to clear `{}` from keyring: {}", key, e);
                Err(AppError::StorageError(format!(
                    "Failed to clear `{}`: {}",
                    key, e
                )))
            }
        }
    }
}

/// In-memory storage for development builds and tests. Nothing survives the
/// process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RwLock<HashMap<String, String>>,
}

#[async_trait]
impl SessionStorage for MemoryStorage {
    async fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        let mut items = self
            .items
            .write()
            .map_err(|e| AppError::StorageError(format!("Failed to write session storage: {}", e)))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        let items = self
            .items
            .read()
            .map_err(|e| AppError::StorageError(format!("Failed to read session storage: {}", e)))?;
        Ok(items.get(key).cloned())
    }

    async fn remove_item(&self, key: &str) -> AppResult<()> {
        let mut items = self
            .items
            .write()
            .map_err(|e| AppError::StorageError(format!("Failed to write session storage: {}", e)))?;
        items.remove(key);
        Ok(())
    }
}
