// ABOUTME: Durable storage of the FieldMapping under the movie_mapping key.
// ABOUTME: Provides the MappingStore trait, a JSON-file key/value store, and an in-memory store.

//! Mapping persistence.
//!
//! Stores behave like a browser profile's key/value storage: each key holds a
//! JSON-encoded string, and a save always replaces the whole value.

use std::collections::{BTreeMap, HashMap};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use reelcopy_scout::origin_of;
use thiserror::Error;

use crate::mapping::FieldMapping;

/// Storage key of the persisted mapping.
pub const MAPPING_KEY: &str = "movie_mapping";

/// Errors raised by mapping stores.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode or decode mapping: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// How widely a saved mapping is shared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StorageScope {
    /// One mapping for the whole profile, whatever site hosts the form.
    #[default]
    Profile,
    /// One mapping per destination origin.
    Origin,
}

impl StorageScope {
    /// Storage key for a page under this scope.
    pub fn key_for(&self, page_url: &str) -> String {
        match self {
            StorageScope::Profile => MAPPING_KEY.to_string(),
            StorageScope::Origin => match origin_of(page_url) {
                Some(origin) => format!("{}@{}", MAPPING_KEY, origin),
                None => MAPPING_KEY.to_string(),
            },
        }
    }
}

/// Durable key/value storage for field mappings.
#[allow(async_fn_in_trait)]
pub trait MappingStore {
    /// Reads the mapping stored under `key`, if any.
    async fn load(&self, key: &str) -> Result<Option<FieldMapping>, StoreError>;

    /// Replaces whatever is stored under `key`.
    async fn save(&self, key: &str, mapping: &FieldMapping) -> Result<(), StoreError>;
}

impl<S: MappingStore> MappingStore for &S {
    async fn load(&self, key: &str) -> Result<Option<FieldMapping>, StoreError> {
        (**self).load(key).await
    }

    async fn save(&self, key: &str, mapping: &FieldMapping) -> Result<(), StoreError> {
        (**self).save(key, mapping).await
    }
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw JSON string stored under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }
}

impl MappingStore for MemoryStore {
    async fn load(&self, key: &str) -> Result<Option<FieldMapping>, StoreError> {
        match self.raw(key) {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, key: &str, mapping: &FieldMapping) -> Result<(), StoreError> {
        let raw = serde_json::to_string(mapping)?;
        self.values
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), raw);
        Ok(())
    }
}

/// A JSON file holding an object of key -> JSON-encoded string.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The raw JSON string stored under `key`.
    pub async fn raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all().await?.remove(key))
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) if text.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_all(&self, values: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let body = serde_json::to_string_pretty(values)?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        tokio::fs::write(&tmp, body).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

impl MappingStore for JsonFileStore {
    async fn load(&self, key: &str) -> Result<Option<FieldMapping>, StoreError> {
        match self.raw(key).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, key: &str, mapping: &FieldMapping) -> Result<(), StoreError> {
        let mut values = self.read_all().await?;
        values.insert(key.to_string(), serde_json::to_string(mapping)?);
        self.write_all(&values).await?;
        tracing::debug!(path = %self.path.display(), key, "wrote mapping");
        Ok(())
    }
}
