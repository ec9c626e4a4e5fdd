// Cache store for the enrichment response.
// Holds one JSON record on disk (or in memory for tests) with its fetch date.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tempfile::NamedTempFile;
use tokio::sync::RwLock;

use crate::error::{ProxyError, Result};

/// The single cache slot: the last enrichment payload and the day it was fetched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheRecord {
    /// Calendar date of the last successful upstream call, as `YYYY-MM-DD`.
    #[serde(default)]
    pub last_request_date: Option<NaiveDate>,
    /// Upstream payload from that call.
    #[serde(default)]
    pub data: Option<Value>,
}

impl CacheRecord {
    /// Create a record for a payload fetched on `date`.
    pub fn new(date: NaiveDate, data: Value) -> Self {
        Self {
            last_request_date: Some(date),
            data: Some(data),
        }
    }
}

/// Storage for the single cache record.
///
/// Implementations replace the record wholesale on `put`; there is no merging
/// and no locking between a `get` and a later `put`.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Load the stored record, or `None` if nothing has been stored yet.
    async fn get(&self) -> Result<Option<CacheRecord>>;

    /// Overwrite the stored record.
    async fn put(&self, record: &CacheRecord) -> Result<()>;
}

/// Read a cache record from a JSON file.
pub fn read_record(path: &Path) -> Result<Option<CacheRecord>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)?;
    let record: CacheRecord = serde_json::from_str(&contents)?;
    Ok(Some(record))
}

/// Write a cache record to a JSON file, replacing any previous contents.
///
/// Each write goes through its own temp file in the target directory, so
/// concurrent writers never share a partially written file; the last rename wins.
pub fn write_record(path: &Path, record: &CacheRecord) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    // Ensure parent directory exists
    fs::create_dir_all(parent)?;

    let json = serde_json::to_string(record)?;

    // Write atomically via a uniquely named temp file
    let mut file = NamedTempFile::new_in(parent)?;
    file.write_all(json.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;

    Ok(())
}

/// Cache store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct FileCacheStore {
    path: PathBuf,
}

impl FileCacheStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CacheStore for FileCacheStore {
    async fn get(&self) -> Result<Option<CacheRecord>> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || read_record(&path))
            .await
            .map_err(|e| ProxyError::Other(format!("cache read task failed: {}", e)))?
    }

    async fn put(&self, record: &CacheRecord) -> Result<()> {
        let path = self.path.clone();
        let record = record.clone();
        tokio::task::spawn_blocking(move || write_record(&path, &record))
            .await
            .map_err(|e| ProxyError::Other(format!("cache write task failed: {}", e)))?
    }
}

/// In-memory cache store, for tests and ephemeral deployments.
#[derive(Debug, Default)]
pub struct MemoryCacheStore {
    record: RwLock<Option<CacheRecord>>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `record`.
    pub fn with_record(record: CacheRecord) -> Self {
        Self {
            record: RwLock::new(Some(record)),
        }
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get(&self) -> Result<Option<CacheRecord>> {
        Ok(self.record.read().await.clone())
    }

    async fn put(&self, record: &CacheRecord) -> Result<()> {
        *self.record.write().await = Some(record.clone());
        Ok(())
    }
}
