//! JSON document store - one blob per storage key
//!
//! Each key holds a whole JSON value (an entity list or the settings object)
//! persisted as `<dir>/<key>.json` and rewritten wholesale on every change.
//! Writers are serialized; readers always see a complete file because writes
//! go through a temp file and a rename.

pub mod events;
pub mod seed;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tokio::sync::broadcast;

use crate::error::{StoreError, StoreResult};

pub use events::{ChangeKind, StoreEvent};

/// Directory where blobs are stored (relative to current dir)
pub const DEFAULT_DATA_DIR: &str = ".bantconfirm";

/// Capacity of the change-event channel
const EVENT_CAPACITY: usize = 100;

/// Keys under which the marketplace keeps its blobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageKey {
    #[serde(rename = "marketplaceProducts")]
    Products,
    #[serde(rename = "marketplaceVendors")]
    Vendors,
    #[serde(rename = "marketplaceLeads")]
    Leads,
    #[serde(rename = "marketplaceBlogs")]
    Blogs,
    #[serde(rename = "marketplaceVendorLogos")]
    VendorLogos,
    #[serde(rename = "marketplaceCategories")]
    Categories,
    #[serde(rename = "marketplaceUsers")]
    Users,
    #[serde(rename = "siteSettings")]
    SiteSettings,
}

impl StorageKey {
    pub const ALL: [StorageKey; 8] = [
        StorageKey::Products,
        StorageKey::Vendors,
        StorageKey::Leads,
        StorageKey::Blogs,
        StorageKey::VendorLogos,
        StorageKey::Categories,
        StorageKey::Users,
        StorageKey::SiteSettings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Products => "marketplaceProducts",
            StorageKey::Vendors => "marketplaceVendors",
            StorageKey::Leads => "marketplaceLeads",
            StorageKey::Blogs => "marketplaceBlogs",
            StorageKey::VendorLogos => "marketplaceVendorLogos",
            StorageKey::Categories => "marketplaceCategories",
            StorageKey::Users => "marketplaceUsers",
            StorageKey::SiteSettings => "siteSettings",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// File-backed key/value store of JSON blobs
pub struct JsonStore {
    /// Directory holding one `<key>.json` per key
    dir: PathBuf,
    /// Serializes read-modify-write cycles
    write_lock: Mutex<()>,
    /// Change notifications for SSE subscribers
    events: broadcast::Sender<StoreEvent>,
}

impl JsonStore {
    /// Open (and create if needed) a store rooted at `dir`
    pub fn open(dir: impl AsRef<Path>) -> StoreResult<Self> {
        let dir = PathBuf::from(dir.as_ref());
        fs::create_dir_all(&dir)?;
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
            events,
        })
    }

    /// Directory the store writes to
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: StorageKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }

    /// Whether a blob exists for `key`
    pub fn contains(&self, key: StorageKey) -> bool {
        self.path_for(key).exists()
    }

    /// Read the blob under `key`, `None` when it was never written
    pub fn load<T: DeserializeOwned>(&self, key: StorageKey) -> StoreResult<Option<T>> {
        let path = self.path_for(key);
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| StoreError::Corrupt {
                key: key.to_string(),
                source,
            })
    }

    /// Read the blob under `key`, writing `seed` first when absent
    pub fn load_or_seed<T, F>(&self, key: StorageKey, seed: F) -> StoreResult<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> T,
    {
        if let Some(value) = self.load(key)? {
            return Ok(value);
        }
        let _guard = self.write_lock.lock().map_err(|_| StoreError::LockPoisoned)?;
        // Another writer may have seeded while we waited
        if let Some(value) = self.load(key)? {
            return Ok(value);
        }
        let value = seed();
        self.write(key, &value)?;
        Ok(value)
    }

    /// Replace the blob under `key`
    pub fn save<T: Serialize>(&self, key: StorageKey, value: &T) -> StoreResult<()> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::LockPoisoned)?;
        self.write(key, value)
    }

    /// Read, mutate and write back the blob under `key` as one step
    ///
    /// `seed` provides the starting value when the key is absent. The write
    /// only happens when `f` returns `Ok`.
    pub fn update<T, R, E, S, F>(&self, key: StorageKey, seed: S, f: F) -> Result<R, E>
    where
        T: Serialize + DeserializeOwned,
        S: FnOnce() -> T,
        F: FnOnce(&mut T) -> Result<R, E>,
        E: From<StoreError>,
    {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::LockPoisoned)?;
        let mut value = match self.load(key)? {
            Some(v) => v,
            None => seed(),
        };
        let result = f(&mut value)?;
        self.write(key, &value)?;
        Ok(result)
    }

    /// Delete the blob under `key`
    pub fn remove(&self, key: StorageKey) -> StoreResult<bool> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::LockPoisoned)?;
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => {
                self.notify(key, ChangeKind::Removed);
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Subscribe to change notifications
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    fn write<T: Serialize>(&self, key: StorageKey, value: &T) -> StoreResult<()> {
        let content = serde_json::to_string_pretty(value)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &path)?;
        self.notify(key, ChangeKind::Saved);
        Ok(())
    }

    fn notify(&self, key: StorageKey, change: ChangeKind) {
        // No subscribers is fine
        let _ = self.events.send(StoreEvent::new(key, change));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_key_loads_none() {
        let dir = tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        let value: Option<Vec<String>> = store.load(StorageKey::Categories).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        store
            .save(StorageKey::Categories, &vec!["Software".to_string()])
            .unwrap();

        let value: Vec<String> = store.load(StorageKey::Categories).unwrap().unwrap();
        assert_eq!(value, vec!["Software"]);
        assert!(dir.path().join("marketplaceCategories.json").exists());
    }

    #[test]
    fn test_seed_written_once() {
        let dir = tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();

        let first: Vec<String> = store
            .load_or_seed(StorageKey::Categories, || vec!["Telecom".to_string()])
            .unwrap();
        let second: Vec<String> = store
            .load_or_seed(StorageKey::Categories, || vec!["ignored".to_string()])
            .unwrap();

        assert_eq!(first, second);
        assert!(store.contains(StorageKey::Categories));
    }

    #[test]
    fn test_corrupt_blob_is_reported() {
        let dir = tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        fs::write(dir.path().join("marketplaceLeads.json"), "{not json").unwrap();

        let err = store.load::<Vec<String>>(StorageKey::Leads).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { ref key, .. } if key == "marketplaceLeads"));
    }

    #[test]
    fn test_update_skips_write_on_error() {
        let dir = tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();

        let result: Result<(), StoreError> =
            store.update(StorageKey::Categories, Vec::<String>::new, |_| {
                Err(StoreError::LockPoisoned)
            });
        assert!(result.is_err());
        assert!(!store.contains(StorageKey::Categories));
    }

    #[test]
    fn test_writes_are_broadcast() {
        let dir = tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        let mut rx = store.subscribe();

        store.save(StorageKey::Leads, &Vec::<String>::new()).unwrap();
        store.remove(StorageKey::Leads).unwrap();

        let saved = rx.try_recv().unwrap();
        assert_eq!(saved.key, StorageKey::Leads);
        assert_eq!(saved.change, ChangeKind::Saved);
        assert_eq!(rx.try_recv().unwrap().change, ChangeKind::Removed);
    }

    #[test]
    fn test_key_names_match_wire_names() {
        for key in StorageKey::ALL {
            let wire = serde_json::to_value(key).unwrap();
            assert_eq!(wire, key.as_str());
        }
    }
}
