//! Registry store contract and the in-process implementation.
//!
//! Ingestion only ever uses [`RegistryStore::bulk_replace`]; the point
//! operations exist for the management API. Whatever backs the trait must
//! make the replace atomic: readers see the previous generation or the new
//! one in full, never a mixture and never an empty mid-state.

use crate::parse::AddressRecord;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use thiserror::Error;

/// Backing-store failure. Fatal for the operation in progress; surfaced to
/// API callers as a server error and never retried here.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Authoritative mapping from address to its record.
#[async_trait]
pub trait RegistryStore: Send + Sync {
    /// Point lookup by address.
    async fn get(&self, address: &str) -> Result<Option<AddressRecord>, StoreError>;

    /// Insert or overwrite one record, keyed by its address.
    async fn put(&self, record: AddressRecord) -> Result<(), StoreError>;

    /// Remove one record. Returns false if the address was absent.
    async fn delete(&self, address: &str) -> Result<bool, StoreError>;

    /// Full unordered dump of the current generation.
    async fn scan(&self) -> Result<Vec<AddressRecord>, StoreError>;

    /// Atomically substitute the entire contents with `records`.
    async fn bulk_replace(&self, records: Vec<AddressRecord>) -> Result<(), StoreError>;
}

/// In-process store: one map behind a reader/writer lock. `bulk_replace`
/// builds the next generation outside the lock and swaps the whole map
/// under one write guard, which is what makes the transition atomic for
/// concurrent readers.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, AddressRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> StoreError {
    StoreError::Unavailable("registry lock poisoned".to_string())
}

#[async_trait]
impl RegistryStore for MemoryStore {
    async fn get(&self, address: &str) -> Result<Option<AddressRecord>, StoreError> {
        let records = self.records.read().map_err(|_| poisoned())?;
        Ok(records.get(address).cloned())
    }

    async fn put(&self, record: AddressRecord) -> Result<(), StoreError> {
        let mut records = self.records.write().map_err(|_| poisoned())?;
        records.insert(record.address.clone(), record);
        Ok(())
    }

    async fn delete(&self, address: &str) -> Result<bool, StoreError> {
        let mut records = self.records.write().map_err(|_| poisoned())?;
        Ok(records.remove(address).is_some())
    }

    async fn scan(&self) -> Result<Vec<AddressRecord>, StoreError> {
        let records = self.records.read().map_err(|_| poisoned())?;
        Ok(records.values().cloned().collect())
    }

    async fn bulk_replace(&self, records: Vec<AddressRecord>) -> Result<(), StoreError> {
        let next: HashMap<String, AddressRecord> = records
            .into_iter()
            .map(|r| (r.address.clone(), r))
            .collect();

        let mut current = self.records.write().map_err(|_| poisoned())?;
        *current = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn record(address: &str, name: &str) -> AddressRecord {
        AddressRecord {
            address: address.to_string(),
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_put_get_delete() {
        let store = MemoryStore::new();

        store.put(record("1.2.3.4", "test")).await.unwrap();
        let found = store.get("1.2.3.4").await.unwrap().unwrap();
        assert_eq!(found.name, "test");

        assert!(store.delete("1.2.3.4").await.unwrap());
        assert!(store.get("1.2.3.4").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_absent_reports_not_found() {
        let store = MemoryStore::new();
        assert!(!store.delete("9.9.9.9").await.unwrap());
    }

    #[tokio::test]
    async fn test_put_overwrites_by_address() {
        let store = MemoryStore::new();
        store.put(record("1.2.3.4", "first")).await.unwrap();
        store.put(record("1.2.3.4", "second")).await.unwrap();

        let found = store.get("1.2.3.4").await.unwrap().unwrap();
        assert_eq!(found.name, "second");
        assert_eq!(store.scan().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_bulk_replace_supersedes_everything() {
        let store = MemoryStore::new();
        store.put(record("1.1.1.1", "old")).await.unwrap();
        store.put(record("2.2.2.2", "old")).await.unwrap();

        store
            .bulk_replace(vec![record("3.3.3.3", "new"), record("4.4.4.4", "new")])
            .await
            .unwrap();

        let addresses: HashSet<String> = store
            .scan()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.address)
            .collect();
        assert_eq!(
            addresses,
            HashSet::from(["3.3.3.3".to_string(), "4.4.4.4".to_string()])
        );
    }

    #[tokio::test]
    async fn test_bulk_replace_empty_clears() {
        let store = MemoryStore::new();
        store.put(record("1.1.1.1", "old")).await.unwrap();

        store.bulk_replace(Vec::new()).await.unwrap();
        assert!(store.scan().await.unwrap().is_empty());
    }

    // A scan racing a replace must see a complete generation: all three
    // old records or both new ones, never a blend or an empty mid-state.
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_scan_never_observes_partial_replace() {
        let store = Arc::new(MemoryStore::new());

        let old_gen = vec![
            record("1.1.1.1", "old"),
            record("2.2.2.2", "old"),
            record("3.3.3.3", "old"),
        ];
        let new_gen = vec![record("4.4.4.4", "new"), record("5.5.5.5", "new")];

        store.bulk_replace(old_gen.clone()).await.unwrap();

        let writer = {
            let store = store.clone();
            tokio::spawn(async move {
                for _ in 0..200 {
                    store.bulk_replace(new_gen.clone()).await.unwrap();
                    store.bulk_replace(old_gen.clone()).await.unwrap();
                }
            })
        };

        let reader = {
            let store = store.clone();
            tokio::spawn(async move {
                for _ in 0..200 {
                    let scanned = store.scan().await.unwrap();
                    let names: HashSet<&str> =
                        scanned.iter().map(|r| r.name.as_str()).collect();
                    // One generation at a time.
                    assert_eq!(names.len(), 1, "mixed generations observed");
                    match scanned.len() {
                        3 => assert!(names.contains("old")),
                        2 => assert!(names.contains("new")),
                        n => panic!("partial generation of {} records observed", n),
                    }
                }
            })
        };

        writer.await.unwrap();
        reader.await.unwrap();
    }
}
