// src/repositories/collection_store.rs
//
// CollectionStore: the only owner of the persisted collection.
//
// RULES:
// - The whole list lives as one JSON array under one key
// - Every mutation is load -> change -> save of the full list
// - Reads never fail: missing or corrupt data is an empty list
// - Write failures propagate untouched

use std::sync::Arc;

use crate::domain::record::{validate_unique_ids, CollectionList, CollectionRecord, RecordId};
use crate::error::AppResult;
use crate::repositories::KeyValueRepository;

/// Default storage key for the collection
pub const DEFAULT_STORAGE_KEY: &str = "mangaCollection";

/// Durable storage of the collection list
///
/// Ordering contract: the list is newest-first. `add` inserts at
/// index 0, `update` keeps a record at its position. Alternate
/// backends must not append at the end.
///
/// The load-then-save pattern assumes a single active writer.
pub struct CollectionStore {
    repo: Arc<dyn KeyValueRepository>,
    key: String,
}

impl CollectionStore {
    pub fn new(repo: Arc<dyn KeyValueRepository>, key: impl Into<String>) -> Self {
        Self {
            repo,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the full list
    ///
    /// Absent key, backend read error and unparseable JSON all yield an
    /// empty list. The next save overwrites whatever was there.
    pub fn load_all(&self) -> CollectionList {
        let raw = match self.repo.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("Reading '{}' failed, treating as empty: {}", self.key, e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<CollectionList>(&raw) {
            Ok(list) => {
                if let Err(e) = validate_unique_ids(&list) {
                    log::warn!("Collection under '{}' breaks an invariant: {}", self.key, e);
                }
                log::debug!("Loaded {} records from '{}'", list.len(), self.key);
                list
            }
            Err(e) => {
                log::warn!("Stored value under '{}' is corrupt, treating as empty: {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Serialize and overwrite the full list
    pub fn save_all(&self, list: &[CollectionRecord]) -> AppResult<()> {
        let raw = serde_json::to_string(list)?;
        self.repo.set(&self.key, &raw)?;
        log::debug!("Saved {} records to '{}'", list.len(), self.key);
        Ok(())
    }

    pub fn find(&self, id: &RecordId) -> Option<CollectionRecord> {
        self.load_all().into_iter().find(|r| &r.id == id)
    }

    /// Insert at the front (newest-first)
    pub fn add(&self, record: CollectionRecord) -> AppResult<()> {
        let mut list = self.load_all();
        list.insert(0, record);
        self.save_all(&list)
    }

    /// Replace the first record with `id` in place
    ///
    /// Unknown id is a silent no-op; nothing is written.
    pub fn update(&self, id: &RecordId, record: CollectionRecord) -> AppResult<()> {
        let mut list = self.load_all();

        match list.iter_mut().find(|r| &r.id == id) {
            Some(slot) => {
                *slot = record;
                self.save_all(&list)
            }
            None => {
                log::debug!("Update skipped, no record with id {}", id);
                Ok(())
            }
        }
    }

    /// Drop every record with `id`
    pub fn remove(&self, id: &RecordId) -> AppResult<()> {
        let mut list = self.load_all();
        list.retain(|r| &r.id != id);
        self.save_all(&list)
    }

    /// Delete the storage key entirely
    pub fn clear(&self) -> AppResult<()> {
        self.repo.remove(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::Genre;
    use crate::error::AppError;
    use crate::repositories::{InMemoryKeyValueRepository, MockKeyValueRepository};

    fn record(id: &str, title: &str) -> CollectionRecord {
        CollectionRecord::new(
            RecordId::new(id),
            title.to_string(),
            "Author".to_string(),
            Genre::Shonen,
            2000,
            None,
        )
    }

    fn store() -> (Arc<InMemoryKeyValueRepository>, CollectionStore) {
        let repo = Arc::new(InMemoryKeyValueRepository::new());
        let store = CollectionStore::new(repo.clone(), DEFAULT_STORAGE_KEY);
        (repo, store)
    }

    fn ids(list: &[CollectionRecord]) -> Vec<&str> {
        list.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_missing_key_loads_empty() {
        let (_, store) = store();
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn test_corrupt_value_loads_empty_and_heals_on_save() {
        let (repo, store) = store();
        repo.set(DEFAULT_STORAGE_KEY, "{not json").unwrap();
        assert!(store.load_all().is_empty());

        repo.set(DEFAULT_STORAGE_KEY, r#"{"id":"1"}"#).unwrap();
        assert!(store.load_all().is_empty());

        store.add(record("1", "Naruto")).unwrap();
        assert_eq!(ids(&store.load_all()), vec!["1"]);
    }

    #[test]
    fn test_backend_read_error_loads_empty() {
        let mut repo = MockKeyValueRepository::new();
        repo.expect_get()
            .returning(|_| Err(AppError::Pool("unavailable".to_string())));

        let store = CollectionStore::new(Arc::new(repo), DEFAULT_STORAGE_KEY);
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn test_save_then_load_is_identity() {
        let (_, store) = store();
        let mut with_cover = record("2", "Akira");
        with_cover.cover = Some(url::Url::parse("https://example.com/akira.png").unwrap());
        let list = vec![with_cover, record("1", "Naruto")];

        store.save_all(&list).unwrap();
        assert_eq!(store.load_all(), list);

        store.save_all(&store.load_all()).unwrap();
        assert_eq!(store.load_all(), list);
    }

    #[test]
    fn test_storage_layout() {
        let (repo, store) = store();
        store.add(record("7", "Dragon Ball")).unwrap();

        let raw = repo.get(DEFAULT_STORAGE_KEY).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "id": "7",
                "title": "Dragon Ball",
                "author": "Author",
                "genre": "Shonen",
                "year": 2000,
                "cover": null
            }])
        );
    }

    #[test]
    fn test_add_inserts_at_front() {
        let (_, store) = store();
        store.add(record("1", "First")).unwrap();
        store.add(record("2", "Second")).unwrap();

        let list = store.load_all();
        assert_eq!(list.len(), 2);
        assert_eq!(ids(&list), vec!["2", "1"]);
    }

    #[test]
    fn test_update_preserves_position_and_length() {
        let (_, store) = store();
        for (id, title) in [("1", "A"), ("2", "B"), ("3", "C")] {
            store.add(record(id, title)).unwrap();
        }

        store.update(&RecordId::new("2"), record("2", "B2")).unwrap();

        let list = store.load_all();
        assert_eq!(ids(&list), vec!["3", "2", "1"]);
        assert_eq!(list[1].title, "B2");
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let (_, store) = store();
        store.add(record("1", "A")).unwrap();
        let before = store.load_all();

        store.update(&RecordId::new("nope"), record("nope", "X")).unwrap();
        assert_eq!(store.load_all(), before);
    }

    #[test]
    fn test_remove() {
        let (_, store) = store();
        store.add(record("1", "A")).unwrap();
        store.add(record("2", "B")).unwrap();

        store.remove(&RecordId::new("1")).unwrap();
        assert_eq!(ids(&store.load_all()), vec!["2"]);

        store.remove(&RecordId::new("missing")).unwrap();
        assert_eq!(store.load_all().len(), 1);
    }

    #[test]
    fn test_clear_removes_key() {
        let (repo, store) = store();
        store.add(record("1", "A")).unwrap();

        store.clear().unwrap();
        assert!(store.load_all().is_empty());
        assert_eq!(repo.get(DEFAULT_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_find() {
        let (_, store) = store();
        store.add(record("1", "A")).unwrap();
        assert_eq!(store.find(&RecordId::new("1")).unwrap().title, "A");
        assert!(store.find(&RecordId::new("2")).is_none());
    }

    #[test]
    fn test_write_failure_propagates() {
        let repo = Arc::new(InMemoryKeyValueRepository::new().with_quota(Some(16)));
        let store = CollectionStore::new(repo, DEFAULT_STORAGE_KEY);

        let result = store.add(record("1", "A title long enough to overflow"));
        assert!(matches!(result, Err(AppError::QuotaExceeded { .. })));
        assert!(store.load_all().is_empty());
    }
}
