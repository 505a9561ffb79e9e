// src/repositories/key_value_repository.rs
//
// Durable key -> string storage. Values are always replaced whole.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use rusqlite::{params, OptionalExtension};

use crate::db::ConnectionPool;
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait KeyValueRepository: Send + Sync {
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Fully overwrites any previous value under `key`
    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Removing a missing key is not an error
    fn remove(&self, key: &str) -> AppResult<()>;
}

fn check_quota(quota: Option<usize>, key: &str, value: &str) -> AppResult<()> {
    if let Some(quota) = quota {
        let needed = key.len() + value.len();
        if needed > quota {
            return Err(AppError::QuotaExceeded { needed, quota });
        }
    }
    Ok(())
}

pub struct SqliteKeyValueRepository {
    pool: Arc<ConnectionPool>,
    quota_bytes: Option<usize>,
}

impl SqliteKeyValueRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self {
            pool,
            quota_bytes: None,
        }
    }

    pub fn with_quota(mut self, quota_bytes: Option<usize>) -> Self {
        self.quota_bytes = quota_bytes;
        self
    }
}

impl KeyValueRepository for SqliteKeyValueRepository {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let conn = self.pool.get()?;

        let value = conn
            .query_row(
                "SELECT value FROM key_value WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        check_quota(self.quota_bytes, key, value)?;
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT OR REPLACE INTO key_value (key, value, updated_at)
             VALUES (?1, ?2, ?3)",
            params![key, value, Utc::now().to_rfc3339()],
        )?;

        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let conn = self.pool.get()?;
        conn.execute("DELETE FROM key_value WHERE key = ?1", params![key])?;
        Ok(())
    }
}

/// Process-local storage, used for tests and throwaway sessions
#[derive(Default)]
pub struct InMemoryKeyValueRepository {
    entries: Mutex<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl InMemoryKeyValueRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(mut self, quota_bytes: Option<usize>) -> Self {
        self.quota_bytes = quota_bytes;
        self
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| AppError::Other("In-memory storage lock poisoned".to_string()))
    }
}

impl KeyValueRepository for InMemoryKeyValueRepository {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        check_quota(self.quota_bytes, key, value)?;
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_test_pool, get_connection, initialize_database};

    fn sqlite_repo() -> SqliteKeyValueRepository {
        let pool = Arc::new(create_test_pool().unwrap());
        initialize_database(&get_connection(&pool).unwrap()).unwrap();
        SqliteKeyValueRepository::new(pool)
    }

    fn exercise(repo: &dyn KeyValueRepository) {
        assert_eq!(repo.get("k").unwrap(), None);

        repo.set("k", "one").unwrap();
        assert_eq!(repo.get("k").unwrap().as_deref(), Some("one"));

        repo.set("k", "two").unwrap();
        assert_eq!(repo.get("k").unwrap().as_deref(), Some("two"));

        repo.remove("k").unwrap();
        assert_eq!(repo.get("k").unwrap(), None);

        // Removing again is fine
        repo.remove("k").unwrap();
    }

    #[test]
    fn test_sqlite_get_set_remove() {
        exercise(&sqlite_repo());
    }

    #[test]
    fn test_memory_get_set_remove() {
        exercise(&InMemoryKeyValueRepository::new());
    }

    #[test]
    fn test_quota_rejects_oversized_value() {
        let repo = InMemoryKeyValueRepository::new().with_quota(Some(8));
        repo.set("k", "small").unwrap();

        let result = repo.set("k", "much too large");
        assert!(matches!(result, Err(AppError::QuotaExceeded { quota: 8, .. })));

        // Previous value is untouched
        assert_eq!(repo.get("k").unwrap().as_deref(), Some("small"));
    }

    #[test]
    fn test_sqlite_quota() {
        let repo = sqlite_repo().with_quota(Some(4));
        assert!(matches!(
            repo.set("key", "value"),
            Err(AppError::QuotaExceeded { needed: 8, quota: 4 })
        ));
    }

    #[test]
    fn test_sqlite_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shelf.db");

        {
            let pool = Arc::new(crate::db::create_connection_pool(&path).unwrap());
            initialize_database(&get_connection(&pool).unwrap()).unwrap();
            SqliteKeyValueRepository::new(pool).set("k", "persisted").unwrap();
        }

        let pool = Arc::new(crate::db::create_connection_pool(&path).unwrap());
        initialize_database(&get_connection(&pool).unwrap()).unwrap();
        let repo = SqliteKeyValueRepository::new(pool);
        assert_eq!(repo.get("k").unwrap().as_deref(), Some("persisted"));
    }
}
