// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO form validation
// - NO event emission
// - NO UI knowledge

pub mod collection_store;
pub mod key_value_repository;

pub use collection_store::{CollectionStore, DEFAULT_STORAGE_KEY};
pub use key_value_repository::{
    InMemoryKeyValueRepository, KeyValueRepository, SqliteKeyValueRepository,
};

#[cfg(test)]
pub use key_value_repository::MockKeyValueRepository;
