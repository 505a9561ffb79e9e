// src/lib.rs
// MangaShelf - Local-first manga collection manager
//
// Architecture:
// - Domain-centric: records, form rules and editor modes live in `domain`
// - Injected storage: one key/value capability, SQLite or in-memory
// - Explicit: no implicit behavior, no global state
// - Application layer: DTOs and error responses for the UI host

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod app;
pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    parse_form, validate, validate_record, CollectionList, CollectionRecord, DomainError,
    EditorMode, FormLabels, Genre, RecordForm, RecordId, ValidationError,
};

// ============================================================================
// PUBLIC API - Errors
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    CollectionCleared, DomainEvent, EventBus, EventLogEntry, RecordCreated, RecordDeleted,
    RecordUpdated,
};

// ============================================================================
// PUBLIC API - Storage
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};

pub use repositories::{
    CollectionStore, InMemoryKeyValueRepository, KeyValueRepository, SqliteKeyValueRepository,
    DEFAULT_STORAGE_KEY,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{filter_records, CollectionEditor, RecordIdGenerator, SubmitOutcome};

// ============================================================================
// PUBLIC API - Application
// ============================================================================

pub use app::{bootstrap, init_logging, init_logging_from, AppConfig, StorageBackend};
pub use application::{AppState, CollectionView, ErrorResponse, RecordCardDto};
pub use integrations::{Confirmation, FixedConfirmation, FnConfirmation, NullRenderer, Renderer};
