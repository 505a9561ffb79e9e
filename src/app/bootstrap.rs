// src/app/bootstrap.rs
//
// Wires storage, store, editor and event bus into an AppState.
//
// Order:
// 1. Infrastructure (storage backend, schema)
// 2. Store
// 3. Editor
// 4. Initial render

use std::sync::Arc;

use anyhow::Context;

use crate::app::config::{AppConfig, StorageBackend};
use crate::application::AppState;
use crate::db::{
    create_connection_pool, get_connection, initialize_database, verify_database_integrity,
};
use crate::events::EventBus;
use crate::integrations::{Confirmation, Renderer};
use crate::repositories::{
    CollectionStore, InMemoryKeyValueRepository, KeyValueRepository, SqliteKeyValueRepository,
};
use crate::services::CollectionEditor;

fn logger_builder(filter: &str) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(filter).format_timestamp_millis();
    builder
}

/// Install the global logger once; later calls are no-ops
pub fn init_logging(filter: &str) {
    if logger_builder(filter).try_init().is_err() {
        log::debug!("Logger already installed");
    }
}

/// Install the logger with the configured `log_level`
pub fn init_logging_from(config: &AppConfig) {
    init_logging(&config.log_level);
}

fn open_storage(config: &AppConfig) -> anyhow::Result<Arc<dyn KeyValueRepository>> {
    match &config.storage {
        StorageBackend::Memory => Ok(Arc::new(
            InMemoryKeyValueRepository::new().with_quota(config.quota_bytes),
        )),
        StorageBackend::Sqlite { .. } => {
            let path = config
                .storage
                .resolved_path()?
                .context("SQLite backend without a path")?;

            let pool = Arc::new(
                create_connection_pool(&path)
                    .with_context(|| format!("opening database {}", path.display()))?,
            );
            let conn = get_connection(&pool)?;
            initialize_database(&*conn).context("initializing schema")?;
            verify_database_integrity(&*conn).context("checking database integrity")?;
            drop(conn);

            log::info!("Collection database at {}", path.display());
            Ok(Arc::new(
                SqliteKeyValueRepository::new(pool).with_quota(config.quota_bytes),
            ))
        }
    }
}

/// Build the application state and draw the initial list
pub fn bootstrap(
    config: AppConfig,
    renderer: Arc<dyn Renderer>,
    confirmation: Arc<dyn Confirmation>,
) -> anyhow::Result<AppState> {
    init_logging_from(&config);

    let repo = open_storage(&config)?;
    let store = Arc::new(CollectionStore::new(repo, config.storage_key.clone()));
    let event_bus = Arc::new(EventBus::new());

    let editor = CollectionEditor::new(store.clone(), renderer, confirmation, event_bus.clone())
        .with_placeholder_size(config.placeholder_size);
    editor.render();

    log::info!(
        "Collection ready: {} records under '{}'",
        store.load_all().len(),
        store.key()
    );

    Ok(AppState::new(config, event_bus, store, editor))
}
