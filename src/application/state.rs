// src/application/state.rs

use std::sync::{Arc, Mutex, MutexGuard};

use crate::app::config::AppConfig;
use crate::application::dto::RecordCardDto;
use crate::error::{AppError, AppResult};
use crate::events::EventBus;
use crate::repositories::CollectionStore;
use crate::services::{filter_records, CollectionEditor};

/// Application state shared with the UI layer
///
/// Built once by `app::bootstrap`. The editor sits behind a mutex so a
/// host may share the state, but one writer at a time is still assumed.
pub struct AppState {
    pub config: AppConfig,
    pub event_bus: Arc<EventBus>,
    pub store: Arc<CollectionStore>,
    editor: Mutex<CollectionEditor>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        event_bus: Arc<EventBus>,
        store: Arc<CollectionStore>,
        editor: CollectionEditor,
    ) -> Self {
        Self {
            config,
            event_bus,
            store,
            editor: Mutex::new(editor),
        }
    }

    pub fn editor(&self) -> AppResult<MutexGuard<'_, CollectionEditor>> {
        self.editor
            .lock()
            .map_err(|_| AppError::Other("Editor lock poisoned".to_string()))
    }

    /// Cards matching the search box, newest-first
    pub fn search(&self, query: &str) -> Vec<RecordCardDto> {
        let records = self.store.load_all();
        filter_records(&records, query)
            .into_iter()
            .map(|r| RecordCardDto::from_record(r, self.config.placeholder_size))
            .collect()
    }
}
