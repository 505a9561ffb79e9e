// src/services/collection_editor.rs
//
// CollectionEditor: drives the collection form.
//
// RULES:
// - Holds no copy of the list; the store is reloaded for every mutation
// - Invalid input never touches the store and never changes mode
// - Destructive calls run only after an affirmative confirmation
// - Every successful mutation re-renders and emits an event

use std::sync::Arc;

use crate::application::dto::{CollectionView, FormViewDto, DEFAULT_PLACEHOLDER_SIZE};
use crate::domain::form::{parse_form, validate, EditorMode, FormLabels, RecordForm, ValidationError};
use crate::domain::record::{validate_record, CollectionRecord, RecordId};
use crate::error::{AppError, AppResult};
use crate::events::{CollectionCleared, EventBus, RecordCreated, RecordDeleted, RecordUpdated};
use crate::integrations::{Confirmation, Renderer};
use crate::repositories::CollectionStore;
use crate::services::RecordIdGenerator;

pub const DELETE_PROMPT: &str = "Remove this manga from your collection?";
pub const CLEAR_PROMPT: &str = "Remove every manga from your collection? This cannot be undone.";

/// Result of a submit that did not hit a storage failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(RecordId),
    Updated(RecordId),
    /// Every violated rule, in rule order; nothing was stored
    Rejected(Vec<ValidationError>),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, SubmitOutcome::Rejected(_))
    }

    pub fn record_id(&self) -> Option<&RecordId> {
        match self {
            SubmitOutcome::Created(id) | SubmitOutcome::Updated(id) => Some(id),
            SubmitOutcome::Rejected(_) => None,
        }
    }
}

pub struct CollectionEditor {
    store: Arc<CollectionStore>,
    renderer: Arc<dyn Renderer>,
    confirmation: Arc<dyn Confirmation>,
    event_bus: Arc<EventBus>,
    ids: RecordIdGenerator,
    placeholder_size: u32,

    mode: EditorMode,
    form: RecordForm,
    errors: Vec<ValidationError>,
}

impl CollectionEditor {
    pub fn new(
        store: Arc<CollectionStore>,
        renderer: Arc<dyn Renderer>,
        confirmation: Arc<dyn Confirmation>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            store,
            renderer,
            confirmation,
            event_bus,
            ids: RecordIdGenerator::new(),
            placeholder_size: DEFAULT_PLACEHOLDER_SIZE,
            mode: EditorMode::Creating,
            form: RecordForm::default(),
            errors: Vec::new(),
        }
    }

    pub fn with_id_generator(mut self, ids: RecordIdGenerator) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_placeholder_size(mut self, size: u32) -> Self {
        self.placeholder_size = size;
        self
    }

    // ------------------------------------------------------------------
    // State
    // ------------------------------------------------------------------

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn form(&self) -> &RecordForm {
        &self.form
    }

    /// Messages currently displayed next to the form
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn labels(&self) -> FormLabels {
        self.mode.labels()
    }

    pub fn form_view(&self) -> FormViewDto {
        FormViewDto::new(&self.mode, &self.form, &self.errors)
    }

    pub fn records(&self) -> Vec<CollectionRecord> {
        self.store.load_all()
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Pure rule check, no side effects
    pub fn validate(&self, form: &RecordForm) -> Vec<ValidationError> {
        validate(form)
    }

    /// Create or update from the submitted form
    ///
    /// Rejected input replaces the displayed errors and keeps the typed
    /// values; mode and store are untouched. On success the form resets
    /// to create mode and the list re-renders. Storage failures propagate
    /// and leave the editor state as it was.
    pub fn submit(&mut self, form: RecordForm) -> AppResult<SubmitOutcome> {
        let fields = match parse_form(&form) {
            Ok(fields) => fields,
            Err(errors) => {
                log::debug!("Submit rejected with {} validation errors", errors.len());
                self.form = form;
                self.errors = errors.clone();
                return Ok(SubmitOutcome::Rejected(errors));
            }
        };

        let outcome = match self.mode.editing_id().cloned() {
            Some(id) => {
                let record = fields.into_record(id.clone());
                validate_record(&record)?;
                let title = record.title.clone();
                self.store.update(&id, record)?;
                log::info!("Updated record {} ({})", id, title);
                self.event_bus.emit(RecordUpdated::new(id.clone()));
                SubmitOutcome::Updated(id)
            }
            None => {
                let id = self.ids.next_id(&self.store.load_all());
                let record = fields.into_record(id.clone());
                validate_record(&record)?;
                let title = record.title.clone();
                self.store.add(record)?;
                log::info!("Created record {} ({})", id, title);
                self.event_bus.emit(RecordCreated::new(id.clone(), title));
                SubmitOutcome::Created(id)
            }
        };

        self.reset_form();
        self.render();
        Ok(outcome)
    }

    /// Switch to edit mode for `record` and fill the form with its values
    pub fn begin_edit(&mut self, record: &CollectionRecord) {
        self.mode = EditorMode::Editing(record.id.clone());
        self.form = RecordForm::from_record(record);
        self.errors.clear();
        self.renderer.focus_form();
    }

    /// Edit by id, as passed back from a rendered card
    ///
    /// Fails with `NotFound` (and stays put) if the id is no longer stored.
    pub fn begin_edit_by_id(&mut self, id: &RecordId) -> AppResult<()> {
        let record = self.store.find(id).ok_or_else(|| {
            log::debug!("Cannot edit {}: not in collection", id);
            AppError::NotFound(format!("Manga {}", id))
        })?;
        self.begin_edit(&record);
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.reset_form();
    }

    /// Back to create mode with an empty form and no messages
    pub fn reset_form(&mut self) {
        self.mode = EditorMode::Creating;
        self.form = RecordForm::default();
        self.errors.clear();
    }

    /// Returns whether the deletion was confirmed
    pub fn delete_record(&mut self, id: &RecordId) -> AppResult<bool> {
        if !self.confirmation.confirm(DELETE_PROMPT) {
            log::debug!("Delete of {} declined", id);
            return Ok(false);
        }

        self.store.remove(id)?;
        log::info!("Deleted record {}", id);

        if self.mode.editing_id() == Some(id) {
            self.reset_form();
        }

        self.event_bus.emit(RecordDeleted::new(id.clone()));
        self.render();
        Ok(true)
    }

    /// Returns whether clearing was confirmed
    pub fn clear_all(&mut self) -> AppResult<bool> {
        if !self.confirmation.confirm(CLEAR_PROMPT) {
            log::debug!("Clear declined");
            return Ok(false);
        }

        let removed = self.store.load_all().len();
        self.store.clear()?;
        log::info!("Cleared collection ({} records)", removed);

        if self.mode.is_editing() {
            self.reset_form();
        }

        self.event_bus.emit(CollectionCleared::new(removed));
        self.render();
        Ok(true)
    }

    /// Hand the current list to the renderer
    pub fn render(&self) {
        let view = CollectionView::build(&self.store.load_all(), self.placeholder_size);
        self.renderer.render(&view);
    }
}
