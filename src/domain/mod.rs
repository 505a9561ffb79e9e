// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

pub mod form;
pub mod record;

// Record Domain
pub use record::{
    validate_record, validate_unique_ids, CollectionList, CollectionRecord, Genre, RecordId,
    MAX_YEAR, MIN_YEAR,
};

// Form Domain
pub use form::{
    parse_form, validate, EditorMode, FormLabels, RecordFields, RecordForm, ValidationError,
};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of record invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
