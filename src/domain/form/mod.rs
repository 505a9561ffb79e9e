//! Form model for creating and editing records.
//!
//! Validation never short-circuits: every violated rule is reported,
//! in declaration order, so the UI can show them all at once.

pub mod entity;
pub mod validation;

pub use entity::{EditorMode, FormLabels, RecordFields, RecordForm};
pub use validation::{parse_form, validate, ValidationError};
