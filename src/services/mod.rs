// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod collection_editor;
pub mod record_id_generator;
pub mod search;


pub use collection_editor::{CollectionEditor, SubmitOutcome};
pub use record_id_generator::RecordIdGenerator;
pub use search::filter_records;
