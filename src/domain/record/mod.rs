//! A record is one manga entry in the user's collection.
//! The list of records is newest-first and id-unique.

pub mod entity;
pub mod invariants;

pub use entity::{CollectionList, CollectionRecord, Genre, RecordId, MAX_YEAR, MIN_YEAR};
pub use invariants::{validate_record, validate_unique_ids};
