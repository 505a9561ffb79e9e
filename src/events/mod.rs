// src/events/mod.rs
//
// Internal Event System - Public API

pub mod bus;
pub mod types;

pub use bus::{EventBus, EventLogEntry, EVENT_LOG_CAPACITY};
pub use types::{CollectionCleared, DomainEvent, RecordCreated, RecordDeleted, RecordUpdated};
