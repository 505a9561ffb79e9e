// src/events/types.rs
//
// Collection lifecycle events.
// Each event is an immutable fact emitted after the store write succeeded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::record::RecordId;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

macro_rules! impl_domain_event {
    ($ty:ident) => {
        impl DomainEvent for $ty {
            fn event_id(&self) -> Uuid {
                self.event_id
            }
            fn occurred_at(&self) -> DateTime<Utc> {
                self.occurred_at
            }
            fn event_type(&self) -> &'static str {
                stringify!($ty)
            }
        }
    };
}

/// A new record was added to the collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordCreated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub record_id: RecordId,
    pub title: String,
}

impl RecordCreated {
    pub fn new(record_id: RecordId, title: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            record_id,
            title,
        }
    }
}

impl_domain_event!(RecordCreated);

/// An existing record was replaced in place
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub record_id: RecordId,
}

impl RecordUpdated {
    pub fn new(record_id: RecordId) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            record_id,
        }
    }
}

impl_domain_event!(RecordUpdated);

/// A record was deleted after confirmation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub record_id: RecordId,
}

impl RecordDeleted {
    pub fn new(record_id: RecordId) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            record_id,
        }
    }
}

impl_domain_event!(RecordDeleted);

/// The whole collection was wiped after confirmation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionCleared {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub records_removed: usize,
}

impl CollectionCleared {
    pub fn new(records_removed: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            records_removed,
        }
    }
}

impl_domain_event!(CollectionCleared);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_names() {
        assert_eq!(
            RecordCreated::new(RecordId::new("1"), "Akira".to_string()).event_type(),
            "RecordCreated"
        );
        assert_eq!(CollectionCleared::new(3).event_type(), "CollectionCleared");
    }

    #[test]
    fn test_event_ids_are_unique() {
        let a = RecordDeleted::new(RecordId::new("1"));
        let b = RecordDeleted::new(RecordId::new("1"));
        assert_ne!(a.event_id(), b.event_id());
    }
}
