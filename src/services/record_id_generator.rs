// src/services/record_id_generator.rs
//
// Millisecond-timestamp ids, strictly increasing within a process.

use std::collections::HashSet;

use chrono::Utc;

use crate::domain::record::{CollectionRecord, RecordId};

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

pub struct RecordIdGenerator {
    clock: fn() -> i64,
    last: i64,
}

impl RecordIdGenerator {
    pub fn new() -> Self {
        Self::with_clock(now_millis)
    }

    pub fn with_clock(clock: fn() -> i64) -> Self {
        Self { clock, last: 0 }
    }

    /// Mint an id distinct from every id in `existing` and from every id
    /// this generator has handed out before
    pub fn next_id(&mut self, existing: &[CollectionRecord]) -> RecordId {
        let taken: HashSet<&str> = existing.iter().map(|r| r.id.as_str()).collect();

        let mut candidate = (self.clock)().max(self.last + 1);
        while taken.contains(candidate.to_string().as_str()) {
            candidate += 1;
        }

        self.last = candidate;
        RecordId::new(candidate.to_string())
    }
}

impl Default for RecordIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::Genre;

    fn frozen_clock() -> i64 {
        1_700_000_000_000
    }

    fn record(id: &str) -> CollectionRecord {
        CollectionRecord::new(
            RecordId::new(id),
            "T".to_string(),
            "A".to_string(),
            Genre::Other,
            2000,
            None,
        )
    }

    #[test]
    fn test_ids_increase_even_when_clock_stalls() {
        let mut ids = RecordIdGenerator::with_clock(frozen_clock);
        let a = ids.next_id(&[]);
        let b = ids.next_id(&[]);

        assert_eq!(a.as_str(), "1700000000000");
        assert_eq!(b.as_str(), "1700000000001");
    }

    #[test]
    fn test_skips_existing_ids() {
        let mut ids = RecordIdGenerator::with_clock(frozen_clock);
        let existing = vec![record("1700000000000"), record("1700000000001")];

        assert_eq!(ids.next_id(&existing).as_str(), "1700000000002");
    }

    #[test]
    fn test_real_clock_ids_are_numeric() {
        let mut ids = RecordIdGenerator::new();
        let id = ids.next_id(&[]);
        assert!(id.as_str().parse::<i64>().unwrap() > 0);
    }
}
