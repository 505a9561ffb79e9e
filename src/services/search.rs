// src/services/search.rs
//
// Client-side filter over the loaded collection.

use crate::domain::record::CollectionRecord;

/// Records whose title or author contains `query`, case-insensitively
///
/// A blank query matches everything. Order is preserved.
pub fn filter_records<'a>(records: &'a [CollectionRecord], query: &str) -> Vec<&'a CollectionRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|r| {
            r.title.to_lowercase().contains(&needle) || r.author.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::{Genre, RecordId};

    fn shelf() -> Vec<CollectionRecord> {
        [
            ("3", "Vagabond", "Takehiko Inoue"),
            ("2", "Slam Dunk", "Takehiko Inoue"),
            ("1", "Monster", "Naoki Urasawa"),
        ]
        .into_iter()
        .map(|(id, title, author)| {
            CollectionRecord::new(
                RecordId::new(id),
                title.to_string(),
                author.to_string(),
                Genre::Seinen,
                1990,
                None,
            )
        })
        .collect()
    }

    fn titles(found: Vec<&CollectionRecord>) -> Vec<&str> {
        found.into_iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_blank_query_matches_all() {
        let records = shelf();
        assert_eq!(filter_records(&records, "   ").len(), 3);
    }

    #[test]
    fn test_matches_title_case_insensitively() {
        let records = shelf();
        assert_eq!(titles(filter_records(&records, "MONSTER")), vec!["Monster"]);
    }

    #[test]
    fn test_matches_author_and_keeps_order() {
        let records = shelf();
        assert_eq!(
            titles(filter_records(&records, " inoue ")),
            vec!["Vagabond", "Slam Dunk"]
        );
    }

    #[test]
    fn test_no_match() {
        let records = shelf();
        assert!(filter_records(&records, "berserk").is_empty());
    }
}
