use std::collections::HashSet;

use super::entity::{CollectionRecord, MAX_YEAR, MIN_YEAR};
use crate::domain::{DomainError, DomainResult};

/// Validates all CollectionRecord invariants
pub fn validate_record(record: &CollectionRecord) -> DomainResult<()> {
    validate_text("title", &record.title)?;
    validate_text("author", &record.author)?;
    validate_year(record.year)?;
    validate_cover(record)?;
    Ok(())
}

/// Ids must be unique across the whole list
pub fn validate_unique_ids(records: &[CollectionRecord]) -> DomainResult<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(&record.id) {
            return Err(DomainError::InvariantViolation(format!(
                "Duplicate record id: {}",
                record.id
            )));
        }
    }
    Ok(())
}

fn validate_text(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::InvariantViolation(format!(
            "Record {} cannot be empty",
            field
        )));
    }
    Ok(())
}

fn validate_year(year: i32) -> DomainResult<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(DomainError::InvariantViolation(format!(
            "Year {} outside {}..={}",
            year, MIN_YEAR, MAX_YEAR
        )));
    }
    Ok(())
}

/// Cover, when present, must be http or https
fn validate_cover(record: &CollectionRecord) -> DomainResult<()> {
    if let Some(cover) = &record.cover {
        if !matches!(cover.scheme(), "http" | "https") {
            return Err(DomainError::InvariantViolation(format!(
                "Cover URL scheme '{}' is not allowed",
                cover.scheme()
            )));
        }
    }
    Ok(())
}

/// Critical Record Invariants:
///
/// 1. Id is assigned at creation and never changes
/// 2. Title and author are non-empty
/// 3. Genre is one of the fixed categories (enforced by the type)
/// 4. 1900 <= year <= 2030
/// 5. Cover is absent or an absolute http(s) URL
/// 6. Ids are unique within a list

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::{Genre, RecordId};
    use url::Url;

    fn berserk() -> CollectionRecord {
        CollectionRecord::new(
            RecordId::new("1"),
            "Berserk".to_string(),
            "Kentaro Miura".to_string(),
            Genre::Seinen,
            1989,
            None,
        )
    }

    #[test]
    fn test_valid_record() {
        assert!(validate_record(&berserk()).is_ok());
    }

    #[test]
    fn test_blank_author_fails() {
        let mut record = berserk();
        record.author = "  ".to_string();
        assert!(validate_record(&record).is_err());
    }

    #[test]
    fn test_year_bounds_are_inclusive() {
        let mut record = berserk();
        record.year = 1900;
        assert!(validate_record(&record).is_ok());
        record.year = 2030;
        assert!(validate_record(&record).is_ok());
        record.year = 2031;
        assert!(validate_record(&record).is_err());
    }

    #[test]
    fn test_ftp_cover_fails() {
        let mut record = berserk();
        record.cover = Some(Url::parse("ftp://example.com/cover.jpg").unwrap());

        let result = validate_record(&record);
        if let Err(DomainError::InvariantViolation(msg)) = result {
            assert!(msg.contains("ftp"));
        } else {
            panic!("Expected InvariantViolation");
        }
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let records = vec![berserk(), berserk()];
        assert!(validate_unique_ids(&records).is_err());
    }
}
