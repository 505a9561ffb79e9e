// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities only (never TO)

use serde::Serialize;
use url::form_urlencoded;

use crate::domain::form::{EditorMode, FormLabels, RecordForm, ValidationError};
use crate::domain::record::CollectionRecord;

/// Default edge length (px) of generated placeholder covers
pub const DEFAULT_PLACEHOLDER_SIZE: u32 = 800;

/// Deterministic placeholder image for a record without a cover
pub fn placeholder_cover(title: &str, size: u32) -> String {
    let text: String = form_urlencoded::byte_serialize(title.trim().as_bytes()).collect();
    format!("https://placehold.co/{size}x{size}?text={text}")
}

// ============================================================================
// COLLECTION VIEW
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordCardDto {
    /// Passed back by the UI's edit/delete affordances
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub year: i32,
    /// Always set: the real cover or a placeholder
    pub cover_src: String,
    pub has_cover: bool,
}

impl RecordCardDto {
    pub fn from_record(record: &CollectionRecord, placeholder_size: u32) -> Self {
        let (cover_src, has_cover) = match &record.cover {
            Some(url) => (url.to_string(), true),
            None => (placeholder_cover(&record.title, placeholder_size), false),
        };

        Self {
            id: record.id.to_string(),
            title: record.title.clone(),
            author: record.author.clone(),
            genre: record.genre.to_string(),
            year: record.year,
            cover_src,
            has_cover,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "cards", rename_all = "snake_case")]
pub enum CollectionView {
    Empty,
    Cards(Vec<RecordCardDto>),
}

impl CollectionView {
    pub fn build(records: &[CollectionRecord], placeholder_size: u32) -> Self {
        if records.is_empty() {
            return CollectionView::Empty;
        }
        CollectionView::Cards(
            records
                .iter()
                .map(|r| RecordCardDto::from_record(r, placeholder_size))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        match self {
            CollectionView::Empty => 0,
            CollectionView::Cards(cards) => cards.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// FORM VIEW
// ============================================================================

/// Everything the UI needs to draw the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormViewDto {
    pub editing_id: Option<String>,
    pub labels: FormLabels,
    pub values: RecordForm,
    pub errors: Vec<String>,
}

impl FormViewDto {
    pub fn new(mode: &EditorMode, values: &RecordForm, errors: &[ValidationError]) -> Self {
        Self {
            editing_id: mode.editing_id().map(|id| id.to_string()),
            labels: mode.labels(),
            values: values.clone(),
            errors: errors.iter().map(|e| e.to_string()).collect(),
        }
    }
}
