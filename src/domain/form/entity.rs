use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::record::{CollectionRecord, Genre, RecordId};

/// Raw values exactly as typed into the collection form
///
/// Every field is text; nothing here is trusted until it passes
/// `validation::parse_form`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub cover: String,
}

impl RecordForm {
    /// Populate a form from a stored record (absent cover becomes "")
    pub fn from_record(record: &CollectionRecord) -> Self {
        Self {
            title: record.title.clone(),
            author: record.author.clone(),
            genre: record.genre.to_string(),
            year: record.year.to_string(),
            cover: record
                .cover
                .as_ref()
                .map(|u| u.to_string())
                .unwrap_or_default(),
        }
    }

    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

/// Normalized field values produced by a successful parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFields {
    pub title: String,
    pub author: String,
    pub genre: Genre,
    pub year: i32,
    pub cover: Option<Url>,
}

impl RecordFields {
    pub fn into_record(self, id: RecordId) -> CollectionRecord {
        CollectionRecord::new(id, self.title, self.author, self.genre, self.year, self.cover)
    }
}

/// Editor state machine
///
/// Creating --begin_edit(r)--> Editing(r.id)
/// Editing(_) --cancel_edit--> Creating
/// Editing(_) --submit ok--> Creating
/// Creating --submit ok--> Creating
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Creating,
    Editing(RecordId),
}

impl EditorMode {
    pub fn editing_id(&self) -> Option<&RecordId> {
        match self {
            EditorMode::Creating => None,
            EditorMode::Editing(id) => Some(id),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditorMode::Editing(_))
    }

    pub fn labels(&self) -> FormLabels {
        match self {
            EditorMode::Creating => FormLabels::CREATE,
            EditorMode::Editing(_) => FormLabels::EDIT,
        }
    }
}

/// Visible wording on the form for each mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormLabels {
    pub heading: &'static str,
    pub submit: &'static str,
    pub show_cancel: bool,
}

impl FormLabels {
    pub const CREATE: FormLabels = FormLabels {
        heading: "Add manga",
        submit: "Add to collection",
        show_cancel: false,
    };

    pub const EDIT: FormLabels = FormLabels {
        heading: "Edit manga",
        submit: "Save changes",
        show_cancel: true,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_record_maps_absent_cover_to_empty() {
        let record = CollectionRecord::new(
            RecordId::new("42"),
            "Monster".to_string(),
            "Naoki Urasawa".to_string(),
            Genre::Seinen,
            1994,
            None,
        );

        let form = RecordForm::from_record(&record);
        assert_eq!(form.cover, "");
        assert_eq!(form.genre, "Seinen");
        assert_eq!(form.year, "1994");
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(EditorMode::Creating.labels(), FormLabels::CREATE);
        assert_eq!(
            EditorMode::Editing(RecordId::new("1")).labels(),
            FormLabels::EDIT
        );
        assert!(EditorMode::default().editing_id().is_none());
    }
}
