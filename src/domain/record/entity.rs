use serde::{Deserialize, Serialize};
use url::Url;

/// Lower bound (inclusive) for a publication year
pub const MIN_YEAR: i32 = 1900;

/// Upper bound (inclusive) for a publication year
pub const MAX_YEAR: i32 = 2030;

/// Opaque record identifier
/// Assigned once at creation and never reused after deletion
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Manga demographic / category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Shonen,
    Shojo,
    Seinen,
    Josei,
    Kodomo,
    Isekai,
    Other,
}

impl Genre {
    /// Every selectable genre, in the order a form presents them
    pub const ALL: [Genre; 7] = [
        Genre::Shonen,
        Genre::Shojo,
        Genre::Seinen,
        Genre::Josei,
        Genre::Kodomo,
        Genre::Isekai,
        Genre::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Shonen => "Shonen",
            Genre::Shojo => "Shojo",
            Genre::Seinen => "Seinen",
            Genre::Josei => "Josei",
            Genre::Kodomo => "Kodomo",
            Genre::Isekai => "Isekai",
            Genre::Other => "Other",
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Genre {
    type Err = String;

    /// Case-insensitive, ignores surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Genre::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown genre: {}", wanted))
    }
}

/// One manga entry in the collection
///
/// The serialized shape is the storage layout:
/// `{ id, title, author, genre, year, cover }` with `cover: null` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionRecord {
    /// Immutable identifier
    pub id: RecordId,

    pub title: String,

    pub author: String,

    pub genre: Genre,

    /// Publication year, MIN_YEAR..=MAX_YEAR
    pub year: i32,

    /// Absolute http(s) URL of the cover image, if any
    #[serde(default)]
    pub cover: Option<Url>,
}

impl CollectionRecord {
    pub fn new(
        id: RecordId,
        title: String,
        author: String,
        genre: Genre,
        year: i32,
        cover: Option<Url>,
    ) -> Self {
        Self {
            id,
            title,
            author,
            genre,
            year,
            cover,
        }
    }
}

impl std::fmt::Display for CollectionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.title, self.author, self.year)
    }
}

/// Ordered newest-first; no two records share an id
pub type CollectionList = Vec<CollectionRecord>;
