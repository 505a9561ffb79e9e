use thiserror::Error;
use url::Url;

use super::entity::{RecordFields, RecordForm};
use crate::domain::record::{Genre, MAX_YEAR, MIN_YEAR};

/// A single user-facing validation failure
///
/// `Display` is the message shown next to the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required.")]
    TitleRequired,

    #[error("Author is required.")]
    AuthorRequired,

    #[error("Genre is required.")]
    GenreRequired,

    #[error("Genre '{0}' is not a known category.")]
    GenreUnknown(String),

    #[error("Year is required.")]
    YearRequired,

    #[error("Year must be a whole number between 1900 and 2030.")]
    YearOutOfRange,

    #[error("Cover must be a valid absolute URL.")]
    CoverInvalidUrl,

    #[error("Cover URL must use http or https.")]
    CoverUnsupportedScheme,
}

/// Check every rule and report all violations, in rule order:
/// title, author, genre, year, cover.
pub fn validate(form: &RecordForm) -> Vec<ValidationError> {
    parse_form(form).err().unwrap_or_default()
}

/// The single form -> domain normalization point
///
/// Trims text fields, coerces year, maps an empty cover to `None`.
pub fn parse_form(form: &RecordForm) -> Result<RecordFields, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let title = form.title.trim();
    if title.is_empty() {
        errors.push(ValidationError::TitleRequired);
    }

    let author = form.author.trim();
    if author.is_empty() {
        errors.push(ValidationError::AuthorRequired);
    }

    let genre = parse_genre(&form.genre).map_err(|e| errors.push(e)).ok();
    let year = parse_year(&form.year).map_err(|e| errors.push(e)).ok();
    let cover = parse_cover(&form.cover).map_err(|e| errors.push(e)).ok();

    match (genre, year, cover) {
        (Some(genre), Some(year), Some(cover)) if errors.is_empty() => Ok(RecordFields {
            title: title.to_string(),
            author: author.to_string(),
            genre,
            year,
            cover,
        }),
        _ => Err(errors),
    }
}

fn parse_genre(raw: &str) -> Result<Genre, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::GenreRequired);
    }
    raw.parse::<Genre>()
        .map_err(|_| ValidationError::GenreUnknown(raw.to_string()))
}

fn parse_year(raw: &str) -> Result<i32, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::YearRequired);
    }
    let year = match raw.parse::<i32>() {
        Ok(year) => Some(year),
        // "1989.0" is still a whole number
        Err(_) => raw
            .parse::<f64>()
            .ok()
            .filter(|y| y.fract() == 0.0 && (MIN_YEAR as f64..=MAX_YEAR as f64).contains(y))
            .map(|y| y as i32),
    };
    match year {
        Some(year) if (MIN_YEAR..=MAX_YEAR).contains(&year) => Ok(year),
        _ => Err(ValidationError::YearOutOfRange),
    }
}

fn parse_cover(raw: &str) -> Result<Option<Url>, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let url = Url::parse(raw).map_err(|_| ValidationError::CoverInvalidUrl)?;
    match url.scheme() {
        "http" | "https" => Ok(Some(url)),
        _ => Err(ValidationError::CoverUnsupportedScheme),
    }
}
