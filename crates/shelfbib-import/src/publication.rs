//! Publication info extraction
//!
//! The export packs publisher, year, edition, and binding into one
//! free-text field shaped like
//! `"McGraw-Hill (2003), Edition: 2, Paperback"`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::edition::ordinal_text;
use crate::ImportError;

lazy_static! {
    static ref EDITION_NUMBER: Regex = Regex::new(r"\d+").unwrap();
}

/// Structured sub-fields of the publication info field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PublicationInfo {
    pub publisher: String,
    pub edition: String,
}

/// Split the compound field into publisher and edition.
pub fn extract_publication_info(
    publication: &str,
    warnings: &mut Vec<String>,
) -> Result<PublicationInfo, ImportError> {
    if publication.is_empty() {
        return Err(ImportError::EmptyPublicationInfo);
    }

    let mut segments = publication.split(',');
    let publisher = strip_year_parenthetical(segments.next().unwrap_or("").trim());
    let edition = match segments.next() {
        Some(segment) => edition_from_segment(segment, warnings),
        None => String::new(),
    };

    Ok(PublicationInfo { publisher, edition })
}

/// Remove the trailing `" (YYYY)"` from a publisher segment.
///
/// The original converter strips a fixed six characters and so do we;
/// a parenthetical that is not exactly four digits loses the wrong
/// amount of text. Known fragility, kept for output compatibility.
fn strip_year_parenthetical(segment: &str) -> String {
    let chars: Vec<char> = segment.chars().collect();
    let cut = chars.len().saturating_sub(6);
    chars[..cut].iter().collect::<String>().trim().to_string()
}

/// Edition text from segment 1, if it carries the `Edition:` marker.
fn edition_from_segment(segment: &str, warnings: &mut Vec<String>) -> String {
    let Some(rest) = segment.trim().strip_prefix("Edition:") else {
        return String::new();
    };

    // Text up to the next internal comma, if any survived the split.
    let text = rest.trim().split(',').next().unwrap_or("").trim();
    match EDITION_NUMBER.find(text) {
        Some(number) => ordinal_text(number.as_str(), warnings),
        None => text.to_string(),
    }
}
