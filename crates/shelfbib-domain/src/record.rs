//! Bibliographic record domain model

use serde::{Deserialize, Serialize};

/// A single normalized bibliographic record built from one catalog row.
///
/// The field set matches the `@BOOK` entry the record renders to. Every
/// record carries the full set of recognized fields; absent values are
/// empty strings rather than options, so the renderer can emit them
/// verbatim without special-casing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub author: String,
    pub editor: String,
    pub title: String,
    pub publisher: String,
    pub year: String,
    pub address: String,
    pub edition: String,
    pub volume: String,
    pub number: String,
    pub series: String,
    pub month: String,
    pub note: String,
    pub isbn: String,
    pub otherinfo: String,
}

impl BookRecord {
    /// Create a record with its required title; every record has one.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}
