//! Import pipeline for LibraryThing tab-delimited exports
//!
//! Decodes the UTF-16 export, splits it into rows, and builds one
//! bibliographic record per data row. Structural problems (short rows,
//! degenerate publication info) abort the run; attribution and ordinal
//! problems are collected as warnings on the result.

pub mod builder;
pub mod decode;
pub mod edition;
pub mod publication;

use shelfbib_domain::{KeyRegistry, RegistryError};
use thiserror::Error;

pub use builder::{import_catalog, EXPECTED_FIELDS};
pub use decode::decode_utf16;
pub use edition::{ordinal_text, ordinal_word};
pub use publication::{extract_publication_info, PublicationInfo};

/// Import error type
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("row {line} has {found} fields, expected at least {expected}")]
    ShortRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("publication info field is empty")]
    EmptyPublicationInfo,
    #[error("input is not valid UTF-16: {reason}")]
    InvalidEncoding { reason: String },
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Result of importing one catalog export
#[derive(Debug)]
pub struct ImportResult {
    pub registry: KeyRegistry,
    pub warnings: Vec<String>,
}
