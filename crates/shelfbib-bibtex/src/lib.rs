//! BibTeX output formatting
//!
//! Serializes the key registry into `@BOOK` entries and, optionally, a
//! LaTeX document that cites every generated entry. Pure formatting;
//! records are rendered as-is with no validation.

mod escape;
mod formatter;
mod latex;

pub use escape::escape_ampersands;
pub use formatter::{format_record, format_registry};
pub use latex::format_test_document;
