//! Field value escaping

/// Escape literal ampersands for BibTeX output.
///
/// Only `&` is touched; the catalog export does not produce the other
/// TeX-special characters in rendered fields.
pub fn escape_ampersands(value: &str) -> String {
    value.replace('&', "\\&")
}
