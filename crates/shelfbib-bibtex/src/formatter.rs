//! BibTeX entry formatting
//!
//! One `@BOOK` entry per record, every recognized field present even
//! when empty, fields tab-indented in a fixed order.

use shelfbib_domain::{BookRecord, KeyRegistry};

/// Format a single record as a `@BOOK` entry.
pub fn format_record(key: &str, record: &BookRecord) -> String {
    let fields: [(&str, &str); 14] = [
        ("author", &record.author),
        ("editor", &record.editor),
        ("title", &record.title),
        ("publisher", &record.publisher),
        ("year", &record.year),
        ("address", &record.address),
        ("edition", &record.edition),
        ("volume", &record.volume),
        ("number", &record.number),
        ("series", &record.series),
        ("month", &record.month),
        ("note", &record.note),
        ("otherinfo", &record.otherinfo),
        ("isbn", &record.isbn),
    ];

    let mut result = String::new();
    result.push_str("@BOOK{");
    result.push_str(key);
    result.push_str(",\n");

    let last = fields.len() - 1;
    for (i, (name, value)) in fields.iter().enumerate() {
        result.push('\t');
        result.push_str(name);
        result.push_str(" = {");
        result.push_str(value);
        result.push('}');
        if i != last {
            result.push(',');
        }
        result.push('\n');
    }

    result.push('}');
    result
}

/// Format the whole registry in first-insertion order.
pub fn format_registry(registry: &KeyRegistry) -> String {
    registry
        .iter()
        .map(|(key, record)| format_record(key, record))
        .collect::<Vec<_>>()
        .join("\n\n")
}
