//! Cite key derivation and uniquification
//!
//! A candidate key is the primary author's surname plus the four-digit
//! publication year. Collisions against already-assigned keys are
//! resolved by appending the next suffix in an alphabetic sequence
//! (`a`, `b`, ..., `z`, `aa`, `ab`, ...).

use lazy_static::lazy_static;
use regex::Regex;
use shelfbib_domain::KeyRegistry;

lazy_static! {
    static ref DIGIT_RUN: Regex = Regex::new(r"[0-9]+").unwrap();
}

/// Placeholder surname for records with neither author nor editor.
pub const UNKNOWN_AUTHOR: &str = "UnknownAuthor";

/// Surname of the primary author from a "Last, First" name string.
///
/// The catalog export carries a dedicated last-first author column, so
/// the surname is simply the text before the first comma.
pub fn primary_surname(author_last_first: &str) -> &str {
    author_last_first
        .split(',')
        .next()
        .unwrap_or(author_last_first)
}

/// Candidate key for a record: primary author surname, falling back to
/// the editor and then to [`UNKNOWN_AUTHOR`], concatenated with the year.
pub fn base_key(author: &str, author_last_first: &str, editor: &str, year: &str) -> String {
    if author.is_empty() {
        if editor.is_empty() {
            format!("{UNKNOWN_AUTHOR}{year}")
        } else {
            format!("{editor}{year}")
        }
    } else {
        format!("{}{}", primary_surname(author_last_first), year)
    }
}

/// Resolve a candidate key against the registry.
///
/// The first key of a run is used verbatim. Every later key gets a
/// suffix: the registry is scanned for keys that start with the
/// candidate (case-insensitively), the maximal alphabetic suffix in use
/// is found, and its successor is appended. When nothing matches the
/// suffix sequence starts over at `a`.
///
/// The returned key is guaranteed absent from the registry; if the
/// computed key is somehow taken the suffix keeps advancing.
pub fn unique_key(candidate: &str, registry: &KeyRegistry) -> String {
    if registry.is_empty() {
        return candidate.to_string();
    }

    let candidate_lower = candidate.to_lowercase();
    let mut max_postfix = String::new();
    for key in registry.keys() {
        if !key.to_lowercase().starts_with(&candidate_lower) {
            continue;
        }
        let postfix = trailing_postfix(key);
        if postfix.len() > max_postfix.len()
            || (postfix.len() == max_postfix.len() && postfix > max_postfix.as_str())
        {
            max_postfix = postfix.to_string();
        }
    }

    let mut postfix = next_postfix(&max_postfix);
    loop {
        let key = format!("{candidate}{postfix}");
        if !registry.contains_key(&key) {
            return key;
        }
        postfix = next_postfix(&postfix);
    }
}

/// The alphabetic tail of a key after its last digit run.
fn trailing_postfix(key: &str) -> &str {
    DIGIT_RUN.split(key).last().unwrap_or("")
}

/// Successor of a suffix in the alphabetic sequence.
///
/// Carries propagate across all trailing characters: `z` rolls over to
/// `aa`, `az` to `ba`, `zz` to `aaa`.
pub fn next_postfix(postfix: &str) -> String {
    let mut chars: Vec<char> = postfix.chars().collect();
    let mut i = chars.len();
    while i > 0 {
        i -= 1;
        if chars[i] != 'z' {
            chars[i] = char::from_u32(chars[i] as u32 + 1).unwrap_or('a');
            return chars.into_iter().collect();
        }
        chars[i] = 'a';
    }

    // Every position rolled over; grow by one.
    let mut rolled = String::with_capacity(chars.len() + 1);
    rolled.push('a');
    rolled.extend(chars);
    rolled
}
