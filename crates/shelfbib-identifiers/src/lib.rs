//! Citation key generation
//!
//! Derives BibTeX cite keys from catalog metadata (author surname plus
//! publication year) and disambiguates collisions against previously
//! assigned keys with an alphabetic suffix sequence.

pub mod cite_key;

pub use cite_key::{base_key, next_postfix, primary_surname, unique_key};
