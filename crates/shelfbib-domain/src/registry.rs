//! Citation key registry
//!
//! The registry accumulates one (key, record) pair per processed row.
//! Keys are unique for the whole run, and first-insertion order is the
//! contract that drives output ordering. The registry is a plain value
//! scoped to a single conversion run; callers pass it by reference into
//! key generation and record building.

use std::collections::HashMap;

use thiserror::Error;

use crate::record::BookRecord;

/// Registry error type
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate citation key: {0}")]
    DuplicateKey(String),
}

/// Citation key → record map that remembers insertion order.
#[derive(Clone, Debug, Default)]
pub struct KeyRegistry {
    records: HashMap<String, BookRecord>,
    order: Vec<String>,
}

impl KeyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.records.contains_key(key)
    }

    /// All assigned keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&BookRecord> {
        self.records.get(key)
    }

    /// Insert a record under a fresh key. Keys are never reassigned;
    /// a duplicate is rejected rather than overwritten.
    pub fn insert(&mut self, key: String, record: BookRecord) -> Result<(), RegistryError> {
        if self.records.contains_key(&key) {
            return Err(RegistryError::DuplicateKey(key));
        }
        self.order.push(key.clone());
        self.records.insert(key, record);
        Ok(())
    }

    /// Iterate (key, record) pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BookRecord)> {
        self.order.iter().map(|key| {
            let record = self
                .records
                .get(key)
                .unwrap_or_else(|| unreachable!("ordered key missing from map: {key}"));
            (key.as_str(), record)
        })
    }
}
