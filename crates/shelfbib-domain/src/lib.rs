//! Domain types for converting a LibraryThing catalog into a bibliography
//!
//! This crate provides the shared data model:
//! - `BookRecord`: one normalized set of bibliographic fields per catalog item
//! - `KeyRegistry`: the citation-key → record map accumulated over one run

pub mod record;
pub mod registry;

pub use record::*;
pub use registry::*;
