//! Typed records produced by extraction.
//!
//! Records are built once per file and never mutated after the module
//! walk that created them finishes.

mod doc_map;
mod manifest;
mod record;

pub use doc_map::{DocEntry, DocMap};
pub use manifest::Manifest;
pub use record::{ProviderRecord, TypeRecord};
