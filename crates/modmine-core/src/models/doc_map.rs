//! Ordered name → description map with last-write-wins semantics.

use serde::Serialize;

/// A documented name (feature, parameter or property).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocEntry {
    pub name: String,
    pub doc: String,
}

/// Name → description entries in first-declaration order.
///
/// Re-declaring a name replaces its description in place, so the entry keeps
/// the position of its first declaration but carries the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DocMap {
    entries: Vec<DocEntry>,
}

impl DocMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a description.
    pub fn insert(&mut self, name: impl Into<String>, doc: impl Into<String>) {
        let name = name.into();
        let doc = doc.into();
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.doc = doc,
            None => self.entries.push(DocEntry { name, doc }),
        }
    }

    /// Description for a name, if declared.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.doc.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Declared names in order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }
}
