//! Module manifest fields.

use std::collections::BTreeMap;

/// Keys the manifest knows about, in output order.
const MANIFEST_KEYS: &[&str] = &[
    "dependencies",
    "summary",
    "description",
    "version",
    "license",
    "author",
    "source",
    "name",
];

/// Manifest fields declared at the top level of the `Manifest` file.
///
/// Known keys live in typed fields; anything else a manifest declares is
/// kept in `extra` so no declaration is silently dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub name: Option<String>,
    pub version: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub license: Option<String>,
    pub author: Option<String>,
    pub source: Option<String>,
    pub dependencies: Option<String>,
    pub extra: BTreeMap<String, String>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a declaration. A later value for the same key replaces the earlier one.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.slot_mut(key) {
            Some(slot) => *slot = Some(value),
            None => {
                self.extra.insert(key.to_string(), value);
            }
        }
    }

    /// Value declared for a key, known or extra.
    pub fn get(&self, key: &str) -> Option<&str> {
        match self.slot(key) {
            Some(slot) => slot.as_deref(),
            None => self.extra.get(key).map(String::as_str),
        }
    }

    /// True when no key at all was declared.
    pub fn is_empty(&self) -> bool {
        MANIFEST_KEYS.iter().all(|k| self.get(k).is_none()) && self.extra.is_empty()
    }

    fn slot(&self, key: &str) -> Option<&Option<String>> {
        match key {
            "name" => Some(&self.name),
            "version" => Some(&self.version),
            "summary" => Some(&self.summary),
            "description" => Some(&self.description),
            "license" => Some(&self.license),
            "author" => Some(&self.author),
            "source" => Some(&self.source),
            "dependencies" => Some(&self.dependencies),
            _ => None,
        }
    }

    fn slot_mut(&mut self, key: &str) -> Option<&mut Option<String>> {
        match key {
            "name" => Some(&mut self.name),
            "version" => Some(&mut self.version),
            "summary" => Some(&mut self.summary),
            "description" => Some(&mut self.description),
            "license" => Some(&mut self.license),
            "author" => Some(&mut self.author),
            "source" => Some(&mut self.source),
            "dependencies" => Some(&mut self.dependencies),
            _ => None,
        }
    }
}
