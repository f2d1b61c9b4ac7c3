//! Type and provider records.

use super::doc_map::DocMap;

/// Everything extracted from one type declaration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeRecord {
    /// File name with its extension stripped.
    pub name: String,
    pub doc: Option<String>,
    pub features: DocMap,
    pub params: DocMap,
    pub properties: DocMap,
    /// Providers found under the type's provider directory, in file order.
    pub providers: Vec<ProviderRecord>,
}

impl TypeRecord {
    /// A record with nothing but a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Everything extracted from one provider file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderRecord {
    /// File name with its extension stripped.
    pub name: String,
    pub doc: Option<String>,
    /// `has_feature` names in source order, duplicates kept.
    pub supported_features: Vec<String>,
}

impl ProviderRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
