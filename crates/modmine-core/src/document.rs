//! Output document assembly and JSON encoding.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::MineError;
use crate::models::{DocMap, Manifest, ProviderRecord, TypeRecord};

/// The aggregate emitted for one module.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub dependencies: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub license: Option<String>,
    pub author: Option<String>,
    pub source: Option<String>,
    pub name: Option<String>,
    /// Reserved; always empty.
    pub checksums: BTreeMap<String, String>,
    pub types: Vec<TypeDocument>,
}

/// One type in the output document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeDocument {
    pub name: String,
    pub doc: Option<String>,
    pub parameters: DocMap,
    pub properties: DocMap,
    pub features: DocMap,
    pub providers: Vec<ProviderDocument>,
}

/// One provider in the output document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderDocument {
    pub name: String,
    pub doc: Option<String>,
    pub features: Vec<String>,
}

impl Document {
    /// Encode as JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String, MineError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    pub fn type_named(&self, name: &str) -> Option<&TypeDocument> {
        self.types.iter().find(|t| t.name == name)
    }
}

/// Composes a manifest and extracted type records into a [`Document`].
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    manifest: Manifest,
    types: Vec<TypeRecord>,
}

impl DocumentBuilder {
    pub fn new(manifest: Manifest) -> Self {
        Self {
            manifest,
            types: Vec::new(),
        }
    }

    /// Append a type; types keep the order they are added in.
    pub fn add_type(mut self, record: TypeRecord) -> Self {
        self.types.push(record);
        self
    }

    /// Append several types in order.
    pub fn types(mut self, records: impl IntoIterator<Item = TypeRecord>) -> Self {
        self.types.extend(records);
        self
    }

    pub fn build(self) -> Document {
        let Manifest {
            name,
            version,
            summary,
            description,
            license,
            author,
            source,
            dependencies,
            extra: _,
        } = self.manifest;

        Document {
            dependencies,
            summary,
            description,
            version,
            license,
            author,
            source,
            name,
            checksums: BTreeMap::new(),
            types: self.types.into_iter().map(type_document).collect(),
        }
    }
}

fn type_document(record: TypeRecord) -> TypeDocument {
    TypeDocument {
        name: record.name,
        doc: record.doc,
        parameters: record.params,
        properties: record.properties,
        features: record.features,
        providers: record.providers.into_iter().map(provider_document).collect(),
    }
}

fn provider_document(record: ProviderRecord) -> ProviderDocument {
    ProviderDocument {
        name: record.name,
        doc: record.doc,
        features: record.supported_features,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_shape() {
        let doc = DocumentBuilder::new(Manifest::new()).build();
        let json = doc.to_json(false).unwrap();
        assert_eq!(
            json,
            r#"{"dependencies":null,"summary":null,"description":null,"version":null,"license":null,"author":null,"source":null,"name":null,"checksums":{},"types":[]}"#
        );
    }

    #[test]
    fn test_type_and_provider_shape() {
        let mut record = TypeRecord::new("package");
        record.doc = Some("Manage packages".to_string());
        record.params.insert("name", "The package name");
        record.providers.push(ProviderRecord {
            name: "apt".to_string(),
            doc: None,
            supported_features: vec!["versionable".to_string()],
        });

        let doc = DocumentBuilder::new(Manifest::new()).add_type(record).build();
        let value: serde_json::Value = serde_json::from_str(&doc.to_json(true).unwrap()).unwrap();

        let ty = &value["types"][0];
        assert_eq!(ty["name"], "package");
        assert_eq!(ty["doc"], "Manage packages");
        assert_eq!(ty["parameters"][0]["name"], "name");
        assert_eq!(ty["parameters"][0]["doc"], "The package name");
        assert_eq!(ty["properties"], serde_json::json!([]));
        assert_eq!(ty["providers"][0]["name"], "apt");
        assert!(ty["providers"][0]["doc"].is_null());
        assert_eq!(ty["providers"][0]["features"][0], "versionable");
    }

    #[test]
    fn test_manifest_fields_copied() {
        let mut manifest = Manifest::new();
        manifest.set("name", "acme-demo");
        manifest.set("dependencies", "acme-core");
        manifest.set("homepage", "https://example.org");

        let doc = DocumentBuilder::new(manifest).build();
        assert_eq!(doc.name.as_deref(), Some("acme-demo"));
        assert_eq!(doc.dependencies.as_deref(), Some("acme-core"));
        assert!(doc.source.is_none());
        assert!(doc.checksums.is_empty());
    }
}
