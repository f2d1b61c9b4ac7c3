//! Declaration extraction.
//!
//! Extraction runs in two stages per file:
//!
//! 1. **Anchor location**: the first top-level statement matching the anchor
//!    for the requested [`DeclarationKind`] becomes the root. Later matches are
//!    ignored; a file declares exactly one type or provider.
//! 2. **Field extraction**: a single pass over the anchor body's direct
//!    statements, dispatching on statement shape. Nested conditionals and
//!    loops are never entered.
//!
//! Only a missing anchor fails a file. A statement that looks like a field
//! declaration but does not carry literal values is recorded as a
//! [`FieldMiss`] and skipped.
//!
//! Manifest files have no anchor: every top-level `key value` call is an entry.

mod declaration;
mod error;
mod literal;
mod manifest;
mod patterns;

pub use error::ExtractError;

use std::fmt;

use tracing::debug;
use tree_sitter::Node;

use crate::layout::record_name;
use crate::models::{Manifest, ProviderRecord, TypeRecord};
use crate::parser::{node_line, SourceFile};
use patterns::{block_statements, statements, AnchorPattern, PROVIDER_ANCHOR, TYPE_ANCHOR};

/// Which declaration a file is expected to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Type,
    Provider,
}

impl DeclarationKind {
    fn anchor(self) -> &'static AnchorPattern {
        match self {
            Self::Type => &TYPE_ANCHOR,
            Self::Provider => &PROVIDER_ANCHOR,
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type => write!(f, "type (Puppet::Type.newtype)"),
            Self::Provider => write!(f, "provider (Puppet::Type.type(..).provide)"),
        }
    }
}

/// The located root of a declaration.
#[derive(Debug)]
pub struct Anchor<'a> {
    pub kind: DeclarationKind,
    /// Name given in the declaration itself.
    pub declared: String,
    /// Type a provider attaches to.
    pub target: Option<String>,
    /// Line of the anchor statement.
    pub line: usize,
    /// Direct statements of the anchor block.
    pub body: Vec<Node<'a>>,
}

/// Field category of a skipped statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTarget {
    Doc,
    Feature,
    Parameter,
    Property,
    ProviderFeature,
}

impl fmt::Display for FieldTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Doc => "doc",
            Self::Feature => "feature",
            Self::Parameter => "parameter",
            Self::Property => "property",
            Self::ProviderFeature => "provider feature",
        };
        f.write_str(name)
    }
}

/// A field statement that did not have the expected literal shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMiss {
    pub target: FieldTarget,
    pub line: usize,
}

impl fmt::Display for FieldMiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at line {}", self.target, self.line)
    }
}

/// Result of extracting one declaration file.
#[derive(Debug, Clone)]
pub struct Extraction<T> {
    pub record: T,
    /// Name given in the anchor, which may differ from the file name.
    pub declared: String,
    pub misses: Vec<FieldMiss>,
}

/// Stateless extractor; one instance serves every file of a run.
#[derive(Debug, Default, Clone, Copy)]
pub struct Extractor;

impl Extractor {
    pub fn new() -> Self {
        Self
    }

    /// Stage A: find the first top-level statement matching the anchor.
    pub fn locate_anchor<'a>(
        &self,
        file: &'a SourceFile,
        kind: DeclarationKind,
    ) -> Result<Anchor<'a>, ExtractError> {
        let pattern = kind.anchor();
        statements(file.root())
            .into_iter()
            .find_map(|stmt| {
                pattern.matches(file, stmt).map(|m| Anchor {
                    kind,
                    declared: m.declared,
                    target: m.target,
                    line: node_line(stmt),
                    body: block_statements(m.block),
                })
            })
            .ok_or_else(|| ExtractError::AnchorNotFound {
                kind,
                path: file.path().to_path_buf(),
            })
    }

    /// Extract a type declaration; the record is named after the file.
    pub fn extract_type(&self, file: &SourceFile) -> Result<Extraction<TypeRecord>, ExtractError> {
        let anchor = self.locate_anchor(file, DeclarationKind::Type)?;
        let mut record = TypeRecord::new(record_name(file.path()));
        let misses = declaration::scan_type(file, &anchor.body, &mut record);

        debug!(
            path = %file.path().display(),
            declared = %anchor.declared,
            params = record.params.len(),
            properties = record.properties.len(),
            features = record.features.len(),
            misses = misses.len(),
            "Extracted type"
        );

        Ok(Extraction {
            record,
            declared: anchor.declared,
            misses,
        })
    }

    /// Extract a provider declaration; the record is named after the file.
    pub fn extract_provider(
        &self,
        file: &SourceFile,
    ) -> Result<Extraction<ProviderRecord>, ExtractError> {
        let anchor = self.locate_anchor(file, DeclarationKind::Provider)?;
        let mut record = ProviderRecord::new(record_name(file.path()));
        let misses = declaration::scan_provider(file, &anchor.body, &mut record);

        debug!(
            path = %file.path().display(),
            declared = %anchor.declared,
            target = anchor.target.as_deref().unwrap_or_default(),
            features = record.supported_features.len(),
            misses = misses.len(),
            "Extracted provider"
        );

        Ok(Extraction {
            record,
            declared: anchor.declared,
            misses,
        })
    }

    /// Extract manifest entries from every top-level `key value` statement.
    pub fn extract_manifest(&self, file: &SourceFile) -> Manifest {
        manifest::scan(file)
    }
}
