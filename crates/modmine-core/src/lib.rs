//! Static extraction of Puppet module documentation metadata.
//!
//! Source files are parsed with tree-sitter and matched against narrow
//! structural patterns; nothing is ever executed. The pipeline is
//! [`ModuleLayout`] → [`RubyParser`] → [`Extractor`] → [`DocumentBuilder`].

pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod layout;
pub mod miner;
pub mod models;
pub mod parser;

pub use config::{Config, ConfigError, ExtractionConfig, LayoutConfig, OutputConfig};
pub use document::{Document, DocumentBuilder, ProviderDocument, TypeDocument};
pub use error::MineError;
pub use extract::{
    Anchor, DeclarationKind, ExtractError, Extraction, Extractor, FieldMiss, FieldTarget,
};
pub use layout::{record_name, ModuleLayout};
pub use miner::ModuleMiner;
pub use models::{DocEntry, DocMap, Manifest, ProviderRecord, TypeRecord};
pub use parser::{ParseError, RubyParser, SourceFile};
