//! Drives one mining run over a module root.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::{Config, ExtractionConfig};
use crate::document::{Document, DocumentBuilder};
use crate::error::MineError;
use crate::extract::{ExtractError, Extraction, Extractor};
use crate::layout::{record_name, ModuleLayout};
use crate::models::{Manifest, ProviderRecord, TypeRecord};
use crate::parser::{RubyParser, SourceFile};

/// Mines a module directory into a [`Document`].
///
/// Files are processed one at a time: read, parsed, scanned and dropped
/// before the next one is opened.
pub struct ModuleMiner {
    layout: ModuleLayout,
    parser: RubyParser,
    extractor: Extractor,
    config: ExtractionConfig,
}

impl ModuleMiner {
    /// Creates a miner with default configuration.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_config(root, &Config::default())
    }

    /// Creates a miner with custom configuration.
    pub fn with_config(root: impl Into<PathBuf>, config: &Config) -> Self {
        Self {
            layout: ModuleLayout::with_config(root, config.layout.clone()),
            parser: RubyParser::new(),
            extractor: Extractor::new(),
            config: config.extraction.clone(),
        }
    }

    /// Run the whole pipeline.
    pub fn mine(&self) -> Result<Document, MineError> {
        self.layout.ensure_root()?;
        info!(root = %self.layout.root().display(), "Mining module");

        let manifest = self.mine_manifest()?;

        let mut types = Vec::new();
        for path in self.layout.type_files()? {
            types.push(self.mine_type(&path)?);
        }

        info!(types = types.len(), "Module mined");
        Ok(DocumentBuilder::new(manifest).types(types).build())
    }

    /// Read the manifest; a missing file yields an empty manifest.
    pub fn mine_manifest(&self) -> Result<Manifest, MineError> {
        let Some(path) = self.layout.manifest_file() else {
            warn!(
                path = %self.layout.manifest_path().display(),
                "Manifest not found, manifest fields will be null"
            );
            return Ok(Manifest::new());
        };

        let file = self.parse_file(&path)?;
        let manifest = self.extractor.extract_manifest(&file);
        if manifest.is_empty() {
            warn!(path = %path.display(), "Manifest declares no literal entries");
        } else if !manifest.extra.is_empty() {
            debug!(keys = ?manifest.extra.keys().collect::<Vec<_>>(), "Manifest declares extra keys");
        }
        Ok(manifest)
    }

    /// Extract one type file and all of its providers.
    pub fn mine_type(&self, path: &Path) -> Result<TypeRecord, MineError> {
        let mut record = {
            let file = self.parse_file(path)?;
            match self.extractor.extract_type(&file) {
                Ok(extraction) => self.accept(&file, extraction),
                Err(err) => self.skip(err, TypeRecord::new(record_name(path)))?,
            }
        };

        for provider_path in self.layout.provider_files(&record.name)? {
            record.providers.push(self.mine_provider(&provider_path)?);
        }

        Ok(record)
    }

    /// Extract one provider file.
    pub fn mine_provider(&self, path: &Path) -> Result<ProviderRecord, MineError> {
        let file = self.parse_file(path)?;
        match self.extractor.extract_provider(&file) {
            Ok(extraction) => Ok(self.accept(&file, extraction)),
            Err(err) => self.skip(err, ProviderRecord::new(record_name(path))),
        }
    }

    fn parse_file(&self, path: &Path) -> Result<SourceFile, MineError> {
        let content = fs::read_to_string(path).map_err(|e| MineError::io(path, e))?;
        debug!(path = %path.display(), bytes = content.len(), "Parsing");
        Ok(self.parser.parse(path, content)?)
    }

    fn accept<T>(&self, file: &SourceFile, extraction: Extraction<T>) -> T {
        for miss in &extraction.misses {
            debug!(path = %file.path().display(), %miss, "Skipped non-literal declaration");
        }
        extraction.record
    }

    /// A missing anchor aborts in strict mode, otherwise yields the empty record.
    fn skip<T>(&self, err: ExtractError, empty: T) -> Result<T, MineError> {
        if self.config.strict_anchors {
            return Err(err.into());
        }
        warn!(error = %err, "Skipping file without declaration");
        Ok(empty)
    }
}
