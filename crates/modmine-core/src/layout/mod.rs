//! Module directory layout and file discovery.
//!
//! A module root `R` is expected to look like:
//!
//! ```text
//! R/Manifest                      # manifest file
//! R/types/*                       # one type declaration per file
//! R/providers/<type-name>/*       # provider files for each type
//! ```
//!
//! Every listing is sorted by file name so a run is deterministic.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::config::LayoutConfig;
use crate::error::MineError;

/// Locates the files of one module.
pub struct ModuleLayout {
    root: PathBuf,
    config: LayoutConfig,
}

impl ModuleLayout {
    /// Creates a layout rooted at the given path with default config.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_config(root, LayoutConfig::default())
    }

    /// Creates a layout with custom directory names.
    pub fn with_config(root: impl Into<PathBuf>, config: LayoutConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Fails unless the root is an existing directory.
    pub fn ensure_root(&self) -> Result<(), MineError> {
        if self.root.is_dir() {
            Ok(())
        } else {
            Err(MineError::ModuleNotFound(self.root.clone()))
        }
    }

    /// Directory holding type files.
    pub fn types_dir(&self) -> PathBuf {
        self.root.join(&self.config.types_dir)
    }

    /// Directory holding provider files for one type.
    pub fn providers_dir(&self, type_name: &str) -> PathBuf {
        self.root.join(&self.config.providers_dir).join(type_name)
    }

    /// Path of the manifest file, whether or not it exists.
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.config.manifest_file)
    }

    /// Sorted type files.
    pub fn type_files(&self) -> Result<Vec<PathBuf>, MineError> {
        self.list_files(&self.types_dir())
    }

    /// Sorted provider files for one type.
    pub fn provider_files(&self, type_name: &str) -> Result<Vec<PathBuf>, MineError> {
        self.list_files(&self.providers_dir(type_name))
    }

    /// The manifest file, if present.
    pub fn manifest_file(&self) -> Option<PathBuf> {
        let path = self.manifest_path();
        path.is_file().then_some(path)
    }

    /// Regular, non-hidden files directly inside `dir`, sorted by name.
    ///
    /// A missing directory is an empty listing.
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, MineError> {
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let walker = WalkBuilder::new(dir)
            .max_depth(Some(1))
            .hidden(true)
            .parents(false)
            .ignore(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| MineError::Walk {
                path: dir.to_path_buf(),
                message: e.to_string(),
            })?;
            if entry.depth() == 0 {
                continue;
            }
            if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
                continue;
            }
            let path = entry.into_path();
            if self.accepts_extension(&path) {
                files.push(path);
            }
        }

        Ok(files)
    }

    fn accepts_extension(&self, path: &Path) -> bool {
        if self.config.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| {
                self.config
                    .extensions
                    .iter()
                    .any(|e| e.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }
}

/// Record name for a file: its file name up to the first `.`.
pub fn record_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match file_name.split_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => file_name,
    }
}
