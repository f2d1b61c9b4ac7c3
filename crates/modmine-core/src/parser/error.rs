//! Parse error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning source text into a syntax tree.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The Ruby grammar could not be loaded into the parser.
    #[error("Failed to load Ruby grammar: {0}")]
    Language(String),

    /// tree-sitter returned no tree at all.
    #[error("Parser produced no tree for {}", path.display())]
    NoTree { path: PathBuf },

    /// The tree contains an error or missing node.
    #[error("Syntax error in {} at line {line}, column {column}: unexpected {kind}", path.display())]
    Syntax {
        path: PathBuf,
        line: usize,
        column: usize,
        kind: String,
    },
}
