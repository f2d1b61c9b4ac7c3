//! Extraction error types.

use std::path::PathBuf;
use thiserror::Error;

use super::DeclarationKind;

/// Errors that stop extraction for a whole file.
///
/// Field-level mismatches never surface here; they are recorded as
/// [`FieldMiss`](super::FieldMiss) entries on the extraction result.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// No top-level statement matches the declaration anchor.
    #[error("No {kind} declaration found in {}", path.display())]
    AnchorNotFound {
        kind: DeclarationKind,
        path: PathBuf,
    },
}
