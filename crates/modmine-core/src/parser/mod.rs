//! Ruby source parsing on top of tree-sitter.
//!
//! The parser turns raw file text into a [`SourceFile`]: the owned text plus
//! the tree-sitter tree built from it. Trees containing `ERROR` or `MISSING`
//! nodes are rejected with a [`ParseError`]; nothing downstream attempts
//! partial recovery.

mod error;
mod treesitter;

pub use error::ParseError;
pub use treesitter::{named_children, node_line, RubyParser, SourceFile};
