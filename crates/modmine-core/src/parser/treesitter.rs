//! Tree-sitter based Ruby parser and the parsed-file handle.

use std::path::{Path, PathBuf};

use tree_sitter::{Language, Node, Parser as TSParser, Tree};

use super::error::ParseError;

/// Ruby parser backed by the tree-sitter Ruby grammar.
pub struct RubyParser {
    language: Language,
}

impl RubyParser {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_ruby::LANGUAGE.into(),
        }
    }

    /// Parse source text into a [`SourceFile`].
    ///
    /// `path` is only used for error reporting and record naming.
    pub fn parse(
        &self,
        path: impl Into<PathBuf>,
        content: impl Into<String>,
    ) -> Result<SourceFile, ParseError> {
        let path = path.into();
        let content = content.into();

        let mut parser = TSParser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| ParseError::Language(e.to_string()))?;

        let tree = parser
            .parse(&content, None)
            .ok_or_else(|| ParseError::NoTree { path: path.clone() })?;

        if let Some(bad) = first_error(tree.root_node()) {
            let position = bad.start_position();
            let kind = if bad.is_missing() {
                format!("missing {}", bad.kind())
            } else {
                "token".to_string()
            };
            return Err(ParseError::Syntax {
                path,
                line: position.row + 1,
                column: position.column + 1,
                kind,
            });
        }

        Ok(SourceFile {
            path,
            content,
            tree,
        })
    }
}

impl Default for RubyParser {
    fn default() -> Self {
        Self::new()
    }
}

/// A parsed source file: owned text plus its syntax tree.
///
/// Nodes borrow from the tree, so every extraction over a file happens while
/// the `SourceFile` is alive and the file is dropped as a whole afterwards.
pub struct SourceFile {
    path: PathBuf,
    content: String,
    tree: Tree,
}

impl SourceFile {
    /// Path the file was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw source text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The top-level `program` node.
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Source text covered by a node.
    pub fn text(&self, node: Node<'_>) -> &str {
        &self.content[node.byte_range()]
    }
}

/// Named children of a node, in source order.
pub fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.named_children(&mut cursor).collect();
    children
}

/// 1-based line number of a node.
pub fn node_line(node: Node<'_>) -> usize {
    node.start_position().row + 1
}

/// Depth-first search for the first `ERROR` or `MISSING` node.
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}
