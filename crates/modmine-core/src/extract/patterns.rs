//! Named structural patterns over the Ruby syntax tree.
//!
//! Every pattern tests a single node and returns its captures, or `None` when
//! the node has a different shape. Extraction code composes these instead of
//! indexing into child positions, so a grammar change only touches this file.

use tree_sitter::Node;

use super::literal::name_token;
use crate::parser::{named_children, SourceFile};

/// Extras the grammar may attach anywhere; never statements or arguments.
const TRIVIA: &[&str] = &["comment", "heredoc_body"];

/// Argument kinds that are not positional.
const NON_POSITIONAL: &[&str] = &["pair", "block_argument", "hash_splat_argument"];

/// Block node kinds that can trail a call.
const BLOCK_KINDS: &[&str] = &["do_block", "block"];

/// Shape of a declaration anchor.
///
/// `scope.method(<name>)` with a trailing block, or, when `chained` is set,
/// `scope.method(<target>).chained(<name>, ...)` with the block on the outer call.
#[derive(Debug, Clone, Copy)]
pub struct AnchorPattern {
    pub scope: &'static [&'static str],
    pub method: &'static str,
    pub chained: Option<&'static str>,
}

/// `Puppet::Type.newtype(:name) do ... end`
pub const TYPE_ANCHOR: AnchorPattern = AnchorPattern {
    scope: &["Puppet", "Type"],
    method: "newtype",
    chained: None,
};

/// `Puppet::Type.type(:type).provide(:name, ...) do ... end`
pub const PROVIDER_ANCHOR: AnchorPattern = AnchorPattern {
    scope: &["Puppet", "Type"],
    method: "type",
    chained: Some("provide"),
};

/// Captures of a matched anchor statement.
#[derive(Debug)]
pub struct AnchorMatch<'a> {
    /// Name given in the declaration (`:package` in `newtype(:package)`).
    pub declared: String,
    /// Type named by `type(...)` in a chained anchor.
    pub target: Option<String>,
    pub block: Node<'a>,
}

impl AnchorPattern {
    /// Test one top-level statement against this anchor shape.
    pub fn matches<'a>(&self, file: &'a SourceFile, stmt: Node<'a>) -> Option<AnchorMatch<'a>> {
        let block = trailing_block(stmt)?;

        match self.chained {
            None => {
                let declared = self.qualified_call(file, stmt)?;
                Some(AnchorMatch {
                    declared,
                    target: None,
                    block,
                })
            }
            Some(outer) => {
                if method_name(file, stmt)? != outer {
                    return None;
                }
                let args = call_arguments(stmt);
                let declared = name_token(file, *args.first()?)?;
                let receiver = stmt.child_by_field_name("receiver")?;
                let target = self.qualified_call(file, receiver)?;
                Some(AnchorMatch {
                    declared,
                    target: Some(target),
                    block,
                })
            }
        }
    }

    /// `scope.method(<name>, ...)` with exactly one positional argument;
    /// keyword options may follow. Captures the name.
    fn qualified_call(&self, file: &SourceFile, node: Node<'_>) -> Option<String> {
        if node.kind() != "call" || method_name(file, node)? != self.method {
            return None;
        }
        let receiver = node.child_by_field_name("receiver")?;
        if qualified_name(file, receiver)? != self.scope {
            return None;
        }
        let args = call_arguments(node);
        match args.as_slice() {
            [only] => name_token(file, *only),
            _ => None,
        }
    }
}

/// A receiver-less call such as `feature :x, "doc"` or `newparam(:x) do ... end`.
#[derive(Debug)]
pub struct Command<'a> {
    pub name: &'a str,
    pub args: Vec<Node<'a>>,
    pub block: Option<Node<'a>>,
}

/// Match a receiver-less call whose method is a bare identifier.
pub fn command<'a>(file: &'a SourceFile, node: Node<'a>) -> Option<Command<'a>> {
    if node.kind() != "call" || node.child_by_field_name("receiver").is_some() {
        return None;
    }
    let method = node.child_by_field_name("method")?;
    if method.kind() != "identifier" {
        return None;
    }
    Some(Command {
        name: file.text(method),
        args: call_arguments(node),
        block: trailing_block(node),
    })
}

/// Match `<ivar> = <rhs>`; captures the right-hand side.
pub fn ivar_assignment<'a>(file: &SourceFile, node: Node<'a>, ivar: &str) -> Option<Node<'a>> {
    if node.kind() != "assignment" {
        return None;
    }
    let left = node.child_by_field_name("left")?;
    if left.kind() != "instance_variable" || file.text(left) != ivar {
        return None;
    }
    node.child_by_field_name("right")
}

/// Positional arguments of any call node, in order.
pub fn call_arguments(node: Node<'_>) -> Vec<Node<'_>> {
    if node.kind() != "call" {
        return Vec::new();
    }
    all_arguments(node)
        .into_iter()
        .filter(|n| !NON_POSITIONAL.contains(&n.kind()))
        .collect()
}

/// Direct statements of a program or block, trivia removed.
pub fn statements(node: Node<'_>) -> Vec<Node<'_>> {
    named_children(node)
        .into_iter()
        .filter(|n| !TRIVIA.contains(&n.kind()))
        .collect()
}

/// Direct statements inside a `do ... end` or `{ ... }` block.
///
/// Newer grammars wrap the statements in a `body` field; older ones place
/// them directly under the block next to its parameters.
pub fn block_statements(block: Node<'_>) -> Vec<Node<'_>> {
    match block.child_by_field_name("body") {
        Some(body) => statements(body),
        None => statements(block)
            .into_iter()
            .filter(|n| n.kind() != "block_parameters")
            .collect(),
    }
}

/// Constant path segments: `Puppet::Type` → `["Puppet", "Type"]`.
///
/// A leading `::` is ignored. Returns `None` for anything but constants.
pub fn qualified_name<'a>(file: &'a SourceFile, node: Node<'a>) -> Option<Vec<&'a str>> {
    match node.kind() {
        "constant" => Some(vec![file.text(node)]),
        "scope_resolution" => {
            let name = node.child_by_field_name("name")?;
            if name.kind() != "constant" {
                return None;
            }
            let mut segments = match node.child_by_field_name("scope") {
                Some(scope) => qualified_name(file, scope)?,
                None => Vec::new(),
            };
            segments.push(file.text(name));
            Some(segments)
        }
        _ => None,
    }
}

fn method_name<'a>(file: &'a SourceFile, node: Node<'a>) -> Option<&'a str> {
    node.child_by_field_name("method").map(|m| file.text(m))
}

fn trailing_block(node: Node<'_>) -> Option<Node<'_>> {
    if node.kind() != "call" {
        return None;
    }
    node.child_by_field_name("block")
        .filter(|b| BLOCK_KINDS.contains(&b.kind()))
}

fn all_arguments(node: Node<'_>) -> Vec<Node<'_>> {
    match node.child_by_field_name("arguments") {
        Some(list) => statements(list),
        None => Vec::new(),
    }
}
