//! Field scans over a type or provider body.

use tree_sitter::Node;

use super::literal::{name_token, string_value};
use super::patterns::{block_statements, call_arguments, command, ivar_assignment, Command};
use super::{FieldMiss, FieldTarget};
use crate::models::{DocMap, ProviderRecord, TypeRecord};
use crate::parser::{node_line, SourceFile};

/// Instance field holding a declaration's documentation.
const DOC_IVAR: &str = "@doc";

/// Scan a `newtype` body for doc, features, parameters and properties.
pub(super) fn scan_type(file: &SourceFile, body: &[Node<'_>], record: &mut TypeRecord) -> Vec<FieldMiss> {
    let mut misses = Vec::new();
    let mut doc_seen = false;

    for &stmt in body {
        if let Some(rhs) = ivar_assignment(file, stmt, DOC_IVAR) {
            assign_doc(file, stmt, rhs, &mut record.doc, &mut doc_seen, &mut misses);
            continue;
        }
        let Some(cmd) = command(file, stmt) else {
            continue;
        };
        match cmd.name {
            "feature" => insert_or_miss(
                feature(file, &cmd),
                &mut record.features,
                FieldTarget::Feature,
                stmt,
                &mut misses,
            ),
            "newparam" => insert_or_miss(
                documented_field(file, &cmd),
                &mut record.params,
                FieldTarget::Parameter,
                stmt,
                &mut misses,
            ),
            "newproperty" => insert_or_miss(
                documented_field(file, &cmd),
                &mut record.properties,
                FieldTarget::Property,
                stmt,
                &mut misses,
            ),
            _ => {}
        }
    }

    misses
}

/// Scan a `provide` body for doc and feature flags.
pub(super) fn scan_provider(
    file: &SourceFile,
    body: &[Node<'_>],
    record: &mut ProviderRecord,
) -> Vec<FieldMiss> {
    let mut misses = Vec::new();
    let mut doc_seen = false;

    for &stmt in body {
        if let Some(rhs) = ivar_assignment(file, stmt, DOC_IVAR) {
            assign_doc(file, stmt, rhs, &mut record.doc, &mut doc_seen, &mut misses);
            continue;
        }
        let Some(cmd) = command(file, stmt) else {
            continue;
        };
        match cmd.name {
            "has_feature" => match cmd.args.as_slice() {
                [only] => match name_token(file, *only) {
                    Some(name) => record.supported_features.push(name),
                    None => misses.push(miss(FieldTarget::ProviderFeature, stmt)),
                },
                _ => misses.push(miss(FieldTarget::ProviderFeature, stmt)),
            },
            "has_features" => {
                if cmd.args.is_empty() {
                    misses.push(miss(FieldTarget::ProviderFeature, stmt));
                }
                for &arg in &cmd.args {
                    match name_token(file, arg) {
                        Some(name) => record.supported_features.push(name),
                        None => misses.push(miss(FieldTarget::ProviderFeature, arg)),
                    }
                }
            }
            _ => {}
        }
    }

    misses
}

/// The first `@doc` assignment decides; later ones are ignored.
fn assign_doc(
    file: &SourceFile,
    stmt: Node<'_>,
    rhs: Node<'_>,
    doc: &mut Option<String>,
    seen: &mut bool,
    misses: &mut Vec<FieldMiss>,
) {
    if std::mem::replace(seen, true) {
        return;
    }
    match string_value(file, rhs) {
        Some(value) => *doc = Some(value),
        None => misses.push(miss(FieldTarget::Doc, stmt)),
    }
}

/// `feature <name>, <description>` with exactly two positional arguments.
fn feature(file: &SourceFile, cmd: &Command<'_>) -> Option<(String, String)> {
    match cmd.args.as_slice() {
        [name, desc] => Some((name_token(file, *name)?, string_value(file, *desc)?)),
        _ => None,
    }
}

/// `newparam(<name>) do <call "description"> ... end`, likewise `newproperty`.
///
/// The description is the first positional argument of the block's first
/// statement, usually `desc "..."`.
fn documented_field(file: &SourceFile, cmd: &Command<'_>) -> Option<(String, String)> {
    let name = match cmd.args.as_slice() {
        [only] => name_token(file, *only)?,
        _ => return None,
    };
    let first = *block_statements(cmd.block?).first()?;
    let desc = string_value(file, *call_arguments(first).first()?)?;
    Some((name, desc))
}

fn insert_or_miss(
    entry: Option<(String, String)>,
    map: &mut DocMap,
    target: FieldTarget,
    stmt: Node<'_>,
    misses: &mut Vec<FieldMiss>,
) {
    match entry {
        Some((name, doc)) => map.insert(name, doc),
        None => misses.push(miss(target, stmt)),
    }
}

fn miss(target: FieldTarget, node: Node<'_>) -> FieldMiss {
    FieldMiss {
        target,
        line: node_line(node),
    }
}
