//! Manifest entry scan.

use tracing::trace;

use super::literal::literal_value;
use super::patterns::{command, statements};
use crate::models::Manifest;
use crate::parser::{node_line, SourceFile};

/// Every top-level `key <literal>, ...` statement is an entry; its value is
/// the first literal positional argument. Later entries overwrite earlier ones.
pub(super) fn scan(file: &SourceFile) -> Manifest {
    let mut manifest = Manifest::new();

    for stmt in statements(file.root()) {
        let Some(cmd) = command(file, stmt) else {
            continue;
        };
        if cmd.block.is_some() {
            continue;
        }
        match cmd.args.iter().find_map(|&arg| literal_value(file, arg)) {
            Some(value) => manifest.set(cmd.name, value),
            None => trace!(key = cmd.name, line = node_line(stmt), "Skipping non-literal manifest entry"),
        }
    }

    manifest
}
