//! Literal capture: values taken straight from string, symbol and number nodes.
//!
//! Anything built at runtime (interpolation, concatenation, method calls,
//! variables) yields `None`.

use tree_sitter::Node;

use crate::parser::{named_children, SourceFile};

/// Value of a literal string or heredoc.
pub fn string_value(file: &SourceFile, node: Node<'_>) -> Option<String> {
    match node.kind() {
        "string" => quoted_content(file, node),
        "heredoc_beginning" => heredoc_value(file, node),
        _ => None,
    }
}

/// A name token: symbol or literal string.
pub fn name_token(file: &SourceFile, node: Node<'_>) -> Option<String> {
    match node.kind() {
        "simple_symbol" => Some(file.text(node).trim_start_matches(':').to_string()),
        "delimited_symbol" => quoted_content(file, node),
        _ => string_value(file, node),
    }
}

/// Any literal scalar: string, heredoc, symbol or number.
pub fn literal_value(file: &SourceFile, node: Node<'_>) -> Option<String> {
    match node.kind() {
        "simple_symbol" | "delimited_symbol" => name_token(file, node),
        "integer" | "float" => Some(file.text(node).to_string()),
        _ => string_value(file, node),
    }
}

fn quoted_content(file: &SourceFile, node: Node<'_>) -> Option<String> {
    let raw = file.text(node);
    let single_quoted = raw.starts_with('\'') || raw.starts_with("%q") || raw.starts_with(":'");

    let mut value = String::new();
    for child in named_children(node) {
        match child.kind() {
            "string_content" if single_quoted => {
                value.push_str(&unescape_single_quoted(file.text(child)))
            }
            "string_content" => value.push_str(file.text(child)),
            "escape_sequence" => value.push_str(&decode_escape(file.text(child))),
            _ => return None,
        }
    }
    Some(value)
}

fn heredoc_value(file: &SourceFile, beginning: Node<'_>) -> Option<String> {
    let opener = file.text(beginning);
    let body = heredoc_body_after(beginning)?;
    let content = file.content();

    let mut value = String::new();
    let mut cursor = body.start_byte();
    let mut end = body.end_byte();
    for child in named_children(body) {
        value.push_str(&content[cursor..child.start_byte()]);
        cursor = child.start_byte();
        match child.kind() {
            "heredoc_end" => {
                end = child.start_byte();
                break;
            }
            "interpolation" => return None,
            "escape_sequence" => value.push_str(&decode_escape(file.text(child))),
            _ => value.push_str(file.text(child)),
        }
        cursor = child.end_byte();
    }
    if cursor < end {
        value.push_str(&content[cursor..end]);
    }

    // A body scanned from the middle of a line starts with that line's newline.
    if body.start_position().column != 0 {
        if let Some(rest) = value.strip_prefix("\r\n").or_else(|| value.strip_prefix('\n')) {
            value = rest.to_string();
        }
    }
    // Indentation in front of an indented terminator belongs to the terminator.
    if let Some(idx) = value.rfind('\n') {
        if value[idx + 1..].trim().is_empty() {
            value.truncate(idx + 1);
        }
    }

    if opener.starts_with("<<~") {
        value = dedent(&value);
    }
    Some(value)
}

/// Heredoc bodies are grammar extras, attached wherever the parser was when
/// the body started. Bodies follow the line their openers share, in opener
/// order, so the n-th opener on a line owns the n-th body after that line.
fn heredoc_body_after(beginning: Node<'_>) -> Option<Node<'_>> {
    let mut root = beginning;
    while let Some(parent) = root.parent() {
        root = parent;
    }

    let row = beginning.start_position().row;
    let mut openers = Vec::new();
    collect_kind(root, "heredoc_beginning", &mut openers);
    let rank = openers
        .iter()
        .filter(|o| o.start_position().row == row && o.start_byte() < beginning.start_byte())
        .count();
    let line_end = openers
        .iter()
        .filter(|o| o.start_position().row == row)
        .map(|o| o.end_byte())
        .max()
        .unwrap_or_else(|| beginning.end_byte());

    let mut bodies = Vec::new();
    collect_kind(root, "heredoc_body", &mut bodies);
    bodies.sort_by_key(|b| b.start_byte());
    bodies.into_iter().filter(|b| b.start_byte() >= line_end).nth(rank)
}

/// Every node of one kind under `node`, in tree order.
fn collect_kind<'a>(node: Node<'a>, kind: &str, out: &mut Vec<Node<'a>>) {
    if node.kind() == kind {
        out.push(node);
        return;
    }
    for child in named_children(node) {
        collect_kind(child, kind, out);
    }
}

/// Strip the common leading whitespace of non-blank lines (`<<~`).
fn dedent(text: &str) -> String {
    let indent = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start_matches(|c: char| c == ' ' || c == '\t').len())
        .min()
        .unwrap_or(0);

    text.split_inclusive('\n')
        .map(|line| {
            let strip = line
                .char_indices()
                .take_while(|(i, c)| *i < indent && (*c == ' ' || *c == '\t'))
                .count();
            &line[strip..]
        })
        .collect()
}

fn unescape_single_quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if next == '\\' || next == '\'' {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

/// Decode one escape sequence node (`\n`, `\u00e9`, `\x41`, `\101`, `\"`).
fn decode_escape(seq: &str) -> String {
    let body = seq.strip_prefix('\\').unwrap_or(seq);
    let mut chars = body.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let rest = chars.as_str();

    match first {
        'n' => "\n".to_string(),
        't' => "\t".to_string(),
        'r' => "\r".to_string(),
        's' => " ".to_string(),
        'e' => "\x1b".to_string(),
        'a' => "\x07".to_string(),
        'b' => "\x08".to_string(),
        'f' => "\x0c".to_string(),
        'v' => "\x0b".to_string(),
        '\n' => String::new(),
        'u' => rest
            .trim_start_matches('{')
            .trim_end_matches('}')
            .split_whitespace()
            .filter_map(|hex| u32::from_str_radix(hex, 16).ok())
            .filter_map(char::from_u32)
            .collect(),
        'x' => u32::from_str_radix(rest, 16)
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_default(),
        d if d.is_digit(8) => u32::from_str_radix(body, 8)
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_default(),
        other => other.to_string(),
    }
}
