// src/parse.rs

//! Line classifier for the DOT-style input format.
//!
//! Three rules are tried in order on every non-blank line:
//!
//! 1. edge:          `<node> -> <node>;` (an attribute block before the
//!    semicolon is tolerated and discarded)
//! 2. labeled node:  `<node> [key=value, key=value, ...];`
//! 3. anything else: preamble text (before the first structural line)
//!    or postamble text (after it), passed through verbatim.
//!
//! Node tokens may be quoted or bare identifiers of letters, digits,
//! underscores and spaces. A quoted attribute value has its quotes
//! stripped; an unquoted one is trimmed and kept as-is. The parser
//! does not try to recover from malformed structural lines; an
//! unmatched line is just text.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::errors::{DotpruneError, Result};
use crate::graph::Graph;

/// Parser output: the graph plus the surrounding opaque text.
#[derive(Debug, Default)]
pub struct ParsedGraph {
    pub graph: Graph,
    /// Text lines seen before the first node/edge line, newline-terminated.
    pub preamble: String,
    /// Text lines seen after structural lines began, newline-terminated.
    pub postamble: String,
}

fn edge_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"^\s*("[\w ]+"|\w+)\s*->\s*("[\w ]+"|\w+)\s*(?:\[[^\]]*\])?\s*;"#)
            .expect("edge regex")
    })
}

fn node_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"^\s*("[\w ]+"|\w+)\s*\[(.*)\]\s*;"#).expect("node regex")
    })
}

/// Build a [`Graph`] from the raw input text.
///
/// Fails only on a node declaration with no `label` attribute; every
/// other oddity degrades to pass-through text or a silently merged
/// re-declaration.
pub fn parse_graph(input: &str) -> Result<ParsedGraph> {
    let mut parsed = ParsedGraph::default();
    let mut seen_structural = false;

    for (idx, line) in input.lines().enumerate() {
        if let Some(caps) = edge_re().captures(line) {
            let from = unquote(&caps[1]);
            let to = unquote(&caps[2]);
            parsed.graph.add_edge(from, to);
            seen_structural = true;
        } else if let Some(caps) = node_re().captures(line) {
            let name = unquote(&caps[1]).to_string();
            let pairs = split_attrs(&caps[2]);
            if !pairs.iter().any(|(k, _)| k == "label") {
                return Err(DotpruneError::MissingLabel { name, line: idx + 1 });
            }
            parsed.graph.declare(&name, &pairs);
            seen_structural = true;
        } else if seen_structural {
            parsed.postamble.push_str(line);
            parsed.postamble.push('\n');
        } else {
            parsed.preamble.push_str(line);
            parsed.preamble.push('\n');
        }
    }

    debug!(nodes = parsed.graph.len(), "graph parsed");
    Ok(parsed)
}

/// Strip one pair of surrounding double quotes, if present.
fn unquote(token: &str) -> &str {
    let token = token.trim();
    token
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(token)
}

/// Split a `key=value, key=value` attribute list into pairs.
///
/// Entries with no `=` are dropped; values may be quoted.
fn split_attrs(raw: &str) -> Vec<(String, String)> {
    raw.split(',')
        .filter_map(|chunk| {
            let (key, value) = chunk.split_once('=')?;
            Some((key.trim().to_string(), unquote(value).to_string()))
        })
        .collect()
}
