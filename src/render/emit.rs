// src/render/emit.rs

//! Re-serialization of the kept subgraph.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use crate::graph::{Graph, Node};
use crate::render::annotate::edge_color;

/// Write the filtered graph back out in the input convention.
///
/// Layout: preamble verbatim, then one block per kept node (the node
/// declaration, its kept outgoing edges, a blank line), then postamble
/// verbatim. Keep-set names iterate in sorted order and successor sets
/// are sorted too, so output is stable across runs.
///
/// A kept name whose node never got a `label` (auto-created by an edge,
/// never declared) is dropped entirely: no node line and no edge lines
/// in either direction.
pub fn emit(graph: &Graph, keep: &BTreeSet<String>, preamble: &str, postamble: &str) -> String {
    let mut out = String::new();
    out.push_str(preamble);

    for name in keep {
        let Some(node) = graph.get(name) else {
            continue;
        };
        if node.attrs.label.is_none() {
            continue;
        }

        write_node_line(&mut out, name, node);
        for succ in &node.to {
            if !keep.contains(succ) || !has_label(graph, succ) {
                continue;
            }
            let color = edge_color(graph, name, succ);
            let _ = writeln!(out, "\"{name}\" -> \"{succ}\" [color=\"{color}\"];");
        }
        out.push('\n');
    }

    out.push_str(postamble);
    out
}

fn has_label(graph: &Graph, name: &str) -> bool {
    graph
        .get(name)
        .is_some_and(|node| node.attrs.label.is_some())
}

/// One node declaration: every attribute except the adjacency sets,
/// typed fields first, pass-through extras sorted by key.
fn write_node_line(out: &mut String, name: &str, node: &Node) {
    let mut pairs: Vec<(&str, &str)> = Vec::new();
    if let Some(label) = node.attrs.label.as_deref() {
        pairs.push(("label", label));
    }
    if let Some(style) = node.attrs.style.as_deref() {
        pairs.push(("style", style));
    }
    if let Some(fillcolor) = node.attrs.fillcolor.as_deref() {
        pairs.push(("fillcolor", fillcolor));
    }
    for (key, value) in &node.attrs.extra {
        pairs.push((key, value));
    }

    let attrs = pairs
        .iter()
        .map(|(k, v)| format!("{k}=\"{v}\""))
        .collect::<Vec<_>>()
        .join(",");
    let _ = writeln!(out, "\"{name}\" [{attrs}];");
}
