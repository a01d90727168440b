// src/graph/reach.rs

//! Ancestor / descendant closure computation.
//!
//! Both traversals use an explicit work-list rather than recursion, so
//! a pathologically deep call chain cannot blow the native stack. The
//! result set doubles as the visited guard, which is what makes cyclic
//! graphs terminate.

use std::collections::BTreeSet;

use tracing::debug;

use crate::graph::store::{Graph, Node};

/// Everything the start nodes are reachable *from*: the closure over
/// predecessor links, including the start nodes themselves.
///
/// A start node is always in the result, even when it is in `ignore`;
/// the ignore set only blocks nodes from being *discovered* during
/// expansion. An ignored node reached through an edge is excluded
/// entirely, not merely left unexpanded.
pub fn ancestors_of(
    graph: &Graph,
    starts: &[String],
    ignore: &BTreeSet<String>,
) -> BTreeSet<String> {
    closure(graph, starts, ignore, |node| &node.from)
}

/// Mirror of [`ancestors_of`] over successor links.
pub fn descendants_of(
    graph: &Graph,
    starts: &[String],
    ignore: &BTreeSet<String>,
) -> BTreeSet<String> {
    closure(graph, starts, ignore, |node| &node.to)
}

fn closure(
    graph: &Graph,
    starts: &[String],
    ignore: &BTreeSet<String>,
    neighbours: fn(&Node) -> &BTreeSet<String>,
) -> BTreeSet<String> {
    let mut result: BTreeSet<String> = starts.iter().cloned().collect();
    let mut work: Vec<String> = starts.to_vec();

    while let Some(name) = work.pop() {
        let Some(node) = graph.get(&name) else {
            // Referenced but never present; nothing to expand.
            continue;
        };
        for next in neighbours(node) {
            if ignore.contains(next) || result.contains(next) {
                continue;
            }
            result.insert(next.clone());
            work.push(next.clone());
        }
    }

    debug!(starts = starts.len(), reached = result.len(), "closure computed");
    result
}
