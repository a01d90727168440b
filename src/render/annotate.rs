// src/render/annotate.rs

//! Color assignment for kept nodes.
//!
//! Two rules, applied in this order per node (the later one wins when
//! both match):
//!
//! 1. direct `--ancestors-of` / `--descendents-of` targets get
//!    `style = "bold,filled"` and a per-target color from the target
//!    palette;
//! 2. members of a resolved trigger group get the group's shared color,
//!    overriding rule 1.
//!
//! Both palettes are fixed-size and cycle once exhausted; reusing a
//! color is fine, running out is not an error.

use std::collections::{BTreeSet, HashMap};

use crate::graph::{Graph, ResolvedGroup};

/// Per-target colors (rule 1), one per requested target label in flag
/// order, reused modulo the palette size.
pub const TARGET_PALETTE: [&str; 7] = [
    "red",
    "royalblue",
    "forestgreen",
    "darkorange",
    "purple",
    "saddlebrown",
    "deeppink",
];

/// Per-group colors (rule 2), one per resolved trigger group.
pub const GROUP_PALETTE: [&str; 8] = [
    "gold",
    "skyblue",
    "palegreen",
    "salmon",
    "orchid",
    "khaki",
    "lightcoral",
    "turquoise",
];

/// Translucent fallback for edges between two uncolored nodes.
pub const DEFAULT_EDGE_COLOR: &str = "#00000033";

/// Apply both coloring rules to every node in the keep set.
///
/// `targets` are the resolved *names* of the direct targets, in the
/// order the labels were given on the command line; a duplicate target
/// keeps its first position's color.
pub fn annotate(
    graph: &mut Graph,
    keep: &BTreeSet<String>,
    targets: &[String],
    groups: &[ResolvedGroup],
) {
    let mut target_slot: HashMap<&str, usize> = HashMap::new();
    for (idx, name) in targets.iter().enumerate() {
        target_slot.entry(name.as_str()).or_insert(idx);
    }

    for name in keep {
        let slot = target_slot.get(name.as_str()).copied();
        let Some(node) = graph.get_mut(name) else {
            continue;
        };

        if let Some(idx) = slot {
            node.attrs.style = Some("bold,filled".to_string());
            node.attrs.fillcolor = Some(TARGET_PALETTE[idx % TARGET_PALETTE.len()].to_string());
        }

        for (idx, group) in groups.iter().enumerate() {
            if group.members.contains(name) {
                node.attrs.style = Some("bold,filled".to_string());
                node.attrs.fillcolor =
                    Some(GROUP_PALETTE[idx % GROUP_PALETTE.len()].to_string());
            }
        }
    }
}

/// Color for the edge `from -> to`: the source's fill color if it has
/// one, else the target's, else the translucent default.
pub fn edge_color<'g>(graph: &'g Graph, from: &str, to: &str) -> &'g str {
    let fill = |name: &str| {
        graph
            .get(name)
            .and_then(|node| node.attrs.fillcolor.as_deref())
    };
    fill(from).or_else(|| fill(to)).unwrap_or(DEFAULT_EDGE_COLOR)
}
