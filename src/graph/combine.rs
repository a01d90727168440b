// src/graph/combine.rs

//! Merging closures into the final keep set, and folding trigger-group
//! closures into the ancestor side.

use std::collections::BTreeSet;

use tracing::info;

use crate::graph::reach::ancestors_of;
use crate::graph::store::Graph;
use crate::triggers::TriggerGroup;

/// How the ancestor and descendant closures are merged.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum CombineMode {
    #[default]
    Union,
    Intersect,
}

/// A trigger group after its labels were resolved against the graph.
///
/// Only groups with at least one member present in the graph survive
/// resolution; an empty group gets no color and no log line.
#[derive(Debug, Clone)]
pub struct ResolvedGroup {
    pub name: &'static str,
    /// Node names (not labels) of the members found in the graph.
    pub members: BTreeSet<String>,
}

/// Merge the two closures into the keep set.
///
/// With no traversal requested both inputs are empty and so is the
/// result; an empty keep set is a valid outcome, not an error.
pub fn combine(
    ancestors: &BTreeSet<String>,
    descendants: &BTreeSet<String>,
    mode: CombineMode,
) -> BTreeSet<String> {
    match mode {
        CombineMode::Union => ancestors.union(descendants).cloned().collect(),
        CombineMode::Intersect => ancestors.intersection(descendants).cloned().collect(),
    }
}

/// Resolve each enabled trigger group against the graph and
/// ancestor-close its members.
///
/// Returns the union of all the group closures (to be merged into the
/// ancestor closure) plus the resolved groups in flag order, for the
/// annotator to color. Labels absent from the graph contribute
/// nothing.
pub fn fold_trigger_groups(
    graph: &Graph,
    groups: &[&'static TriggerGroup],
    ignore: &BTreeSet<String>,
) -> (BTreeSet<String>, Vec<ResolvedGroup>) {
    let mut additions = BTreeSet::new();
    let mut resolved = Vec::new();

    for group in groups {
        let members: Vec<String> = graph.resolve_all(group.labels.iter().copied());
        if members.is_empty() {
            continue;
        }

        let closure = ancestors_of(graph, &members, ignore);
        info!(
            group = group.name,
            members = members.len(),
            closure = closure.len(),
            "trigger group resolved"
        );
        additions.extend(closure);
        resolved.push(ResolvedGroup {
            name: group.name,
            members: members.into_iter().collect(),
        });
    }

    (additions, resolved)
}
