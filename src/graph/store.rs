// src/graph/store.rs

use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Attributes attached to a node.
///
/// The keys the tool itself reads or writes (`label`, `style`,
/// `fillcolor`) are typed fields; everything else rides along untouched
/// in `extra` so the output stays faithful to the input.
#[derive(Debug, Clone, Default)]
pub struct NodeAttrs {
    pub label: Option<String>,
    pub style: Option<String>,
    pub fillcolor: Option<String>,
    pub extra: BTreeMap<String, String>,
}

impl NodeAttrs {
    /// Merge a list of parsed `key=value` pairs into this record.
    ///
    /// Existing values are overwritten on key collision; keys not
    /// present in `pairs` are left alone. This matches the format's
    /// convention that repeated declarations of a node accumulate.
    pub fn merge(&mut self, pairs: &[(String, String)]) {
        for (key, value) in pairs {
            match key.as_str() {
                "label" => self.label = Some(value.clone()),
                "style" => self.style = Some(value.clone()),
                "fillcolor" => self.fillcolor = Some(value.clone()),
                _ => {
                    self.extra.insert(key.clone(), value.clone());
                }
            }
        }
    }
}

/// A single graph node: attributes plus both adjacency directions.
#[derive(Debug, Clone, Default)]
pub struct Node {
    pub attrs: NodeAttrs,
    /// Names of direct predecessors (callers).
    pub from: BTreeSet<String>,
    /// Names of direct successors (callees).
    pub to: BTreeSet<String>,
}

/// In-memory graph keyed by node name, with a label -> name index.
///
/// Nodes are created lazily: the first time a name appears, in an edge
/// or a declaration, it gets an empty entry. Nothing is ever removed;
/// filtering happens at output time by leaving names out of the keep
/// set. `BTreeMap` keeps iteration deterministic for emission.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: BTreeMap<String, Node>,
    labels: HashMap<String, String>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a node, creating an empty one if the name is new.
    ///
    /// Absence is not an error in this format: a name can be referenced
    /// by edges without ever being declared with attributes.
    pub fn get_or_create(&mut self, name: &str) -> &mut Node {
        self.nodes.entry(name.to_string()).or_default()
    }

    /// Read-only lookup; `None` means the name never appeared at all.
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    /// Merge a declaration's attributes into the node and index its label.
    ///
    /// The caller (the parser) guarantees `pairs` contains a `label`;
    /// see `parse::parse_graph` for the fatal-error path when it does
    /// not. If the label collides with an earlier node's, the later
    /// declaration wins in the index.
    pub fn declare(&mut self, name: &str, pairs: &[(String, String)]) {
        self.get_or_create(name).attrs.merge(pairs);
        if let Some(label) = self.nodes[name].attrs.label.clone() {
            self.labels.insert(label, name.to_string());
        }
    }

    /// Record a directed edge, auto-creating both endpoints.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        self.get_or_create(from).to.insert(to.to_string());
        self.get_or_create(to).from.insert(from.to_string());
    }

    /// Resolve a label back to the node name it was declared on.
    pub fn resolve(&self, label: &str) -> Option<&str> {
        self.labels.get(label).map(|s| s.as_str())
    }

    /// Resolve a list of labels, silently dropping ones absent from the
    /// graph (a label for a syscall this particular callgraph never
    /// touches is not an error).
    pub fn resolve_all<'a, I>(&self, labels: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        labels
            .into_iter()
            .filter_map(|l| self.resolve(l))
            .map(|s| s.to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All node names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(|s| s.as_str())
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.nodes.get_mut(name)
    }
}
