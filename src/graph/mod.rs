// src/graph/mod.rs

//! Graph model and the traversals built on it.
//!
//! - [`store`] holds the node map and the label index.
//! - [`reach`] computes ancestor/descendant closures.
//! - [`combine`] merges closures and folds in trigger-group closures.

pub mod combine;
pub mod reach;
pub mod store;

pub use combine::{CombineMode, ResolvedGroup, combine, fold_trigger_groups};
pub use reach::{ancestors_of, descendants_of};
pub use store::{Graph, Node, NodeAttrs};
