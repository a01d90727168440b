// src/render/mod.rs

//! Output side of the pipeline.
//!
//! - [`annotate`] colors kept nodes by target/group membership.
//! - [`emit`] re-serializes the kept subgraph in the input convention.

pub mod annotate;
pub mod emit;

pub use annotate::{DEFAULT_EDGE_COLOR, annotate, edge_color};
pub use emit::emit;
