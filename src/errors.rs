// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DotpruneError {
    /// A node-declaration line parsed but carried no `label` attribute.
    ///
    /// This is fatal: every downstream step resolves labels through the
    /// label index, so a partial graph is unusable. Nothing is emitted.
    #[error("node declaration for '{name}' on line {line} has no label attribute")]
    MissingLabel { name: String, line: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, DotpruneError>;
