// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for the spanning engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for table construction and algorithm runs.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GraphError {
    /// An input edge failed validation before the table was built.
    #[error("malformed edge at index {index}: {reason}")]
    MalformedEdge { index: usize, reason: String },

    /// The edge-list document could not be parsed at all.
    #[error("invalid edge list: {0}")]
    InvalidEdgeList(String),

    /// The table has no vertices.
    #[error("graph has no vertices")]
    EmptyGraph,

    /// A root, source or target vertex is not in the table.
    #[error("vertex not found: {0}")]
    VertexNotFound(String),

    /// Not every required vertex is reachable from the start vertex.
    #[error("only {reached} of {total} vertices reachable from {root}")]
    Unreachable {
        root: String,
        reached: usize,
        total: usize,
    },

    /// A path cost grew past the largest finite `f64`.
    #[error("path cost to {vertex} overflows")]
    CostOverflow { vertex: String },

    /// Negative weight found during a shortest-path run.
    #[error("edge {from} -> {to} has negative weight: {weight}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: f64,
    },
}

impl GraphError {
    pub(crate) fn vertex_not_found<V: std::fmt::Debug>(vertex: &V) -> Self {
        Self::VertexNotFound(format!("{vertex:?}"))
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidEdgeList(e.to_string())
    }
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
