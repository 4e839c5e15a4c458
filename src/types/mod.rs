/// Core data types for the weighted digraph
///
/// This module defines the fundamental types used throughout the system:
/// - Edge: directed, integer-weighted edge between two vertex indices
/// - WeightedDigraph: immutable multigraph queried by the algorithms
/// - DigraphBuilder: mutable accumulator that freezes into a WeightedDigraph

pub mod digraph;
pub mod edge;

pub use digraph::{DigraphBuilder, WeightedDigraph};
pub use edge::Edge;

use thiserror::Error;

/// Graph construction and query errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Vertex count must be at least 1
    #[error("Invalid argument: nVertices ({0}) cannot be <= 0")]
    InvalidVertexCount(usize),

    /// Vertex index outside of [0, n_vertices)
    #[error("Index out of range: vertex index ({index}) must be in [0, {n_vertices})")]
    IndexOutOfRange { index: usize, n_vertices: usize },
}

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;

/// Fails with `IndexOutOfRange` unless `index < n_vertices`
pub(crate) fn check_vertex(index: usize, n_vertices: usize) -> GraphResult<()> {
    if index >= n_vertices {
        return Err(GraphError::IndexOutOfRange { index, n_vertices });
    }
    Ok(())
}
