/// Graph algorithms module
///
/// This module implements single-source shortest paths with negative
/// weights and negative-cycle detection.

pub mod bellman_ford_yen;
pub mod result;

pub use bellman_ford_yen::{bellman_ford_yen, BellmanFordYen, ShortestPathAlgorithm};
pub use result::{BfyResult, NegativeCycle, ShortestPathTree};

use thiserror::Error;

/// Algorithm errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmError {
    #[error("Index out of range: source vertex ({vertex}) must be in [0, {n_vertices})")]
    SourceOutOfRange { vertex: usize, n_vertices: usize },

    #[error("Graph algorithm error: {0}")]
    AlgorithmFailed(String),
}

pub type AlgorithmResult<T> = Result<T, AlgorithmError>;
