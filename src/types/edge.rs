use serde::{Deserialize, Serialize};
use std::fmt;

/// Edge in a weighted digraph
///
/// Represents a directed edge with:
/// - Source vertex index
/// - Destination vertex index
/// - Integer weight (may be negative or zero)
///
/// Parallel edges and self-loops are valid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Source vertex index
    pub from: usize,

    /// Destination vertex index
    pub to: usize,

    /// Edge weight
    pub weight: i64,
}

impl Edge {
    /// Create a new edge
    pub fn new(from: usize, to: usize, weight: i64) -> Self {
        Self { from, to, weight }
    }

    /// Check if this edge is a self-loop
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }

    /// Check if this edge has a strictly negative weight
    pub fn is_negative(&self) -> bool {
        self.weight < 0
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.weight)
    }
}
