/// Bellman-Ford-Yen result types
///
/// A result is either:
/// - a `ShortestPathTree`, when no negative cycle is reachable from the source
/// - a `NegativeCycle`, when one is

use serde::Serialize;
use std::fmt;

/// Outcome of a single-source shortest path computation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BfyResult {
    ShortestPathTree(ShortestPathTree),
    NegativeCycle(NegativeCycle),
}

impl BfyResult {
    /// `true` if the computation found a reachable negative cycle
    pub fn is_negative_cycle(&self) -> bool {
        matches!(self, BfyResult::NegativeCycle(_))
    }

    /// The shortest path tree, if no negative cycle was found
    pub fn shortest_path_tree(&self) -> Option<&ShortestPathTree> {
        match self {
            BfyResult::ShortestPathTree(tree) => Some(tree),
            BfyResult::NegativeCycle(_) => None,
        }
    }

    /// The negative cycle, if one was found
    pub fn negative_cycle(&self) -> Option<&NegativeCycle> {
        match self {
            BfyResult::NegativeCycle(cycle) => Some(cycle),
            BfyResult::ShortestPathTree(_) => None,
        }
    }
}

impl From<ShortestPathTree> for BfyResult {
    fn from(tree: ShortestPathTree) -> Self {
        BfyResult::ShortestPathTree(tree)
    }
}

impl From<NegativeCycle> for BfyResult {
    fn from(cycle: NegativeCycle) -> Self {
        BfyResult::NegativeCycle(cycle)
    }
}

impl fmt::Display for BfyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BfyResult::ShortestPathTree(tree) => fmt::Display::fmt(tree, f),
            BfyResult::NegativeCycle(cycle) => fmt::Display::fmt(cycle, f),
        }
    }
}

/// Shortest path tree rooted at the source vertex
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPathTree {
    /// Distance from the source to each vertex, `None` if unreachable
    pub distances: Vec<Option<i64>>,
    /// Predecessor of each vertex in the tree, `None` for the source and
    /// for unreachable vertices
    pub predecessors: Vec<Option<usize>>,
}

impl ShortestPathTree {
    pub fn new(distances: Vec<Option<i64>>, predecessors: Vec<Option<usize>>) -> Self {
        Self {
            distances,
            predecessors,
        }
    }

    /// Number of vertices covered by the tree
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Shortest distance to `vertex`, `None` if unreachable or out of range
    pub fn distance(&self, vertex: usize) -> Option<i64> {
        self.distances.get(vertex).copied().flatten()
    }

    /// Predecessor of `vertex` on its shortest path
    pub fn predecessor(&self, vertex: usize) -> Option<usize> {
        self.predecessors.get(vertex).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Rebuild the path from the source to `vertex`
    ///
    /// # Returns
    /// * `Some(path)` with the source first and `vertex` last
    /// * `None` if `vertex` is unreachable
    pub fn path_to(&self, vertex: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(vertex) {
            return None;
        }

        let mut path = vec![vertex];
        let mut current = vertex;

        // Walk backwards to the source; a tree has at most len() - 1 edges
        while let Some(prev) = self.predecessor(current) {
            if path.len() > self.len() {
                return None;
            }
            path.push(prev);
            current = prev;
        }

        path.reverse();
        Some(path)
    }
}

impl fmt::Display for ShortestPathTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let distances = self
            .distances
            .iter()
            .map(|d| d.map_or_else(|| "inf".to_string(), |d| d.to_string()))
            .collect::<Vec<_>>()
            .join(", ");
        let predecessors = self
            .predecessors
            .iter()
            .map(|p| p.map_or_else(|| "-".to_string(), |p| p.to_string()))
            .collect::<Vec<_>>()
            .join(", ");

        write!(
            f,
            "ShortestPathTree{{distances=[{}], predecessors=[{}]}}",
            distances, predecessors
        )
    }
}

/// Negative cycle reachable from the source vertex
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NegativeCycle {
    /// Vertices of the cycle in traversal order; the last one leads back
    /// to the first and no vertex is repeated
    pub vertices: Vec<usize>,
    /// Sum of the edge weights around the cycle, always negative
    pub weight: i64,
}

impl NegativeCycle {
    pub fn new(vertices: Vec<usize>, weight: i64) -> Self {
        Self { vertices, weight }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Consecutive `(from, to)` pairs around the cycle, wrapping last to first
    pub fn arcs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let successors = self.vertices.iter().cycle().skip(1);
        self.vertices.iter().copied().zip(successors.copied())
    }
}

impl fmt::Display for NegativeCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vertices = self
            .vertices
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        write!(
            f,
            "NegativeCycle{{vertices=[{}], length={}}}",
            vertices, self.weight
        )
    }
}
