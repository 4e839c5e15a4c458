/// Immutable weighted digraph and its builder
///
/// Vertices are indexed from 0 to n-1. A graph is assembled through a
/// `DigraphBuilder` and frozen with `build()`; the frozen value has no
/// mutating methods.

use super::{check_vertex, Edge, GraphError, GraphResult};

/// Digraph builder
///
/// Number of vertices is fixed at construction. Edges are added with
/// [`DigraphBuilder::add_edge`] and the builder is consumed by
/// [`DigraphBuilder::build`].
#[derive(Debug, Clone)]
pub struct DigraphBuilder {
    /// Outgoing edges for each vertex, in insertion order
    adjacency: Vec<Vec<Edge>>,
    n_edges: usize,
}

impl DigraphBuilder {
    /// Create a builder for a graph of `n_vertices` vertices
    ///
    /// # Returns
    /// * `Ok(DigraphBuilder)` if `n_vertices >= 1`
    /// * `Err(GraphError::InvalidVertexCount)` otherwise
    pub fn new(n_vertices: usize) -> GraphResult<Self> {
        if n_vertices == 0 {
            return Err(GraphError::InvalidVertexCount(n_vertices));
        }

        Ok(Self {
            adjacency: vec![Vec::new(); n_vertices],
            n_edges: 0,
        })
    }

    /// Number of vertices of the graph under construction
    pub fn n_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Add a directed edge `from -> to` with the given weight
    ///
    /// # Returns
    /// * `Err(GraphError::IndexOutOfRange)` if `from` or `to` is not a vertex
    pub fn add_edge(&mut self, from: usize, to: usize, weight: i64) -> GraphResult<&mut Self> {
        let n = self.adjacency.len();
        check_vertex(from, n)?;
        check_vertex(to, n)?;

        self.adjacency[from].push(Edge::new(from, to, weight));
        self.n_edges += 1;
        Ok(self)
    }

    /// Add every edge of an iterator, stopping at the first invalid one
    pub fn extend_edges<I>(&mut self, edges: I) -> GraphResult<&mut Self>
    where
        I: IntoIterator<Item = (usize, usize, i64)>,
    {
        for (from, to, weight) in edges {
            self.add_edge(from, to, weight)?;
        }
        Ok(self)
    }

    /// Freeze the builder into an immutable graph
    pub fn build(self) -> WeightedDigraph {
        WeightedDigraph {
            adjacency: self
                .adjacency
                .into_iter()
                .map(Vec::into_boxed_slice)
                .collect(),
            n_edges: self.n_edges,
        }
    }
}

/// Immutable directed multigraph with integer weighted edges
///
/// Negative weights, parallel edges and self-loops are allowed. The graph
/// owns all of its edges and can be shared freely between readers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedDigraph {
    adjacency: Box<[Box<[Edge]>]>,
    n_edges: usize,
}

impl WeightedDigraph {
    /// Shortcut for [`DigraphBuilder::new`]
    pub fn builder(n_vertices: usize) -> GraphResult<DigraphBuilder> {
        DigraphBuilder::new(n_vertices)
    }

    /// Build a graph from an edge list in one call
    pub fn from_edges<I>(n_vertices: usize, edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (usize, usize, i64)>,
    {
        let mut builder = DigraphBuilder::new(n_vertices)?;
        builder.extend_edges(edges)?;
        Ok(builder.build())
    }

    /// Number of vertices
    pub fn n_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges
    pub fn n_edges(&self) -> usize {
        self.n_edges
    }

    /// Outgoing edges of `vertex`, in unspecified order
    ///
    /// Obtaining the slice is O(1); iterating it is O(out-degree).
    ///
    /// # Returns
    /// * `Err(GraphError::IndexOutOfRange)` if `vertex` is not a vertex
    pub fn outgoing_edges(&self, vertex: usize) -> GraphResult<&[Edge]> {
        check_vertex(vertex, self.adjacency.len())?;
        Ok(&self.adjacency[vertex])
    }

    /// Unchecked variant used on hot paths once indices are known valid
    pub(crate) fn outgoing(&self, vertex: usize) -> &[Edge] {
        &self.adjacency[vertex]
    }

    /// Iterate over all edges, grouped by source vertex
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.adjacency.iter().flat_map(|out| out.iter())
    }

    /// Check that `vertex` is a valid vertex index
    pub fn contains_vertex(&self, vertex: usize) -> bool {
        vertex < self.adjacency.len()
    }
}
