/// Bellman-Ford-Yen shortest paths
///
/// Single-source shortest paths over integer-weighted directed multigraphs
/// with negative weights, reporting a negative cycle when one is reachable
/// from the source.
///
/// # Architecture
///
/// ```text
/// ┌──────────────────────────────────────────────────┐
/// │           BFY Shortest Paths                     │
/// ├──────────────────────────────────────────────────┤
/// │  ┌────────────────────────────────┐              │
/// │  │   Network Import (tools)       │              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                   │
/// │  ┌────────────────────────────────┐              │
/// │  │   WeightedDigraph (types)      │              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                   │
/// │  ┌────────────────────────────────┐              │
/// │  │   Bellman-Ford-Yen Engine      │              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                   │
/// │  ┌────────────────────────────────┐              │
/// │  │   BfyResult + Export (tools)   │              │
/// │  └────────────────────────────────┘              │
/// └──────────────────────────────────────────────────┘
/// ```
///
/// # Modules
///
/// - `types`: Graph types (Edge, WeightedDigraph, DigraphBuilder)
/// - `algorithms`: Bellman-Ford-Yen engine and its result types
/// - `tools`: Network file import and result export
/// - `config`: Environment-driven configuration for the binaries

pub mod types;
pub mod algorithms;
pub mod tools;
pub mod config;

// Re-export commonly used types
pub use types::{DigraphBuilder, Edge, GraphError, GraphResult, WeightedDigraph};

// Re-export algorithm types
pub use algorithms::{
    bellman_ford_yen, AlgorithmError, AlgorithmResult, BellmanFordYen, BfyResult, NegativeCycle,
    ShortestPathAlgorithm, ShortestPathTree,
};

// Re-export tool types
pub use tools::{
    export_result_to_file, import_digraph_from_file, parse_digraph, read_digraph, write_result,
    ExportFormat, ExportOptions, ImportOptions, ImportStats, ToolError, ToolResult,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
