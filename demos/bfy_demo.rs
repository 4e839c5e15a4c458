/// Bellman-Ford-Yen demonstration
///
/// This example shows how to:
/// - Build a weighted digraph with negative edges
/// - Compute a shortest path tree and rebuild paths from it
/// - Detect a negative cycle reachable from the source

use bfy_graph::{bellman_ford_yen, parse_digraph, BfyResult, WeightedDigraph};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Bellman-Ford-Yen Demo ===\n");

    println!("1. Building graph with negative edges...");
    let mut builder = WeightedDigraph::builder(5)?;
    builder
        .add_edge(0, 1, 6)?
        .add_edge(0, 3, 7)?
        .add_edge(1, 2, 5)?
        .add_edge(1, 3, 8)?
        .add_edge(1, 4, -4)?
        .add_edge(2, 1, -2)?
        .add_edge(3, 2, -3)?
        .add_edge(3, 4, 9)?
        .add_edge(4, 0, 2)?
        .add_edge(4, 2, 7)?;
    let graph = builder.build();
    println!(
        "   Graph created: {} vertices, {} edges\n",
        graph.n_vertices(),
        graph.n_edges()
    );

    println!("2. Computing shortest paths from vertex 0...");
    let result = bellman_ford_yen(&graph, 0)?;
    println!("   {}", result);

    if let BfyResult::ShortestPathTree(tree) = &result {
        for vertex in 0..graph.n_vertices() {
            if let (Some(distance), Some(path)) = (tree.distance(vertex), tree.path_to(vertex)) {
                let route: Vec<String> = path.iter().map(|v| v.to_string()).collect();
                println!("   - {}: distance {} via {}", vertex, distance, route.join(" -> "));
            }
        }
    }
    println!();

    println!("3. Loading a network with a negative cycle...");
    let network = "4 5\n0 1 1\n1 2 -1\n2 3 -1\n3 1 1\n2 0 4\n";
    let graph = parse_digraph(network)?;
    let result = bellman_ford_yen(&graph, 0)?;
    println!("   {}", result);

    if let Some(cycle) = result.negative_cycle() {
        let route: Vec<String> = cycle.vertices.iter().map(|v| v.to_string()).collect();
        println!("   Cycle {} -> {} has weight {}", route.join(" -> "), cycle.vertices[0], cycle.weight);
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}
