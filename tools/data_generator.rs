use anyhow::{Context, Result};
use bfy_graph::tools::export_digraph_to_file;
use bfy_graph::{DigraphBuilder, WeightedDigraph};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;

#[derive(Debug, Clone, ValueEnum)]
enum GraphType {
    /// Edges between uniformly drawn endpoints
    Uniform,
    /// Square grid with right and down edges
    Grid,
    /// Single path 0 -> 1 -> ... -> n-1
    Chain,
}

#[derive(Parser, Debug)]
#[command(name = "data_generator")]
#[command(about = "Generate weighted network files", long_about = None)]
struct Args {
    /// Type of graph to generate
    #[arg(short, long, value_enum, default_value = "uniform")]
    graph_type: GraphType,

    /// Number of vertices
    #[arg(short = 'n', long, default_value_t = 1000)]
    vertices: usize,

    /// Number of edges for uniform graphs
    #[arg(short = 'e', long, default_value_t = 5000)]
    edges: usize,

    /// Smallest edge weight
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    min_weight: i64,

    /// Largest edge weight
    #[arg(long, default_value_t = 100, allow_hyphen_values = true)]
    max_weight: i64,

    /// Length of a negative cycle to plant (0 to skip)
    #[arg(long, default_value_t = 0)]
    negative_cycle: usize,

    /// Output network file
    #[arg(short, long)]
    output: PathBuf,

    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

struct NetworkGenerator {
    rng: StdRng,
    min_weight: i64,
    max_weight: i64,
}

impl NetworkGenerator {
    fn new(seed: u64, min_weight: i64, max_weight: i64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            min_weight,
            max_weight,
        }
    }

    fn weight(&mut self) -> i64 {
        self.rng.gen_range(self.min_weight..=self.max_weight)
    }

    fn generate_uniform(&mut self, builder: &mut DigraphBuilder, n_edges: usize) -> Result<()> {
        let n = builder.n_vertices();
        println!("Generating uniform graph with {} vertices, {} edges...", n, n_edges);

        for _ in 0..n_edges {
            let from = self.rng.gen_range(0..n);
            let to = self.rng.gen_range(0..n);
            let weight = self.weight();
            builder.add_edge(from, to, weight)?;
        }
        Ok(())
    }

    fn generate_grid(&mut self, builder: &mut DigraphBuilder) -> Result<()> {
        let n = builder.n_vertices();
        let side = (n as f64).sqrt().floor() as usize;
        println!("Generating {}x{} grid...", side, side);

        for row in 0..side {
            for col in 0..side {
                let v = row * side + col;
                if col + 1 < side {
                    let weight = self.weight();
                    builder.add_edge(v, v + 1, weight)?;
                }
                if row + 1 < side {
                    let weight = self.weight();
                    builder.add_edge(v, v + side, weight)?;
                }
            }
        }
        Ok(())
    }

    fn generate_chain(&mut self, builder: &mut DigraphBuilder) -> Result<()> {
        let n = builder.n_vertices();
        println!("Generating chain of {} vertices...", n);

        for v in 1..n {
            let weight = self.weight();
            builder.add_edge(v - 1, v, weight)?;
        }
        Ok(())
    }

    /// Plant a cycle over `len` distinct vertices whose weights sum to -1,
    /// reachable from vertex 0 through a direct edge
    fn plant_negative_cycle(&mut self, builder: &mut DigraphBuilder, len: usize) -> Result<()> {
        let n = builder.n_vertices();
        let len = len.min(n);
        let mut members: Vec<usize> = (0..n).collect();
        for i in 0..len {
            let j = self.rng.gen_range(i..n);
            members.swap(i, j);
        }
        members.truncate(len);

        let mut total = 0;
        for i in 0..len {
            let from = members[i];
            let to = members[(i + 1) % len];
            let weight = if i + 1 == len { -1 - total } else { self.weight() };
            total += weight;
            builder.add_edge(from, to, weight)?;
        }
        builder.add_edge(0, members[0], 0)?;

        println!("Planted negative cycle {:?}", members);
        Ok(())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    anyhow::ensure!(
        args.min_weight <= args.max_weight,
        "min-weight must not exceed max-weight"
    );

    let mut generator = NetworkGenerator::new(args.seed, args.min_weight, args.max_weight);
    let mut builder = WeightedDigraph::builder(args.vertices)?;

    match args.graph_type {
        GraphType::Uniform => generator.generate_uniform(&mut builder, args.edges)?,
        GraphType::Grid => generator.generate_grid(&mut builder)?,
        GraphType::Chain => generator.generate_chain(&mut builder)?,
    }

    if args.negative_cycle > 0 {
        generator.plant_negative_cycle(&mut builder, args.negative_cycle)?;
    }

    let graph = builder.build();
    export_digraph_to_file(&args.output, &graph)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!(
        "\nGenerated {} vertices and {} edges into {:?}",
        graph.n_vertices(),
        graph.n_edges(),
        args.output
    );
    Ok(())
}
