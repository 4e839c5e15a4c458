use anyhow::{Context, Result};
use bfy_graph::config::Config;
use bfy_graph::{
    bellman_ford_yen, export_result_to_file, import_digraph_from_file, write_result, BfyResult,
    ExportFormat, ExportOptions, ImportOptions,
};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

impl From<OutputFormat> for ExportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ExportFormat::Text,
            OutputFormat::Json => ExportFormat::Json,
            OutputFormat::Csv => ExportFormat::Csv,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "bfy_runner")]
#[command(about = "Compute shortest path trees or negative cycles of network files", long_about = None)]
struct Args {
    /// Network files (defaults to the configured networks under BFY_DATA_DIR)
    files: Vec<PathBuf>,

    /// Source vertex (defaults to BFY_SOURCE)
    #[arg(short, long)]
    source: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Write one result file per network into this directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip malformed edge lines instead of rejecting the network
    #[arg(long)]
    skip_errors: bool,

    /// Compact JSON output
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env()?;

    init_logging(&config)?;

    let files = if args.files.is_empty() {
        config.runner.network_paths()
    } else {
        args.files.clone()
    };
    let source = args.source.unwrap_or(config.runner.source);

    let import_options = ImportOptions {
        skip_errors: args.skip_errors,
        ..Default::default()
    };
    let export_options = ExportOptions {
        pretty_json: !args.compact,
        ..Default::default()
    };
    let format = ExportFormat::from(args.format);

    if let Some(dir) = &args.output {
        std::fs::create_dir_all(dir).context("Failed to create output directory")?;
    }

    let mut cycles = 0;
    for path in &files {
        tracing::info!(
            "Computing shortest path tree of network {} from vertex {}",
            path.display(),
            source
        );

        let result = run_network(path, source, &import_options)
            .with_context(|| format!("Failed to process network {}", path.display()))?;
        if result.is_negative_cycle() {
            cycles += 1;
        }

        match &args.output {
            Some(dir) => {
                let target = output_path(dir, path, format);
                export_result_to_file(&target, &result, format, &export_options)
                    .with_context(|| format!("Failed to write {}", target.display()))?;
                tracing::info!("Result written to {}", target.display());
            }
            None => {
                println!("{}:", path.display());
                write_result(std::io::stdout().lock(), &result, format, &export_options)?;
            }
        }
    }

    tracing::info!(
        networks = files.len(),
        negative_cycles = cycles,
        "All networks processed"
    );
    Ok(())
}

fn run_network(path: &Path, source: usize, options: &ImportOptions) -> Result<BfyResult> {
    let (graph, stats) = import_digraph_from_file(path, options)?;
    if stats.edges_skipped > 0 {
        tracing::warn!("Skipped {} malformed edges", stats.edges_skipped);
    }
    tracing::debug!(
        vertices = graph.n_vertices(),
        edges = graph.n_edges(),
        "network loaded"
    );

    Ok(bellman_ford_yen(&graph, source)?)
}

fn output_path(dir: &Path, network: &Path, format: ExportFormat) -> PathBuf {
    let stem = network
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "network".to_string());
    dir.join(format!("{}.result.{}", stem, format.extension()))
}

fn init_logging(config: &Config) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    // Logs go to stderr so results on stdout stay machine readable
    match config.logging.format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}
