/// Result and network export
///
/// Supports writing computation results as:
/// - Text (the `Display` form of the result)
/// - JSON
/// - CSV (one row per vertex, or one row per cycle position)
///
/// Graphs are written back in the network format read by `import`.

use super::{ToolError, ToolResult};
use crate::algorithms::{BfyResult, NegativeCycle, ShortestPathTree};
use crate::types::WeightedDigraph;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

/// Export format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl ExportFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(ToolError::InvalidFormat(format!(
                "unknown export format '{}'",
                other
            ))),
        }
    }
}

/// Export options
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Pretty-print JSON output
    pub pretty_json: bool,
    /// Include header row in CSV
    pub csv_header: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            pretty_json: true,
            csv_header: true,
        }
    }
}

/// CSV row of a shortest path tree
#[derive(Debug, Serialize)]
struct TreeRow {
    vertex: usize,
    distance: Option<i64>,
    predecessor: Option<usize>,
}

/// CSV row of a negative cycle
#[derive(Debug, Serialize)]
struct CycleRow {
    position: usize,
    vertex: usize,
    cycle_weight: i64,
}

/// Write a result to `writer` in the requested format
pub fn write_result<W: Write>(
    mut writer: W,
    result: &BfyResult,
    format: ExportFormat,
    options: &ExportOptions,
) -> ToolResult<()> {
    match format {
        ExportFormat::Text => writeln!(writer, "{}", result)?,
        ExportFormat::Json => {
            if options.pretty_json {
                serde_json::to_writer_pretty(&mut writer, result)?;
            } else {
                serde_json::to_writer(&mut writer, result)?;
            }
            writeln!(writer)?;
        }
        ExportFormat::Csv => match result {
            BfyResult::ShortestPathTree(tree) => write_tree_csv(&mut writer, tree, options)?,
            BfyResult::NegativeCycle(cycle) => write_cycle_csv(&mut writer, cycle, options)?,
        },
    }

    writer.flush()?;
    Ok(())
}

/// Write a result to a file, replacing any existing content
pub fn export_result_to_file<P: AsRef<Path>>(
    path: P,
    result: &BfyResult,
    format: ExportFormat,
    options: &ExportOptions,
) -> ToolResult<()> {
    let file = File::create(path)?;
    write_result(BufWriter::new(file), result, format, options)
}

/// Write a graph in the network format
pub fn write_digraph<W: Write>(mut writer: W, graph: &WeightedDigraph) -> ToolResult<()> {
    writeln!(writer, "{} {}", graph.n_vertices(), graph.n_edges())?;
    for edge in graph.edges() {
        writeln!(writer, "{} {} {}", edge.from, edge.to, edge.weight)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a graph to a network file
pub fn export_digraph_to_file<P: AsRef<Path>>(path: P, graph: &WeightedDigraph) -> ToolResult<()> {
    let file = File::create(path)?;
    write_digraph(BufWriter::new(file), graph)
}

fn write_tree_csv<W: Write>(
    writer: W,
    tree: &ShortestPathTree,
    options: &ExportOptions,
) -> ToolResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(options.csv_header)
        .from_writer(writer);

    for (vertex, (distance, predecessor)) in tree
        .distances
        .iter()
        .zip(tree.predecessors.iter())
        .enumerate()
    {
        csv_writer.serialize(TreeRow {
            vertex,
            distance: *distance,
            predecessor: *predecessor,
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}

fn write_cycle_csv<W: Write>(
    writer: W,
    cycle: &NegativeCycle,
    options: &ExportOptions,
) -> ToolResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(options.csv_header)
        .from_writer(writer);

    for (position, &vertex) in cycle.vertices.iter().enumerate() {
        csv_writer.serialize(CycleRow {
            position,
            vertex,
            cycle_weight: cycle.weight,
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::import::parse_digraph;

    fn render(result: &BfyResult, format: ExportFormat, options: &ExportOptions) -> String {
        let mut buffer = Vec::new();
        write_result(&mut buffer, result, format, options).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn sample_tree() -> BfyResult {
        ShortestPathTree::new(vec![Some(0), Some(-2), None], vec![None, Some(0), None]).into()
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("txt".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
        assert!("graphml".parse::<ExportFormat>().is_err());
        assert_eq!(ExportFormat::Csv.extension(), "csv");
    }

    #[test]
    fn test_text_export() {
        let text = render(&sample_tree(), ExportFormat::Text, &ExportOptions::default());
        assert_eq!(
            text,
            "ShortestPathTree{distances=[0, -2, inf], predecessors=[-, 0, -]}\n"
        );
    }

    #[test]
    fn test_json_export() {
        let options = ExportOptions {
            pretty_json: false,
            ..Default::default()
        };
        let text = render(&sample_tree(), ExportFormat::Json, &options);

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["kind"], "shortest_path_tree");
        assert_eq!(value["distances"], serde_json::json!([0, -2, null]));
        assert_eq!(value["predecessors"], serde_json::json!([null, 0, null]));
    }

    #[test]
    fn test_csv_tree_export() {
        let text = render(&sample_tree(), ExportFormat::Csv, &ExportOptions::default());
        assert_eq!(text, "vertex,distance,predecessor\n0,0,\n1,-2,0\n2,,\n");
    }

    #[test]
    fn test_csv_cycle_export_without_header() {
        let cycle: BfyResult = NegativeCycle::new(vec![2, 5], -3).into();
        let options = ExportOptions {
            csv_header: false,
            ..Default::default()
        };

        let text = render(&cycle, ExportFormat::Csv, &options);
        assert_eq!(text, "0,2,-3\n1,5,-3\n");
    }

    #[test]
    fn test_write_digraph_reads_back() {
        let graph = parse_digraph("3 3\n0 1 4\n0 2 -1\n2 1 2\n").unwrap();

        let mut buffer = Vec::new();
        write_digraph(&mut buffer, &graph).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert_eq!(text, "3 3\n0 1 4\n0 2 -1\n2 1 2\n");
        assert_eq!(parse_digraph(&text).unwrap(), graph);
    }
}
