/// Network file import
///
/// Reads a weighted digraph from the line-oriented network format:
///
/// ```text
/// <nVertices> <nEdges>
/// <from> <to> <weight>
/// ...
/// ```
///
/// Tokens are whitespace separated. Extra tokens on an edge line and lines
/// after the last declared edge are ignored.

use super::{ToolError, ToolResult};
use crate::types::{DigraphBuilder, WeightedDigraph};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

/// Number of tokens expected on an edge line
const EDGE_TOKENS: usize = 3;

/// Import options
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Skip invalid edge lines instead of failing
    pub skip_errors: bool,
    /// Progress logging interval (edges)
    pub progress_interval: usize,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            skip_errors: false,
            progress_interval: 10000,
        }
    }
}

/// Import statistics
#[derive(Debug, Default, Clone, Serialize)]
pub struct ImportStats {
    pub vertices: usize,
    pub edges_declared: usize,
    pub edges_imported: usize,
    pub edges_skipped: usize,
    pub errors: Vec<String>,
}

impl ImportStats {
    fn add_error(&mut self, error: String) {
        self.errors.push(error);
    }
}

/// Read a digraph from any buffered reader
///
/// Header errors and missing edge lines always abort. Malformed edge lines
/// abort unless `options.skip_errors` is set, in which case they are
/// counted in the returned stats.
pub fn read_digraph<R: BufRead>(
    reader: R,
    options: &ImportOptions,
) -> ToolResult<(WeightedDigraph, ImportStats)> {
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(line) => line?,
        None => return Err(ToolError::InvalidFormat("empty input".to_string())),
    };
    let (n_vertices, n_edges) = parse_header(&header)?;

    let mut builder = DigraphBuilder::new(n_vertices)?;
    let mut stats = ImportStats {
        vertices: n_vertices,
        edges_declared: n_edges,
        ..Default::default()
    };

    for i in 0..n_edges {
        // Line numbers are 1-based and the header is line 1
        let line_num = i + 2;
        let line = match lines.next() {
            Some(line) => line?,
            None => {
                return Err(ToolError::IllegalLineCount {
                    got: i,
                    expected: n_edges,
                })
            }
        };

        match parse_edge(&line, line_num, n_vertices) {
            Ok((from, to, weight)) => {
                builder.add_edge(from, to, weight)?;
                stats.edges_imported += 1;

                if options.progress_interval > 0 && stats.edges_imported % options.progress_interval == 0 {
                    debug!("Imported {} edges...", stats.edges_imported);
                }
            }
            Err(e) => {
                if options.skip_errors {
                    warn!("Skipping edge: {}", e);
                    stats.edges_skipped += 1;
                    stats.add_error(e.to_string());
                } else {
                    return Err(e);
                }
            }
        }
    }

    debug!(
        vertices = stats.vertices,
        edges = stats.edges_imported,
        skipped = stats.edges_skipped,
        "network imported"
    );
    Ok((builder.build(), stats))
}

/// Import a digraph from a network file
pub fn import_digraph_from_file<P: AsRef<Path>>(
    path: P,
    options: &ImportOptions,
) -> ToolResult<(WeightedDigraph, ImportStats)> {
    let file = File::open(path)?;
    read_digraph(BufReader::new(file), options)
}

/// Parse a digraph held in memory, rejecting any malformed line
pub fn parse_digraph(input: &str) -> ToolResult<WeightedDigraph> {
    let (graph, _) = read_digraph(input.as_bytes(), &ImportOptions::default())?;
    Ok(graph)
}

fn parse_header(line: &str) -> ToolResult<(usize, usize)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 2 {
        return Err(ToolError::InvalidFormat(format!(
            "header must be '<nVertices> <nEdges>', got '{}'",
            line
        )));
    }

    let n_vertices = parse_token::<usize>(tokens[0], 1)?;
    let n_edges = parse_token::<usize>(tokens[1], 1)?;
    Ok((n_vertices, n_edges))
}

fn parse_edge(line: &str, line_num: usize, n_vertices: usize) -> ToolResult<(usize, usize, i64)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < EDGE_TOKENS {
        return Err(ToolError::IllegalTokenCount {
            line: line_num,
            got: tokens.len(),
            expected: EDGE_TOKENS,
        });
    }

    let from = parse_vertex(tokens[0], line_num, n_vertices)?;
    let to = parse_vertex(tokens[1], line_num, n_vertices)?;
    let weight = parse_token::<i64>(tokens[2], line_num)?;
    Ok((from, to, weight))
}

fn parse_vertex(token: &str, line_num: usize, n_vertices: usize) -> ToolResult<usize> {
    let id = parse_token::<i64>(token, line_num)?;
    match usize::try_from(id) {
        Ok(vertex) if vertex < n_vertices => Ok(vertex),
        _ => Err(ToolError::InvalidVertexId {
            line: line_num,
            got: id,
            max: n_vertices - 1,
        }),
    }
}

fn parse_token<T: std::str::FromStr>(token: &str, line_num: usize) -> ToolResult<T> {
    token.parse().map_err(|_| ToolError::InvalidInteger {
        line: line_num,
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Edge, GraphError};

    #[test]
    fn test_parse_simple_network() {
        let graph = parse_digraph("3 2\n0 1 2\n1 2 -3\n").unwrap();

        assert_eq!(graph.n_vertices(), 3);
        assert_eq!(graph.n_edges(), 2);
        assert_eq!(graph.outgoing_edges(1).unwrap(), &[Edge::new(1, 2, -3)]);
    }

    #[test]
    fn test_extra_tokens_and_trailing_lines_ignored() {
        let graph = parse_digraph("2 1\n0   1  7 extra tokens\n1 0 4\n").unwrap();

        assert_eq!(graph.n_edges(), 1);
        assert_eq!(graph.outgoing_edges(0).unwrap(), &[Edge::new(0, 1, 7)]);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse_digraph(""), Err(ToolError::InvalidFormat(_))));
    }

    #[test]
    fn test_malformed_header() {
        assert!(matches!(parse_digraph("3\n"), Err(ToolError::InvalidFormat(_))));
        assert!(matches!(
            parse_digraph("three 1\n0 1 1\n"),
            Err(ToolError::InvalidInteger { line: 1, .. })
        ));
    }

    #[test]
    fn test_zero_vertices() {
        assert!(matches!(
            parse_digraph("0 0\n"),
            Err(ToolError::GraphError(GraphError::InvalidVertexCount(0)))
        ));
    }

    #[test]
    fn test_missing_edge_lines() {
        let err = parse_digraph("3 3\n0 1 1\n1 2 1\n").unwrap_err();

        assert!(matches!(
            err,
            ToolError::IllegalLineCount {
                got: 2,
                expected: 3
            }
        ));
    }

    #[test]
    fn test_too_few_tokens() {
        let err = parse_digraph("3 1\n0 1\n").unwrap_err();

        assert!(matches!(
            err,
            ToolError::IllegalTokenCount {
                line: 2,
                got: 2,
                expected: 3
            }
        ));
    }

    #[test]
    fn test_invalid_vertex_id() {
        let err = parse_digraph("3 1\n0 3 1\n").unwrap_err();
        assert!(matches!(
            err,
            ToolError::InvalidVertexId {
                line: 2,
                got: 3,
                max: 2
            }
        ));

        let err = parse_digraph("3 1\n-1 0 1\n").unwrap_err();
        assert!(matches!(err, ToolError::InvalidVertexId { got: -1, .. }));
    }

    #[test]
    fn test_skip_errors() {
        let options = ImportOptions {
            skip_errors: true,
            ..Default::default()
        };
        let input = "3 4\n0 1 1\n0 9 1\n1 x 2\n1 2 5\n";

        let (graph, stats) = read_digraph(input.as_bytes(), &options).unwrap();

        assert_eq!(graph.n_edges(), 2);
        assert_eq!(stats.edges_declared, 4);
        assert_eq!(stats.edges_imported, 2);
        assert_eq!(stats.edges_skipped, 2);
        assert_eq!(stats.errors.len(), 2);
    }
}
