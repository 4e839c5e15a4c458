/// Data import and export tools
///
/// This module reads weighted digraphs from the line-oriented network
/// format and writes computation results as text, JSON or CSV.

pub mod export;
pub mod import;

pub use export::{
    export_digraph_to_file, export_result_to_file, write_digraph, write_result, ExportFormat,
    ExportOptions,
};
pub use import::{import_digraph_from_file, parse_digraph, read_digraph, ImportOptions, ImportStats};

use thiserror::Error;

/// Import/export errors
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Graph error: {0}")]
    GraphError(#[from] crate::types::GraphError),

    #[error("Algorithm error: {0}")]
    AlgorithmError(#[from] crate::algorithms::AlgorithmError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Illegal number of lines (got {got}, expected {expected})")]
    IllegalLineCount { got: usize, expected: usize },

    #[error("Line {line}: invalid number of tokens (got {got}, expected {expected})")]
    IllegalTokenCount {
        line: usize,
        got: usize,
        expected: usize,
    },

    #[error("Line {line}: invalid integer '{token}'")]
    InvalidInteger { line: usize, token: String },

    #[error("Line {line}: invalid vertex id (got {got}, should be in [0, {max}])")]
    InvalidVertexId { line: usize, got: i64, max: usize },
}

pub type ToolResult<T> = Result<T, ToolError>;
