//! Error types for inputshapelib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while probing an input.
///
/// Every variant is some form of "input unavailable": the file could not be
/// read, or its text does not have the structure a metric expects.
#[derive(Error, Debug)]
pub enum ShapeError {
    /// Failed to read an input file
    #[error("failed to read input '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A blank-line delimited section is absent
    #[error("section {index} does not exist (input has {found} sections)")]
    MissingSection { index: usize, found: usize },

    /// A line lacks the separator a metric splits on
    #[error("line {line} has no '{separator}' separator")]
    MissingField { line: usize, separator: String },

    /// A maximum or selection was requested over no lines at all
    #[error("no data for {metric}")]
    NoData { metric: &'static str },

    /// IO error while emitting a report
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
