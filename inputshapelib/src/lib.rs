//! # inputshapelib
//!
//! Quick statistics about the "shape" of daily puzzle inputs: how many
//! lines, how wide the widest record is, how big each blank-line section
//! is. Useful before writing a solver, to size buffers and pick data
//! structures.
//!
//! ## Overview
//!
//! The library is a small pipeline:
//!
//! - **Source**: each day resolves to `src/days/data/day<NN>.txt`
//! - **Data**: pure metric functions (`line_count`, `max_field_count`, ...)
//!   and the `Metric` enum binding them to parameters
//! - **Registry**: the ordered table of days and the metrics reported for each
//! - **Output**: `ReportBlock`s, printable as text or serializable to JSON
//! - **Runner**: `run_all` walks the registry in order, failing on the first
//!   unreadable or malformed input
//!
//! ## Example
//!
//! ```rust
//! use inputshapelib::{probe, Metric, ProbeEntry};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let data = dir.path().join("src/days/data");
//! fs::create_dir_all(&data).unwrap();
//! fs::write(data.join("day05.txt"), "47|53\n97|13\n\n75,47,61\n97,61\n").unwrap();
//!
//! let entry = ProbeEntry::new(5)
//!     .metric("length", Metric::SectionLength { section: 1 })
//!     .metric("update_capacity", Metric::SectionMaxFieldCount { section: 1, delimiter: "," });
//!
//! let block = probe(&entry, dir.path()).unwrap();
//! assert_eq!(block.lines[0].value, 2);
//! assert_eq!(block.lines[1].value, 3);
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod registry;
pub mod runner;
pub mod source;

pub use data::{Metric, MetricSpec};
pub use error::ShapeError;
pub use output::{ReportBlock, ReportLine};
pub use registry::{ProbeEntry, Registry};
pub use runner::{probe, run_all, run_all_to_writer};
pub use source::{DayId, InputSource};

/// Result type for inputshapelib operations
pub type Result<T> = std::result::Result<T, ShapeError>;
