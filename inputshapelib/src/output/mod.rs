//! Output formatting: present probe results as report blocks.
//!
//! This module handles the final stage of the pipeline - packaging computed
//! metrics for display. It provides:
//!
//! - **ReportBlock**: one day's header plus its metric lines
//! - **ReportLine**: a single `name: value` pair
//!
//! Blocks are pure presentation data. They serialize to JSON as-is and
//! render to the plain-text layout with `write_text`.

pub mod report;

pub use report::{ReportBlock, ReportLine};
