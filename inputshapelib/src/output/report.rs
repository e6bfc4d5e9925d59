//! Report blocks for a single day.
//!
//! The text layout is: a blank line, a `day NN:` header, then one
//! `name: value` line per metric in the order they were requested.

use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::source::DayId;

/// One computed metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    /// Metric name as registered
    pub name: &'static str,
    /// Computed value
    pub value: usize,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// Everything printed for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportBlock {
    /// Day the block reports on
    pub id: DayId,
    /// Metric lines in request order (empty for days without probes)
    pub lines: Vec<ReportLine>,
}

impl ReportBlock {
    /// Create a block with no lines.
    pub fn new(id: DayId) -> Self {
        Self {
            id,
            lines: Vec::new(),
        }
    }

    /// Header line text, e.g. `day 05:`.
    pub fn header(&self) -> String {
        format!("{}:", self.id)
    }

    /// Write the plain-text form of this block.
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", self.header())?;
        for line in &self.lines {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}
