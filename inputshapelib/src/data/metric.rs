//! Metric specifications: a metric function bound to its parameters.
//!
//! The registry describes each day's probes as a list of [`MetricSpec`]s.
//! A spec is data (a display name plus a [`Metric`] value) so the whole
//! table can be written out as one constant-like structure and evaluated by
//! a single runner loop.

use std::fmt;

use crate::error::ShapeError;
use crate::Result;

use super::metrics::{
    field_count, line_count, max_field_count, max_token_length, max_trailing_field_count,
    raw_length, section, section_count, section_length,
};

/// Which statistic to compute, and over which part of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Number of lines in the whole text.
    LineCount,
    /// Widest line, in `delimiter`-separated fields.
    MaxFieldCount { delimiter: &'static str },
    /// Fields in the whole text read as a single record.
    FieldCount { delimiter: &'static str },
    /// Characters in the trimmed text.
    RawLength,
    /// Number of blank-line delimited sections.
    SectionCount,
    /// Lines in one section of the trimmed text.
    SectionLength { section: usize },
    /// Widest line of one section, in `delimiter`-separated fields.
    SectionMaxFieldCount {
        section: usize,
        delimiter: &'static str,
    },
    /// Widest line, counting only fields after `separator`.
    MaxTrailingFieldCount {
        separator: &'static str,
        delimiter: &'static str,
    },
    /// Fields on the first line.
    FirstLineFieldCount { delimiter: &'static str },
    /// Fields on the last line, after dropping its first `skip` characters.
    LastLineFieldCount {
        skip: usize,
        delimiter: &'static str,
    },
    /// Lines remaining after the first `skip`.
    LinesFrom { skip: usize },
    /// Longest line among those after the first `skip`.
    MaxTokenLength { skip: usize },
}

impl Metric {
    /// Compute this metric over normalized input text.
    pub fn evaluate(&self, text: &str) -> Result<usize> {
        match *self {
            Metric::LineCount => Ok(line_count(text)),
            Metric::MaxFieldCount { delimiter } => max_field_count(text, delimiter),
            Metric::FieldCount { delimiter } => Ok(field_count(text, delimiter)),
            Metric::RawLength => Ok(raw_length(text)),
            Metric::SectionCount => Ok(section_count(text)),
            Metric::SectionLength { section } => section_length(text.trim(), section),
            Metric::SectionMaxFieldCount { section: index, delimiter } => {
                max_field_count(section(text.trim(), index)?, delimiter)
            }
            Metric::MaxTrailingFieldCount {
                separator,
                delimiter,
            } => max_trailing_field_count(text, separator, delimiter),
            Metric::FirstLineFieldCount { delimiter } => {
                let first = text.lines().next().ok_or(ShapeError::NoData {
                    metric: "first line",
                })?;
                Ok(field_count(first.trim(), delimiter))
            }
            Metric::LastLineFieldCount { skip, delimiter } => {
                let last = text.lines().last().ok_or(ShapeError::NoData {
                    metric: "last line",
                })?;
                Ok(field_count(skip_chars(last, skip), delimiter))
            }
            Metric::LinesFrom { skip } => Ok(text.lines().skip(skip).count()),
            Metric::MaxTokenLength { skip } => max_token_length(text.lines().skip(skip)),
        }
    }
}

/// The rest of `line` after its first `n` characters (empty if shorter).
fn skip_chars(line: &str, n: usize) -> &str {
    match line.char_indices().nth(n) {
        Some((offset, _)) => &line[offset..],
        None => "",
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::LineCount => write!(f, "line count"),
            Metric::MaxFieldCount { delimiter } => {
                write!(f, "max fields per line split on {delimiter:?}")
            }
            Metric::FieldCount { delimiter } => write!(f, "fields split on {delimiter:?}"),
            Metric::RawLength => write!(f, "raw length"),
            Metric::SectionCount => write!(f, "section count"),
            Metric::SectionLength { section } => write!(f, "lines in section {section}"),
            Metric::SectionMaxFieldCount { section, delimiter } => write!(
                f,
                "max fields per line of section {section} split on {delimiter:?}"
            ),
            Metric::MaxTrailingFieldCount {
                separator,
                delimiter,
            } => write!(
                f,
                "max fields after {separator:?} split on {delimiter:?}"
            ),
            Metric::FirstLineFieldCount { delimiter } => {
                write!(f, "fields on first line split on {delimiter:?}")
            }
            Metric::LastLineFieldCount { skip, delimiter } => write!(
                f,
                "fields on last line from column {skip} split on {delimiter:?}"
            ),
            Metric::LinesFrom { skip } => write!(f, "lines after line {skip}"),
            Metric::MaxTokenLength { skip } => write!(f, "longest line after line {skip}"),
        }
    }
}

/// A metric together with the name it is reported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSpec {
    /// Label printed in front of the value (e.g. `length`)
    pub name: &'static str,
    /// What to compute
    pub metric: Metric,
}

impl MetricSpec {
    /// Create a new named metric.
    pub const fn new(name: &'static str, metric: Metric) -> Self {
        Self { name, metric }
    }
}
