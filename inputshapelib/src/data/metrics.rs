//! Pure metric functions over raw input text.
//!
//! Each function takes text (or lines of it) and returns one count. None of
//! them touch the filesystem, so they can be exercised directly on string
//! literals.

use crate::error::ShapeError;
use crate::Result;

/// Separator between blank-line delimited sections.
pub const SECTION_SEPARATOR: &str = "\n\n";

/// Number of newline-delimited lines.
///
/// A trailing newline terminates the last line rather than starting a new,
/// empty one. A final line without a terminator still counts.
pub fn line_count(text: &str) -> usize {
    text.lines().count()
}

/// Fields in a single record: occurrences of `delimiter` plus one.
pub fn field_count(text: &str, delimiter: &str) -> usize {
    text.split(delimiter).count()
}

/// Maximum number of `delimiter`-separated fields on any line.
pub fn max_field_count(text: &str, delimiter: &str) -> Result<usize> {
    text.lines()
        .map(|line| field_count(line, delimiter))
        .max()
        .ok_or(ShapeError::NoData {
            metric: "max_field_count",
        })
}

/// Split text on the blank-line separator.
///
/// Joining the result with [`SECTION_SEPARATOR`] gives back the input.
pub fn split_sections(text: &str) -> Vec<&str> {
    text.split(SECTION_SEPARATOR).collect()
}

/// Number of blank-line delimited sections.
pub fn section_count(text: &str) -> usize {
    text.split(SECTION_SEPARATOR).count()
}

/// Line count of every section, in order.
pub fn section_lengths(text: &str) -> Vec<usize> {
    text.split(SECTION_SEPARATOR).map(line_count).collect()
}

/// The section at `index`, or [`ShapeError::MissingSection`].
pub fn section(text: &str, index: usize) -> Result<&str> {
    let sections = split_sections(text);
    let found = sections.len();
    sections
        .get(index)
        .copied()
        .ok_or(ShapeError::MissingSection { index, found })
}

/// Line count of the section at `index`.
pub fn section_length(text: &str, index: usize) -> Result<usize> {
    section(text, index).map(line_count)
}

/// Length in characters of the longest line, ignoring line terminators.
///
/// An empty sequence has no longest line and yields [`ShapeError::NoData`].
pub fn max_token_length<'a, I>(lines: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .map(|line| line.trim_end_matches(['\r', '\n']).chars().count())
        .max()
        .ok_or(ShapeError::NoData {
            metric: "max_token_length",
        })
}

/// Character count of text that has no internal line structure.
///
/// Surrounding whitespace (typically the final newline) is not counted.
pub fn raw_length(text: &str) -> usize {
    text.trim().chars().count()
}

/// Maximum field count of the part of each line after `separator`.
///
/// For `"190: 10 19"` with separator `": "` and delimiter `" "` the line
/// contributes 2.
pub fn max_trailing_field_count(text: &str, separator: &str, delimiter: &str) -> Result<usize> {
    let mut max = None;
    for (idx, line) in text.lines().enumerate() {
        let (_, rest) = line
            .trim()
            .split_once(separator)
            .ok_or_else(|| ShapeError::MissingField {
                line: idx + 1,
                separator: separator.to_string(),
            })?;
        let count = field_count(rest, delimiter);
        max = Some(max.map_or(count, |m: usize| m.max(count)));
    }
    max.ok_or(ShapeError::NoData {
        metric: "max_trailing_field_count",
    })
}
