//! The probe runner.
//!
//! This module provides the main entry points: probe one day, or run the
//! whole registry in order. Execution is a single straight pass. The first
//! failure ends the run, and no block is emitted for the day that failed or
//! any day after it.

use std::io::Write;
use std::path::Path;

use crate::output::report::{ReportBlock, ReportLine};
use crate::registry::{ProbeEntry, Registry};
use crate::source::InputSource;
use crate::Result;

const LOG_TARGET: &str = "  runner";

/// Compute the report block for one entry.
///
/// Entries without metrics produce an empty block and never touch the
/// filesystem. Otherwise the input is loaded once and every metric is
/// evaluated before the block is returned, so a block never holds a
/// partial set of lines.
pub fn probe(entry: &ProbeEntry, root: impl AsRef<Path>) -> Result<ReportBlock> {
    let mut block = ReportBlock::new(entry.id);
    if entry.is_empty() {
        log::debug!(target: LOG_TARGET, "No metrics configured for {}", entry.id);
        return Ok(block);
    }

    let text = InputSource::new(root, entry.id).load()?;

    for spec in &entry.metrics {
        let value = spec.metric.evaluate(&text)?;
        log::debug!(target: LOG_TARGET, "{} {} ({}) = {value}", entry.id, spec.name, spec.metric);
        block.lines.push(ReportLine {
            name: spec.name,
            value,
        });
    }

    Ok(block)
}

/// Probe every entry of `registry` in registration order.
///
/// `emit` receives each block as soon as it has been computed. The run stops
/// at the first error, whether it comes from probing or from `emit`.
///
/// # Example
///
/// ```rust
/// use inputshapelib::{run_all, Metric, ProbeEntry, Registry};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let data = dir.path().join("src/days/data");
/// fs::create_dir_all(&data).unwrap();
/// fs::write(data.join("day01.txt"), "A B C\nD E\n").unwrap();
///
/// let registry = Registry::new(vec![
///     ProbeEntry::new(1).metric("length", Metric::LineCount),
///     ProbeEntry::new(2),
/// ]);
///
/// let mut headers = Vec::new();
/// run_all(&registry, dir.path(), |block| {
///     headers.push(block.header());
///     Ok(())
/// })
/// .unwrap();
/// assert_eq!(headers, vec!["day 01:", "day 02:"]);
/// ```
pub fn run_all<F>(registry: &Registry, root: impl AsRef<Path>, mut emit: F) -> Result<()>
where
    F: FnMut(&ReportBlock) -> Result<()>,
{
    let root = root.as_ref();
    log::info!(target: LOG_TARGET, "Probing {} inputs under '{}'", registry.len(), root.display());

    for entry in registry.entries() {
        let block = probe(entry, root)?;
        emit(&block)?;
    }

    Ok(())
}

/// Run every probe and write plain-text blocks to `out`.
pub fn run_all_to_writer<W: Write>(
    registry: &Registry,
    root: impl AsRef<Path>,
    out: &mut W,
) -> Result<()> {
    run_all(registry, root, |block| {
        block.write_text(out)?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::metric::Metric;
    use crate::error::ShapeError;
    use crate::source::{DayId, DATA_DIR};
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn project(files: &[(&str, &str)]) -> TempDir {
        let dir = tempdir().unwrap();
        let data = dir.path().join(DATA_DIR);
        fs::create_dir_all(&data).unwrap();
        for (name, content) in files {
            fs::write(data.join(name), content).unwrap();
        }
        dir
    }

    fn registry() -> Registry {
        Registry::new(vec![
            ProbeEntry::new(1)
                .metric("length", Metric::LineCount)
                .metric("width", Metric::MaxFieldCount { delimiter: " " }),
            ProbeEntry::new(2).metric("update_capacity", Metric::MaxFieldCount { delimiter: "," }),
            ProbeEntry::new(3),
            ProbeEntry::new(4).metric("length", Metric::SectionLength { section: 1 }),
        ])
    }

    #[test]
    fn test_probe_computes_metrics_in_order() {
        let dir = project(&[("day01.txt", "A B C\nD E\n")]);
        let entry = ProbeEntry::new(1)
            .metric("length", Metric::LineCount)
            .metric("width", Metric::MaxFieldCount { delimiter: " " });

        let block = probe(&entry, dir.path()).unwrap();
        assert_eq!(block.id, DayId::new(1));
        assert_eq!(
            block.lines,
            vec![
                ReportLine {
                    name: "length",
                    value: 2
                },
                ReportLine {
                    name: "width",
                    value: 3
                },
            ]
        );
    }

    #[test]
    fn test_probe_empty_entry_skips_filesystem() {
        let dir = tempdir().unwrap();
        let block = probe(&ProbeEntry::new(21), dir.path()).unwrap();
        assert!(block.lines.is_empty());
    }

    #[test]
    fn test_run_all_text() {
        let dir = project(&[
            ("day01.txt", "A B C\nD E\n"),
            ("day02.txt", "1,2,3,4\n5,6\n"),
            ("day04.txt", "a\nb\n\nc\nd\ne\n"),
        ]);

        let mut out = Vec::new();
        run_all_to_writer(&registry(), dir.path(), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nday 01:\nlength: 2\nwidth: 3\n\
             \nday 02:\nupdate_capacity: 4\n\
             \nday 03:\n\
             \nday 04:\nlength: 3\n"
        );
    }

    #[test]
    fn test_run_all_is_repeatable() {
        let dir = project(&[
            ("day01.txt", "A B C\nD E\n"),
            ("day02.txt", "1,2,3,4\n5,6\n"),
            ("day04.txt", "a\nb\n\nc\nd\ne\n"),
        ]);

        let mut first = Vec::new();
        let mut second = Vec::new();
        run_all_to_writer(&registry(), dir.path(), &mut first).unwrap();
        run_all_to_writer(&registry(), dir.path(), &mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_run_all_stops_at_missing_file() {
        let dir = project(&[
            ("day01.txt", "A B C\nD E\n"),
            ("day04.txt", "a\nb\n\nc\nd\ne\n"),
        ]);

        let mut seen = Vec::new();
        let result = run_all(&registry(), dir.path(), |block| {
            seen.push(block.id.number());
            Ok(())
        });

        assert!(matches!(result, Err(ShapeError::FileRead { .. })));
        assert_eq!(seen, vec![1]);
    }

    #[test]
    fn test_run_all_stops_at_structural_error() {
        let dir = project(&[
            ("day01.txt", "A B C\nD E\n"),
            ("day02.txt", "1,2\n"),
            ("day04.txt", "no sections\n"),
        ]);

        let mut seen = Vec::new();
        let result = run_all(&registry(), dir.path(), |block| {
            seen.push(block.id.number());
            Ok(())
        });

        assert!(matches!(
            result,
            Err(ShapeError::MissingSection { index: 1, found: 1 })
        ));
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn test_run_all_propagates_emit_error() {
        let dir = project(&[("day01.txt", "x\n")]);
        let mut calls = 0;
        let result = run_all(&registry(), dir.path(), |_| {
            calls += 1;
            Err(ShapeError::Io(std::io::Error::other("closed")))
        });

        assert!(matches!(result, Err(ShapeError::Io(_))));
        assert_eq!(calls, 1);
    }
}
