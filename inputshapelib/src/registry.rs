//! The probe table: which metrics to run for which day, in which order.
//!
//! Output order follows registration order, not file-system order. Days
//! without probes stay in the table as empty entries so every day still
//! gets its (header-only) block.

use crate::data::metric::{Metric, MetricSpec};
use crate::source::DayId;

/// One row of the table: a day and the metrics to report for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeEntry {
    /// Day the entry belongs to
    pub id: DayId,
    /// Metrics in report order
    pub metrics: Vec<MetricSpec>,
}

impl ProbeEntry {
    /// An entry with no metrics configured.
    pub fn new(day: u8) -> Self {
        Self {
            id: DayId::new(day),
            metrics: Vec::new(),
        }
    }

    /// Append a named metric.
    pub fn metric(mut self, name: &'static str, metric: Metric) -> Self {
        self.metrics.push(MetricSpec::new(name, metric));
        self
    }

    /// True if nothing is measured for this day.
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

/// Ordered table of probe entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    entries: Vec<ProbeEntry>,
}

impl Registry {
    /// Build a registry from entries, keeping their order.
    pub fn new(entries: Vec<ProbeEntry>) -> Self {
        Self { entries }
    }

    /// Entries in registration order.
    pub fn entries(&self) -> impl Iterator<Item = &ProbeEntry> {
        self.entries.iter()
    }

    /// Look up the entry for a day.
    pub fn get(&self, id: DayId) -> Option<&ProbeEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Number of registered days.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no days are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        use Metric::*;

        Self::new(vec![
            ProbeEntry::new(1).metric("length", LineCount),
            ProbeEntry::new(2)
                .metric("length", LineCount)
                .metric("report_capacity", MaxFieldCount { delimiter: " " }),
            ProbeEntry::new(3),
            ProbeEntry::new(4).metric("length", LineCount),
            ProbeEntry::new(5)
                .metric("length", SectionLength { section: 1 })
                .metric(
                    "update_capacity",
                    SectionMaxFieldCount {
                        section: 1,
                        delimiter: ",",
                    },
                ),
            ProbeEntry::new(6).metric("length", LineCount),
            ProbeEntry::new(7).metric("length", LineCount).metric(
                "operand_capacity",
                MaxTrailingFieldCount {
                    separator: ": ",
                    delimiter: " ",
                },
            ),
            ProbeEntry::new(8).metric("length", LineCount),
            ProbeEntry::new(9).metric("length", RawLength),
            ProbeEntry::new(10).metric("length", LineCount),
            ProbeEntry::new(11).metric("length", FieldCount { delimiter: " " }),
            ProbeEntry::new(12).metric("length", LineCount),
            ProbeEntry::new(13).metric("length", SectionCount),
            ProbeEntry::new(14).metric("length", LineCount),
            ProbeEntry::new(15).metric("length", SectionLength { section: 0 }),
            ProbeEntry::new(16).metric("length", LineCount),
            // "Program: " prefix
            ProbeEntry::new(17).metric(
                "length",
                LastLineFieldCount {
                    skip: 9,
                    delimiter: ",",
                },
            ),
            ProbeEntry::new(18).metric("length", LineCount),
            ProbeEntry::new(19)
                .metric("n_patterns", FirstLineFieldCount { delimiter: ", " })
                .metric("n_designs", LinesFrom { skip: 2 })
                .metric("longest_string", MaxTokenLength { skip: 2 }),
            ProbeEntry::new(20).metric("length", LineCount),
            ProbeEntry::new(21),
            ProbeEntry::new(22).metric("length", LineCount),
            ProbeEntry::new(23),
            ProbeEntry::new(24).metric("length", SectionLength { section: 1 }),
            ProbeEntry::new(25),
        ])
    }
}
