//! Data collection: compute metrics over loaded text.
//!
//! This module handles the middle stage of the pipeline - turning raw input
//! text into numbers. It provides:
//!
//! - **Metric functions**: pure functions such as `line_count` and
//!   `max_field_count`
//! - **Metric specs**: the `Metric` enum that binds a function to its
//!   parameters, and `MetricSpec` which names it for display
//!
//! ## Example
//!
//! ```rust
//! use inputshapelib::data::{line_count, max_field_count, Metric};
//!
//! let text = "A B C\nD E\n";
//! assert_eq!(line_count(text), 2);
//! assert_eq!(max_field_count(text, " ").unwrap(), 3);
//! assert_eq!(Metric::SectionLength { section: 1 }.evaluate("a\n\nb\nc\n").unwrap(), 2);
//! ```

pub mod metric;
pub mod metrics;

pub use metric::{Metric, MetricSpec};
pub use metrics::{
    field_count, line_count, max_field_count, max_token_length, max_trailing_field_count,
    raw_length, section, section_count, section_length, section_lengths, split_sections,
    SECTION_SEPARATOR,
};
