//! Input sources: locate and load the text to probe.
//!
//! Every identifier resolves to one file under a fixed data directory,
//! named `day<NN>.txt`. This module knows that convention and nothing else.
//!
//! ## Example
//!
//! ```rust,ignore
//! use inputshapelib::source::{DayId, InputSource};
//!
//! let source = InputSource::new(".", DayId::new(5)?);
//! let text = source.load()?;
//! ```

pub mod input;

pub use input::{DayId, InputSource, DATA_DIR, FILE_EXTENSION, FILE_PREFIX};
