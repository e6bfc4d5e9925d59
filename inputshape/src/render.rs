//! Rendering of report blocks for the terminal.

use std::io::{self, Write};

use console::Style;
use inputshapelib::ReportBlock;

/// How report blocks are written to standard output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Blank line, `day NN:` header, then `name: value` lines
    #[default]
    Text,
    /// One JSON object per block, one block per line
    Json,
}

impl OutputMode {
    /// Parse a `--output` value.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Writes blocks as they arrive from the runner.
pub struct Renderer<W: Write> {
    out: W,
    mode: OutputMode,
    header: Style,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, mode: OutputMode) -> Self {
        Self {
            out,
            mode,
            header: Style::new().bold(),
        }
    }

    /// Write one block and flush, so output keeps pace with the probes.
    pub fn render(&mut self, block: &ReportBlock) -> io::Result<()> {
        match self.mode {
            OutputMode::Text => {
                writeln!(self.out)?;
                writeln!(self.out, "{}", self.header.apply_to(block.header()))?;
                for line in &block.lines {
                    writeln!(self.out, "{line}")?;
                }
            }
            OutputMode::Json => {
                serde_json::to_writer(&mut self.out, block)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}
