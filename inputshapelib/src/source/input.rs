//! Day identifiers and the files they name.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::ShapeError;
use crate::Result;

const LOG_TARGET: &str = "  source";

/// Directory holding the input files, relative to the project root.
pub const DATA_DIR: &str = "src/days/data";

/// File name prefix shared by every input file.
pub const FILE_PREFIX: &str = "day";

/// File name extension shared by every input file.
pub const FILE_EXTENSION: &str = "txt";

/// Identifier of one input: the puzzle day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DayId(u8);

impl DayId {
    /// Create an identifier for a day number.
    pub const fn new(day: u8) -> Self {
        Self(day)
    }

    /// The day number.
    pub fn number(self) -> u8 {
        self.0
    }

    /// File name of this day's input, e.g. `day05.txt`.
    pub fn file_name(self) -> String {
        format!("{FILE_PREFIX}{:02}.{FILE_EXTENSION}", self.0)
    }
}

impl fmt::Display for DayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {:02}", self.0)
    }
}

/// A named input file, resolved against a project root.
///
/// Sources are cheap descriptors. The text is read by [`InputSource::load`]
/// and handed to the caller, which owns it for the length of one probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSource {
    id: DayId,
    path: PathBuf,
}

impl InputSource {
    /// Resolve the input for `id` under `root`.
    pub fn new(root: impl AsRef<Path>, id: DayId) -> Self {
        let path = root.as_ref().join(DATA_DIR).join(id.file_name());
        Self { id, path }
    }

    /// The identifier this source belongs to.
    pub fn id(&self) -> DayId {
        self.id
    }

    /// Full path of the input file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file.
    ///
    /// Windows line endings are normalized to `\n` so metrics only ever see
    /// one line terminator.
    pub fn load(&self) -> Result<String> {
        log::debug!(target: LOG_TARGET, "Loading {} from '{}'", self.id, self.path.display());

        let raw = std::fs::read_to_string(&self.path).map_err(|source| ShapeError::FileRead {
            path: self.path.clone(),
            source,
        })?;

        let text = normalize_newlines(raw);
        log::debug!(target: LOG_TARGET, "Loaded {} bytes for {}", text.len(), self.id);
        Ok(text)
    }
}

fn normalize_newlines(raw: String) -> String {
    if raw.contains('\r') {
        raw.replace("\r\n", "\n")
    } else {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_file_name_is_zero_padded() {
        assert_eq!(DayId::new(5).file_name(), "day05.txt");
        assert_eq!(DayId::new(19).file_name(), "day19.txt");
    }

    #[test]
    fn test_display() {
        assert_eq!(DayId::new(3).to_string(), "day 03");
        assert_eq!(DayId::new(25).to_string(), "day 25");
    }

    #[test]
    fn test_path_follows_convention() {
        let source = InputSource::new("/project", DayId::new(7));
        assert_eq!(
            source.path(),
            Path::new("/project/src/days/data/day07.txt")
        );
        assert_eq!(source.id(), DayId::new(7));
    }

    #[test]
    fn test_load_reads_text() {
        let dir = tempdir().unwrap();
        let data = dir.path().join(DATA_DIR);
        fs::create_dir_all(&data).unwrap();
        fs::write(data.join("day01.txt"), "1\n2\n3\n").unwrap();

        let text = InputSource::new(dir.path(), DayId::new(1)).load().unwrap();
        assert_eq!(text, "1\n2\n3\n");
    }

    #[test]
    fn test_load_normalizes_crlf() {
        let dir = tempdir().unwrap();
        let data = dir.path().join(DATA_DIR);
        fs::create_dir_all(&data).unwrap();
        fs::write(data.join("day02.txt"), "a b\r\nc\r\n").unwrap();

        let text = InputSource::new(dir.path(), DayId::new(2)).load().unwrap();
        assert_eq!(text, "a b\nc\n");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = InputSource::new(dir.path(), DayId::new(4)).load();

        match result {
            Err(ShapeError::FileRead { path, .. }) => {
                assert!(path.ends_with("src/days/data/day04.txt"));
            }
            other => panic!("expected FileRead error, got {other:?}"),
        }
    }
}
