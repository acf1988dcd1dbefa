use std::borrow::Cow;
use std::fs::{self, File};
use std::io::BufWriter;
use std::ops::Range;
use std::path::Path;

use ropey::{Rope, RopeSlice};

use crate::error::{PruneError, Result};

/// A text buffer backed by a rope data structure.
///
/// Lines keep their original terminators, so writing the buffer back
/// reproduces the loaded file byte for byte apart from deleted lines.
/// Only `\n` is treated as a line break; `\r\n` endings stay attached to the
/// line they end.
#[derive(Debug, Clone)]
pub struct LineBuffer {
    rope: Rope,
}

impl LineBuffer {
    /// Create a new buffer from a string.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Read the whole file at `path` into a buffer.
    ///
    /// # Errors
    /// Returns [`PruneError::Read`] if the file is missing, unreadable or not
    /// valid UTF-8.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| PruneError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(&text))
    }

    /// Overwrite the file at `path` with the buffer contents.
    ///
    /// The file is truncated and rewritten in place. There is no temporary
    /// file or backup, so an interrupted write leaves a partial file.
    ///
    /// # Errors
    /// Returns [`PruneError::Write`] if the file cannot be created or written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let write_err = |source| PruneError::Write {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        self.rope.write_to(&mut writer).map_err(write_err)?;
        writer.into_inner().map_err(|err| write_err(err.into_error()))?;
        Ok(())
    }

    /// Number of lines, counting a final unterminated line but not the empty
    /// remainder after a trailing newline.
    pub fn line_count(&self) -> usize {
        if self.rope.len_chars() == 0 {
            return 0;
        }
        let lines = self.rope.len_lines();
        if self.rope.line(lines - 1).len_chars() == 0 {
            lines - 1
        } else {
            lines
        }
    }

    /// Whether the buffer holds no lines at all.
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// The line at `line_idx`, terminator included.
    pub fn line(&self, line_idx: usize) -> Option<RopeSlice<'_>> {
        (line_idx < self.line_count()).then(|| self.rope.line(line_idx))
    }

    /// The text of the line at `line_idx`, terminator included.
    pub fn line_text(&self, line_idx: usize) -> Option<Cow<'_, str>> {
        self.line(line_idx).map(Cow::from)
    }

    /// Iterate over all lines in order.
    pub fn lines(&self) -> impl Iterator<Item = RopeSlice<'_>> {
        self.rope.lines().take(self.line_count())
    }

    /// Delete the lines in `range`, returning how many were removed.
    ///
    /// Bounds are clamped to the buffer, so a range reaching past the end
    /// removes only what exists and an empty or inverted range is a no-op.
    pub fn remove_lines(&mut self, range: Range<usize>) -> usize {
        let count = self.line_count();
        let start = range.start.min(count);
        let end = range.end.min(count).max(start);
        if start == end {
            return 0;
        }
        let from = self.rope.line_to_char(start);
        let to = self.rope.line_to_char(end);
        self.rope.remove(from..to);
        end - start
    }

    /// The full text content of the buffer.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }
}
