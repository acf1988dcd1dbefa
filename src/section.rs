//! Anchored sections and their collection.

use std::borrow::Cow;
use std::fmt;

use tracing::debug;

use crate::editor::LineBuffer;
use crate::scan::{Delimiters, find_matching};

/// A named literal substring marking the first line of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub name: &'static str,
    pub pattern: &'static str,
}

impl Anchor {
    pub const fn new(name: &'static str, pattern: &'static str) -> Self {
        Self { name, pattern }
    }
}

/// A half-open, zero-based range of lines `[start, end)` to delete.
///
/// Ordering compares `start`, then `end`, then `name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Section {
    pub start: usize,
    pub end: usize,
    pub name: &'static str,
}

impl Section {
    pub const fn new(name: &'static str, start: usize, end: usize) -> Self {
        Self { start, end, name }
    }

    /// Number of lines the section spans.
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Section {
    /// One-based, inclusive: `[7, 12)` shows as `lines 8-12`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} section: lines {}-{}", self.name, self.start + 1, self.end)
    }
}

/// Collect one section per anchored line.
///
/// Each line matches at most one anchor: the first in `anchors` whose
/// pattern occurs in it. The section runs from the anchored line through the
/// line where [`find_matching`] balances the delimiters. Anchors whose block
/// never closes are skipped.
pub fn collect_sections(
    buffer: &LineBuffer,
    anchors: &[Anchor],
    delimiters: Delimiters,
) -> Vec<Section> {
    let mut sections = Vec::new();
    for (idx, line) in buffer.lines().enumerate() {
        let text: Cow<'_, str> = line.into();
        let Some(anchor) = anchors.iter().find(|a| text.contains(a.pattern)) else {
            continue;
        };
        match find_matching(buffer, idx, delimiters) {
            Some(end) => sections.push(Section::new(anchor.name, idx, end + 1)),
            None => debug!(
                anchor = anchor.name,
                line = idx + 1,
                "no matching closing delimiter; skipping"
            ),
        }
    }
    debug!(found = sections.len(), "collected sections");
    sections
}
