//! Naive matching-delimiter scan.
//!
//! The scan counts delimiter characters across lines with no notion of
//! string literals, comments or JSX text. A brace inside `"{"` or a comment
//! shifts the balance and can end a section early or late. That is a known
//! limitation of this tool and callers must not rely on it for anything
//! but well-formed, brace-free text content.

use crate::editor::LineBuffer;

/// The opening and closing characters counted by [`find_matching`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    pub open: char,
    pub close: char,
}

impl Delimiters {
    /// Curly braces, as used by JSX expression containers.
    pub const BRACES: Self = Self {
        open: '{',
        close: '}',
    };
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::BRACES
    }
}

/// Find the line where the delimiter balance first returns to zero.
///
/// Counting starts at the first character of line `start`. The balance is
/// only checked after a closing delimiter, so a close seen before any open
/// drives it negative and that position never matches. Returns `None` when
/// the end of the buffer is reached first or `start` is out of range.
pub fn find_matching(buffer: &LineBuffer, start: usize, delimiters: Delimiters) -> Option<usize> {
    let mut depth: i64 = 0;
    for (idx, line) in buffer.lines().enumerate().skip(start) {
        for ch in line.chars() {
            if ch == delimiters.open {
                depth += 1;
            } else if ch == delimiters.close {
                depth -= 1;
                if depth == 0 {
                    return Some(idx);
                }
            }
        }
    }
    None
}
