//! Line-oriented text buffer for whole-file edits.
//!
//! Provides a rope-backed buffer that loads a file, exposes its lines with
//! their original terminators, deletes line ranges and writes the result back.

mod buffer;

pub use buffer::LineBuffer;
