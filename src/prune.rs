//! Planning and applying section removals.
//!
//! A run is load, plan, apply, save. Planning never touches the buffer;
//! applying deletes sections from the bottom of the file upward so earlier
//! deletions never shift the line numbers of sections still pending.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::editor::LineBuffer;
use crate::error::Result;
use crate::perf;
use crate::scan::Delimiters;
use crate::section::{Anchor, Section, collect_sections};

/// How the sections to delete are found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Scan for anchor lines and close each section by delimiter counting.
    Anchored {
        anchors: &'static [Anchor],
        delimiters: Delimiters,
    },
    /// Delete one literal, precomputed range.
    Fixed(Section),
}

/// Sections found in a buffer, in the order they were discovered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    pub sections: Vec<Section>,
}

impl Plan {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }
}

/// What an applied plan did to the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub original_lines: usize,
    pub new_lines: usize,
    /// Sections in the order they were removed (bottom-most first).
    pub removed: Vec<Section>,
}

impl Outcome {
    pub const fn lines_removed(&self) -> usize {
        self.original_lines.saturating_sub(self.new_lines)
    }
}

/// Find the sections `strategy` selects in `buffer`.
pub fn plan(buffer: &LineBuffer, strategy: &Strategy) -> Plan {
    let sections = match strategy {
        Strategy::Anchored {
            anchors,
            delimiters,
        } => collect_sections(buffer, anchors, *delimiters),
        Strategy::Fixed(section) => vec![*section],
    };
    Plan { sections }
}

/// Delete every planned section, highest start first.
///
/// Each deletion is clamped to the current buffer. Overlapping sections are
/// not merged: after an inner section goes, the outer one is removed with its
/// original bounds and takes whatever lines now sit there.
pub fn apply(buffer: &mut LineBuffer, plan: &Plan) -> Outcome {
    let original_lines = buffer.line_count();
    let mut removed = plan.sections.clone();
    removed.sort_by(|a, b| b.cmp(a));
    for section in &removed {
        let count = buffer.remove_lines(section.start..section.end);
        debug!(section = section.name, count, "removed lines");
    }
    Outcome {
        original_lines,
        new_lines: buffer.line_count(),
        removed,
    }
}

/// One load-plan-apply-save pass over a single file.
#[derive(Debug, Clone)]
pub struct Job {
    path: PathBuf,
    strategy: Strategy,
    dry_run: bool,
}

impl Job {
    pub fn new(path: impl Into<PathBuf>, strategy: Strategy) -> Self {
        Self {
            path: path.into(),
            strategy,
            dry_run: false,
        }
    }

    /// Report what would be removed without writing the file.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub const fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Run the job, writing progress lines to `out`.
    ///
    /// # Errors
    /// Fails if the file cannot be read or written, or `out` rejects a write.
    pub fn run(&self, out: &mut impl Write) -> Result<Outcome> {
        let mut buffer = {
            let _scope = perf::scope("load");
            LineBuffer::load(&self.path)?
        };

        // The fixed-range tool reports only its closing summary.
        let scanned = matches!(self.strategy, Strategy::Anchored { .. });
        if scanned {
            writeln!(out, "Original file: {} lines", buffer.line_count())?;
        }

        let plan = {
            let _scope = perf::scope("plan");
            plan(&buffer, &self.strategy)
        };
        if scanned {
            for section in &plan.sections {
                writeln!(out, "Found {section}")?;
            }
        }

        let outcome = {
            let _scope = perf::scope("apply");
            apply(&mut buffer, &plan)
        };
        if scanned {
            for section in &outcome.removed {
                writeln!(out, "Removing {section}")?;
            }
        }

        if self.dry_run {
            debug!(path = %self.path.display(), "dry run; leaving file untouched");
        } else {
            let _scope = perf::scope("save");
            buffer.save(&self.path)?;
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const ANCHORS: &[Anchor] = &[Anchor::new("x", "{x &&"), Anchor::new("y", "{y &&")];

    const ANCHORED: Strategy = Strategy::Anchored {
        anchors: ANCHORS,
        delimiters: Delimiters::BRACES,
    };

    fn numbered(count: usize) -> String {
        (0..count).map(|i| format!("line {i}\n")).collect()
    }

    #[test]
    fn test_plan_fixed_is_literal() {
        let buf = LineBuffer::from_text("a\n");
        let section = Section::new("fixed", 10, 20);
        let plan = plan(&buf, &Strategy::Fixed(section));
        assert_eq!(plan.sections, vec![section]);
    }

    #[test]
    fn test_apply_removes_bottom_first() {
        let mut buf = LineBuffer::from_text("keep0\n{x && (\n1\n)}\nkeep1\n{y && 2}\nkeep2\n");
        let plan = plan(&buf, &ANCHORED);
        assert_eq!(plan.len(), 2);

        let outcome = apply(&mut buf, &plan);
        assert_eq!(buf.text(), "keep0\nkeep1\nkeep2\n");
        assert_eq!(outcome.original_lines, 7);
        assert_eq!(outcome.new_lines, 3);
        assert_eq!(outcome.lines_removed(), 4);
        let names: Vec<_> = outcome.removed.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["y", "x"]);
    }

    #[test]
    fn test_apply_fixed_range_on_long_file() {
        let mut buf = LineBuffer::from_text(&numbered(1200));
        let plan = plan(&buf, &Strategy::Fixed(Section::new("admin ui", 373, 1127)));
        let outcome = apply(&mut buf, &plan);
        assert_eq!(outcome.lines_removed(), 1127 - 373);
        assert_eq!(buf.line_count(), 1200 - (1127 - 373));
        assert_eq!(buf.line_text(372).as_deref(), Some("line 372\n"));
        assert_eq!(buf.line_text(373).as_deref(), Some("line 1127\n"));
    }

    #[test]
    fn test_apply_fixed_range_on_short_file_is_clamped() {
        let mut buf = LineBuffer::from_text(&numbered(500));
        let plan = plan(&buf, &Strategy::Fixed(Section::new("admin ui", 373, 1127)));
        let outcome = apply(&mut buf, &plan);
        assert_eq!(outcome.lines_removed(), 500 - 373);
        assert_eq!(buf.line_count(), 373);
    }

    #[test]
    fn test_apply_empty_plan_changes_nothing() {
        let mut buf = LineBuffer::from_text("a\nb\n");
        let outcome = apply(&mut buf, &Plan::default());
        assert_eq!(outcome.lines_removed(), 0);
        assert!(outcome.removed.is_empty());
        assert_eq!(buf.text(), "a\nb\n");
    }

    #[test]
    fn test_nested_sections_use_stale_outer_bounds() {
        // The inner `y` block goes first; the outer `x` range then spans one
        // line past where its block ended and takes `tail0` with it.
        let mut buf = LineBuffer::from_text("{x && (\n{y && 1}\n)}\ntail0\ntail1\n");
        let plan = plan(&buf, &ANCHORED);
        assert_eq!(plan.sections, vec![Section::new("x", 0, 3), Section::new("y", 1, 2)]);
        apply(&mut buf, &plan);
        assert_eq!(buf.text(), "tail1\n");
    }

    #[test]
    fn test_job_run_writes_file_and_reports() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("page.tsx");
        std::fs::write(&path, "a\n{x && (\nb\n)}\nc\n").unwrap();

        let mut out = Vec::new();
        let outcome = Job::new(&path, ANCHORED).run(&mut out).unwrap();
        assert_eq!(outcome.lines_removed(), 3);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\nc\n");

        let report = String::from_utf8(out).unwrap();
        assert_eq!(
            report,
            "Original file: 5 lines\nFound x section: lines 2-4\nRemoving x section: lines 2-4\n"
        );
    }

    #[test]
    fn test_job_dry_run_leaves_file_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("page.tsx");
        let content = "a\n{x && b}\nc\n";
        std::fs::write(&path, content).unwrap();

        let mut out = Vec::new();
        let outcome = Job::new(&path, ANCHORED)
            .with_dry_run(true)
            .run(&mut out)
            .unwrap();
        assert_eq!(outcome.lines_removed(), 1);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_job_fixed_reports_nothing_before_summary() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("page.tsx");
        std::fs::write(&path, numbered(10)).unwrap();

        let mut out = Vec::new();
        Job::new(&path, Strategy::Fixed(Section::new("admin ui", 2, 5)))
            .run(&mut out)
            .unwrap();
        let report = String::from_utf8(out).unwrap();
        assert_eq!(report, "");
        let expected = numbered(10).replace("line 2\nline 3\nline 4\n", "");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), expected);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn reverse_deletion_keeps_outside_lines_in_order(
                line_count in 0..60usize,
                raw in proptest::collection::vec((0..60usize, 1..8usize), 0..6),
            ) {
                // Build disjoint sections from (gap, length) pairs.
                let mut sections = Vec::new();
                let mut cursor = 0;
                for (gap, len) in raw {
                    let start = cursor + gap % 5;
                    let end = start + len;
                    if end > line_count {
                        break;
                    }
                    sections.push(Section::new("s", start, end));
                    cursor = end;
                }

                let text = numbered(line_count);
                let mut buf = LineBuffer::from_text(&text);
                let plan = Plan { sections: sections.clone() };
                let outcome = apply(&mut buf, &plan);

                let expected: String = (0..line_count)
                    .filter(|i| !sections.iter().any(|s| (s.start..s.end).contains(i)))
                    .map(|i| format!("line {i}\n"))
                    .collect();
                prop_assert_eq!(buf.text(), expected);
                let spanned: usize = sections.iter().map(Section::len).sum();
                prop_assert_eq!(outcome.lines_removed(), spanned);
            }
        }
    }
}
