//! The file and sections the two tools operate on.
//!
//! None of this is configurable: each tool edits one page with one
//! hard-coded strategy.

use std::path::PathBuf;

use crate::prune::{Outcome, Strategy};
use crate::scan::Delimiters;
use crate::section::{Anchor, Section};

/// Admin tab bodies, in match priority order.
pub const ADMIN_TAB_ANCHORS: &[Anchor] = &[
    Anchor::new("waiters", "{activeTab === 'waiters' &&"),
    Anchor::new("settlement", "{activeTab === 'settlement' &&"),
    Anchor::new("payments", "{activeTab === 'payments' &&"),
    Anchor::new("info", "{activeTab === 'info' &&"),
];

/// Lines 374-1127: the manager-mode ternary and every admin tab.
pub const ADMIN_UI_SECTION: Section = Section::new("admin ui", 373, 1127);

const PAGE_FILE_NAME: &str = "KitchenDashboard.tsx";

/// `frontend/src/pages/KitchenDashboard.tsx`, relative to the working directory.
pub fn dashboard_path() -> PathBuf {
    ["frontend", "src", "pages", PAGE_FILE_NAME].iter().collect()
}

/// The two single-purpose tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Remove the waiters, settlement, payments and info tab bodies.
    AdminTabs,
    /// Remove the whole admin UI block by line range.
    AdminUi,
}

impl Tool {
    pub const fn bin_name(self) -> &'static str {
        match self {
            Self::AdminTabs => "remove-admin-tabs",
            Self::AdminUi => "remove-admin-ui",
        }
    }

    pub const fn about(self) -> &'static str {
        match self {
            Self::AdminTabs => "Remove admin tab content sections from KitchenDashboard.tsx",
            Self::AdminUi => "Remove the admin UI line range from KitchenDashboard.tsx",
        }
    }

    pub const fn strategy(self) -> Strategy {
        match self {
            Self::AdminTabs => Strategy::Anchored {
                anchors: ADMIN_TAB_ANCHORS,
                delimiters: Delimiters::BRACES,
            },
            Self::AdminUi => Strategy::Fixed(ADMIN_UI_SECTION),
        }
    }

    /// Closing summary printed after a run.
    pub fn summary(self, outcome: &Outcome, dry_run: bool) -> String {
        let verb = if dry_run { "Would remove" } else { "✅ Removed" };
        let headline = match self {
            Self::AdminTabs => format!("{verb} {} admin tab sections", outcome.removed.len()),
            Self::AdminUi => format!(
                "{verb} {} lines from {PAGE_FILE_NAME}",
                outcome.lines_removed()
            ),
        };
        format!(
            "{headline}\n   Original: {} lines\n   New: {} lines",
            outcome.original_lines, outcome.new_lines
        )
    }
}
