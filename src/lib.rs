// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. section::Section)
    clippy::module_name_repetitions
)]

//! # sectrim
//!
//! Strips admin-only sections out of the kitchen dashboard page.
//!
//! Two tools share one line-based pipeline:
//! - `remove-admin-tabs` finds the admin tab bodies by their anchor lines and
//!   closes each one by counting braces
//! - `remove-admin-ui` deletes a fixed, precomputed line range
//!
//! ## Pipeline
//!
//! - **Load**: read the page into a [`editor::LineBuffer`]
//! - **Plan**: collect the [`section::Section`]s to delete
//! - **Apply**: delete them bottom-up so pending line numbers stay valid
//! - **Save**: overwrite the page in place
//!
//! ## Modules
//!
//! - [`editor`]: rope-backed line buffer with load/save
//! - [`scan`]: naive matching-delimiter scan
//! - [`section`]: anchors, sections and section collection
//! - [`prune`]: planning, applying and running a job
//! - [`targets`]: the hard-coded page, anchors and line range
//! - [`config`]: saved default flags
//! - [`cli`]: shared binary entry point
//! - [`perf`]: phase timing

pub mod cli;
pub mod config;
pub mod editor;
pub mod error;
pub mod perf;
pub mod prune;
pub mod scan;
pub mod section;
pub mod targets;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::editor::LineBuffer;
    pub use crate::error::{PruneError, Result};
    pub use crate::prune::{Job, Outcome, Plan, Strategy};
    pub use crate::scan::{Delimiters, find_matching};
    pub use crate::section::{Anchor, Section, collect_sections};
    pub use crate::targets::Tool;
}
