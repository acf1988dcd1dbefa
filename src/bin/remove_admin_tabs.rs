//! Remove the waiters, settlement, payments and info tab bodies from
//! `frontend/src/pages/KitchenDashboard.tsx`.
//!
//! ```bash
//! remove-admin-tabs
//! remove-admin-tabs --dry-run
//! ```

use anyhow::Result;
use sectrim::targets::Tool;

fn main() -> Result<()> {
    sectrim::cli::main(Tool::AdminTabs)
}
