//! Remove lines 374-1127 (the manager-mode ternary and every admin tab)
//! from `frontend/src/pages/KitchenDashboard.tsx`.
//!
//! ```bash
//! remove-admin-ui
//! ```

use anyhow::Result;
use sectrim::targets::Tool;

fn main() -> Result<()> {
    sectrim::cli::main(Tool::AdminUi)
}
