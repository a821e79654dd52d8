//! Init command
//!
//! Usage: codescribe init

use crate::config::GlobalArgs;

/// Execute init command
pub fn execute(global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let repo = global.open_repo()?;
    let count = repo.count()?;
    repo.close()?;

    println!(
        "✓ Snippet store ready at {} ({} snippets)",
        global.db.display(),
        count
    );
    Ok(())
}
