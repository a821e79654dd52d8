//! Get command
//!
//! Usage: codescribe get <ID> [--json]

use crate::config::GlobalArgs;
use crate::output;
use clap::Args;
use codescribe_engine::SnippetManager;

#[derive(Debug, Args)]
pub struct GetArgs {
    /// Snippet id
    pub id: i64,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute get command
pub fn execute(args: GetArgs, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let repo = global.open_repo()?;
    let snippet = SnippetManager::new(&repo).get_snippet_by_id(args.id)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snippet)?);
    } else {
        println!("{}", output::detail(&snippet));
    }
    Ok(())
}
