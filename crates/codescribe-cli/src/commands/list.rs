//! List command
//!
//! Usage: codescribe list [--json]

use crate::config::GlobalArgs;
use crate::output;
use clap::Args;
use codescribe_engine::SnippetManager;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute list command
pub fn execute(args: ListArgs, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let repo = global.open_repo()?;
    let snippets = SnippetManager::new(&repo).get_all_snippets()?;

    output::print_list(&snippets, args.json)?;
    if !args.json {
        eprintln!("{} snippet(s)", snippets.len());
    }
    Ok(())
}
