//! Search command
//!
//! Usage: codescribe search <KEYWORD> [--json]

use crate::config::GlobalArgs;
use crate::output;
use clap::Args;
use codescribe_engine::SnippetManager;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Case-sensitive text to look for in title, description and tags
    pub keyword: String,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute search command
pub fn execute(args: SearchArgs, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let repo = global.open_repo()?;
    let snippets = SnippetManager::new(&repo).search_snippets(&args.keyword)?;

    output::print_list(&snippets, args.json)
}
