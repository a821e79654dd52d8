//! Update command
//!
//! Usage: codescribe update <ID> --title <TITLE> (--code <CODE> | --file <PATH>) [..]
//!
//! Every field is replaced; omitted optional fields are cleared.

use super::fields::FieldArgs;
use crate::config::GlobalArgs;
use clap::Args;
use codescribe_engine::SnippetManager;

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Snippet id
    pub id: i64,

    #[command(flatten)]
    pub fields: FieldArgs,
}

/// Execute update command
pub fn execute(args: UpdateArgs, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let code = args.fields.read_code()?;
    let repo = global.open_repo()?;
    let manager = SnippetManager::new(&repo);

    let matched = manager.update_snippet(
        args.id,
        args.fields.title,
        args.fields.description,
        args.fields.tags,
        code,
        args.fields.language,
    )?;

    if matched {
        println!("✓ Updated snippet {}", args.id);
    } else {
        eprintln!("warning: no snippet with id {}; nothing changed", args.id);
    }
    Ok(())
}
