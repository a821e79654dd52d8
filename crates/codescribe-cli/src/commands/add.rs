//! Add command
//!
//! Usage: codescribe add --title <TITLE> (--code <CODE> | --file <PATH>) [--description ..] [--tags ..] [--language ..]

use super::fields::FieldArgs;
use crate::config::GlobalArgs;
use clap::Args;
use codescribe_engine::SnippetManager;

#[derive(Debug, Args)]
pub struct AddArgs {
    #[command(flatten)]
    pub fields: FieldArgs,
}

/// Execute add command
pub fn execute(args: AddArgs, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let code = args.fields.read_code()?;
    let repo = global.open_repo()?;
    let manager = SnippetManager::new(&repo);

    let id = manager.create_snippet(
        args.fields.title,
        args.fields.description,
        args.fields.tags,
        code,
        args.fields.language,
    )?;

    println!("{}", id);
    Ok(())
}
