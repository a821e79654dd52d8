//! Global options shared by every subcommand
//!
//! Each option resolves from its flag, then its environment variable, then
//! the built-in default.

use clap::{Args, ValueEnum};
use codescribe_core::errors::ExError;
use codescribe_store::SnippetRepo;
use std::path::PathBuf;

pub const DEFAULT_DB_PATH: &str = ".codescribe/snippets.db";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    Pretty,
    /// One JSON object per line
    Json,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Path to the snippet database
    #[arg(long, global = true, env = "CODESCRIBE_DB", default_value = DEFAULT_DB_PATH)]
    pub db: PathBuf,

    /// Log output format (level comes from RUST_LOG)
    #[arg(
        long,
        global = true,
        env = "CODESCRIBE_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Pretty
    )]
    pub log_format: LogFormat,
}

impl GlobalArgs {
    /// Open the configured store, creating its parent directory first
    pub fn open_repo(&self) -> Result<SnippetRepo, Box<dyn std::error::Error>> {
        if let Some(parent) = self.db.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                ExError::from(e)
                    .with_op("create_db_dir")
                    .with_entity_id(parent.display().to_string())
            })?;
        }
        tracing::debug!(db = %self.db.display(), "opening snippet store");
        Ok(SnippetRepo::open(&self.db)?)
    }
}
