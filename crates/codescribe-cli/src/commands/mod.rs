//! Subcommand implementations

pub mod add;
pub mod fields;
pub mod get;
pub mod init;
pub mod list;
pub mod search;
pub mod update;
