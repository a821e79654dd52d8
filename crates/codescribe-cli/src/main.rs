//! CodeScribe CLI
//!
//! Command-line interface for storing and finding code snippets

use clap::{Parser, Subcommand};
use codescribe_core::logging_facility;

mod commands;
mod config;
mod output;

use config::{GlobalArgs, LogFormat};

#[derive(Debug, Parser)]
#[command(name = "codescribe")]
#[command(about = "CodeScribe - Code snippet manager", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create the snippet store if it does not exist
    Init,
    /// Add a new snippet
    Add(commands::add::AddArgs),
    /// Show one snippet
    Get(commands::get::GetArgs),
    /// Find snippets by keyword in title, description or tags
    Search(commands::search::SearchArgs),
    /// List every snippet
    List(commands::list::ListArgs),
    /// Replace all fields of an existing snippet
    Update(commands::update::UpdateArgs),
}

fn main() {
    let cli = Cli::parse();

    let profile = match cli.global.log_format {
        LogFormat::Pretty => logging_facility::Profile::Development,
        LogFormat::Json => logging_facility::Profile::Production,
    };
    logging_facility::init_with_filter(profile, "codescribe=warn");

    let result = match cli.command {
        Commands::Init => commands::init::execute(&cli.global),
        Commands::Add(args) => commands::add::execute(args, &cli.global),
        Commands::Get(args) => commands::get::execute(args, &cli.global),
        Commands::Search(args) => commands::search::execute(args, &cli.global),
        Commands::List(args) => commands::list::execute(args, &cli.global),
        Commands::Update(args) => commands::update::execute(args, &cli.global),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
