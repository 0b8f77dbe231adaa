//! Bedding CLI - Generate and manage ERP catalog records for bedding
//! product lines.
//!
//! Commands:
//! - `bedding generate` - Compose names and append records to the store
//! - `bedding list` - List accumulated records
//! - `bedding export` - Export the store as delimited text
//! - `bedding draft` - Manage saved form drafts

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{DraftArgs, ExportArgs, GenerateArgs, ListArgs};

/// Bedding CLI - Generate ERP catalog records for bedding product lines
#[derive(Parser)]
#[command(name = "bedding")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose names from a form file and append records to the store
    Generate(GenerateArgs),

    /// List the accumulated catalog records
    List(ListArgs),

    /// Export the store as delimited text
    Export(ExportArgs),

    /// Manage saved form drafts
    Draft(DraftArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Generate(args) => commands::generate::run(args, &ctx).await,
        Commands::List(args) => commands::list::run(args, &ctx).await,
        Commands::Export(args) => commands::export::run(args, &ctx).await,
        Commands::Draft(args) => commands::draft::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
