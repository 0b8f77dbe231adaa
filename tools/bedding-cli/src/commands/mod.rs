//! CLI command implementations.

pub mod draft;
pub mod export;
pub mod generate;
pub mod list;

use clap::{Args, Subcommand};

/// Arguments for the generate command.
#[derive(Args)]
pub struct GenerateArgs {
    /// Form file (TOML or JSON) describing the product selection.
    #[arg(short, long)]
    pub input: String,

    /// Also write the generated records as delimited text to this path.
    #[arg(long)]
    pub csv: Option<String>,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,

    /// Preview the names without persisting anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Show only the last N records.
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the export command.
#[derive(Args)]
pub struct ExportArgs {
    /// Output path (default: from config).
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the draft command.
#[derive(Args)]
pub struct DraftArgs {
    #[command(subcommand)]
    pub command: DraftCommand,
}

/// Draft subcommands.
#[derive(Subcommand)]
pub enum DraftCommand {
    /// Save a form file as a named draft.
    Save {
        /// Form file (TOML or JSON) to save.
        #[arg(short, long)]
        input: String,

        /// Draft name.
        #[arg(short, long)]
        name: String,
    },

    /// List saved drafts.
    List,

    /// Print a saved draft as JSON.
    Show {
        /// Draft id.
        id: String,
    },

    /// Delete a saved draft.
    Delete {
        /// Draft id.
        id: String,
    },
}
