use crate::domain::model::{LabGroup, LabId};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "labbook")]
#[command(version, about = "Standalone teaching labs: control flow, containers and OOP")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Path to TOML configuration file (default: ./labbook.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the available labs
    List {
        #[arg(long, value_enum)]
        group: Option<LabGroup>,
    },
    /// Show a lab's title and key concepts
    Describe {
        #[arg(value_enum)]
        lab: LabId,
    },
    /// Run a single lab
    Run {
        #[arg(value_enum)]
        lab: LabId,
        /// Whitespace-separated input tokens for interactive labs
        #[arg(long)]
        input: Option<String>,
    },
    /// Run every lab in catalog order
    All,
}
