//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum, ValueHint};

/// Family-tree editor core: parse TreeDown text, derive pedigrees, export
#[derive(Parser, Debug)]
#[command(name = "treedown")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase debug output (-d, -dd, -ddd)
    #[arg(short = 'd', long = "debug", action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the tree as an indented listing
    Show {
        /// TreeDown file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// Append node ids to labels
        #[arg(long)]
        ids: bool,

        /// Restrict to the subtree of this node id
        #[arg(long)]
        focus: Option<String>,

        /// With --focus, show the ancestor lineage instead of the subtree
        #[arg(long, requires = "focus")]
        pedigree: bool,
    },

    /// Show root/node/depth counts
    Stats {
        /// TreeDown file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Print the ancestor lineage of a node as TreeDown text
    Pedigree {
        /// TreeDown file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// Node id (as listed by `show --ids`)
        id: String,
    },

    /// Export the tree to another format
    Export {
        /// Output format
        #[arg(value_enum)]
        format: ExportFormat,

        /// TreeDown file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,

        /// Restrict the export to the subtree of this node id
        #[arg(long)]
        focus: Option<String>,

        /// With --focus, export the ancestor lineage instead of the subtree
        #[arg(long, requires = "focus")]
        pedigree: bool,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Export targets
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ExportFormat {
    /// TreeDown text with 4-space indentation
    Text,
    /// Pretty-printed JSON forest
    Json,
    /// Self-contained interactive viewer
    Html,
    /// Diagram rendered from the layout engine
    Svg,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init,

    /// Show config path
    Path,
}
