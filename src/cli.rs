use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "competitor-lens-prep")]
#[command(about = "CompetitorLens data-prep tools: workbook inspection and placeholder screenshots", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print debug diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize a workbook, export its first sheet to CSV and check required columns
    Inspect {
        /// Workbook path (default: from config)
        workbook: Option<PathBuf>,

        /// Directory for `<name>_converted.csv`
        #[arg(short, long)]
        export_dir: Option<PathBuf>,

        /// Profile distinct/sample values per column
        #[arg(long)]
        profile: bool,

        /// Detect a feature x competitor matrix layout
        #[arg(long)]
        matrix: bool,

        /// Dump every sheet as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Render placeholder exchange screenshots and a README manifest
    Screenshots {
        /// Output directory (default: from config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// TrueType font to prefer (repeatable)
        #[arg(long)]
        font: Vec<PathBuf>,

        /// Seed for the chart line (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show or initialize the config file
    Config {
        /// Print the effective config
        #[arg(long)]
        show: bool,

        /// Write the default config file
        #[arg(long)]
        init: bool,
    },
}
