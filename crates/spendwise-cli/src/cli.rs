//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// SpendWise - Know which expenses matter
#[derive(Parser)]
#[command(name = "spendwise")]
#[command(about = "Expense priority classifier and savings advisor", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file path
    ///
    /// Falls back to ~/.config/spendwise/config.toml, then built-in defaults.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Input files and reference date shared by the analysis commands
#[derive(Args, Debug, Clone, Default)]
pub struct DataArgs {
    /// Classified expenses file (.json or .csv); defaults to the configured path
    #[arg(short, long)]
    pub expenses: Option<PathBuf>,

    /// Budgets file (.json or .csv); defaults to the configured path
    #[arg(short, long)]
    pub budgets: Option<PathBuf>,

    /// Reference date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub today: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a single expense
    Classify {
        /// Amount (non-numeric input is classified by keywords only)
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,

        /// Category (e.g., food, rent, medical)
        #[arg(short, long)]
        category: String,

        /// Free-text description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Show matched features and the score
        #[arg(long)]
        explain: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Classify raw expenses (date, amount, category, description) from a file
    Import {
        /// JSON or CSV file to import
        #[arg(short, long)]
        file: PathBuf,

        /// Where to write classified expenses as JSON (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show savings recommendations for the current month
    Recommend {
        #[command(flatten)]
        data: DataArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show spending statistics with category and priority breakdowns
    Summary {
        #[command(flatten)]
        data: DataArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show spending over time
    Trend {
        /// Classified expenses file (.json or .csv); defaults to the configured path
        #[arg(short, long)]
        expenses: Option<PathBuf>,

        /// Window: weekly (7 days), monthly (30 days), yearly (12 months)
        #[arg(short, long, default_value = "weekly")]
        window: String,

        /// Reference date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        today: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the resolved configuration
    Show,
    /// Show the user config override path
    Path,
}
