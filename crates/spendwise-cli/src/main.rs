//! SpendWise CLI - Expense priority classifier and savings advisor
//!
//! Usage:
//!   spendwise classify -a 6000 -c medical     Classify one expense
//!   spendwise import --file raw.csv -o out.json   Classify a file of expenses
//!   spendwise recommend -e out.json           Savings recommendations
//!   spendwise summary                         Spending statistics

mod cli;
mod commands;


use anyhow::{Context, Result};
use clap::Parser;
use spendwise_core::AppConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact().with_writer(std::io::stderr))
        .init();

    let config =
        AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Commands::Classify {
            amount,
            category,
            description,
            explain,
            json,
        } => commands::cmd_classify(&amount, &category, &description, explain, json),
        Commands::Import { file, output } => commands::cmd_import(&file, output.as_deref()),
        Commands::Recommend { data, json } => commands::cmd_recommend(&config, &data, json),
        Commands::Summary { data, json } => commands::cmd_summary(&config, &data, json),
        Commands::Trend {
            expenses,
            window,
            today,
            json,
        } => commands::cmd_trend(
            &config,
            expenses.as_deref(),
            &window,
            today.as_deref(),
            json,
        ),
        Commands::Config { action } => match action {
            None | Some(ConfigAction::Show) => commands::cmd_config_show(&config),
            Some(ConfigAction::Path) => commands::cmd_config_path(cli.config.as_deref()),
        },
    }
}
