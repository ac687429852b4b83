//! Configuration inspection commands

use std::path::Path;

use anyhow::Result;
use spendwise_core::config::default_config_path;
use spendwise_core::AppConfig;

pub fn cmd_config_show(config: &AppConfig) -> Result<()> {
    println!("⚙️  SpendWise configuration");
    println!("   Currency symbol: {}", config.currency_symbol);
    println!("   Expenses file:   {}", config.expenses_path.display());
    println!("   Budgets file:    {}", config.budgets_path.display());
    Ok(())
}

pub fn cmd_config_path(explicit: Option<&Path>) -> Result<()> {
    if let Some(path) = explicit {
        let state = if path.exists() { "" } else { " (not found)" };
        println!("{}{}", path.display(), state);
        return Ok(());
    }

    match default_config_path() {
        Some(path) => {
            let state = if path.exists() {
                ""
            } else {
                " (not found, using built-in defaults)"
            };
            println!("{}{}", path.display(), state);
        }
        None => println!("No config directory available on this platform"),
    }
    Ok(())
}
