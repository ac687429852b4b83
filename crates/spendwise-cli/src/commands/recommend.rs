//! Recommendation command implementation

use anyhow::Result;
use spendwise_core::{AppConfig, RecommendationEngine};

use super::load_inputs;
use crate::cli::DataArgs;

pub fn cmd_recommend(config: &AppConfig, data: &DataArgs, json: bool) -> Result<()> {
    let inputs = load_inputs(config, data)?;
    let engine = RecommendationEngine::new().with_currency_symbol(config.currency_symbol.as_str());
    let entries = engine.recommend(&inputs.expenses, &inputs.budgets, inputs.today);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!();
    println!("💡 Recommendations for {}", inputs.today.format("%B %Y"));
    println!("   ─────────────────────────────────────────────────────────────");

    let mut potential = 0.0;
    for (i, entry) in entries.iter().enumerate() {
        println!("   {} {}", entry.icon, entry.text);
        if entry.savings > 0.0 {
            println!(
                "      [{}] Potential savings: {}{:.2}",
                entry.severity, config.currency_symbol, entry.savings
            );
        }
        if i + 1 < entries.len() {
            println!();
        }
        potential += entry.savings;
    }

    if potential > 0.0 {
        println!("   ─────────────────────────────────────────────────────────────");
        println!(
            "   Total potential savings: {}{:.2}",
            config.currency_symbol, potential
        );
    }
    println!();

    Ok(())
}
