//! Report command implementations (summary, trend)

use std::path::Path;

use anyhow::Result;
use spendwise_core::summary::{by_category, by_priority, spending_trend};
use spendwise_core::{AppConfig, SpendingStats, TrendWindow};

use super::{load_expense_file, load_inputs, resolve_today, truncate};
use crate::cli::DataArgs;

pub fn cmd_summary(config: &AppConfig, data: &DataArgs, json: bool) -> Result<()> {
    let inputs = load_inputs(config, data)?;
    let stats = SpendingStats::compute(&inputs.expenses, &inputs.budgets, inputs.today);
    let categories = by_category(&inputs.expenses);
    let priorities = by_priority(&inputs.expenses);

    if json {
        let output = serde_json::json!({
            "stats": stats,
            "by_category": categories,
            "by_priority": priorities,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let cur = &config.currency_symbol;

    println!();
    println!("📊 Spending Summary");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Total spent:     {}{:.2}", cur, stats.total_spent);
    println!(
        "   This month:      {}{:.2} ({})",
        cur,
        stats.monthly_spent,
        inputs.today.format("%B %Y")
    );
    println!("   Transactions:    {}", stats.transaction_count);
    match stats.budget_left {
        Some(left) => println!("   Budget left:     {}{:.2}", cur, left),
        None => println!("   Budget left:     No Budget Set"),
    }

    if categories.is_empty() {
        println!();
        println!("   No expenses recorded.");
        println!();
        return Ok(());
    }

    println!();
    println!("   {:25} │ {:>12} │ {:>6}", "Category", "Amount", "%");
    println!("   ──────────────────────────┼──────────────┼────────");
    for share in &categories {
        println!(
            "   {:25} │ {:>12.2} │ {:>5.1}%",
            truncate(&share.category, 25),
            share.amount,
            share.percentage
        );
    }

    println!();
    println!("   {:25} │ {:>12} │ {:>6}", "Priority", "Amount", "Count");
    println!("   ──────────────────────────┼──────────────┼────────");
    for share in &priorities {
        println!(
            "   {:25} │ {:>12.2} │ {:>6}",
            share.priority.display_name(),
            share.amount,
            share.count
        );
    }
    println!();

    Ok(())
}

pub fn cmd_trend(
    config: &AppConfig,
    expenses: Option<&Path>,
    window: &str,
    today: Option<&str>,
    json: bool,
) -> Result<()> {
    let window: TrendWindow = window.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let today = resolve_today(today)?;
    let expenses = load_expense_file(config, expenses)?;
    let points = spending_trend(&expenses, window, today);

    if json {
        println!("{}", serde_json::to_string_pretty(&points)?);
        return Ok(());
    }

    let label_format = match window {
        TrendWindow::Weekly => "%a %d %b",
        TrendWindow::Monthly => "%d %b",
        TrendWindow::Yearly => "%b %Y",
    };
    let max = points.iter().map(|p| p.total).fold(0.0_f64, f64::max);

    println!();
    println!("📈 Spending Trend ({})", window);
    println!("   ─────────────────────────────────────────────────────────────");
    for point in &points {
        let bar_len = if max > 0.0 {
            (point.total / max * 30.0).round() as usize
        } else {
            0
        };
        println!(
            "   {:12} {:>12.2} {}",
            point.start.format(label_format).to_string(),
            point.total,
            "█".repeat(bar_len)
        );
    }
    let total: f64 = points.iter().map(|p| p.total).sum();
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Total: {}{:.2}", config.currency_symbol, total);
    println!();

    Ok(())
}
