//! Shared utilities for commands
//!
//! This module contains:
//! - `resolve_today` - Reference date from --today or the local clock
//! - `load_inputs` - Load expenses and budgets from explicit or configured paths

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use spendwise_core::import::{load_budgets, load_expenses};
use spendwise_core::{AppConfig, Budget, ClassifiedExpense};
use tracing::debug;

use crate::cli::DataArgs;

/// Parse --today, or use the local date
pub fn resolve_today(today: Option<&str>) -> Result<NaiveDate> {
    match today {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .context("Invalid --today date format (use YYYY-MM-DD)"),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Load classified expenses from `path`, or the configured default
pub fn load_expense_file(
    config: &AppConfig,
    path: Option<&Path>,
) -> Result<Vec<ClassifiedExpense>> {
    let path = path.unwrap_or(config.expenses_path.as_path());
    load_expenses(path).with_context(|| format!("Failed to load expenses from {}", path.display()))
}

/// Load budgets. A missing default budgets file means "no budgets";
/// an explicit path must exist.
pub fn load_budget_file(config: &AppConfig, path: Option<&Path>) -> Result<Vec<Budget>> {
    let path = match path {
        Some(p) => p,
        None if !config.budgets_path.exists() => {
            debug!(
                path = %config.budgets_path.display(),
                "No budgets file, continuing without budgets"
            );
            return Ok(vec![]);
        }
        None => config.budgets_path.as_path(),
    };
    load_budgets(path).with_context(|| format!("Failed to load budgets from {}", path.display()))
}

/// Everything an analysis command needs
pub struct Inputs {
    pub expenses: Vec<ClassifiedExpense>,
    pub budgets: Vec<Budget>,
    pub today: NaiveDate,
}

pub fn load_inputs(config: &AppConfig, data: &DataArgs) -> Result<Inputs> {
    Ok(Inputs {
        expenses: load_expense_file(config, data.expenses.as_deref())?,
        budgets: load_budget_file(config, data.budgets.as_deref())?,
        today: resolve_today(data.today.as_deref())?,
    })
}
