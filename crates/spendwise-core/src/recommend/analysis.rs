//! Current-month spending analysis feeding the recommendation rules

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{ClassifiedExpense, PriorityLabel};

/// Name reported for the top category when the month has no expenses
pub const NO_CATEGORY: &str = "Other";

/// The category with the largest share of the month's spending
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopCategory {
    pub name: String,
    pub amount: f64,
    /// Share of the monthly total, 0-100. Zero when the monthly total is zero.
    pub percentage: f64,
}

/// Aggregates over the expenses dated in the reference month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingAnalysis {
    pub month_start: NaiveDate,
    pub monthly_total: f64,
    pub monthly_count: usize,
    /// Per-category totals in first-seen order
    pub by_category: Vec<(String, f64)>,
    pub top_category: TopCategory,
    /// Sum of least-important expenses this month
    pub least_important_total: f64,
}

impl SpendingAnalysis {
    /// Analyze the calendar month containing `today`
    pub fn for_month(expenses: &[ClassifiedExpense], today: NaiveDate) -> Self {
        let monthly: Vec<&ClassifiedExpense> =
            expenses.iter().filter(|e| e.in_month_of(today)).collect();

        let monthly_total: f64 = monthly.iter().map(|e| e.amount).sum();
        let by_category = category_totals(monthly.iter().copied());

        let least_important_total = monthly
            .iter()
            .filter(|e| e.priority == PriorityLabel::LeastImportant)
            .map(|e| e.amount)
            .sum();

        let top_category = top_category(&by_category, monthly_total);

        Self {
            month_start: month_start(today),
            monthly_total,
            monthly_count: monthly.len(),
            by_category,
            top_category,
            least_important_total,
        }
    }
}

/// First day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    use chrono::Datelike;
    date.with_day(1).unwrap_or(date)
}

/// Sum amounts per category, keeping the order in which categories first appear
pub fn category_totals<'a, I>(expenses: I) -> Vec<(String, f64)>
where
    I: IntoIterator<Item = &'a ClassifiedExpense>,
{
    let mut totals: Vec<(String, f64)> = Vec::new();
    for expense in expenses {
        match totals.iter_mut().find(|(name, _)| *name == expense.category) {
            Some((_, total)) => *total += expense.amount,
            None => totals.push((expense.category.clone(), expense.amount)),
        }
    }
    totals
}

/// Largest category; on ties the category seen first wins
fn top_category(by_category: &[(String, f64)], monthly_total: f64) -> TopCategory {
    let mut top: Option<&(String, f64)> = None;
    for entry in by_category {
        match top {
            Some((_, best)) if entry.1 <= *best => {}
            _ => top = Some(entry),
        }
    }

    let (name, amount) = top
        .map(|(name, amount)| (name.clone(), *amount))
        .unwrap_or_else(|| (NO_CATEGORY.to_string(), 0.0));

    TopCategory {
        name,
        amount,
        percentage: percentage_of(amount, monthly_total),
    }
}

/// `part / whole * 100`, defined as 0 when `whole` is zero
pub fn percentage_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part / whole * 100.0
    }
}
