//! Spending summaries: dashboard statistics, breakdowns and trends

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{first_budget_for, Budget, ClassifiedExpense, PriorityLabel, Timeframe};
use crate::recommend::analysis::{category_totals, percentage_of};

/// Headline numbers for a user's expense history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingStats {
    /// All-time total
    pub total_spent: f64,
    /// Total for the month containing the reference date
    pub monthly_spent: f64,
    pub transaction_count: usize,
    /// Monthly budget minus monthly spending; `None` without a monthly budget
    pub budget_left: Option<f64>,
}

impl SpendingStats {
    pub fn compute(expenses: &[ClassifiedExpense], budgets: &[Budget], today: NaiveDate) -> Self {
        let total_spent = expenses.iter().map(|e| e.amount).sum();
        let monthly_spent: f64 = expenses
            .iter()
            .filter(|e| e.in_month_of(today))
            .map(|e| e.amount)
            .sum();
        let budget_left =
            first_budget_for(budgets, Timeframe::Monthly).map(|b| b.amount - monthly_spent);

        Self {
            total_spent,
            monthly_spent,
            transaction_count: expenses.len(),
            budget_left,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub amount: f64,
    pub percentage: f64,
}

/// Totals per category in first-seen order
pub fn by_category(expenses: &[ClassifiedExpense]) -> Vec<CategoryShare> {
    let totals = category_totals(expenses);
    let grand_total: f64 = totals.iter().map(|(_, amount)| amount).sum();

    totals
        .into_iter()
        .map(|(category, amount)| CategoryShare {
            percentage: percentage_of(amount, grand_total),
            category,
            amount,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriorityShare {
    pub priority: PriorityLabel,
    pub amount: f64,
    pub count: usize,
}

/// Totals per priority tier, most important first. Every tier is present.
pub fn by_priority(expenses: &[ClassifiedExpense]) -> Vec<PriorityShare> {
    PriorityLabel::all()
        .iter()
        .map(|&priority| {
            let matching = expenses.iter().filter(|e| e.priority == priority);
            PriorityShare {
                priority,
                amount: matching.clone().map(|e| e.amount).sum(),
                count: matching.count(),
            }
        })
        .collect()
}

/// Window for a spending trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendWindow {
    /// Daily totals for the last 7 days
    Weekly,
    /// Daily totals for the last 30 days
    Monthly,
    /// Monthly totals for the last 12 months
    Yearly,
}

impl TrendWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl std::str::FromStr for TrendWindow {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weekly" | "week" => Ok(Self::Weekly),
            "monthly" | "month" => Ok(Self::Monthly),
            "yearly" | "year" => Ok(Self::Yearly),
            _ => Err(format!(
                "Unknown trend window: {}. Available: weekly, monthly, yearly",
                s
            )),
        }
    }
}

impl std::fmt::Display for TrendWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One bucket of a trend. For yearly trends `start` is the first of the month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub start: NaiveDate,
    pub total: f64,
}

/// Spending totals per bucket ending at `today`, oldest first
pub fn spending_trend(
    expenses: &[ClassifiedExpense],
    window: TrendWindow,
    today: NaiveDate,
) -> Vec<TrendPoint> {
    match window {
        TrendWindow::Weekly => daily_trend(expenses, 7, today),
        TrendWindow::Monthly => daily_trend(expenses, 30, today),
        TrendWindow::Yearly => monthly_trend(expenses, 12, today),
    }
}

fn daily_trend(expenses: &[ClassifiedExpense], days: i64, today: NaiveDate) -> Vec<TrendPoint> {
    (0..days)
        .rev()
        .map(|offset| {
            let day = today - Duration::days(offset);
            TrendPoint {
                start: day,
                total: expenses
                    .iter()
                    .filter(|e| e.date == day)
                    .map(|e| e.amount)
                    .sum(),
            }
        })
        .collect()
}

fn monthly_trend(expenses: &[ClassifiedExpense], months: u32, today: NaiveDate) -> Vec<TrendPoint> {
    (0..months)
        .rev()
        .filter_map(|offset| months_back(today, offset))
        .map(|start| TrendPoint {
            start,
            total: expenses
                .iter()
                .filter(|e| e.in_month_of(start))
                .map(|e| e.amount)
                .sum(),
        })
        .collect()
}

/// First day of the month `offset` months before the month of `date`
fn months_back(date: NaiveDate, offset: u32) -> Option<NaiveDate> {
    let index = date.year() * 12 + date.month0() as i32 - offset as i32;
    NaiveDate::from_ymd_opt(index.div_euclid(12), index.rem_euclid(12) as u32 + 1, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(
        date: (i32, u32, u32),
        category: &str,
        amount: f64,
        priority: PriorityLabel,
    ) -> ClassifiedExpense {
        ClassifiedExpense {
            amount,
            category: category.to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            priority,
            description: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
    }

    fn sample() -> Vec<ClassifiedExpense> {
        vec![
            expense((2026, 3, 10), "food", 300.0, PriorityLabel::LessImportant),
            expense((2026, 3, 4), "rent", 9000.0, PriorityLabel::MostImportant),
            expense((2026, 2, 27), "food", 200.0, PriorityLabel::LessImportant),
            expense((2025, 4, 15), "movies", 500.0, PriorityLabel::LeastImportant),
        ]
    }

    #[test]
    fn test_stats_with_budget() {
        let budgets = vec![Budget {
            amount: 10000.0,
            timeframe: Timeframe::Monthly,
            category: "all".to_string(),
        }];
        let stats = SpendingStats::compute(&sample(), &budgets, today());
        assert_eq!(stats.total_spent, 10000.0);
        assert_eq!(stats.monthly_spent, 9300.0);
        assert_eq!(stats.transaction_count, 4);
        assert_eq!(stats.budget_left, Some(700.0));
    }

    #[test]
    fn test_stats_without_monthly_budget() {
        let stats = SpendingStats::compute(&sample(), &[], today());
        assert_eq!(stats.budget_left, None);
    }

    #[test]
    fn test_by_category() {
        let shares = by_category(&sample());
        let names: Vec<&str> = shares.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(names, vec!["food", "rent", "movies"]);
        assert_eq!(shares[0].amount, 500.0);
        assert!((shares[1].percentage - 90.0).abs() < 1e-9);
        assert!(by_category(&[]).is_empty());
    }

    #[test]
    fn test_by_priority_covers_every_tier() {
        let shares = by_priority(&sample());
        assert_eq!(shares.len(), 4);
        assert_eq!(shares[0].priority, PriorityLabel::MostImportant);
        assert_eq!(shares[0].amount, 9000.0);
        assert_eq!(shares[1].count, 0);
        assert_eq!(shares[2].count, 2);
        assert_eq!(shares[3].amount, 500.0);
    }

    #[test]
    fn test_weekly_trend() {
        let trend = spending_trend(&sample(), TrendWindow::Weekly, today());
        assert_eq!(trend.len(), 7);
        assert_eq!(trend[0].start, NaiveDate::from_ymd_opt(2026, 3, 4).unwrap());
        assert_eq!(trend[0].total, 9000.0);
        assert_eq!(trend[6].start, today());
        assert_eq!(trend[6].total, 300.0);
    }

    #[test]
    fn test_monthly_trend_spans_30_days() {
        let trend = spending_trend(&sample(), TrendWindow::Monthly, today());
        assert_eq!(trend.len(), 30);
        let total: f64 = trend.iter().map(|p| p.total).sum();
        assert_eq!(total, 9500.0);
    }

    #[test]
    fn test_yearly_trend_crosses_year_boundary() {
        let trend = spending_trend(&sample(), TrendWindow::Yearly, today());
        assert_eq!(trend.len(), 12);
        assert_eq!(trend[0].start, NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
        assert_eq!(trend[0].total, 500.0);
        assert_eq!(trend[10].start, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
        assert_eq!(trend[10].total, 200.0);
        assert_eq!(trend[11].total, 9300.0);
    }

    #[test]
    fn test_trend_window_from_str() {
        assert_eq!("Weekly".parse::<TrendWindow>().unwrap(), TrendWindow::Weekly);
        assert_eq!("year".parse::<TrendWindow>().unwrap(), TrendWindow::Yearly);
        assert!("daily".parse::<TrendWindow>().is_err());
    }
}
