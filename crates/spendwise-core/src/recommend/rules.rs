//! Built-in recommendation rules
//!
//! Each rule looks at the month's analysis and may emit one entry. The engine
//! runs them in registration order; see [`super::RecommendationEngine::new`].

use serde::{Deserialize, Serialize};

use crate::models::{first_budget_for, RecommendationEntry, Severity, Timeframe};

use super::RecommendationContext;

/// Share of monthly spending above which the top category is flagged
pub const TOP_CATEGORY_SHARE_THRESHOLD: f64 = 30.0;
/// Suggested cut for the top category
pub const TOP_CATEGORY_CUT: f64 = 0.2;
/// Suggested cut for least-important spending
pub const LEAST_IMPORTANT_CUT: f64 = 0.5;
/// Notional annual return on money redirected to investments
pub const ANNUAL_INVESTMENT_RETURN: f64 = 0.12;
/// Savings estimate attached to the static tips entry
pub const SAVING_TIPS_ESTIMATE: f64 = 4000.0;

/// Identifier of a recommendation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    TopCategory,
    LeastImportant,
    BudgetOverrun,
    SavingsSplit,
    SavingTips,
}

impl RuleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TopCategory => "top_category",
            Self::LeastImportant => "least_important",
            Self::BudgetOverrun => "budget_overrun",
            Self::SavingsSplit => "savings_split",
            Self::SavingTips => "saving_tips",
        }
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single advisory rule
pub trait RecommendationRule: Send + Sync {
    fn id(&self) -> RuleId;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Produce an entry, or `None` when the rule does not apply
    fn evaluate(&self, ctx: &RecommendationContext<'_>) -> Option<RecommendationEntry>;
}

/// Flags a category taking more than 30% of the month's spending
pub struct TopCategoryRule;

impl RecommendationRule for TopCategoryRule {
    fn id(&self) -> RuleId {
        RuleId::TopCategory
    }

    fn name(&self) -> &'static str {
        "Top Category"
    }

    fn evaluate(&self, ctx: &RecommendationContext<'_>) -> Option<RecommendationEntry> {
        let top = &ctx.analysis.top_category;
        if top.percentage <= TOP_CATEGORY_SHARE_THRESHOLD {
            return None;
        }

        let savings = top.amount * TOP_CATEGORY_CUT;
        let cur = ctx.currency_symbol;
        Some(RecommendationEntry::new(
            "🎯",
            format!(
                "Your '{}' expenses are {:.1}% of total spending ({}{:.2}). Reduce by 20% to save {}{:.2} monthly.",
                top.name, top.percentage, cur, top.amount, cur, savings
            ),
            savings,
            Severity::Warning,
        ))
    }
}

/// Suggests halving least-important spending and investing the difference
pub struct LeastImportantRule;

impl RecommendationRule for LeastImportantRule {
    fn id(&self) -> RuleId {
        RuleId::LeastImportant
    }

    fn name(&self) -> &'static str {
        "Least Important Spending"
    }

    fn evaluate(&self, ctx: &RecommendationContext<'_>) -> Option<RecommendationEntry> {
        let total = ctx.analysis.least_important_total;
        if total <= 0.0 {
            return None;
        }

        let savings = total * LEAST_IMPORTANT_CUT;
        let annual_gain = savings * ANNUAL_INVESTMENT_RETURN;
        let cur = ctx.currency_symbol;
        Some(RecommendationEntry::new(
            "💡",
            format!(
                "You're spending {}{:.2} on least important items. Cut 50% and invest in mutual funds (12% annual returns = {}{:.2} yearly gain).",
                cur, total, cur, annual_gain
            ),
            savings,
            Severity::Success,
        ))
    }
}

/// Reports how far the month's spending exceeds the monthly budget
pub struct BudgetOverrunRule;

impl RecommendationRule for BudgetOverrunRule {
    fn id(&self) -> RuleId {
        RuleId::BudgetOverrun
    }

    fn name(&self) -> &'static str {
        "Budget Overrun"
    }

    fn evaluate(&self, ctx: &RecommendationContext<'_>) -> Option<RecommendationEntry> {
        let budget = first_budget_for(ctx.budgets, Timeframe::Monthly)?;
        let monthly_total = ctx.analysis.monthly_total;
        if monthly_total <= budget.amount {
            return None;
        }

        let overspend = monthly_total - budget.amount;
        Some(RecommendationEntry::new(
            "⚠️",
            format!(
                "You've exceeded your monthly budget by {}{:.2}. Focus on reducing '{}' expenses and avoid unnecessary shopping.",
                ctx.currency_symbol, overspend, ctx.analysis.top_category.name
            ),
            overspend,
            Severity::Danger,
        ))
    }
}

/// 50/30/20 needs/wants/savings split of the monthly total
pub struct SavingsSplitRule;

impl RecommendationRule for SavingsSplitRule {
    fn id(&self) -> RuleId {
        RuleId::SavingsSplit
    }

    fn name(&self) -> &'static str {
        "50-30-20 Split"
    }

    fn evaluate(&self, ctx: &RecommendationContext<'_>) -> Option<RecommendationEntry> {
        let total = ctx.analysis.monthly_total;
        let cur = ctx.currency_symbol;
        let savings = total * 0.2;
        Some(RecommendationEntry::new(
            "💰",
            format!(
                "Follow the 50-30-20 rule: 50% needs ({}{:.2}), 30% wants ({}{:.2}), 20% savings ({}{:.2}). Invest savings in SIP/PPF.",
                cur,
                total * 0.5,
                cur,
                total * 0.3,
                cur,
                savings
            ),
            savings,
            Severity::Info,
        ))
    }
}

/// Fixed list of everyday saving habits
pub struct SavingTipsRule;

impl RecommendationRule for SavingTipsRule {
    fn id(&self) -> RuleId {
        RuleId::SavingTips
    }

    fn name(&self) -> &'static str {
        "Saving Tips"
    }

    fn evaluate(&self, ctx: &RecommendationContext<'_>) -> Option<RecommendationEntry> {
        Some(RecommendationEntry::new(
            "📝",
            format!(
                "Smart saving tips: 1) Use cashback apps (save 5-10%), 2) Cook at home 5 days/week (save {}4000/month), 3) Cancel unused subscriptions, 4) Buy groceries in bulk (save 15%), 5) Use public transport 2x/week.",
                ctx.currency_symbol
            ),
            SAVING_TIPS_ESTIMATE,
            Severity::Info,
        ))
    }
}

/// Onboarding entries returned while there is too little history to analyze
pub fn starter_recommendations() -> Vec<RecommendationEntry> {
    vec![
        RecommendationEntry::new(
            "👋",
            "Welcome! Start by tracking all expenses for 2-3 weeks. This helps me provide personalized recommendations to optimize your spending.",
            0.0,
            Severity::Info,
        ),
        RecommendationEntry::new(
            "🎯",
            "Set weekly and monthly budgets for different categories. Aim to stay within 90% of your budget to build a savings cushion.",
            0.0,
            Severity::Info,
        ),
        RecommendationEntry::new(
            "💡",
            "Pro tip: Categorize expenses honestly. Each expense is classified by priority automatically, which shows where to cut costs.",
            0.0,
            Severity::Success,
        ),
    ]
}
