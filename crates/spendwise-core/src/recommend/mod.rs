//! Recommendation Engine - advisory messages with estimated savings
//!
//! The engine analyzes the reference month of a user's classified expense
//! history and runs an ordered list of rules over the result. Each rule may
//! contribute one entry; the list is capped at five.
//!
//! ## Built-in Rules (in output order)
//!
//! - **Top Category** - one category dominates the month's spending
//! - **Least Important Spending** - money going to least-important items
//! - **Budget Overrun** - month total above the monthly budget
//! - **50-30-20 Split** - needs/wants/savings guidance (always)
//! - **Saving Tips** - fixed everyday tips (always)
//!
//! With fewer than five expenses the engine returns fixed onboarding tips.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use spendwise_core::recommend::RecommendationEngine;
//!
//! let engine = RecommendationEngine::new();
//! let entries = engine.recommend(&expenses, &budgets, today);
//! ```

pub mod analysis;
pub mod rules;

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{Budget, ClassifiedExpense, RecommendationEntry};

pub use analysis::{SpendingAnalysis, TopCategory};
pub use rules::{
    starter_recommendations, BudgetOverrunRule, LeastImportantRule, RecommendationRule, RuleId,
    SavingTipsRule, SavingsSplitRule, TopCategoryRule,
};

/// Below this many expenses the engine returns onboarding tips only
pub const COLD_START_MIN_EXPENSES: usize = 5;

/// Maximum number of entries returned
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Currency symbol used in message text unless configured otherwise
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Inputs shared by every rule for one engine run
pub struct RecommendationContext<'a> {
    pub analysis: &'a SpendingAnalysis,
    pub budgets: &'a [Budget],
    pub currency_symbol: &'a str,
}

/// Runs the registered rules in order and collects their entries
pub struct RecommendationEngine {
    rules: Vec<Box<dyn RecommendationRule>>,
    currency_symbol: String,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    /// Create an engine with the built-in rules
    pub fn new() -> Self {
        let mut engine = Self {
            rules: vec![],
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        };

        engine.register(Box::new(TopCategoryRule));
        engine.register(Box::new(LeastImportantRule));
        engine.register(Box::new(BudgetOverrunRule));
        engine.register(Box::new(SavingsSplitRule));
        engine.register(Box::new(SavingTipsRule));

        engine
    }

    /// Use a different currency symbol in message text
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Append a rule after the existing ones
    pub fn register(&mut self, rule: Box<dyn RecommendationRule>) {
        self.rules.push(rule);
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// Build up to five recommendations for the month containing `today`
    pub fn recommend(
        &self,
        expenses: &[ClassifiedExpense],
        budgets: &[Budget],
        today: NaiveDate,
    ) -> Vec<RecommendationEntry> {
        if expenses.len() < COLD_START_MIN_EXPENSES {
            debug!(
                count = expenses.len(),
                "Not enough expenses for analysis, returning starter tips"
            );
            return starter_recommendations();
        }

        let analysis = SpendingAnalysis::for_month(expenses, today);
        let ctx = RecommendationContext {
            analysis: &analysis,
            budgets,
            currency_symbol: &self.currency_symbol,
        };

        let mut entries = Vec::new();
        for rule in &self.rules {
            match rule.evaluate(&ctx) {
                Some(entry) => {
                    debug!(
                        rule = rule.id().as_str(),
                        name = rule.name(),
                        savings = entry.savings,
                        "Rule fired"
                    );
                    entries.push(entry);
                }
                None => debug!(
                    rule = rule.id().as_str(),
                    name = rule.name(),
                    "Rule did not apply"
                ),
            }
        }

        entries.truncate(MAX_RECOMMENDATIONS);
        entries
    }

    /// Ids of the registered rules, in evaluation order
    pub fn rule_ids(&self) -> Vec<RuleId> {
        self.rules.iter().map(|r| r.id()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PriorityLabel, Severity, Timeframe};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn expense(
        day: u32,
        category: &str,
        amount: f64,
        priority: PriorityLabel,
    ) -> ClassifiedExpense {
        ClassifiedExpense {
            amount,
            category: category.to_string(),
            date: NaiveDate::from_ymd_opt(2026, 10, day).unwrap(),
            priority,
            description: None,
        }
    }

    fn history() -> Vec<ClassifiedExpense> {
        vec![
            expense(1, "rent", 12000.0, PriorityLabel::MostImportant),
            expense(3, "food", 2500.0, PriorityLabel::LessImportant),
            expense(5, "entertainment", 800.0, PriorityLabel::LeastImportant),
            expense(9, "transport", 1500.0, PriorityLabel::LessImportant),
            expense(12, "shopping", 1200.0, PriorityLabel::LeastImportant),
        ]
    }

    fn monthly_budget(amount: f64) -> Budget {
        Budget {
            amount,
            timeframe: Timeframe::Monthly,
            category: "all".to_string(),
        }
    }

    #[test]
    fn test_engine_registers_rules_in_order() {
        let engine = RecommendationEngine::new();
        assert_eq!(
            engine.rule_ids(),
            vec![
                RuleId::TopCategory,
                RuleId::LeastImportant,
                RuleId::BudgetOverrun,
                RuleId::SavingsSplit,
                RuleId::SavingTips,
            ]
        );
    }

    #[test]
    fn test_cold_start_ignores_budgets() {
        let engine = RecommendationEngine::new();
        let few = &history()[..4];
        let entries = engine.recommend(few, &[monthly_budget(1.0)], today());
        assert_eq!(entries, starter_recommendations());
        assert!(entries.iter().all(|e| e.savings == 0.0));
    }

    #[test]
    fn test_all_rules_fire() {
        let engine = RecommendationEngine::new();
        let entries = engine.recommend(&history(), &[monthly_budget(15000.0)], today());

        assert_eq!(entries.len(), 5);
        let severities: Vec<Severity> = entries.iter().map(|e| e.severity).collect();
        assert_eq!(
            severities,
            vec![
                Severity::Warning,
                Severity::Success,
                Severity::Danger,
                Severity::Info,
                Severity::Info,
            ]
        );

        // total 18000; rent 12000 is 66.7%
        assert!((entries[0].savings - 2400.0).abs() < 1e-9);
        assert!(entries[0].text.contains("'rent'"));
        assert!(entries[0].text.contains("₹12000.00"));
        // least important 2000 -> half
        assert_eq!(entries[1].savings, 1000.0);
        // 18000 - 15000
        assert_eq!(entries[2].savings, 3000.0);
        assert!((entries[3].savings - 3600.0).abs() < 1e-9);
        assert_eq!(entries[4].savings, 4000.0);
    }

    #[test]
    fn test_conditional_entries_absent_shift_order() {
        let engine = RecommendationEngine::new();
        let balanced = vec![
            expense(1, "a", 100.0, PriorityLabel::Important),
            expense(2, "b", 100.0, PriorityLabel::Important),
            expense(3, "c", 100.0, PriorityLabel::Important),
            expense(4, "d", 100.0, PriorityLabel::Important),
            expense(5, "e", 100.0, PriorityLabel::Important),
        ];
        let entries = engine.recommend(&balanced, &[], today());
        assert_eq!(entries.len(), 2);
        assert!(entries[0].text.starts_with("Follow the 50-30-20 rule"));
        assert_eq!(entries[1].savings, 4000.0);
    }

    #[test]
    fn test_old_history_only() {
        let engine = RecommendationEngine::new();
        let old: Vec<ClassifiedExpense> = history()
            .into_iter()
            .map(|mut e| {
                e.date = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
                e
            })
            .collect();
        let entries = engine.recommend(&old, &[monthly_budget(0.0)], today());
        // No monthly spending: no top-category, least-important or overrun entries
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].savings, 0.0);
    }

    #[test]
    fn test_output_is_capped() {
        struct Extra;
        impl RecommendationRule for Extra {
            fn id(&self) -> RuleId {
                RuleId::SavingTips
            }
            fn name(&self) -> &'static str {
                "Extra"
            }
            fn evaluate(&self, _ctx: &RecommendationContext<'_>) -> Option<RecommendationEntry> {
                Some(RecommendationEntry::new("+", "extra", 1.0, Severity::Info))
            }
        }

        let mut engine = RecommendationEngine::new();
        engine.register(Box::new(Extra));
        let entries = engine.recommend(&history(), &[monthly_budget(15000.0)], today());
        assert_eq!(entries.len(), MAX_RECOMMENDATIONS);
        assert!(entries.iter().all(|e| e.text != "extra"));
    }

    #[test]
    fn test_recommend_is_repeatable() {
        let engine = RecommendationEngine::new().with_currency_symbol("$");
        let budgets = vec![monthly_budget(10000.0)];
        let first = engine.recommend(&history(), &budgets, today());
        let second = engine.recommend(&history(), &budgets, today());
        assert_eq!(first, second);
        assert!(first[0].text.contains("$12000.00"));
    }
}
