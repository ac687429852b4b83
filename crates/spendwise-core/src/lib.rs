//! SpendWise Core Library
//!
//! Shared functionality for the SpendWise expense tracker:
//! - Rule-based priority classifier (keyword families + amount buckets)
//! - Recommendation engine with estimated savings
//! - Spending summaries, breakdowns and trends
//! - JSON/CSV loading of expenses and budgets
//! - Layered TOML configuration

pub mod classifier;
pub mod config;
pub mod error;
pub mod import;
pub mod models;
pub mod recommend;
pub mod summary;

pub use classifier::{Classification, Classifier, FeatureVector};
pub use config::AppConfig;
pub use error::{Error, Result};
pub use models::{
    Budget, ClassifiedExpense, ExpenseCandidate, PriorityLabel, RecommendationEntry, Severity,
    Timeframe,
};
pub use recommend::{RecommendationEngine, RecommendationRule, RuleId, SpendingAnalysis};
pub use summary::{SpendingStats, TrendPoint, TrendWindow};
