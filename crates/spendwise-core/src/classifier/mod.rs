//! Priority classifier for expenses
//!
//! Classification is a two-stage, rule-based procedure:
//! 1. Feature extraction: keyword families matched against the lower-cased
//!    description (and exact category names), plus amount buckets
//! 2. Scoring: fixed additive weights summed into an integer score, then
//!    thresholded into one of four priority tiers
//!
//! The classifier never fails once constructed and holds no mutable state.

pub mod features;
pub mod scoring;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::models::{ExpenseCandidate, PriorityLabel};

pub use features::{amount_buckets, parse_amount, FeatureVector, KeywordPanel};
pub use scoring::{label_for_score, score};

/// Full result of classifying one expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub features: FeatureVector,
    pub score: i32,
    pub priority: PriorityLabel,
}

/// Rule-based expense classifier
pub struct Classifier {
    panel: KeywordPanel,
}

impl Classifier {
    /// Compile the keyword panel
    pub fn new() -> Result<Self> {
        Ok(Self {
            panel: KeywordPanel::new()?,
        })
    }

    /// Assign a priority label to an expense
    pub fn classify(&self, amount: f64, category: &str, description: &str) -> PriorityLabel {
        self.explain(amount, category, description).priority
    }

    /// Classify with a free-text amount (non-numeric input becomes NaN)
    pub fn classify_raw(&self, amount: &str, category: &str, description: &str) -> PriorityLabel {
        self.classify(parse_amount(amount), category, description)
    }

    pub fn classify_candidate(&self, candidate: &ExpenseCandidate) -> PriorityLabel {
        self.classify(candidate.amount, &candidate.category, &candidate.description)
    }

    /// Classify and return the intermediate features and score
    pub fn explain(&self, amount: f64, category: &str, description: &str) -> Classification {
        let features = self.panel.extract(amount, category, description);
        let score = score(&features);
        let priority = label_for_score(score);

        debug!(
            amount,
            category,
            score,
            priority = priority.as_str(),
            "Classified expense"
        );

        Classification {
            features,
            score,
            priority,
        }
    }
}
