//! Additive scoring over a feature vector
//!
//! Weights and thresholds are fixed: previously classified data was labelled
//! with exactly these values.

use crate::models::PriorityLabel;

use super::features::FeatureVector;

pub const MOST_IMPORTANT_MIN_SCORE: i32 = 9;
pub const IMPORTANT_MIN_SCORE: i32 = 5;
pub const LESS_IMPORTANT_MIN_SCORE: i32 = 2;

/// Sum every rule that fires. Rules are independent, so order does not matter.
pub fn score(f: &FeatureVector) -> i32 {
    let mut score = 0;

    // Strong signals
    if f.is_urgent {
        score += 5;
    }
    if f.is_medical && f.is_high_amount {
        score += 5;
    }
    if f.is_utility && f.is_high_amount {
        score += 4;
    }
    if f.is_food && f.is_high_amount && f.mentions_emergency {
        score += 4;
    }

    // Essential categories
    if f.is_medical {
        score += 3;
    }
    if f.is_utility {
        score += 3;
    }
    if f.is_transport && f.is_medium_amount {
        score += 2;
    }
    if f.is_education {
        score += 3;
    }
    if f.is_food {
        score += 2;
    }
    if f.is_high_amount && (f.is_utility || f.is_medical || f.is_education) {
        score += 2;
    }

    // Discretionary spending
    if f.is_luxury {
        score -= 3;
    }
    if f.is_entertainment {
        score -= 2;
    }
    if f.is_shopping && !f.is_urgent {
        score -= 2;
    }
    if f.is_dining {
        score -= 1;
    }
    if f.is_subscription && f.is_low_amount {
        score -= 1;
    }

    score
}

/// Map a (possibly negative) score to its tier
pub fn label_for_score(score: i32) -> PriorityLabel {
    if score >= MOST_IMPORTANT_MIN_SCORE {
        PriorityLabel::MostImportant
    } else if score >= IMPORTANT_MIN_SCORE {
        PriorityLabel::Important
    } else if score >= LESS_IMPORTANT_MIN_SCORE {
        PriorityLabel::LessImportant
    } else {
        PriorityLabel::LeastImportant
    }
}
