//! Feature extraction: keyword families and amount buckets

use regex::Regex;
use serde::Serialize;

use crate::error::Result;

/// Amounts strictly above this are "high"
pub const HIGH_AMOUNT_THRESHOLD: f64 = 5000.0;

/// Amounts from this value up to the high threshold (inclusive) are "medium"
pub const MEDIUM_AMOUNT_FLOOR: f64 = 1000.0;

/// Flags derived from one candidate expense
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FeatureVector {
    pub is_urgent: bool,
    pub is_medical: bool,
    pub is_utility: bool,
    pub is_food: bool,
    pub is_transport: bool,
    pub is_education: bool,
    pub is_luxury: bool,
    pub is_entertainment: bool,
    pub is_shopping: bool,
    pub is_dining: bool,
    pub is_subscription: bool,
    /// Narrower `emergency|urgent` test used only by the food emergency rule.
    /// Kept separate from `is_urgent`, whose word list is wider.
    pub mentions_emergency: bool,
    pub is_high_amount: bool,
    pub is_medium_amount: bool,
    pub is_low_amount: bool,
}

/// A keyword family: description pattern plus exact category names
struct KeywordFamily {
    pattern: Regex,
    categories: &'static [&'static str],
}

impl KeywordFamily {
    fn new(pattern: &str, categories: &'static [&'static str]) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            categories,
        })
    }

    /// Both inputs must already be lower-cased
    fn matches(&self, description: &str, category: &str) -> bool {
        self.pattern.is_match(description) || self.categories.contains(&category)
    }
}

/// The fixed panel of keyword families, compiled once per classifier
pub struct KeywordPanel {
    urgent: KeywordFamily,
    medical: KeywordFamily,
    utility: KeywordFamily,
    food: KeywordFamily,
    transport: KeywordFamily,
    education: KeywordFamily,
    luxury: KeywordFamily,
    entertainment: KeywordFamily,
    shopping: KeywordFamily,
    dining: KeywordFamily,
    subscription: KeywordFamily,
    emergency: Regex,
}

impl KeywordPanel {
    pub fn new() -> Result<Self> {
        Ok(Self {
            // Essential
            urgent: KeywordFamily::new("urgent|emergency|critical|immediate|asap", &[])?,
            medical: KeywordFamily::new(
                "medical|doctor|hospital|medicine|health|prescription",
                &["medical"],
            )?,
            utility: KeywordFamily::new(
                "rent|electricity|water|gas|internet|phone",
                &["utilities", "rent"],
            )?,
            food: KeywordFamily::new(
                "food|grocery|groceries|meal|breakfast|lunch|dinner",
                &["food"],
            )?,
            transport: KeywordFamily::new(
                "transport|fuel|petrol|diesel|bus|train|taxi|uber",
                &["transport"],
            )?,
            education: KeywordFamily::new(
                "education|school|college|course|books|tuition",
                &["education"],
            )?,

            // Non-essential
            luxury: KeywordFamily::new("luxury|premium|brand|designer|expensive", &[])?,
            entertainment: KeywordFamily::new(
                "entertainment|movie|game|party|club|bar|concert",
                &["entertainment"],
            )?,
            shopping: KeywordFamily::new(
                "shopping|clothes|fashion|accessories",
                &["shopping"],
            )?,
            dining: KeywordFamily::new("restaurant|cafe|coffee|dine|dining", &[])?,
            subscription: KeywordFamily::new(
                "subscription|netflix|spotify|prime|membership",
                &[],
            )?,

            emergency: Regex::new("emergency|urgent")?,
        })
    }

    /// Compute the feature vector for a candidate expense
    pub fn extract(&self, amount: f64, category: &str, description: &str) -> FeatureVector {
        let desc = description.to_lowercase();
        let cat = category.to_lowercase();
        let (is_high_amount, is_medium_amount, is_low_amount) = amount_buckets(amount);

        FeatureVector {
            is_urgent: self.urgent.matches(&desc, &cat),
            is_medical: self.medical.matches(&desc, &cat),
            is_utility: self.utility.matches(&desc, &cat),
            is_food: self.food.matches(&desc, &cat),
            is_transport: self.transport.matches(&desc, &cat),
            is_education: self.education.matches(&desc, &cat),
            is_luxury: self.luxury.matches(&desc, &cat),
            is_entertainment: self.entertainment.matches(&desc, &cat),
            is_shopping: self.shopping.matches(&desc, &cat),
            is_dining: self.dining.matches(&desc, &cat),
            is_subscription: self.subscription.matches(&desc, &cat),
            mentions_emergency: self.emergency.is_match(&desc),
            is_high_amount,
            is_medium_amount,
            is_low_amount,
        }
    }
}

/// Returns (high, medium, low). All false for NaN and non-positive amounts.
pub fn amount_buckets(amount: f64) -> (bool, bool, bool) {
    let high = amount > HIGH_AMOUNT_THRESHOLD;
    let medium = (MEDIUM_AMOUNT_FLOOR..=HIGH_AMOUNT_THRESHOLD).contains(&amount);
    let low = amount > 0.0 && amount < MEDIUM_AMOUNT_FLOOR;
    (high, medium, low)
}

/// Parse a free-text amount. The whole trimmed input must be a number.
///
/// Returns NaN otherwise ("1200 rs", "1,200"), which makes every amount bucket false.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> KeywordPanel {
        KeywordPanel::new().unwrap()
    }

    #[test]
    fn test_amount_buckets_thresholds() {
        assert_eq!(amount_buckets(5000.01), (true, false, false));
        assert_eq!(amount_buckets(5000.0), (false, true, false));
        assert_eq!(amount_buckets(1000.0), (false, true, false));
        assert_eq!(amount_buckets(999.99), (false, false, true));
    }

    #[test]
    fn test_amount_buckets_non_positive_and_nan() {
        for amount in [0.0, -1.0, -7500.0, f64::NAN] {
            assert_eq!(amount_buckets(amount), (false, false, false), "{}", amount);
        }
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1200"), 1200.0);
        assert_eq!(parse_amount("  42.5  "), 42.5);
        assert_eq!(parse_amount("-3"), -3.0);
        assert_eq!(parse_amount(".5"), 0.5);
        assert_eq!(parse_amount("2e3"), 2000.0);
        assert!(parse_amount("  42.5 rupees").is_nan());
        assert!(parse_amount("1,200").is_nan());
        assert!(parse_amount("1200 rs").is_nan());
        assert!(parse_amount("7e").is_nan());
        assert!(parse_amount("abc").is_nan());
        assert!(parse_amount("").is_nan());
        assert!(parse_amount("-").is_nan());
    }

    #[test]
    fn test_keywords_are_case_insensitive_substrings() {
        let f = panel().extract(100.0, "Misc", "URGENT Hospital visit");
        assert!(f.is_urgent);
        assert!(f.is_medical);
        assert!(f.mentions_emergency);

        // Substring match: "brand" inside "brandy", "bar" inside "barber"
        let f = panel().extract(100.0, "misc", "brandy at the barber");
        assert!(f.is_luxury);
        assert!(f.is_entertainment);
    }

    #[test]
    fn test_category_equality_checks() {
        let p = panel();
        assert!(p.extract(10.0, "Utilities", "").is_utility);
        assert!(p.extract(10.0, "rent", "").is_utility);
        assert!(!p.extract(10.0, "utility", "").is_utility);
        assert!(p.extract(10.0, "FOOD", "").is_food);
        assert!(p.extract(10.0, "shopping", "").is_shopping);
        // Dining, luxury and subscription have no category check
        assert!(!p.extract(10.0, "dining", "").is_dining);
        assert!(!p.extract(10.0, "subscription", "").is_subscription);
    }

    #[test]
    fn test_emergency_retest_is_narrower_than_urgent() {
        let f = panel().extract(6000.0, "food", "asap catering");
        assert!(f.is_urgent);
        assert!(!f.mentions_emergency);
    }

    #[test]
    fn test_empty_inputs_yield_no_keyword_flags() {
        let f = panel().extract(500.0, "", "");
        assert_eq!(
            f,
            FeatureVector {
                is_low_amount: true,
                ..Default::default()
            }
        );
    }
}
