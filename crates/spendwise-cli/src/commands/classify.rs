//! Classification command implementation

use anyhow::Result;
use spendwise_core::classifier::{parse_amount, FeatureVector};
use spendwise_core::{Classifier, PriorityLabel};

pub fn cmd_classify(
    amount: &str,
    category: &str,
    description: &str,
    explain: bool,
    json: bool,
) -> Result<()> {
    let classifier = Classifier::new()?;
    let value = parse_amount(amount);
    let result = classifier.explain(value, category, description);

    if json {
        let output = if explain {
            serde_json::to_value(result)?
        } else {
            serde_json::json!({ "priority": result.priority })
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{} {}",
        priority_icon(result.priority),
        result.priority.display_name().to_uppercase()
    );

    if explain {
        println!("   ─────────────────────────────────────────────");
        if value.is_nan() {
            println!("   Amount: '{}' is not a number (keywords only)", amount);
        }
        let matched = matched_features(&result.features);
        if matched.is_empty() {
            println!("   Features: none");
        } else {
            println!("   Features: {}", matched.join(", "));
        }
        println!("   Score: {}", result.score);
    }

    Ok(())
}

pub fn priority_icon(priority: PriorityLabel) -> &'static str {
    match priority {
        PriorityLabel::MostImportant => "🔴",
        PriorityLabel::Important => "🟠",
        PriorityLabel::LessImportant => "🟡",
        PriorityLabel::LeastImportant => "🟢",
    }
}

/// Names of the flags that are set
pub fn matched_features(f: &FeatureVector) -> Vec<&'static str> {
    [
        (f.is_urgent, "urgent"),
        (f.is_medical, "medical"),
        (f.is_utility, "utility"),
        (f.is_food, "food"),
        (f.is_transport, "transport"),
        (f.is_education, "education"),
        (f.is_luxury, "luxury"),
        (f.is_entertainment, "entertainment"),
        (f.is_shopping, "shopping"),
        (f.is_dining, "dining"),
        (f.is_subscription, "subscription"),
        (f.mentions_emergency, "emergency"),
        (f.is_high_amount, "high amount"),
        (f.is_medium_amount, "medium amount"),
        (f.is_low_amount, "low amount"),
    ]
    .into_iter()
    .filter_map(|(set, name)| set.then_some(name))
    .collect()
}
