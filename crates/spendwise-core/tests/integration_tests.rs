//! Integration tests for spendwise-core
//!
//! These tests exercise the full import → classify → recommend workflow.

use std::io::Write;

use chrono::NaiveDate;
use spendwise_core::{
    import::{import_candidates, load_budgets, load_expenses, write_expenses_json},
    summary::{by_priority, SpendingStats},
    Classifier, PriorityLabel, RecommendationEngine, Severity,
};

/// Raw October 2026 expenses as a user would enter them.
/// One September row is included to check month filtering.
fn raw_expenses_csv() -> &'static str {
    r#"date,amount,category,description
2026-10-01,15000,rent,Monthly rent
2026-10-02,6500,medical,Hospital bill
2026-10-03,2400,transport,Fuel for the month
2026-10-05,850,entertainment,Concert tickets
2026-10-07,350,other,Spotify subscription
2026-10-08,1200,shopping,New clothes
2026-09-28,999,food,Groceries"#
}

fn budgets_json() -> &'static str {
    r#"[
        {"amount": 2000, "timeframe": "weekly", "category": "all"},
        {"amount": 25000, "timeframe": "monthly", "category": "all"}
    ]"#
}

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

// =============================================================================
// Import Workflow Tests
// =============================================================================

#[test]
fn test_import_classifies_every_row() {
    let raw = write_temp(".csv", raw_expenses_csv());
    let classifier = Classifier::new().expect("Failed to build classifier");

    let expenses = import_candidates(raw.path(), &classifier).expect("Import failed");
    assert_eq!(expenses.len(), 7);

    let priorities: Vec<PriorityLabel> = expenses.iter().map(|e| e.priority).collect();
    assert_eq!(
        priorities,
        vec![
            // utility+high 4, utility 3, high bonus 2
            PriorityLabel::MostImportant,
            // medical+high 5, medical 3, high bonus 2
            PriorityLabel::MostImportant,
            // transport+medium 2
            PriorityLabel::LessImportant,
            // entertainment -2
            PriorityLabel::LeastImportant,
            // subscription+low -1
            PriorityLabel::LeastImportant,
            // shopping -2
            PriorityLabel::LeastImportant,
            // food 2
            PriorityLabel::LessImportant,
        ]
    );
}

#[test]
fn test_import_then_recommend() {
    let raw = write_temp(".csv", raw_expenses_csv());
    let budgets_file = write_temp(".json", budgets_json());
    let classifier = Classifier::new().unwrap();

    // Round-trip through the JSON file format the CLI writes
    let imported = import_candidates(raw.path(), &classifier).unwrap();
    let mut classified = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write_expenses_json(&mut classified, &imported).unwrap();
    classified.flush().unwrap();

    let expenses = load_expenses(classified.path()).expect("Failed to load expenses");
    let budgets = load_budgets(budgets_file.path()).expect("Failed to load budgets");
    assert_eq!(expenses, imported);

    let engine = RecommendationEngine::new();
    let entries = engine.recommend(&expenses, &budgets, today());

    // October total: 15000 + 6500 + 2400 + 850 + 350 + 1200 = 26300
    // rent is 57% -> top-category alert; least important 2400; over budget by 1300
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[0].severity, Severity::Warning);
    assert!((entries[0].savings - 3000.0).abs() < 1e-9);
    assert_eq!(entries[1].severity, Severity::Success);
    assert!((entries[1].savings - 1200.0).abs() < 1e-9);
    assert_eq!(entries[2].severity, Severity::Danger);
    assert!((entries[2].savings - 1300.0).abs() < 1e-9);
    assert!((entries[3].savings - 5260.0).abs() < 1e-9);
    assert_eq!(entries[4].savings, 4000.0);
}

#[test]
fn test_summary_over_imported_expenses() {
    let raw = write_temp(".csv", raw_expenses_csv());
    let budgets_file = write_temp(".json", budgets_json());
    let classifier = Classifier::new().unwrap();

    let expenses = import_candidates(raw.path(), &classifier).unwrap();
    let budgets = load_budgets(budgets_file.path()).unwrap();

    let stats = SpendingStats::compute(&expenses, &budgets, today());
    assert_eq!(stats.transaction_count, 7);
    assert!((stats.total_spent - 27299.0).abs() < 1e-9);
    assert!((stats.monthly_spent - 26300.0).abs() < 1e-9);
    assert!((stats.budget_left.unwrap() + 1300.0).abs() < 1e-9);

    let shares = by_priority(&expenses);
    assert_eq!(shares[0].count, 2);
    assert_eq!(shares[3].count, 3);
}

#[test]
fn test_cold_start_with_short_history() {
    let raw = write_temp(
        ".csv",
        "date,amount,category,description\n2026-10-01,100,food,lunch\n",
    );
    let budgets_file = write_temp(".json", budgets_json());
    let classifier = Classifier::new().unwrap();

    let expenses = import_candidates(raw.path(), &classifier).unwrap();
    let budgets = load_budgets(budgets_file.path()).unwrap();

    let entries = RecommendationEngine::new().recommend(&expenses, &budgets, today());
    assert_eq!(entries.len(), 3);
    assert!(entries.iter().all(|e| e.savings == 0.0));
}

#[test]
fn test_unsupported_extension_is_rejected() {
    let file = write_temp(".txt", "[]");
    let err = load_expenses(file.path()).unwrap_err();
    assert!(err.to_string().contains("Unsupported file format"));
}
