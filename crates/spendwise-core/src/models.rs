//! Domain models for SpendWise

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Importance tier assigned to an expense by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityLabel {
    MostImportant,
    Important,
    LessImportant,
    LeastImportant,
}

impl PriorityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MostImportant => "most_important",
            Self::Important => "important",
            Self::LessImportant => "less_important",
            Self::LeastImportant => "least_important",
        }
    }

    /// All labels, most important first
    pub fn all() -> &'static [PriorityLabel] {
        &[
            Self::MostImportant,
            Self::Important,
            Self::LessImportant,
            Self::LeastImportant,
        ]
    }

    /// Human-readable form ("most important")
    pub fn display_name(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl std::str::FromStr for PriorityLabel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace(' ', "_").as_str() {
            "most_important" => Ok(Self::MostImportant),
            "important" => Ok(Self::Important),
            "less_important" => Ok(Self::LessImportant),
            "least_important" => Ok(Self::LeastImportant),
            _ => Err(format!("Unknown priority: {}", s)),
        }
    }
}

impl std::fmt::Display for PriorityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An expense about to be classified (not yet dated or persisted)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseCandidate {
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub description: String,
}

/// A historical expense with the priority the classifier attached at entry time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedExpense {
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    pub priority: PriorityLabel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ClassifiedExpense {
    /// True when the expense falls in the same calendar month and year as `date`
    pub fn in_month_of(&self, date: NaiveDate) -> bool {
        use chrono::Datelike;
        self.date.month() == date.month() && self.date.year() == date.year()
    }
}

/// Budget period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Weekly,
    Monthly,
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl std::str::FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(format!("Unknown timeframe: {}", s)),
        }
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Budget category value that applies to every category
pub const ALL_CATEGORIES: &str = "all";

fn default_budget_category() -> String {
    ALL_CATEGORIES.to_string()
}

/// A spending limit for a timeframe, either overall or for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub amount: f64,
    pub timeframe: Timeframe,
    #[serde(default = "default_budget_category")]
    pub category: String,
}

/// First budget with the given timeframe (later duplicates are ignored)
pub fn first_budget_for(budgets: &[Budget], timeframe: Timeframe) -> Option<&Budget> {
    budgets.iter().find(|b| b.timeframe == timeframe)
}

/// Severity tag of a recommendation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Danger,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One advisory message produced by the recommendation engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationEntry {
    pub icon: String,
    pub text: String,
    /// Estimated savings in the same currency unit as the expenses
    pub savings: f64,
    #[serde(alias = "type")]
    pub severity: Severity,
}

impl RecommendationEntry {
    pub fn new(
        icon: impl Into<String>,
        text: impl Into<String>,
        savings: f64,
        severity: Severity,
    ) -> Self {
        Self {
            icon: icon.into(),
            text: text.into(),
            savings,
            severity,
        }
    }
}
