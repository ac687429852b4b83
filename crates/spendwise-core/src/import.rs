//! Loading expenses and budgets from JSON or CSV files
//!
//! The format is chosen from the file extension. CSV files need a header row
//! naming the fields (`amount,category,date,priority,description` for
//! classified expenses, `amount,timeframe,category` for budgets and
//! `date,amount,category,description` for raw expenses to classify).

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::classifier::{parse_amount, Classifier};
use crate::error::{Error, Result};
use crate::models::{Budget, ClassifiedExpense, ExpenseCandidate};

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Csv,
}

impl FileFormat {
    /// Detect format from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("csv") => Ok(Self::Csv),
            _ => Err(Error::UnsupportedFormat(format!(
                "{} (expected .json or .csv)",
                path.display()
            ))),
        }
    }
}

/// Parse a list of records from JSON (array) or CSV (with headers)
pub fn parse_records<T, R>(reader: R, format: FileFormat) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    match format {
        FileFormat::Json => Ok(serde_json::from_reader(reader)?),
        FileFormat::Csv => {
            let mut rdr = ReaderBuilder::new()
                .trim(Trim::All)
                .flexible(true)
                .from_reader(reader);
            let mut records = Vec::new();
            for result in rdr.deserialize() {
                records.push(result?);
            }
            Ok(records)
        }
    }
}

fn load_file<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let format = FileFormat::from_path(path)?;
    let file = File::open(path)?;
    let records = parse_records(BufReader::new(file), format)?;
    debug!(path = %path.display(), count = records.len(), "Loaded records");
    Ok(records)
}

/// Load classified expenses
pub fn load_expenses(path: &Path) -> Result<Vec<ClassifiedExpense>> {
    load_file(path)
}

/// Load budgets
pub fn load_budgets(path: &Path) -> Result<Vec<Budget>> {
    load_file(path)
}

/// Amount as entered: a number, or free text coerced like a numeric field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

impl RawAmount {
    /// NaN when the text holds no number
    pub fn value(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Text(s) => parse_amount(s),
        }
    }
}

impl std::fmt::Display for RawAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A dated expense that has not been classified yet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawExpense {
    pub date: String,
    pub amount: RawAmount,
    pub category: String,
    #[serde(default)]
    pub description: String,
}

/// Classify raw expenses. Fails on the first row with an invalid date or an
/// amount that is not a positive number.
pub fn classify_records(
    records: Vec<RawExpense>,
    classifier: &Classifier,
) -> Result<Vec<ClassifiedExpense>> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, raw)| {
            let date = NaiveDate::parse_from_str(raw.date.trim(), "%Y-%m-%d").map_err(|e| {
                Error::InvalidData(format!(
                    "Record {}: invalid date '{}' (use YYYY-MM-DD): {}",
                    i + 1,
                    raw.date,
                    e
                ))
            })?;
            let amount = raw.amount.value();
            if !amount.is_finite() || amount <= 0.0 {
                return Err(Error::InvalidData(format!(
                    "Record {}: invalid amount '{}' (must be a positive number)",
                    i + 1,
                    raw.amount
                )));
            }
            let candidate = ExpenseCandidate {
                amount,
                category: raw.category,
                description: raw.description,
            };
            let priority = classifier.classify_candidate(&candidate);

            Ok(ClassifiedExpense {
                amount,
                category: candidate.category,
                date,
                priority,
                description: if candidate.description.is_empty() {
                    None
                } else {
                    Some(candidate.description)
                },
            })
        })
        .collect()
}

/// Load raw expenses from a file and classify each one
pub fn import_candidates(path: &Path, classifier: &Classifier) -> Result<Vec<ClassifiedExpense>> {
    let records: Vec<RawExpense> = load_file(path)?;
    let classified = classify_records(records, classifier)?;
    info!(
        path = %path.display(),
        count = classified.len(),
        "Imported and classified expenses"
    );
    Ok(classified)
}

/// Write classified expenses as a pretty-printed JSON array
pub fn write_expenses_json<W: Write>(writer: W, expenses: &[ClassifiedExpense]) -> Result<()> {
    serde_json::to_writer_pretty(writer, expenses)?;
    Ok(())
}
