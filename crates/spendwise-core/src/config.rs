//! Application configuration
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a layered resolution:
//! 1. An explicit path (`--config`), when it exists
//! 2. The user override (~/.config/spendwise/config.toml on Linux)
//! 3. Embedded defaults (compiled into binary)
//!
//! Keys missing from a file keep their default values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::recommend::DEFAULT_CURRENCY_SYMBOL;

/// Embedded default config (compiled into binary)
pub const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppConfig {
    /// Symbol used in recommendation text and CLI output
    pub currency_symbol: String,
    /// Default expenses file
    pub expenses_path: PathBuf,
    /// Default budgets file
    pub budgets_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            expenses_path: PathBuf::from("expenses.json"),
            budgets_path: PathBuf::from("budgets.json"),
        }
    }
}

impl AppConfig {
    /// Load configuration (explicit path, then user override, then defaults)
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let (content, source) = match resolve_path(explicit)? {
            Some(path) => {
                let content = fs::read_to_string(&path).map_err(|e| {
                    Error::Config(format!("Failed to read {}: {}", path.display(), e))
                })?;
                (content, path.display().to_string())
            }
            None => (DEFAULT_CONFIG.to_string(), "embedded defaults".to_string()),
        };

        debug!(source = %source, "Loading configuration");
        parse_config(&content)
    }
}

/// User override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("spendwise").join("config.toml"))
}

/// Config file to read. An explicit path must exist; the user override is optional.
fn resolve_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(Error::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        return Ok(Some(path.to_path_buf()));
    }

    Ok(default_config_path().filter(|p| p.exists()))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    display: Option<RawDisplay>,
    data: Option<RawData>,
}

#[derive(Debug, Deserialize)]
struct RawDisplay {
    currency_symbol: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawData {
    expenses: Option<PathBuf>,
    budgets: Option<PathBuf>,
}

/// Parse config from TOML content
pub fn parse_config(content: &str) -> Result<AppConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = AppConfig::default();

    if let Some(display) = raw.display {
        if let Some(symbol) = display.currency_symbol {
            config.currency_symbol = symbol;
        }
    }

    if let Some(data) = raw.data {
        if let Some(expenses) = data.expenses {
            config.expenses_path = expenses;
        }
        if let Some(budgets) = data.budgets {
            config.budgets_path = budgets;
        }
    }

    Ok(config)
}
