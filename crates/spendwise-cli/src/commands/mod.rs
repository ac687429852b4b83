//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `classify` - Classify a single expense
//! - `config` - Configuration inspection (show, path)
//! - `core` - Shared utilities (reference date, input loading)
//! - `import` - Classify a file of raw expenses
//! - `recommend` - Savings recommendations
//! - `reports` - Summary and trend reports

pub mod classify;
pub mod config;
pub mod core;
pub mod import;
pub mod recommend;
pub mod reports;

// Re-export command functions for main.rs
pub use classify::*;
pub use config::*;
pub use self::core::*;
pub use import::*;
pub use recommend::*;
pub use reports::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
