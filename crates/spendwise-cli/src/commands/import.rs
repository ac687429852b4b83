//! Import command implementation

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use spendwise_core::import::{import_candidates, write_expenses_json};
use spendwise_core::{Classifier, PriorityLabel};

pub fn cmd_import(file: &Path, output: Option<&Path>) -> Result<()> {
    let classifier = Classifier::new()?;
    let expenses = import_candidates(file, &classifier)
        .with_context(|| format!("Failed to import {}", file.display()))?;

    let Some(output) = output else {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        write_expenses_json(&mut handle, &expenses)?;
        writeln!(handle)?;
        return Ok(());
    };

    let out = File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    let mut writer = BufWriter::new(out);
    write_expenses_json(&mut writer, &expenses)?;
    writer.flush()?;

    println!("📥 Classified {} expenses from {}", expenses.len(), file.display());
    for priority in PriorityLabel::all() {
        let count = expenses.iter().filter(|e| e.priority == *priority).count();
        println!("   {:16} {:>5}", priority.display_name(), count);
    }
    println!("✅ Wrote {}", output.display());

    Ok(())
}
