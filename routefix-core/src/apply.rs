use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use crate::planner::RenameOp;

pub const CONFIRM_PROMPT: &str = "Apply these changes? [y/N]: ";

/// Result of attempting one rename.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameOutcome {
    pub source: String,
    pub destination: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RenameOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Per-operation outcomes of a best-effort batch, in plan order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplyReport {
    pub outcomes: Vec<RenameOutcome>,
}

impl ApplyReport {
    pub fn renamed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.renamed()
    }
}

/// Ask the operator to confirm. Only `y` (any case) proceeds; EOF refuses.
pub fn confirm<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<bool> {
    write!(writer, "{CONFIRM_PROMPT}").context("Failed to write prompt")?;
    writer.flush().context("Failed to flush prompt")?;

    let mut input = String::new();
    reader
        .read_line(&mut input)
        .context("Failed to read user input")?;

    Ok(input.trim().eq_ignore_ascii_case("y"))
}

/// Apply every rename in order under `root`.
///
/// A failed rename is recorded and the batch moves on; nothing is rolled back.
pub fn apply_renames(root: &Path, changes: &[RenameOp]) -> ApplyReport {
    let outcomes = changes
        .iter()
        .map(|change| {
            let error = apply_one(root, change).err().map(|e| format!("{e:#}"));
            RenameOutcome {
                source: change.source.clone(),
                destination: change.destination.clone(),
                error,
            }
        })
        .collect();

    ApplyReport { outcomes }
}

fn apply_one(root: &Path, change: &RenameOp) -> Result<()> {
    let source = root.join(&change.source);
    let destination = root.join(&change.destination);

    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    fs::rename(&source, &destination)?;
    Ok(())
}

/// Human-readable line for one outcome.
pub fn format_outcome(outcome: &RenameOutcome) -> String {
    match &outcome.error {
        None => format!("Renamed: {} -> {}", outcome.source, outcome.destination),
        Some(err) => format!("Error renaming {}: {}", outcome.source, err),
    }
}
