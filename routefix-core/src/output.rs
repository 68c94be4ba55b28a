use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;

use crate::apply::{format_outcome, ApplyReport};
use crate::planner::RenameOp;
use crate::preview::NOTHING_TO_RENAME;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Result of a routes operation
#[derive(Debug, Serialize, Deserialize)]
pub struct RoutesResult {
    pub site_config: String,
    pub routes: Vec<String>,
}

/// Result of a plan operation
#[derive(Debug, Serialize, Deserialize)]
pub struct PlanResult {
    pub site_config: String,
    pub routes: usize,
    pub changes: Vec<RenameOp>,
}

/// How a sync run ended
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SyncResult {
    NothingToDo,
    DryRun { changes: Vec<RenameOp> },
    Cancelled { changes: Vec<RenameOp> },
    Applied { report: ApplyReport },
}

/// Result of a version command
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for RoutesResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "routes",
            "site_config": self.site_config,
            "routes": self.routes,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();
        writeln!(
            output,
            "{} routes in {}",
            self.routes.len(),
            self.site_config
        )
        .unwrap();
        for route in &self.routes {
            writeln!(output, "  {route}").unwrap();
        }
        output
    }
}

impl OutputFormatter for PlanResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "plan",
            "site_config": self.site_config,
            "summary": {
                "routes": self.routes,
                "renames": self.changes.len(),
            },
            "changes": self.changes,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();
        writeln!(
            output,
            "Routes: {} ({})",
            self.routes, self.site_config
        )
        .unwrap();

        if self.changes.is_empty() {
            writeln!(output, "{NOTHING_TO_RENAME}").unwrap();
        } else {
            writeln!(output, "Renames: {}", self.changes.len()).unwrap();
            for (i, change) in self.changes.iter().enumerate() {
                writeln!(output, "{}. {}", i + 1, change.description).unwrap();
            }
        }

        output
    }
}

impl OutputFormatter for SyncResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "sync",
            "result": self,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        match self {
            Self::NothingToDo => String::new(),
            Self::DryRun { changes } => {
                format!("Dry run: {} renames not applied\n", changes.len())
            },
            Self::Cancelled { .. } => "Operation cancelled.\n".to_string(),
            Self::Applied { report } => {
                let mut output = String::new();
                for outcome in &report.outcomes {
                    writeln!(output, "{}", format_outcome(outcome)).unwrap();
                }
                writeln!(
                    output,
                    "✓ Renamed {} files, {} failed",
                    report.renamed(),
                    report.failed()
                )
                .unwrap();
                output
            },
        }
    }
}

impl OutputFormatter for VersionResult {
    fn format_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}
