use comfy_table::{Cell, Color, ContentArrangement, Table};
use nu_ansi_term::Color as AnsiColor;
use std::fmt::Write;
use std::str::FromStr;

use crate::planner::RenameOp;

pub const NOTHING_TO_RENAME: &str = "No files need renaming.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preview {
    List,
    Table,
}

impl FromStr for Preview {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "list" => Ok(Self::List),
            "table" => Ok(Self::Table),
            _ => Err(format!("Invalid preview format: {s}")),
        }
    }
}

/// Render the proposed renames for the operator.
pub fn render_changes(changes: &[RenameOp], preview: Preview, use_color: bool) -> String {
    if changes.is_empty() {
        return NOTHING_TO_RENAME.to_string();
    }

    match preview {
        Preview::List => render_list(changes, use_color),
        Preview::Table => render_table(changes, use_color),
    }
}

fn render_list(changes: &[RenameOp], use_color: bool) -> String {
    let mut output = String::new();
    writeln!(output, "Found the following files to rename:").unwrap();
    for (i, change) in changes.iter().enumerate() {
        if use_color {
            writeln!(
                output,
                "{}. Rename {} -> {}",
                i + 1,
                AnsiColor::Red.paint(&change.source),
                AnsiColor::Green.paint(&change.destination)
            )
            .unwrap();
        } else {
            writeln!(output, "{}. {}", i + 1, change.description).unwrap();
        }
    }
    output.trim_end().to_string()
}

fn render_table(changes: &[RenameOp], use_color: bool) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if use_color {
        table.enforce_styling();
        table.set_header(vec![
            Cell::new("#").fg(Color::Cyan),
            Cell::new("From").fg(Color::Cyan),
            Cell::new("To").fg(Color::Cyan),
        ]);
    } else {
        table.set_header(vec!["#", "From", "To"]);
    }

    for (i, change) in changes.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&change.source),
            Cell::new(&change.destination),
        ]);
    }

    table.to_string()
}
