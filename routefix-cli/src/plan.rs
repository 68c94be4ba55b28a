use anyhow::Result;
use routefix_core::{plan_operation, Config, OutputFormatter};
use std::path::Path;

use crate::cli::OutputFormat;

pub fn handle_plan(root: &Path, config: &Config, output: OutputFormat) -> Result<()> {
    let result = plan_operation(root, config)?;

    match output {
        OutputFormat::Json => println!("{}", result.format_json()),
        OutputFormat::Summary => print!("{}", result.format_summary()),
    }

    Ok(())
}
