use anyhow::Result;
use routefix_core::{routes_operation, Config, OutputFormatter};
use std::path::Path;

use crate::cli::OutputFormat;

pub fn handle_routes(root: &Path, config: &Config, output: OutputFormat) -> Result<()> {
    let result = routes_operation(root, config)?;

    match output {
        OutputFormat::Json => println!("{}", result.format_json()),
        OutputFormat::Summary => print!("{}", result.format_summary()),
    }

    Ok(())
}
