use anyhow::Result;
use routefix_core::{sync_operation, Config, OutputFormatter, Preview, SyncOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::cli::OutputFormat;

#[allow(clippy::too_many_arguments)]
#[allow(clippy::fn_params_excessive_bools)]
pub fn handle_sync(
    root: &Path,
    config: &Config,
    preview: Preview,
    dry_run: bool,
    auto_approve: bool,
    use_color: bool,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    if !quiet {
        eprintln!("Checking files...");
    }

    let options = SyncOptions {
        auto_approve,
        dry_run,
        preview,
        use_color,
    };

    // Keep stdout clean for JSON; the preview and prompt go to stderr instead.
    let mut writer: Box<dyn Write> = match output {
        OutputFormat::Json => Box::new(io::stderr()),
        OutputFormat::Summary => Box::new(io::stdout()),
    };
    let mut reader = io::stdin().lock();

    let result = sync_operation(root, config, &options, &mut reader, &mut writer)?;
    drop(writer);

    match output {
        OutputFormat::Json => println!("{}", result.format_json()),
        OutputFormat::Summary => print!("{}", result.format_summary()),
    }

    Ok(())
}
