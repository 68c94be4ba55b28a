use anyhow::{Context, Result};
use clap::Parser;
use routefix_core::interrupt::interrupt_message;
use routefix_core::{Config, OutputFormatter, Preview, VersionResult};
use std::io::{self, IsTerminal};
use std::path::Path;
use std::process;
use std::str::FromStr;

mod cli;
mod plan;
mod routes;
mod sync;

use cli::{Cli, Commands, OutputFormat};

fn main() {
    // Nothing is renamed before the prompt is answered, so Ctrl-C can exit
    // straight away; the message tells the operator whether that was the case.
    ctrlc::set_handler(|| {
        eprintln!("\n{}", interrupt_message());
        process::exit(130);
    })
    .expect("Error setting SIGINT handler");

    let cli = Cli::parse();

    if let Some(ref dir) = cli.directory {
        if let Err(e) = std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to change to directory: {}", dir.display()))
        {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let root = Path::new(".");

    let mut config = Config::load_from_dir(root)?;
    if let Some(site_config) = cli.site_config {
        config.site_config = site_config;
    }

    let use_color = !cli.no_color
        && config
            .defaults
            .use_color
            .unwrap_or_else(|| io::stdout().is_terminal());

    match cli.command.unwrap_or_else(Commands::default_sync) {
        Commands::Sync {
            dry_run,
            preview,
            output,
        } => {
            // Use preview format from CLI arg or config default
            let preview = match preview {
                Some(arg) => arg.into(),
                None => Preview::from_str(&config.defaults.preview_format)
                    .map_err(anyhow::Error::msg)?,
            };

            sync::handle_sync(
                root, &config, preview, dry_run, cli.yes, use_color, output, cli.quiet,
            )
        },

        Commands::Plan { output } => plan::handle_plan(root, &config, output),

        Commands::Routes { output } => routes::handle_routes(root, &config, output),

        Commands::Version { output } => handle_version(output),
    }
}

fn handle_version(output: OutputFormat) -> Result<()> {
    let version_result = VersionResult {
        name: "routefix".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    println!("{}", version_result.format(output.into()));
    Ok(())
}
