//! propdoc - Inspect component registries and extract prop documentation
//!
//! propdoc resolves component names through one or more JSON registry
//! manifests, reads the referenced source files, and scans them for `*Props`
//! interface declarations to produce API reference tables.

mod output;

use clap::{Parser, Subcommand};
use eyre::Result;
use output::{OutputFormat, render_docs};
use owo_colors::OwoColorize;
use propdoc_core::{RegistrySource, SourceLocator};
use std::path::PathBuf;

/// CLI arguments
#[derive(Debug, Parser)]
#[command(name = "propdoc", version, about = "Extract component source and prop documentation from registry manifests")]
struct Args {
    /// Registry manifest file(s), tried in order; the first match wins.
    /// File paths inside a manifest resolve relative to its directory.
    #[arg(long = "registry", value_name = "PATH", global = true, default_value = "registry.json")]
    registries: Vec<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

/// Subcommands
#[derive(Debug, Subcommand)]
enum Command {
    /// List registry items across all manifests
    List,
    /// Print the raw source text for a component
    Source {
        /// Component name as it appears in the registry
        name: String,
    },
    /// Print extracted prop documentation for a component
    Props {
        /// Component name as it appears in the registry
        name: String,

        /// Output format: text, json, markdown
        #[arg(long, short = 'f', default_value = "text")]
        format: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let sources = args
        .registries
        .iter()
        .map(RegistrySource::new)
        .collect::<Vec<_>>();
    let locator = SourceLocator::new(sources);

    match args.command {
        Command::List => run_list(&locator),
        Command::Source { name } => run_source(&locator, &name),
        Command::Props { name, format } => run_props(&locator, &name, &format),
    }
}

fn run_list(locator: &SourceLocator) -> Result<()> {
    let items = locator.items();
    if items.is_empty() {
        eprintln!("{} No registry items found", "!".yellow().bold());
        return Ok(());
    }

    for item in items {
        println!(
            "{}  {}  {}",
            item.name.green().bold(),
            item.kind.as_str().dimmed(),
            item.title
        );
        if let Some(description) = item.description {
            println!("    {}", description.dimmed());
        }
    }
    Ok(())
}

fn run_source(locator: &SourceLocator, name: &str) -> Result<()> {
    // Sentinels print as-is; failure is a value here, not an exit code
    print!("{}", locator.component_source(name));
    Ok(())
}

fn run_props(locator: &SourceLocator, name: &str, format: &str) -> Result<()> {
    let Some(format) = OutputFormat::from_str(format) else {
        eyre::bail!("Unknown output format '{format}' - expected text, json, or markdown");
    };

    let docs = locator.component_docs(name);
    if docs.is_empty() {
        eprintln!(
            "{} No prop documentation found for '{}'",
            "!".yellow().bold(),
            name.cyan()
        );
        if matches!(format, OutputFormat::Json) {
            println!("[]");
        }
        return Ok(());
    }

    print!("{}", render_docs(&docs, format));
    Ok(())
}
