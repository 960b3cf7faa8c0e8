mod export;
mod ingest;
mod lead;
mod parser;
mod settings;
mod stats;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use lead::RawLead;
use settings::Settings;
use stats::RouteCounts;

#[derive(Parser)]
#[command(
    name = "lead-extractor",
    about = "Extract contact leads from exported notification messages"
)]
struct Cli {
    /// Settings file (toml, yaml, json); LEADS_* variables override it
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a CSV export and write the leads to an xlsx spreadsheet
    Convert {
        /// Input CSV with title and body columns
        #[arg(short, long)]
        input: PathBuf,
        /// Output spreadsheet (default: input path with .xlsx extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Parse a CSV export and print the leads as JSON lines
    Dump {
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Show how the rows of a CSV export are classified
    Stats {
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    info!(?settings, "settings loaded");

    match cli.command {
        Commands::Convert { input, output } => {
            let output = output.unwrap_or_else(|| input.with_extension("xlsx"));
            let rows = load(&input, &settings)?;
            let leads = parser::process_all(&rows);
            export::write_xlsx(&leads, &output)
                .with_context(|| format!("Failed to write {:?}", output))?;
            println!(
                "Read {} rows, wrote {} leads ({} suppressed) to {:?}",
                rows.len(),
                leads.len(),
                rows.len() - leads.len(),
                output
            );
        }
        Commands::Dump { input } => {
            let rows = load(&input, &settings)?;
            let leads = parser::process_all(&rows);
            export::write_json_lines(&leads, std::io::stdout().lock())
                .context("Failed to write JSON lines")?;
        }
        Commands::Stats { input } => {
            let rows = load(&input, &settings)?;
            println!("{}", RouteCounts::from_rows(&rows).render());
        }
    }
    Ok(())
}

fn load(input: &Path, settings: &Settings) -> Result<Vec<RawLead>> {
    ingest::read_rows(input, settings).with_context(|| format!("Failed to read {:?}", input))
}
