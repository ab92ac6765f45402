use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::aggregator::{aggregate_by_forge, aggregate_by_path};
use crate::client::fetch_index;
use crate::parsers::read_records;
use crate::report::{render_table, sort_rows};
use crate::utils::resolve_index_url;

#[derive(Parser)]
#[command(name = "forge-census")]
#[command(version = "0.1.0")]
#[command(about = "Count modules and versions per hosting forge in a module index", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the index feed and print the per-forge census
    Report {
        /// Index URL (overrides the MODULE_INDEX_URL environment variable)
        #[arg(long)]
        url: Option<String>,

        /// Aggregate a saved index snapshot file instead of fetching
        #[arg(long, conflicts_with = "url")]
        input: Option<PathBuf>,

        /// Request timeout in seconds
        #[arg(long, default_value_t = 30)]
        timeout_secs: u64,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Report { url, input, timeout_secs }) => {
            report(url.as_deref(), input.as_deref(), *timeout_secs)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn report(url: Option<&str>, input: Option<&Path>, timeout_secs: u64) -> Result<()> {
    let records = match input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open index snapshot: {}", path.display()))?;
            read_records(BufReader::new(file))?
        }
        None => {
            let url = resolve_index_url(url);
            let body = fetch_index(&url, Duration::from_secs(timeout_secs))?;
            read_records(BufReader::new(body))?
        }
    };

    let paths = aggregate_by_path(&records);
    let forges = aggregate_by_forge(&paths);
    let rows = sort_rows(&forges);

    print!("{}", render_table(&rows));

    Ok(())
}
