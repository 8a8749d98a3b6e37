//! Command-line front end: runs the same parse/aggregate/report pipeline
//! `settle-server` exposes over HTTP, but against a local file, with no
//! job table and no network surface.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use settle_aggregate::Aggregator;
use settle_core::{registry, AreaTag, ChannelId};

#[derive(Parser)]
#[command(name = "settle-cli")]
#[command(about = "Settlement file parser and ATM-reference aggregator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a settlement file and write its archive: a summary CSV plus
    /// one raw-line extract per ATM reference group.
    Process {
        /// Path to the settlement file.
        input: PathBuf,

        /// Declared channel (payment_mode). Detected from the filename if omitted.
        #[arg(short = 'c', long)]
        payment_mode: Option<String>,

        /// Area tag appended to output filenames.
        #[arg(short, long, default_value = "EPR")]
        area: String,

        /// Output archive path. Defaults to `<input base>_<AREA>.zip`, next
        /// to the input file.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the channel a filename would classify to, without parsing it.
    Classify {
        /// Filename to classify.
        filename: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_target(false)
        .init();

    match cli.command {
        Command::Process {
            input,
            payment_mode,
            area,
            output,
        } => process(input, payment_mode, area, output),
        Command::Classify { filename } => classify(&filename),
    }
}

fn process(input: PathBuf, payment_mode: Option<String>, area: String, output: Option<PathBuf>) -> Result<()> {
    let area_tag = AreaTag::from_str(&area)?;

    let channel_id = match payment_mode {
        Some(mode) => ChannelId::from_str(&mode)?,
        None => {
            let name = input.file_name().and_then(|n| n.to_str()).unwrap_or_default();
            registry::classify_by_filename(name).with_context(|| {
                format!(
                    "could not classify channel from filename: {name}; pass --payment-mode explicitly"
                )
            })?
        }
    };

    let bytes = std::fs::read(&input).with_context(|| format!("reading {}", input.display()))?;
    tracing::info!(channel = %channel_id, file = %input.display(), "parsing settlement file");

    let report = settle_parser::parse(&bytes, channel_id);
    let mut aggregator = Aggregator::new(channel_id);
    aggregator.ingest_all(report.outcomes.iter());

    if report.skips.total() > 0 {
        tracing::warn!(skipped = report.skips.total(), "lines skipped during parse");
    }

    let groups = aggregator.into_groups();
    let archive_bytes = settle_report::build_archive(&groups, area_tag)?;

    let base = input.file_stem().and_then(|s| s.to_str()).unwrap_or("settlement");
    let output_path = output
        .unwrap_or_else(|| input.with_file_name(settle_report::archive_filename(base, area_tag)));
    std::fs::write(&output_path, &archive_bytes)
        .with_context(|| format!("writing {}", output_path.display()))?;

    let total_records: u32 = groups.values().map(|g| g.count).sum();
    let total_amount: rust_decimal::Decimal = groups.values().map(|g| g.total).sum();
    println!(
        "parsed {total_records} records across {} groups, total {total_amount}",
        groups.len()
    );
    println!("archive written to {}", output_path.display());

    Ok(())
}

fn classify(filename: &str) -> Result<()> {
    match registry::classify_by_filename(filename) {
        Some(id) => {
            println!("{id}");
            Ok(())
        }
        None => bail!("no channel matches filename: {filename}"),
    }
}
