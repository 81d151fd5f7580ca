//! Depth Chart CLI
//!
//! Applies add/remove/backups/chart commands to a team depth chart, reading
//! them from a script file or from stdin.

use anyhow::{Context, Result};
use clap::Parser;
use depth_chart::{
    process_commands, process_script_file, DepthChart, DepthChartManager, OutputFormat,
    StaticPlayerCatalog, StaticPositionCatalog,
};
use log::{debug, error, info};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

/// Depth Chart CLI
///
/// Maintains a team depth chart from line-oriented commands:
/// `add <POS> <RANK|-> <PLAYER>`, `remove <POS> <PLAYER>`,
/// `backups <POS> <PLAYER>`, `chart`, `positions [UNIT]`, `players`, `exit`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    /// Command script to run (default: read commands from stdin)
    #[arg(short, long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// JSON roster of players to use instead of the built-in roster
    #[arg(long, value_name = "FILE")]
    roster: Option<PathBuf>,

    /// Head coach recorded on the chart
    #[arg(long, default_value = "")]
    coach: String,

    /// Output format for query results
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable verbose logging (use -vv for trace output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging based on verbosity level
    let log_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    debug!("Depth Chart v{}", env!("CARGO_PKG_VERSION"));
    debug!("Script: {:?}", args.script);
    debug!("Roster: {:?}", args.roster);
    debug!("Format: {:?}", args.format);

    let players = match &args.roster {
        Some(path) => {
            if !path.exists() {
                error!("Roster file not found: {:?}", path);
                anyhow::bail!("Roster file not found: {:?}", path);
            }
            let file = File::open(path).with_context(|| format!("Failed to open {:?}", path))?;
            StaticPlayerCatalog::from_json_reader(BufReader::new(file))
                .with_context(|| format!("Failed to load roster {:?}", path))?
        }
        None => StaticPlayerCatalog::new(),
    };
    info!("Roster has {} players", players.all().len());

    let mut manager = DepthChartManager::with_chart(
        StaticPositionCatalog::new(),
        players,
        DepthChart::new(&args.coach),
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let stats = match &args.script {
        Some(path) => {
            if !path.exists() {
                error!("Script file not found: {:?}", path);
                anyhow::bail!("Script file not found: {:?}", path);
            }
            process_script_file(path, &mut manager, &mut out, args.format)
                .with_context(|| format!("Failed to process script {:?}", path))?
        }
        None => process_commands(io::stdin().lock(), &mut manager, &mut out, args.format)
            .context("Failed to process commands from stdin")?,
    };

    info!(
        "Processed {} commands, chart has {} entries",
        stats.commands_processed,
        manager.chart().len()
    );

    if stats.errors > 0 {
        error!("{} commands had errors", stats.errors);
    }

    Ok(())
}
