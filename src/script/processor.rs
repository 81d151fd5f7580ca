//! Command processor
//!
//! Reads chart commands line by line, applies them to a manager and writes
//! the results. A failed command is logged and counted; processing carries
//! on with the next line.

use super::command::Command;
use crate::catalog::{StaticPlayerCatalog, StaticPositionCatalog};
use crate::chart::{ChartItem, DepthChartManager};
use crate::error::{ChartError, ChartResult};
use log::{debug, error, info, warn};
use serde_json::json;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Manager over the built-in catalog types
pub type StandardManager = DepthChartManager<StaticPositionCatalog, StaticPlayerCatalog>;

const EMPTY_CHART: &str = "(empty depth chart)";

/// How query results are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Statistics from a processing run
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    pub commands_processed: usize,
    pub errors: usize,
}

/// Process a command script file
pub fn process_script_file<W: Write>(
    path: &Path,
    manager: &mut StandardManager,
    out: &mut W,
    format: OutputFormat,
) -> ChartResult<ProcessingStats> {
    info!("Reading commands from {:?}", path);
    let file = File::open(path)?;
    process_commands(BufReader::new(file), manager, out, format)
}

/// Process commands from any line source until end of input or `exit`
pub fn process_commands<R: BufRead, W: Write>(
    reader: R,
    manager: &mut StandardManager,
    out: &mut W,
    format: OutputFormat,
) -> ChartResult<ProcessingStats> {
    let mut stats = ProcessingStats::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                stats.errors += 1;
                error!("Line {}: {}", line_no, e);
                continue;
            }
        };

        if command == Command::Exit {
            debug!("Line {}: exit", line_no);
            break;
        }

        match execute(&command, manager, out, format) {
            Ok(()) => stats.commands_processed += 1,
            // A failed write ends the run.
            Err(e @ ChartError::IoError(_)) => return Err(e),
            Err(e) => {
                stats.errors += 1;
                if e.is_not_found() {
                    warn!("Line {}: {}", line_no, e);
                } else {
                    error!("Line {}: {}", line_no, e);
                }
            }
        }
    }

    out.flush()?;
    Ok(stats)
}

/// Apply one command and write its output
fn execute<W: Write>(
    command: &Command,
    manager: &mut StandardManager,
    out: &mut W,
    format: OutputFormat,
) -> ChartResult<()> {
    match command {
        Command::Add {
            position,
            rank,
            player,
        } => {
            manager.add(position, player, *rank)?;
            match format {
                OutputFormat::Text => writeln!(out, "Player added")?,
                OutputFormat::Json => {
                    write_json(out, &json!({ "added": manager.chart().last() }))?
                }
            }
        }
        Command::Remove { position, player } => {
            let removed = manager.remove(position, player)?;
            match (format, removed) {
                (OutputFormat::Text, Some(removed)) => {
                    writeln!(out, "Player removed: {}", removed.name)?
                }
                (OutputFormat::Text, None) => writeln!(out, "No player removed")?,
                (OutputFormat::Json, removed) => {
                    write_json(out, &json!({ "removed": removed }))?
                }
            }
        }
        Command::Backups { position, player } => {
            let backups = manager.backups(position, player)?;
            write_backups(out, &backups, format)?;
        }
        Command::Chart => match format {
            OutputFormat::Text => {
                let report = manager.render();
                if report.is_empty() {
                    writeln!(out, "{}", EMPTY_CHART)?;
                } else {
                    write!(out, "{}", report)?;
                }
            }
            OutputFormat::Json => write_json(out, manager.chart())?,
        },
        Command::Positions { unit } => {
            let catalog = manager.positions();
            let positions = match unit {
                Some(unit) => catalog.by_unit(unit),
                None => catalog.all().to_vec(),
            };
            match format {
                OutputFormat::Text => {
                    for p in &positions {
                        writeln!(out, "{:<5} {} ({})", p.code, p.name, p.unit)?;
                    }
                }
                OutputFormat::Json => write_json(out, &positions)?,
            }
        }
        Command::Players => {
            let players = manager.players().all();
            match format {
                OutputFormat::Text => {
                    for p in players {
                        writeln!(out, "#{:<3} {}", p.number, p.name)?;
                    }
                }
                OutputFormat::Json => write_json(out, &players)?,
            }
        }
        Command::Exit => {}
    }
    Ok(())
}

fn write_backups<W: Write>(
    out: &mut W,
    backups: &[ChartItem],
    format: OutputFormat,
) -> ChartResult<()> {
    match format {
        OutputFormat::Text if backups.is_empty() => writeln!(out, "No backups")?,
        OutputFormat::Text => {
            for item in backups {
                writeln!(out, "{}", item)?;
            }
        }
        OutputFormat::Json => write_json(out, &backups)?,
    }
    Ok(())
}

fn write_json<W: Write, T: serde::Serialize + ?Sized>(out: &mut W, value: &T) -> ChartResult<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
