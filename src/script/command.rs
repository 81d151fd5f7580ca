//! Command line parsing
//!
//! One command per line. Player names run to the end of the line so they
//! can contain spaces and commas ("Brady, Tom").

use crate::error::{ChartError, ChartResult};

const ADD_USAGE: &str = "usage: add <POSITION> <RANK|-> <PLAYER NAME>";
const REMOVE_USAGE: &str = "usage: remove <POSITION> <PLAYER NAME>";
const BACKUPS_USAGE: &str = "usage: backups <POSITION> <PLAYER NAME>";

/// A parsed chart command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        position: String,
        rank: Option<i32>,
        player: String,
    },
    Remove {
        position: String,
        player: String,
    },
    Backups {
        position: String,
        player: String,
    },
    Chart,
    Positions {
        unit: Option<String>,
    },
    Players,
    Exit,
}

impl Command {
    /// Parse one line; blank lines and `#` comments yield `None`
    pub fn parse(line: &str) -> ChartResult<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (keyword, rest) = split_token(line);
        let command = match keyword.to_lowercase().as_str() {
            "add" => {
                let (position, rest) = split_token(rest);
                let (rank, player) = split_token(rest);
                if position.is_empty() || rank.is_empty() || player.is_empty() {
                    return Err(ChartError::InvalidCommand(ADD_USAGE.to_string()));
                }
                Command::Add {
                    position: position.to_string(),
                    rank: parse_rank(rank)?,
                    player: player.to_string(),
                }
            }
            "remove" => {
                let (position, player) = position_and_player(rest, REMOVE_USAGE)?;
                Command::Remove { position, player }
            }
            "backups" => {
                let (position, player) = position_and_player(rest, BACKUPS_USAGE)?;
                Command::Backups { position, player }
            }
            "chart" => Command::Chart,
            "positions" => Command::Positions {
                unit: (!rest.is_empty()).then(|| rest.to_string()),
            },
            "players" => Command::Players,
            "exit" | "quit" => Command::Exit,
            other => {
                return Err(ChartError::InvalidCommand(format!(
                    "unknown command '{}'",
                    other
                )))
            }
        };

        Ok(Some(command))
    }
}

/// Split off the first whitespace-delimited token, trimming the remainder
fn split_token(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.split_once(char::is_whitespace) {
        Some((token, rest)) => (token, rest.trim()),
        None => (s, ""),
    }
}

fn position_and_player(rest: &str, usage: &str) -> ChartResult<(String, String)> {
    let (position, player) = split_token(rest);
    if position.is_empty() || player.is_empty() {
        return Err(ChartError::InvalidCommand(usage.to_string()));
    }
    Ok((position.to_string(), player.to_string()))
}

/// `-` means "no rank"; anything else must be an integer
fn parse_rank(s: &str) -> ChartResult<Option<i32>> {
    if s == "-" {
        return Ok(None);
    }
    s.parse::<i32>()
        .map(Some)
        .map_err(|_| ChartError::InvalidRank(s.to_string()))
}
