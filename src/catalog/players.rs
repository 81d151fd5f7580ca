//! Player catalog

use super::same_key;
use crate::error::{ChartError, ChartResult};
use log::debug;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::sync::Arc;

/// A rostered player
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub number: i32,
}

impl Player {
    pub fn new(name: &str, number: i32) -> Self {
        Self {
            name: name.to_string(),
            number,
        }
    }
}

/// Resolves player display names to canonical player records
pub trait PlayerCatalog {
    /// Look up a player by full name, ignoring case and surrounding whitespace
    fn resolve(&self, name: &str) -> Option<Arc<Player>>;
}

/// Fixed roster of players
#[derive(Debug, Clone)]
pub struct StaticPlayerCatalog {
    players: Vec<Arc<Player>>,
}

impl StaticPlayerCatalog {
    /// Create a catalog holding the built-in roster
    pub fn new() -> Self {
        Self::from_players(vec![
            Player::new("Evans, Mike", 13),
            Player::new("Johnson, Tyler", 18),
            Player::new("Smith, Donovan", 76),
            Player::new("Marpet, Ali", 74),
            Player::new("Brady, Tom", 12),
            Player::new("Doe, John", 13),
            Player::new("Stark, Tony", 10),
        ])
    }

    pub fn from_players(players: Vec<Player>) -> Self {
        Self {
            players: players.into_iter().map(Arc::new).collect(),
        }
    }

    /// Load a roster from a JSON array of `{ "name": ..., "number": ... }`
    ///
    /// Blank names and duplicate names are rejected, since either would make
    /// name lookups ambiguous.
    pub fn from_json_reader<R: Read>(reader: R) -> ChartResult<Self> {
        let players: Vec<Player> = serde_json::from_reader(reader)?;

        for (idx, player) in players.iter().enumerate() {
            if player.name.trim().is_empty() {
                return Err(ChartError::InvalidRoster(format!(
                    "player {} has a blank name",
                    idx + 1
                )));
            }
            if players[..idx].iter().any(|p| same_key(&p.name, &player.name)) {
                return Err(ChartError::InvalidRoster(format!(
                    "duplicate player name: {}",
                    player.name
                )));
            }
        }

        debug!("Loaded roster with {} players", players.len());
        Ok(Self::from_players(players))
    }

    /// All players in roster order
    pub fn all(&self) -> &[Arc<Player>] {
        &self.players
    }
}

impl Default for StaticPlayerCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerCatalog for StaticPlayerCatalog {
    fn resolve(&self, name: &str) -> Option<Arc<Player>> {
        self.players
            .iter()
            .find(|p| same_key(&p.name, name))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_builtin() {
        let catalog = StaticPlayerCatalog::new();
        let brady = catalog.resolve("  BRADY, tom").unwrap();
        assert_eq!(brady.name, "Brady, Tom");
        assert_eq!(brady.number, 12);
        assert!(catalog.resolve("Tom Brady").is_none());
    }

    #[test]
    fn test_resolve_returns_shared_record() {
        let catalog = StaticPlayerCatalog::new();
        let a = catalog.resolve("Stark, Tony").unwrap();
        let b = catalog.resolve("stark, tony").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_from_json_reader() {
        let json = r#"[
            {"name": "Godwin, Chris", "number": 14},
            {"name": "White, Devin", "number": 45}
        ]"#;
        let catalog = StaticPlayerCatalog::from_json_reader(json.as_bytes()).unwrap();
        assert_eq!(catalog.all().len(), 2);
        assert_eq!(catalog.resolve("white, devin").unwrap().number, 45);
        assert!(catalog.resolve("Brady, Tom").is_none());
    }

    #[test]
    fn test_from_json_reader_rejects_duplicates() {
        let json = r#"[
            {"name": "Godwin, Chris", "number": 14},
            {"name": " godwin, chris ", "number": 15}
        ]"#;
        let err = StaticPlayerCatalog::from_json_reader(json.as_bytes()).unwrap_err();
        assert!(matches!(err, ChartError::InvalidRoster(_)));
    }

    #[test]
    fn test_from_json_reader_rejects_blank_name() {
        let json = r#"[{"name": "  ", "number": 1}]"#;
        let err = StaticPlayerCatalog::from_json_reader(json.as_bytes()).unwrap_err();
        assert!(matches!(err, ChartError::InvalidRoster(_)));
    }

    #[test]
    fn test_from_json_reader_malformed() {
        let err = StaticPlayerCatalog::from_json_reader("not json".as_bytes()).unwrap_err();
        assert!(matches!(err, ChartError::JsonError(_)));
    }
}
