//! Position catalog

use super::same_key;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A role on a unit, e.g. Quarterback (QB) on Offense
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub name: String,
    pub code: String,
    pub unit: String,
}

impl Position {
    pub fn new(name: &str, code: &str, unit: &str) -> Self {
        Self {
            name: name.to_string(),
            code: code.to_string(),
            unit: unit.to_string(),
        }
    }
}

/// Resolves position identifiers to canonical position records
pub trait PositionCatalog {
    /// Look up a position by identifier, ignoring case and surrounding whitespace
    fn resolve(&self, identifier: &str) -> Option<Arc<Position>>;
}

/// Built-in catalog of football positions
#[derive(Debug, Clone)]
pub struct StaticPositionCatalog {
    positions: Vec<Arc<Position>>,
}

impl StaticPositionCatalog {
    /// Create a catalog holding the standard offense, defense, special teams
    /// and reserve positions
    pub fn new() -> Self {
        Self::from_positions(standard_positions())
    }

    pub fn from_positions(positions: Vec<Position>) -> Self {
        Self {
            positions: positions.into_iter().map(Arc::new).collect(),
        }
    }

    /// All positions in catalog order
    pub fn all(&self) -> &[Arc<Position>] {
        &self.positions
    }

    /// Positions belonging to one unit, in catalog order
    pub fn by_unit(&self, unit: &str) -> Vec<Arc<Position>> {
        self.positions
            .iter()
            .filter(|p| same_key(&p.unit, unit))
            .cloned()
            .collect()
    }
}

impl Default for StaticPositionCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionCatalog for StaticPositionCatalog {
    /// Codes take precedence over full names, so "C" is always Center.
    fn resolve(&self, identifier: &str) -> Option<Arc<Position>> {
        self.positions
            .iter()
            .find(|p| same_key(&p.code, identifier))
            .or_else(|| self.positions.iter().find(|p| same_key(&p.name, identifier)))
            .cloned()
    }
}

fn standard_positions() -> Vec<Position> {
    const OFFENSE: &str = "Offense";
    const DEFENSE: &str = "Defense";
    const SPECIAL_TEAMS: &str = "Special Teams";
    const RESERVES: &str = "Reserves";

    vec![
        Position::new("Center", "C", OFFENSE),
        Position::new("Left Offensive Guard", "LOG", OFFENSE),
        Position::new("Right Offensive Guard", "ROG", OFFENSE),
        Position::new("Left Offensive Tackle", "LOT", OFFENSE),
        Position::new("Right Offensive Tackle", "ROT", OFFENSE),
        Position::new("Quarterback", "QB", OFFENSE),
        Position::new("Running Back", "RB", OFFENSE),
        Position::new("Full Back", "FB", OFFENSE),
        Position::new("Wide Receiver", "WR", OFFENSE),
        Position::new("Tight end", "TE", OFFENSE),
        Position::new("Nose tackle", "NT", DEFENSE),
        Position::new("Defensive tackle", "DT", DEFENSE),
        Position::new("Defensive End", "DE", DEFENSE),
        Position::new("Middle Line Backer", "MLB", DEFENSE),
        Position::new("Left Outside Line Backer", "LOLB", DEFENSE),
        Position::new("Right Outside Line Backer", "ROLB", DEFENSE),
        Position::new("Corner Back", "CB", DEFENSE),
        Position::new("Free Safety", "FS", DEFENSE),
        Position::new("Strong Safety", "SS", DEFENSE),
        Position::new("Kicker", "K", SPECIAL_TEAMS),
        Position::new("Punter", "P", SPECIAL_TEAMS),
        Position::new("Long Snapper", "LS", SPECIAL_TEAMS),
        Position::new("Holder", "H", SPECIAL_TEAMS),
        Position::new("Kick Returner", "KR", SPECIAL_TEAMS),
        Position::new("Punt Returner", "PR", SPECIAL_TEAMS),
        Position::new("Reserve", "RES", RESERVES),
        Position::new("Future", "FUT", RESERVES),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_by_code() {
        let catalog = StaticPositionCatalog::new();
        let qb = catalog.resolve(" qb ").unwrap();
        assert_eq!(qb.name, "Quarterback");
        assert_eq!(qb.unit, "Offense");
    }

    #[test]
    fn test_resolve_by_name() {
        let catalog = StaticPositionCatalog::new();
        let kr = catalog.resolve("kick returner").unwrap();
        assert_eq!(kr.code, "KR");
        assert_eq!(kr.unit, "Special Teams");
    }

    #[test]
    fn test_code_wins_over_name() {
        let catalog = StaticPositionCatalog::from_positions(vec![
            Position::new("P", "X", "Offense"),
            Position::new("Punter", "P", "Special Teams"),
        ]);
        assert_eq!(catalog.resolve("p").unwrap().name, "Punter");
    }

    #[test]
    fn test_catalog_spelling() {
        let catalog = StaticPositionCatalog::new();
        assert_eq!(catalog.resolve("TE").unwrap().name, "Tight end");
        assert_eq!(catalog.resolve("NT").unwrap().name, "Nose tackle");
        assert_eq!(catalog.resolve("defensive TACKLE").unwrap().code, "DT");
    }

    #[test]
    fn test_resolve_unknown() {
        let catalog = StaticPositionCatalog::new();
        assert!(catalog.resolve("XYZ").is_none());
        assert!(catalog.resolve("").is_none());
    }

    #[test]
    fn test_by_unit() {
        let catalog = StaticPositionCatalog::new();
        assert_eq!(catalog.all().len(), 27);

        let special = catalog.by_unit(" special teams");
        let codes: Vec<&str> = special.iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, vec!["K", "P", "LS", "H", "KR", "PR"]);

        assert_eq!(catalog.by_unit("Reserves").len(), 2);
        assert!(catalog.by_unit("Bench").is_empty());
    }
}
