//! Read-only catalogs of positions and players
//!
//! The depth chart never owns position or player data. It resolves the
//! raw strings a caller hands it through these catalogs and stores the
//! shared canonical records they return.

mod players;
mod positions;

pub use players::{Player, PlayerCatalog, StaticPlayerCatalog};
pub use positions::{Position, PositionCatalog, StaticPositionCatalog};

/// Compare two lookup keys ignoring case and surrounding whitespace
pub(crate) fn same_key(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
