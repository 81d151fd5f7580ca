//! Depth chart manager
//!
//! Resolves caller-supplied position and player strings through the
//! catalogs, then reads or mutates the chart it owns. Every lookup happens
//! before any mutation, so a failed resolution leaves the chart untouched.

use super::render::ChartReport;
use super::store::{ChartItem, DepthChart};
use crate::catalog::{same_key, Player, PlayerCatalog, Position, PositionCatalog};
use crate::error::{ChartError, ChartResult};
use log::debug;
use std::sync::Arc;

/// Owns a depth chart and the catalogs used to resolve its entries
pub struct DepthChartManager<P, L> {
    positions: P,
    players: L,
    chart: DepthChart,
}

impl<P: PositionCatalog, L: PlayerCatalog> DepthChartManager<P, L> {
    /// Create a manager over an empty chart
    pub fn new(positions: P, players: L) -> Self {
        Self::with_chart(positions, players, DepthChart::default())
    }

    /// Create a manager over an existing chart
    pub fn with_chart(positions: P, players: L, chart: DepthChart) -> Self {
        Self {
            positions,
            players,
            chart,
        }
    }

    pub fn chart(&self) -> &DepthChart {
        &self.chart
    }

    pub fn positions(&self) -> &P {
        &self.positions
    }

    pub fn players(&self) -> &L {
        &self.players
    }

    /// Add a player at a position
    ///
    /// With no `rank`, the new item takes the rank of the most recently
    /// appended item plus one, or 0 when that rank is not positive. This
    /// looks at the last item in the whole chart, not the deepest rank at
    /// this position. Fails with `InvalidRank` if that rank would overflow.
    pub fn add(
        &mut self,
        position_id: &str,
        player_name: &str,
        rank: Option<i32>,
    ) -> ChartResult<()> {
        let (position, player) = self.resolve(position_id, player_name)?;

        let rank = match rank {
            Some(rank) => rank,
            None => self.next_rank()?,
        };
        debug!(
            "Adding {} (#{}) at {} with rank {}",
            player.name, player.number, position.code, rank
        );

        self.chart.append(ChartItem::new(rank, player, position));
        Ok(())
    }

    /// Remove the first entry for the player at the position
    ///
    /// Returns `Ok(None)` when the player is not on the chart there.
    pub fn remove(
        &mut self,
        position_id: &str,
        player_name: &str,
    ) -> ChartResult<Option<Arc<Player>>> {
        let (position, player) = self.resolve(position_id, player_name)?;

        let removed = self
            .chart
            .remove_first(|item| item.entry.player == player && item.entry.position == position);

        match removed {
            Some(item) => {
                debug!(
                    "Removed {} from {} (rank {})",
                    item.entry.player.name, position.code, item.rank
                );
                Ok(Some(item.entry.player))
            }
            None => {
                debug!("{} is not on the chart at {}", player.name, position.code);
                Ok(None)
            }
        }
    }

    /// Every item ranked below the player's entry at the position
    ///
    /// The baseline entry is matched by player name and position name. The
    /// result spans the whole chart, not only the same position, in stored
    /// order.
    pub fn backups(&self, position_id: &str, player_name: &str) -> ChartResult<Vec<ChartItem>> {
        let (position, player) = self.resolve(position_id, player_name)?;

        let baseline = self
            .chart
            .find_first(|item| {
                same_key(&item.entry.player.name, &player.name)
                    && same_key(&item.entry.position.name, &position.name)
            })
            .ok_or_else(|| ChartError::EntryNotFound {
                position: position.name.clone(),
                player: player.name.clone(),
            })?;

        let baseline_rank = baseline.rank;
        let backups = self.chart.filter(|item| item.rank > baseline_rank);
        debug!(
            "{} backups below {} at {} (rank {})",
            backups.len(),
            player.name,
            position.code,
            baseline_rank
        );
        Ok(backups)
    }

    /// Render the full chart as text; an empty chart renders as ""
    pub fn render(&self) -> String {
        ChartReport::new(&self.chart).to_string()
    }

    fn resolve(
        &self,
        position_id: &str,
        player_name: &str,
    ) -> ChartResult<(Arc<Position>, Arc<Player>)> {
        let position = self
            .positions
            .resolve(position_id)
            .ok_or_else(|| ChartError::PositionNotFound(position_id.trim().to_string()))?;
        let player = self
            .players
            .resolve(player_name)
            .ok_or_else(|| ChartError::PlayerNotFound(player_name.trim().to_string()))?;
        Ok((position, player))
    }

    fn next_rank(&self) -> ChartResult<i32> {
        let last_rank = self.chart.last().map_or(0, |item| item.rank);
        if last_rank <= 0 {
            return Ok(0);
        }
        last_rank
            .checked_add(1)
            .ok_or_else(|| ChartError::InvalidRank(format!("no rank follows {}", last_rank)))
    }
}
