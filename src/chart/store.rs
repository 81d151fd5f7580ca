//! Depth chart storage
//!
//! A chart is an ordered list of `(rank, entry)` pairs rather than a map:
//! ranks repeat, and insertion order breaks ties between equal ranks.

use crate::catalog::{Player, Position};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// A player slotted at a position
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ChartEntry {
    pub player: Arc<Player>,
    pub position: Arc<Position>,
}

/// A ranked chart entry, the unit of storage
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ChartItem {
    pub rank: i32,
    pub entry: ChartEntry,
}

impl ChartItem {
    pub fn new(rank: i32, player: Arc<Player>, position: Arc<Position>) -> Self {
        Self {
            rank,
            entry: ChartEntry { player, position },
        }
    }
}

impl fmt::Display for ChartItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position:{}, Player: {} - {} - {}",
            self.rank, self.entry.position.code, self.entry.player.number, self.entry.player.name
        )
    }
}

/// The depth chart for one team
#[derive(Serialize, Debug, Clone)]
pub struct DepthChart {
    pub coach: String,
    pub updated_on: DateTime<Utc>,
    contents: Vec<ChartItem>,
}

impl DepthChart {
    pub fn new(coach: &str) -> Self {
        Self {
            coach: coach.to_string(),
            updated_on: Utc::now(),
            contents: Vec::new(),
        }
    }

    /// Append an item after every existing item
    pub fn append(&mut self, item: ChartItem) {
        self.contents.push(item);
        self.touch();
    }

    /// The most recently appended item
    pub fn last(&self) -> Option<&ChartItem> {
        self.contents.last()
    }

    pub fn find_first<F>(&self, predicate: F) -> Option<&ChartItem>
    where
        F: Fn(&ChartItem) -> bool,
    {
        self.contents.iter().find(|item| predicate(item))
    }

    /// Remove and return the first item matching `predicate`, keeping the
    /// order of everything else
    pub fn remove_first<F>(&mut self, predicate: F) -> Option<ChartItem>
    where
        F: Fn(&ChartItem) -> bool,
    {
        let idx = self.contents.iter().position(|item| predicate(item))?;
        let removed = self.contents.remove(idx);
        self.touch();
        Some(removed)
    }

    /// Clone out every item matching `predicate`, in stored order
    pub fn filter<F>(&self, predicate: F) -> Vec<ChartItem>
    where
        F: Fn(&ChartItem) -> bool,
    {
        self.contents
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChartItem> {
        self.contents.iter()
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    fn touch(&mut self) {
        self.updated_on = Utc::now();
    }
}

impl Default for DepthChart {
    fn default() -> Self {
        Self::new("")
    }
}

impl<'a> IntoIterator for &'a DepthChart {
    type Item = &'a ChartItem;
    type IntoIter = std::slice::Iter<'a, ChartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
