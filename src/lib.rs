//! Depth Chart Library
//!
//! This library maintains a team's depth chart: for every position, the
//! ordered list of players eligible to play it, from starter down through
//! the backups.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────────┐     ┌─────────────────┐
//! │  Command script │────▶│ DepthChartManager│────▶│   DepthChart    │
//! │  (file / stdin) │     │ add/remove/...   │     │ (rank, entry)[] │
//! └─────────────────┘     └──────────────────┘     └─────────────────┘
//!                                 │
//!                                 ▼
//!                         ┌──────────────────┐
//!                         │ Position catalog │  (code/name → Position)
//!                         │ Player catalog   │  (name → Player)
//!                         └──────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`catalog`] - Position and player lookups
//! - [`chart`] - Chart storage, the manager, and the text report
//! - [`script`] - Command processing for the CLI
//! - [`error`] - Error types

pub mod catalog;
pub mod chart;
pub mod error;
pub mod script;

pub use catalog::{
    Player, PlayerCatalog, Position, PositionCatalog, StaticPlayerCatalog, StaticPositionCatalog,
};
pub use chart::{ChartEntry, ChartItem, ChartReport, DepthChart, DepthChartManager};
pub use error::{ChartError, ChartResult};
pub use script::{process_commands, process_script_file, OutputFormat, ProcessingStats};
