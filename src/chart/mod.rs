//! Depth chart storage, management and rendering
//!
//! - [`store`] - Ordered `(rank, entry)` storage
//! - [`manager`] - Add/remove/backups operations over a chart
//! - [`render`] - Unit-grouped text report

pub mod manager;
pub mod render;
pub mod store;

pub use manager::DepthChartManager;
pub use render::ChartReport;
pub use store::{ChartEntry, ChartItem, DepthChart};
