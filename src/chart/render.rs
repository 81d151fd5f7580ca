//! Text report of a depth chart

use super::store::DepthChart;
use std::fmt;

const SEPARATOR: &str = "--------";

/// Displays a chart grouped by unit
///
/// Units appear in the order they are first seen in the chart. Within a
/// unit, items keep stored order and a separator precedes every change of
/// position code.
pub struct ChartReport<'a> {
    chart: &'a DepthChart,
}

impl<'a> ChartReport<'a> {
    pub fn new(chart: &'a DepthChart) -> Self {
        Self { chart }
    }

    /// Distinct units in first-seen order
    fn units(&self) -> Vec<&'a str> {
        let mut units: Vec<&'a str> = Vec::new();
        for item in self.chart {
            let unit = item.entry.position.unit.as_str();
            if !units.contains(&unit) {
                units.push(unit);
            }
        }
        units
    }
}

impl fmt::Display for ChartReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for unit in self.units() {
            writeln!(f, "{}", unit)?;

            let mut last_code: Option<&str> = None;
            for item in self.chart.iter().filter(|i| i.entry.position.unit == unit) {
                let code = item.entry.position.code.as_str();
                if last_code != Some(code) {
                    writeln!(f, "{}", SEPARATOR)?;
                    last_code = Some(code);
                }
                writeln!(f, "\t|--- {}", item)?;
            }
        }
        Ok(())
    }
}
