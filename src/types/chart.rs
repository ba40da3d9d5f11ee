//! Chart-ready series and the declarative specs handed to a render sink.

use std::fmt;

/// The chart renderers the dashboard uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
    Doughnut,
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
            ChartKind::Doughnut => "doughnut",
        };
        f.write_str(name)
    }
}

/// A labeled series of non-negative integers (dollar amounts or percentages).
///
/// Labels and values are index-aligned and always the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<u32>,
}

impl ChartSeries {
    pub fn new(labels: &[&str], values: Vec<u32>) -> ChartSeries {
        ChartSeries {
            labels: labels.iter().map(|label| label.to_string()).collect(),
            values,
        }
    }
}

/// Everything a render sink needs to draw one chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    /// Dataset label shown on axis charts ("Ingresos ($)"); pie and doughnut
    /// charts label through the series itself.
    pub dataset_label: Option<&'static str>,
    pub series: ChartSeries,
}
