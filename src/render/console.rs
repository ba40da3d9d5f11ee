//! A render sink that prints every operation to stdout.

use crate::render::sink::RenderSink;
use crate::types::chart::ChartSpec;
use crate::types::notice::NoticeLevel;

/// Renders the dashboard as plain text on stdout. Every target exists, so
/// nothing is dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> ConsoleSink {
        ConsoleSink
    }
}

impl RenderSink for ConsoleSink {
    fn render_chart(&mut self, target: &str, spec: ChartSpec) {
        match spec.dataset_label {
            Some(label) => println!("[{}] {} chart: {}", target, spec.kind, label),
            None => println!("[{}] {} chart", target, spec.kind),
        }
        for (label, value) in spec.series.labels.iter().zip(&spec.series.values) {
            println!("  {label:>24} {value}");
        }
    }

    fn set_value(&mut self, target: &str, value: &str) {
        println!("[{target}] {value}");
    }

    fn notify(&mut self, level: NoticeLevel, message: &str) {
        println!("({level}) {message}");
    }

    fn alert(&mut self, message: &str) {
        println!("(alert) {message}");
    }
}
