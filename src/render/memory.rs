//! A render sink that records operations for later inspection.

use crate::render::sink::RenderSink;
use crate::types::chart::ChartSpec;
use crate::types::notice::NoticeLevel;
use log::warn;
use std::collections::HashMap;

/// Records every render operation. Useful for tests and for headless
/// embeddings that want to read back what would have been shown.
///
/// By default every target exists; [`MemorySink::with_targets`] restricts the
/// surface to model a page that embeds only some of the widgets.
#[derive(Debug, Default)]
pub struct MemorySink {
    restricted_to: Option<Vec<String>>,
    /// Chart mounted per target, replaced wholesale on redraw.
    pub charts: HashMap<String, ChartSpec>,
    /// Latest value shown per target.
    pub values: HashMap<String, String>,
    /// Notifications, in order of appearance.
    pub notices: Vec<(NoticeLevel, String)>,
    /// Alerts, in order of appearance.
    pub alerts: Vec<String>,
    /// Chart draws, counting replacements.
    pub charts_rendered: usize,
}

impl MemorySink {
    /// A sink on which every target exists.
    pub fn new() -> MemorySink {
        MemorySink::default()
    }

    /// A sink carrying only the given targets; operations on any other
    /// target are logged no-ops.
    pub fn with_targets<I, S>(targets: I) -> MemorySink
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MemorySink {
            restricted_to: Some(targets.into_iter().map(Into::into).collect()),
            ..MemorySink::default()
        }
    }

    fn has_target(&self, target: &str) -> bool {
        match &self.restricted_to {
            Some(targets) => targets.iter().any(|known| known == target),
            None => true,
        }
    }
}

impl RenderSink for MemorySink {
    fn render_chart(&mut self, target: &str, spec: ChartSpec) {
        if !self.has_target(target) {
            warn!("Display target '{}' not present, chart dropped", target);
            return;
        }
        self.charts_rendered += 1;
        self.charts.insert(target.to_string(), spec);
    }

    fn set_value(&mut self, target: &str, value: &str) {
        if !self.has_target(target) {
            warn!("Display target '{}' not present, value dropped", target);
            return;
        }
        self.values.insert(target.to_string(), value.to_string());
    }

    fn notify(&mut self, level: NoticeLevel, message: &str) {
        self.notices.push((level, message.to_string()));
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::chart::{ChartKind, ChartSeries};

    fn spec(values: Vec<u32>) -> ChartSpec {
        ChartSpec {
            kind: ChartKind::Line,
            dataset_label: None,
            series: ChartSeries::new(&["a", "b"], values),
        }
    }

    #[test]
    fn redraw_replaces_the_chart_wholesale() {
        let mut sink = MemorySink::new();
        sink.render_chart("revenueChart", spec(vec![1, 2]));
        sink.render_chart("revenueChart", spec(vec![3, 4]));

        assert_eq!(sink.charts.len(), 1);
        assert_eq!(sink.charts_rendered, 2);
        assert_eq!(sink.charts["revenueChart"].series.values, vec![3, 4]);
    }

    #[test]
    fn absent_targets_are_silent_no_ops() {
        let mut sink = MemorySink::with_targets(["revenueChart"]);
        sink.render_chart("originChart", spec(vec![1, 2]));
        sink.set_value("revenue-value", "$1");

        assert!(sink.charts.is_empty());
        assert!(sink.values.is_empty());

        sink.render_chart("revenueChart", spec(vec![1, 2]));
        assert_eq!(sink.charts.len(), 1);
    }
}
