//! Deterministic, offline SVG chart generation.
//!
//! Every generator is a pure function of its data. Call sites never let one
//! chart's failure reach a sibling: `render_all` wraps each chart in its own
//! result and substitutes a textual fallback card, and the parallel fan-out
//! preserves template order regardless of completion order.

pub mod bar;
pub mod donut;
pub mod radar;

pub use bar::bar_chart;
pub use donut::donut_chart;
pub use radar::radar_chart;

use crate::reports::anchors;
use html_escape::encode_text;
use log::warn;
use rayon::prelude::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    #[error("chart has no data points")]
    EmptyData,
    #[error("invalid value {value} for {label:?}")]
    InvalidValue { label: String, value: f64 },
}

/// A labeled data point
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    pub fn new(label: &str, value: f64) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

pub(crate) fn check_points(points: &[DataPoint]) -> Result<(), ChartError> {
    if points.is_empty() {
        return Err(ChartError::EmptyData);
    }
    for point in points {
        if !point.value.is_finite() || point.value < 0.0 {
            return Err(ChartError::InvalidValue {
                label: point.label.clone(),
                value: point.value,
            });
        }
    }
    Ok(())
}

/// Wrap a chart result in its container, or degrade to a fallback card
pub fn render_or_fallback(title: &str, result: Result<String, ChartError>) -> String {
    match result {
        Ok(svg) => format!(
            r#"<figure class="{}" role="figure" aria-label="{}">{}</figure>"#,
            anchors::CLASS_CHART_CONTAINER,
            encode_text(title),
            svg
        ),
        Err(e) => {
            warn!("chart {:?} failed: {}", title, e);
            format!(
                r#"<div class="chart-fallback">Visualization unavailable: {}</div>"#,
                encode_text(title)
            )
        }
    }
}

pub type ChartThunk = Box<dyn Fn() -> Result<String, ChartError> + Send + Sync>;

/// Render independent charts concurrently. Each chart is isolated; output
/// order matches input order, not completion order.
pub fn render_all(charts: Vec<(String, ChartThunk)>) -> Vec<String> {
    charts
        .into_par_iter()
        .map(|(title, thunk)| render_or_fallback(&title, thunk()))
        .collect()
}

pub(crate) fn fmt_coord(value: f64) -> String {
    format!("{:.1}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_on_error() {
        let html = render_or_fallback("Score Radar", Err(ChartError::EmptyData));
        assert!(html.contains("chart-fallback"));
        assert!(html.contains("Visualization unavailable: Score Radar"));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn test_success_wrapped_in_container() {
        let html = render_or_fallback("Score Radar", Ok("<svg></svg>".to_string()));
        assert!(html.contains("svg-chart-container"));
        assert!(html.contains(r#"role="figure""#));
        assert!(html.contains("<svg></svg>"));
    }

    #[test]
    fn test_render_all_isolates_failures_and_keeps_order() {
        let charts: Vec<(String, ChartThunk)> = vec![
            ("first".to_string(), Box::new(|| Ok("<svg>1</svg>".to_string()))),
            ("second".to_string(), Box::new(|| Err(ChartError::EmptyData))),
            ("third".to_string(), Box::new(|| Ok("<svg>3</svg>".to_string()))),
        ];
        let rendered = render_all(charts);
        assert_eq!(rendered.len(), 3);
        assert!(rendered[0].contains("<svg>1</svg>"));
        assert!(rendered[1].contains("chart-fallback"));
        assert!(rendered[2].contains("<svg>3</svg>"));
    }

    #[test]
    fn test_check_points_rejects_nan() {
        let points = vec![DataPoint::new("x", f64::NAN)];
        assert!(matches!(
            check_points(&points),
            Err(ChartError::InvalidValue { .. })
        ));
    }
}
