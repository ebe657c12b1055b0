//! Horizontal bar chart for opportunity values and category totals.

use super::{check_points, fmt_coord, ChartError, DataPoint};
use html_escape::encode_text;

const WIDTH: f64 = 420.0;
const BAR_HEIGHT: f64 = 22.0;
const BAR_GAP: f64 = 10.0;
const LABEL_WIDTH: f64 = 140.0;
const TOP_PAD: f64 = 8.0;

/// Render labeled horizontal bars scaled to the largest value.
pub fn bar_chart(points: &[DataPoint], color: &str) -> Result<String, ChartError> {
    check_points(points)?;

    let max = points
        .iter()
        .map(|p| p.value)
        .fold(0.0_f64, f64::max)
        .max(1.0);
    let track_width = WIDTH - LABEL_WIDTH - 16.0;
    let height = TOP_PAD * 2.0 + points.len() as f64 * (BAR_HEIGHT + BAR_GAP) - BAR_GAP;

    let mut svg = format!(
        r#"<svg viewBox="0 0 {w} {h}" width="{w}" height="{h}" xmlns="http://www.w3.org/2000/svg">"#,
        w = WIDTH,
        h = fmt_coord(height)
    );

    for (index, point) in points.iter().enumerate() {
        let y = TOP_PAD + index as f64 * (BAR_HEIGHT + BAR_GAP);
        let width = track_width * (point.value / max);
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="12" text-anchor="end">{}</text>"#,
            fmt_coord(LABEL_WIDTH - 6.0),
            fmt_coord(y + BAR_HEIGHT * 0.7),
            encode_text(&point.label)
        ));
        svg.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" rx="3"/>"#,
            fmt_coord(LABEL_WIDTH),
            fmt_coord(y),
            fmt_coord(width),
            fmt_coord(BAR_HEIGHT),
            color
        ));
    }

    svg.push_str("</svg>");
    Ok(svg)
}
