//! Donut chart for category share-of-total.

use super::{check_points, fmt_coord, ChartError, DataPoint};
use html_escape::encode_text;

const SIZE: f64 = 220.0;
const CENTER: f64 = SIZE / 2.0;
const RADIUS: f64 = 80.0;
const STROKE: f64 = 26.0;

const PALETTE: [&str; 6] = [
    "#2b6cb0", "#2f855a", "#b7791f", "#9b2c2c", "#6b46c1", "#2c7a7b",
];

/// Render value shares as donut segments via stroke-dasharray offsets.
/// Zero-total input is an error; zero-valued points render as empty
/// segments.
pub fn donut_chart(points: &[DataPoint]) -> Result<String, ChartError> {
    check_points(points)?;
    let total: f64 = points.iter().map(|p| p.value).sum();
    if total <= 0.0 {
        return Err(ChartError::InvalidValue {
            label: "total".to_string(),
            value: total,
        });
    }

    let circumference = 2.0 * std::f64::consts::PI * RADIUS;
    let mut svg = format!(
        r#"<svg viewBox="0 0 {size} {size}" width="{size}" height="{size}" xmlns="http://www.w3.org/2000/svg">"#,
        size = SIZE
    );

    let mut offset = 0.0;
    for (index, point) in points.iter().enumerate() {
        let fraction = point.value / total;
        let length = circumference * fraction;
        svg.push_str(&format!(
            r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="none" stroke="{color}" stroke-width="{stroke}" stroke-dasharray="{len} {rest}" stroke-dashoffset="{offset}" transform="rotate(-90 {cx} {cy})"><title>{title}</title></circle>"#,
            cx = fmt_coord(CENTER),
            cy = fmt_coord(CENTER),
            r = fmt_coord(RADIUS),
            color = PALETTE[index % PALETTE.len()],
            stroke = fmt_coord(STROKE),
            len = fmt_coord(length),
            rest = fmt_coord(circumference - length),
            offset = fmt_coord(-offset),
            title = encode_text(&point.label),
        ));
        offset += length;
    }

    svg.push_str("</svg>");
    Ok(svg)
}
