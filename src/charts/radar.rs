//! Radar (spider) chart for chapter and dimension scores.

use super::{check_points, fmt_coord, ChartError, DataPoint};
use html_escape::encode_text;
use std::f64::consts::PI;

const SIZE: f64 = 320.0;
const CENTER: f64 = SIZE / 2.0;
const RADIUS: f64 = 110.0;
const RINGS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

/// Render scores (0-100) on radial axes. At least three axes are needed for
/// a readable polygon; fewer is an error the caller degrades on.
pub fn radar_chart(points: &[DataPoint], color: &str) -> Result<String, ChartError> {
    check_points(points)?;
    if points.len() < 3 {
        return Err(ChartError::InvalidValue {
            label: "axis count".to_string(),
            value: points.len() as f64,
        });
    }

    let count = points.len();
    let angle_of = |index: usize| -PI / 2.0 + (index as f64) * 2.0 * PI / (count as f64);

    let mut svg = format!(
        r#"<svg viewBox="0 0 {size} {size}" width="{size}" height="{size}" xmlns="http://www.w3.org/2000/svg">"#,
        size = SIZE
    );

    for ring in RINGS {
        let ring_points: Vec<String> = (0..count)
            .map(|i| {
                let angle = angle_of(i);
                format!(
                    "{},{}",
                    fmt_coord(CENTER + RADIUS * ring * angle.cos()),
                    fmt_coord(CENTER + RADIUS * ring * angle.sin())
                )
            })
            .collect();
        svg.push_str(&format!(
            r##"<polygon points="{}" fill="none" stroke="#d0d7de" stroke-width="1"/>"##,
            ring_points.join(" ")
        ));
    }

    let mut value_points = Vec::with_capacity(count);
    for (index, point) in points.iter().enumerate() {
        let angle = angle_of(index);
        let fraction = (point.value / 100.0).clamp(0.0, 1.0);
        value_points.push(format!(
            "{},{}",
            fmt_coord(CENTER + RADIUS * fraction * angle.cos()),
            fmt_coord(CENTER + RADIUS * fraction * angle.sin())
        ));

        let label_x = CENTER + (RADIUS + 24.0) * angle.cos();
        let label_y = CENTER + (RADIUS + 24.0) * angle.sin();
        svg.push_str(&format!(
            r##"<line x1="{cx}" y1="{cy}" x2="{x}" y2="{y}" stroke="#d0d7de" stroke-width="1"/>"##,
            cx = fmt_coord(CENTER),
            cy = fmt_coord(CENTER),
            x = fmt_coord(CENTER + RADIUS * angle.cos()),
            y = fmt_coord(CENTER + RADIUS * angle.sin()),
        ));
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="11" text-anchor="middle">{}</text>"#,
            fmt_coord(label_x),
            fmt_coord(label_y),
            encode_text(&point.label)
        ));
    }

    svg.push_str(&format!(
        r#"<polygon points="{}" fill="{color}" fill-opacity="0.35" stroke="{color}" stroke-width="2"/>"#,
        value_points.join(" "),
        color = color
    ));
    svg.push_str("</svg>");
    Ok(svg)
}
