//! Feature-influence bar charts.
//!
//! The explanation chart gives a qualitative sense of per-feature influence.
//! Bars are scaled to the largest absolute weight; signs are preserved so
//! protective features read as negative.

use crate::assessment::FeatureInfluence;

/// Render the influences as a horizontal ASCII bar chart.
///
/// `max_width` is the length of the longest bar in characters.
///
/// # Examples
///
/// ```
/// use hepatica_report::{FeatureInfluence, influence_chart_ascii};
///
/// let influences = vec![
///     FeatureInfluence::new("bmi".to_string(), 0.6),
///     FeatureInfluence::new("exercise".to_string(), -0.4),
/// ];
/// let chart = influence_chart_ascii(&influences, 20);
/// assert!(chart.contains("bmi"));
/// assert!(chart.contains("-0.400"));
/// ```
pub fn influence_chart_ascii(influences: &[FeatureInfluence], max_width: usize) -> String {
    if influences.is_empty() || max_width == 0 {
        return String::new();
    }

    let max_abs = influences
        .iter()
        .map(|i| i.weight.abs())
        .fold(0.0_f64, f64::max);
    let name_width = influences
        .iter()
        .map(|i| i.feature.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for influence in influences {
        let bar_len = if max_abs == 0.0 {
            0
        } else {
            ((influence.weight.abs() / max_abs) * max_width as f64).round() as usize
        };
        let glyph = if influence.weight < 0.0 { "-" } else { "#" };
        let bar = glyph.repeat(bar_len);
        out.push_str(&format!(
            "{:<name_width$}  {:<max_width$} {:+.3}\n",
            influence.feature, bar, influence.weight
        ));
    }
    out
}

/// Render the influences as a standalone SVG horizontal bar chart.
///
/// Positive bars extend right of the axis, negative bars left. Returns an
/// empty string for empty input or degenerate dimensions.
pub fn influence_chart_svg(influences: &[FeatureInfluence], width: u32, height: u32) -> String {
    if influences.is_empty() || width == 0 || height == 0 {
        return String::new();
    }

    let max_abs = influences
        .iter()
        .map(|i| i.weight.abs())
        .fold(0.0_f64, f64::max);
    if max_abs == 0.0 {
        return String::new();
    }

    let label_width = 140.0;
    let plot_width = f64::from(width) - label_width;
    let axis_x = label_width + plot_width / 2.0;
    let half_span = plot_width / 2.0;
    let row_height = f64::from(height) / influences.len() as f64;
    let bar_height = (row_height * 0.7).max(1.0);

    let mut body = String::new();
    for (row, influence) in influences.iter().enumerate() {
        let y = row as f64 * row_height + (row_height - bar_height) / 2.0;
        let length = (influence.weight.abs() / max_abs) * half_span;
        let (x, fill) = if influence.weight < 0.0 {
            (axis_x - length, "steelblue")
        } else {
            (axis_x, "indianred")
        };
        body.push_str(&format!(
            "<rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{length:.2}\" height=\"{bar_height:.2}\" fill=\"{fill}\" />"
        ));
        let text_y = y + bar_height * 0.75;
        body.push_str(&format!(
            "<text x=\"4\" y=\"{text_y:.2}\" font-size=\"12\" font-family=\"sans-serif\">{}</text>",
            influence.feature
        ));
    }
    body.push_str(&format!(
        "<line x1=\"{axis_x:.2}\" y1=\"0\" x2=\"{axis_x:.2}\" y2=\"{height}\" stroke=\"black\" stroke-width=\"1\" />"
    ));

    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\">{body}</svg>"
    )
}
