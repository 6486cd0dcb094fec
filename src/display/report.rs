//! Report formatting utilities for terminal output
//!
//! Small text helpers shared by the reports, plus a horizontal bar chart
//! renderer for any [`ChartSeries`].

use crate::models::ChartSeries;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to at most `max_len` characters, with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Render a series as horizontal bars scaled to the largest value
///
/// When `show_share` is set each row also shows its share of the series
/// total, which is what a pie chart would convey.
pub fn format_series_chart(series: &ChartSeries, width: usize, show_share: bool) -> String {
    if series.is_empty() {
        return "Nothing to chart.\n".to_string();
    }

    let label_width = series
        .labels()
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .min(20);
    let max = series.max_value();
    let total = series.total();

    let mut output = String::new();
    for point in series.points() {
        let label = truncate(&point.label, label_width);
        let padding = " ".repeat(label_width.saturating_sub(label.chars().count()));
        output.push_str(&format!(
            "{}{} │{} {:.2}",
            label,
            padding,
            format_bar(point.value, max, width),
            point.value
        ));
        if show_share {
            let share = if total > 0.0 { point.value / total * 100.0 } else { 0.0 };
            output.push_str(&format!(" ({})", format_percentage(share)));
        }
        output.push('\n');
    }
    output
}
