//! Chart series handed to rendering sinks
//!
//! A series is an ordered list of label/value points with no identity of
//! its own. It is rebuilt on demand and discarded after rendering.

use serde::{Deserialize, Serialize};

/// One labelled value in a chart series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// An ordered, renderer-agnostic chart series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartSeries {
    points: Vec<SeriesPoint>,
}

impl ChartSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        self.points.push(SeriesPoint {
            label: label.into(),
            value,
        });
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Largest value in the series, or 0.0 for an empty series
    pub fn max_value(&self) -> f64 {
        self.points.iter().map(|p| p.value).fold(0.0, f64::max)
    }

    /// Sum of all values
    pub fn total(&self) -> f64 {
        self.points.iter().map(|p| p.value).sum()
    }
}

impl FromIterator<SeriesPoint> for ChartSeries {
    fn from_iter<I: IntoIterator<Item = SeriesPoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_order() {
        let mut series = ChartSeries::new();
        series.push("b", 2.0);
        series.push("a", 1.0);
        assert_eq!(series.labels(), vec!["b", "a"]);
        assert_eq!(series.values(), vec![2.0, 1.0]);
        assert_eq!(series.max_value(), 2.0);
        assert_eq!(series.total(), 3.0);
    }

    #[test]
    fn test_empty_series() {
        let series = ChartSeries::new();
        assert!(series.is_empty());
        assert_eq!(series.max_value(), 0.0);
    }

    #[test]
    fn test_serializes_as_array() {
        let mut series = ChartSeries::new();
        series.push("2025-01", 12.5);
        let json = serde_json::to_string(&series).unwrap();
        assert_eq!(json, r#"[{"label":"2025-01","value":12.5}]"#);
    }
}
