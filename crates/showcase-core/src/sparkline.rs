//! Sparklines
//!
//! Dashboard series and the SVG path geometry used to draw them.

/// Number of points in the sessions series
pub const SERIES_LEN: usize = 28;

/// Synthetic daily sessions: a gentle sine on an upward trend
pub fn sessions() -> Vec<f64> {
    (0..SERIES_LEN)
        .map(|i| {
            let i = i as f64;
            40.0 + (i / 2.0).sin() * 8.0 + i * 0.6
        })
        .collect()
}

/// Conversions derived from sessions, floored at 30
pub fn conversions(sessions: &[f64]) -> Vec<f64> {
    sessions.iter().map(|y| (y * 0.82).max(30.0)).collect()
}

/// Line and filled-area paths for an SVG `viewBox="0 0 width height"`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SparkPath {
    pub line: String,
    pub area: String,
}

/// Scale `values` into the box, left to right, larger values higher.
/// A flat series is drawn through the vertical middle.
pub fn spark_path(values: &[f64], width: f64, height: f64) -> SparkPath {
    if values.is_empty() {
        return SparkPath::default();
    }

    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
    let span = max - min;
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };
    let y_of = |v: f64| {
        if span == 0.0 {
            height / 2.0
        } else {
            height - (v - min) / span * height
        }
    };

    let points: Vec<String> = values
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{:.1},{:.1}", i as f64 * step, y_of(*v)))
        .collect();
    let line = format!("M{}", points.join(" L"));
    let last_x = (values.len() - 1) as f64 * step;
    let area = format!("{} L{:.1},{:.1} L0.0,{:.1} Z", line, last_x, height, height);
    SparkPath { line, area }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_shapes() {
        let s = sessions();
        assert_eq!(s.len(), SERIES_LEN);
        assert_eq!(s[0], 40.0);
        let c = conversions(&s);
        assert_eq!(c.len(), SERIES_LEN);
        assert!(c.iter().all(|y| *y >= 30.0));
        assert_eq!(c[0], 32.8);
    }

    #[test]
    fn test_path_geometry() {
        let path = spark_path(&[0.0, 5.0, 10.0], 100.0, 50.0);
        assert_eq!(path.line, "M0.0,50.0 L50.0,25.0 L100.0,0.0");
        assert_eq!(path.area, "M0.0,50.0 L50.0,25.0 L100.0,0.0 L100.0,50.0 L0.0,50.0 Z");
    }

    #[test]
    fn test_flat_and_empty_series() {
        let flat = spark_path(&[7.0, 7.0], 10.0, 20.0);
        assert_eq!(flat.line, "M0.0,10.0 L10.0,10.0");
        assert_eq!(spark_path(&[], 10.0, 20.0), SparkPath::default());
    }
}
