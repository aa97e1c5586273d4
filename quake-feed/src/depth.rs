use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bounds (exclusive, km) of every bucket except the last.
pub const DEPTH_THRESHOLDS_KM: [f64; 5] = [10.0, 30.0, 50.0, 70.0, 90.0];

/// Marker color for an event, keyed by its depth in kilometers.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorBucket {
    Blue,
    Green,
    Yellow,
    Orange,
    Pink,
    Red,
}

impl ColorBucket {
    /// All buckets, shallowest first.
    pub const ALL: [ColorBucket; 6] = [
        ColorBucket::Blue,
        ColorBucket::Green,
        ColorBucket::Yellow,
        ColorBucket::Orange,
        ColorBucket::Pink,
        ColorBucket::Red,
    ];

    /// Pick the bucket for a depth. Total: anything not below 90 km,
    /// including NaN, lands in `Red`.
    pub fn classify(depth_km: f64) -> ColorBucket {
        DEPTH_THRESHOLDS_KM
            .iter()
            .position(|threshold| depth_km < *threshold)
            .map(|i| ColorBucket::ALL[i])
            .unwrap_or(ColorBucket::Red)
    }

    pub fn css_color(&self) -> &'static str {
        match self {
            ColorBucket::Blue => "blue",
            ColorBucket::Green => "green",
            ColorBucket::Yellow => "yellow",
            ColorBucket::Orange => "orange",
            ColorBucket::Pink => "pink",
            ColorBucket::Red => "red",
        }
    }

    /// Depth range text shown in the legend.
    pub fn legend_label(&self) -> &'static str {
        match self {
            ColorBucket::Blue => "-10 - 10",
            ColorBucket::Green => " 10 - 30",
            ColorBucket::Yellow => " 30 - 50",
            ColorBucket::Orange => " 50 - 70",
            ColorBucket::Pink => " 70 - 90",
            ColorBucket::Red => "90 & above",
        }
    }
}

impl fmt::Display for ColorBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_color())
    }
}

#[cfg(test)]
mod tests {
    use super::ColorBucket;

    #[test]
    fn test_bucket_ranges() {
        let cases = [
            (-3.5, ColorBucket::Blue),
            (0.0, ColorBucket::Blue),
            (9.99, ColorBucket::Blue),
            (12.0, ColorBucket::Green),
            (45.0, ColorBucket::Yellow),
            (69.9, ColorBucket::Orange),
            (75.0, ColorBucket::Pink),
            (560.2, ColorBucket::Red),
        ];
        for (depth, expected) in cases {
            assert_eq!(ColorBucket::classify(depth), expected, "depth {}", depth);
        }
    }

    #[test]
    fn test_thresholds_fall_into_higher_bucket() {
        assert_eq!(ColorBucket::classify(10.0), ColorBucket::Green);
        assert_eq!(ColorBucket::classify(30.0), ColorBucket::Yellow);
        assert_eq!(ColorBucket::classify(50.0), ColorBucket::Orange);
        assert_eq!(ColorBucket::classify(70.0), ColorBucket::Pink);
        assert_eq!(ColorBucket::classify(90.0), ColorBucket::Red);
    }

    #[test]
    fn test_non_finite_depths() {
        assert_eq!(ColorBucket::classify(f64::NEG_INFINITY), ColorBucket::Blue);
        assert_eq!(ColorBucket::classify(f64::INFINITY), ColorBucket::Red);
        assert_eq!(ColorBucket::classify(f64::NAN), ColorBucket::Red);
    }

    #[test]
    fn test_colors_and_labels() {
        let colors: Vec<&str> = ColorBucket::ALL.iter().map(|b| b.css_color()).collect();
        assert_eq!(colors, ["blue", "green", "yellow", "orange", "pink", "red"]);
        assert_eq!(ColorBucket::Red.legend_label(), "90 & above");
        assert_eq!(ColorBucket::Yellow.to_string(), "yellow");
    }
}
