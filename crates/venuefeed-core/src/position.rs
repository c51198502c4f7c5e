use serde::{Deserialize, Serialize};

/// A user position reported by a location source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Validated venue coordinates: finite and within WGS84 bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Parse a textual latitude/longitude pair.
    ///
    /// Returns `None` when either part fails to parse, is not finite, or lies
    /// outside `[-90, 90]` / `[-180, 180]`.
    #[must_use]
    pub fn parse(latitude: &str, longitude: &str) -> Option<Self> {
        let latitude = latitude.trim().parse::<f64>().ok()?;
        let longitude = longitude.trim().parse::<f64>().ok()?;

        if !latitude.is_finite() || !longitude.is_finite() {
            return None;
        }
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return None;
        }

        Some(Self {
            latitude,
            longitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_decimal_strings() {
        let c = Coordinates::parse("53.406", "-2.966").unwrap();
        assert!((c.latitude - 53.406).abs() < f64::EPSILON);
        assert!((c.longitude - -2.966).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_trims_whitespace() {
        assert!(Coordinates::parse(" 53.40 ", "\t-2.97").is_some());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Coordinates::parse("bad", "bad").is_none());
        assert!(Coordinates::parse("53.40", "").is_none());
    }

    #[test]
    fn parse_rejects_non_finite() {
        assert!(Coordinates::parse("NaN", "0").is_none());
        assert!(Coordinates::parse("0", "inf").is_none());
    }

    #[test]
    fn parse_rejects_out_of_range() {
        assert!(Coordinates::parse("91", "0").is_none());
        assert!(Coordinates::parse("0", "-180.5").is_none());
    }
}
