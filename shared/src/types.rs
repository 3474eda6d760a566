//! Common types used across the forecast pipeline

use serde::{Deserialize, Serialize};

/// Eight-point compass rose
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CompassPoint {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl CompassPoint {
    /// Convert a bearing in degrees to the nearest compass point
    ///
    /// Bearings at or past 360 wrap around to north.
    pub fn from_degrees(degrees: f64) -> Self {
        const ROSE: [CompassPoint; 8] = [
            CompassPoint::N,
            CompassPoint::NE,
            CompassPoint::E,
            CompassPoint::SE,
            CompassPoint::S,
            CompassPoint::SW,
            CompassPoint::W,
            CompassPoint::NW,
        ];
        let sector = (degrees / 45.0).round() as usize % 8;
        ROSE[sector]
    }
}

impl std::fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CompassPoint::N => "N",
            CompassPoint::NE => "NE",
            CompassPoint::E => "E",
            CompassPoint::SE => "SE",
            CompassPoint::S => "S",
            CompassPoint::SW => "SW",
            CompassPoint::W => "W",
            CompassPoint::NW => "NW",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal_bearings() {
        assert_eq!(CompassPoint::from_degrees(0.0), CompassPoint::N);
        assert_eq!(CompassPoint::from_degrees(45.0), CompassPoint::NE);
        assert_eq!(CompassPoint::from_degrees(90.0), CompassPoint::E);
        assert_eq!(CompassPoint::from_degrees(135.0), CompassPoint::SE);
        assert_eq!(CompassPoint::from_degrees(180.0), CompassPoint::S);
        assert_eq!(CompassPoint::from_degrees(225.0), CompassPoint::SW);
        assert_eq!(CompassPoint::from_degrees(270.0), CompassPoint::W);
        assert_eq!(CompassPoint::from_degrees(315.0), CompassPoint::NW);
    }

    #[test]
    fn test_rounding_to_nearest_point() {
        assert_eq!(CompassPoint::from_degrees(350.0), CompassPoint::N);
        assert_eq!(CompassPoint::from_degrees(20.0), CompassPoint::N);
        assert_eq!(CompassPoint::from_degrees(30.0), CompassPoint::NE);
        assert_eq!(CompassPoint::from_degrees(100.0), CompassPoint::E);
    }

    #[test]
    fn test_full_circle_wraps_to_north() {
        assert_eq!(CompassPoint::from_degrees(360.0), CompassPoint::N);
    }

    #[test]
    fn test_display_matches_wire_labels() {
        assert_eq!(CompassPoint::NE.to_string(), "NE");
        assert_eq!(CompassPoint::SW.to_string(), "SW");
    }
}
