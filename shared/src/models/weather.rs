//! Weather feed models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Point-in-time wind reading used for the current snapshot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NowReading {
    pub wind_speed_kmh: f64,
    pub wind_direction_degrees: f64,
}

/// One day's weather observation for a location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherObservation {
    pub date: NaiveDate,
    pub wind_speed_max_kmh: f64,
    pub wind_direction_degrees: f64,
    /// Absent when the feed carries no marine data for the day
    pub swell_height_max_meters: Option<f64>,
}

/// Weather feed for one location as produced by the fetch collaborator
///
/// `daily` is expected to arrive chronologically ascending; the assembler
/// preserves the order it is given.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LocationFeed {
    pub now: Option<NowReading>,
    pub daily: Vec<WeatherObservation>,
}
