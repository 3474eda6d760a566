//! Forecast document models
//!
//! These are the wire types serialized for the rendering collaborator. All of
//! them are built fresh per engine invocation and never mutated afterwards.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::types::CompassPoint;

use super::species::{Species, SpeciesSuitability};

/// Fishing advice derived solely from the score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Recommendation {
    #[serde(rename = "GO")]
    Go,
    #[serde(rename = "MAYBE")]
    Maybe,
    #[serde(rename = "DON'T GO")]
    DontGo,
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Recommendation::Go => write!(f, "GO"),
            Recommendation::Maybe => write!(f, "MAYBE"),
            Recommendation::DontGo => write!(f, "DON'T GO"),
        }
    }
}

/// Approximate tide movement for a day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TideState {
    RunIn,
    RunOut,
}

impl std::fmt::Display for TideState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TideState::RunIn => write!(f, "run-in"),
            TideState::RunOut => write!(f, "run-out"),
        }
    }
}

/// Tide outlook for a day
///
/// Not derived from tide tables; `approximate` is always serialized so the
/// renderer can surface the caveat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TideOutlook {
    pub state: TideState,
    pub label: String,
    pub approximate: bool,
}

/// Live wind carried by the current snapshot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WindNow {
    pub speed_kmh: f64,
    pub direction_compass: CompassPoint,
    pub direction_degrees: f64,
}

/// Daily maximum wind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WindDaily {
    pub max_kmh: f64,
    pub direction_compass: CompassPoint,
    pub direction_degrees: f64,
}

/// Daily maximum swell
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SwellSummary {
    pub max_meters: Option<f64>,
}

/// One day's assembled forecast for a location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub score: u8,
    pub recommendation: Recommendation,
    pub wind: WindDaily,
    pub swell: SwellSummary,
    pub tide: TideOutlook,
    pub species_top3: Vec<Species>,
    pub species_ranked: Vec<SpeciesSuitability>,
}

/// The "now" entry: live wind over today's daily derivations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentSnapshot {
    pub score: u8,
    pub recommendation: Recommendation,
    pub wind: WindNow,
    pub swell: SwellSummary,
    pub tide: TideOutlook,
    pub best_times: Vec<String>,
    pub species_top3: Vec<Species>,
    pub species_ranked: Vec<SpeciesSuitability>,
}

/// Full forecast for one location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationForecast {
    pub id: String,
    pub name: String,
    pub region: String,
    pub updated_at: DateTime<Utc>,
    pub current: CurrentSnapshot,
    /// At most seven entries, chronologically ascending
    pub daily: Vec<DailyForecast>,
}

/// Document handed to the rendering collaborator, keyed by location id
pub type ForecastDocument = HashMap<String, LocationForecast>;
