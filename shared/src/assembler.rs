//! Per-location and batch forecast assembly

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::ForecastError;
use crate::models::{
    CurrentSnapshot, DailyForecast, ForecastDocument, Location, LocationFeed, LocationForecast,
    NowReading, SwellSummary, WeatherObservation, WindDaily, WindNow,
};
use crate::scoring::{rank_species, recommendation_from_score, score_from_wind, tide_outlook};
use crate::types::CompassPoint;
use crate::validation::{normalize_direction, validate_swell_height, validate_wind_speed};

/// Maximum number of days carried in a location's daily window
pub const MAX_DAILY_DAYS: usize = 7;

const BEST_TIMES: [&str; 2] = ["Dawn", "Dusk"];

/// A location whose assembly failed
#[derive(Debug, Clone, PartialEq)]
pub struct LocationFailure {
    pub location_id: String,
    pub error: ForecastError,
}

/// Outcome of building a forecast document across locations
///
/// One location's failure never empties the document; healthy locations are
/// returned alongside the failure list.
#[derive(Debug, Clone)]
pub struct DocumentBuild {
    pub document: ForecastDocument,
    pub failures: Vec<LocationFailure>,
}

/// Assemble the forecast for one location from its weather feed
///
/// Observations are taken in the order given, capped at [`MAX_DAILY_DAYS`];
/// the feed contract says they arrive chronologically ascending. `today` and
/// `updated_at` come from the caller so the engine never reads the clock.
pub fn assemble_location(
    location: &Location,
    now: Option<&NowReading>,
    observations: &[WeatherObservation],
    today: NaiveDate,
    updated_at: DateTime<Utc>,
) -> Result<LocationForecast, ForecastError> {
    let now = sanitize_now(&location.id, now)?;

    let mut daily = Vec::with_capacity(observations.len().min(MAX_DAILY_DAYS));
    for obs in observations.iter().take(MAX_DAILY_DAYS) {
        let obs = sanitize_observation(&location.id, obs)?;
        daily.push(daily_forecast(&obs));
    }

    let current = current_snapshot(&now, today, &daily);

    Ok(LocationForecast {
        id: location.id.clone(),
        name: location.name.clone(),
        region: location.region.clone(),
        updated_at,
        current,
        daily,
    })
}

/// Build the forecast document for every location, collecting failures
pub fn build_document(
    feeds: &[(Location, LocationFeed)],
    today: NaiveDate,
    updated_at: DateTime<Utc>,
) -> DocumentBuild {
    let mut document = ForecastDocument::new();
    let mut failures = Vec::new();

    for (location, feed) in feeds {
        match assemble_location(location, feed.now.as_ref(), &feed.daily, today, updated_at) {
            Ok(forecast) => {
                document.insert(location.id.clone(), forecast);
            }
            Err(error) => failures.push(LocationFailure {
                location_id: location.id.clone(),
                error,
            }),
        }
    }

    DocumentBuild { document, failures }
}

fn daily_forecast(obs: &WeatherObservation) -> DailyForecast {
    let score = score_from_wind(obs.wind_speed_max_kmh);
    let ranking = rank_species(score, Some(obs.wind_speed_max_kmh), obs.swell_height_max_meters);

    DailyForecast {
        date: obs.date,
        score,
        recommendation: recommendation_from_score(score),
        wind: WindDaily {
            max_kmh: obs.wind_speed_max_kmh,
            direction_compass: CompassPoint::from_degrees(obs.wind_direction_degrees),
            direction_degrees: obs.wind_direction_degrees,
        },
        swell: SwellSummary {
            max_meters: obs.swell_height_max_meters,
        },
        tide: tide_outlook(obs.date),
        species_top3: ranking.top3,
        species_ranked: ranking.ranked,
    }
}

/// Derive the current snapshot
///
/// When today's daily entry exists its derivations are reused and only the
/// wind is overlaid with the live reading; otherwise everything comes from the
/// now-reading alone, with swell absent.
fn current_snapshot(now: &NowReading, today: NaiveDate, daily: &[DailyForecast]) -> CurrentSnapshot {
    let wind = WindNow {
        speed_kmh: now.wind_speed_kmh,
        direction_compass: CompassPoint::from_degrees(now.wind_direction_degrees),
        direction_degrees: now.wind_direction_degrees,
    };

    if let Some(entry) = daily.iter().find(|d| d.date == today) {
        return CurrentSnapshot {
            score: entry.score,
            recommendation: entry.recommendation,
            wind,
            swell: entry.swell,
            tide: entry.tide.clone(),
            best_times: best_times(),
            species_top3: entry.species_top3.clone(),
            species_ranked: entry.species_ranked.clone(),
        };
    }

    let score = score_from_wind(now.wind_speed_kmh);
    let ranking = rank_species(score, Some(now.wind_speed_kmh), None);
    CurrentSnapshot {
        score,
        recommendation: recommendation_from_score(score),
        wind,
        swell: SwellSummary { max_meters: None },
        tide: tide_outlook(today),
        best_times: best_times(),
        species_top3: ranking.top3,
        species_ranked: ranking.ranked,
    }
}

fn best_times() -> Vec<String> {
    BEST_TIMES.iter().map(|t| t.to_string()).collect()
}

fn sanitize_now(location_id: &str, now: Option<&NowReading>) -> Result<NowReading, ForecastError> {
    let missing = || ForecastError::MissingObservation {
        location_id: location_id.to_string(),
    };

    let now = now.ok_or_else(missing)?;
    if !now.wind_speed_kmh.is_finite() || !now.wind_direction_degrees.is_finite() {
        return Err(missing());
    }

    validate_wind_speed(now.wind_speed_kmh).map_err(|reason| ForecastError::InvalidObservation {
        location_id: location_id.to_string(),
        field: "wind_speed_kmh",
        reason,
    })?;
    let direction = normalize_direction(now.wind_direction_degrees).map_err(|reason| {
        ForecastError::InvalidObservation {
            location_id: location_id.to_string(),
            field: "wind_direction_degrees",
            reason,
        }
    })?;

    Ok(NowReading {
        wind_speed_kmh: now.wind_speed_kmh,
        wind_direction_degrees: direction,
    })
}

fn sanitize_observation(
    location_id: &str,
    obs: &WeatherObservation,
) -> Result<WeatherObservation, ForecastError> {
    let invalid = |field: &'static str, reason: &'static str| ForecastError::InvalidObservation {
        location_id: location_id.to_string(),
        field,
        reason,
    };

    validate_wind_speed(obs.wind_speed_max_kmh)
        .map_err(|reason| invalid("wind_speed_max_kmh", reason))?;
    if let Some(swell) = obs.swell_height_max_meters {
        validate_swell_height(swell).map_err(|reason| invalid("swell_height_max_meters", reason))?;
    }
    let direction = normalize_direction(obs.wind_direction_degrees)
        .map_err(|reason| invalid("wind_direction_degrees", reason))?;

    Ok(WeatherObservation {
        wind_direction_degrees: direction,
        ..obs.clone()
    })
}
