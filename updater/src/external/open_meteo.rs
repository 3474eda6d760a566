//! Open-Meteo API client for fetching wind and swell data
//!
//! Uses the forecast endpoint with hourly wind for the now-reading and daily
//! wind/swell maxima for the outlook window. Open-Meteo needs no API key.

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;

use shared::models::{Location, LocationFeed, NowReading, WeatherObservation};

use crate::error::{AppError, AppResult};

/// Open-Meteo API client
#[derive(Clone)]
pub struct OpenMeteoClient {
    client: Client,
    base_url: String,
    timezone: String,
    forecast_days: u8,
}

/// Open-Meteo forecast response
#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    hourly: Option<OmHourly>,
    daily: Option<OmDaily>,
}

#[derive(Debug, Deserialize)]
struct OmHourly {
    #[serde(default)]
    wind_speed_10m: Vec<Option<f64>>,
    #[serde(default)]
    wind_direction_10m: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct OmDaily {
    #[serde(default)]
    time: Vec<NaiveDate>,
    #[serde(default)]
    wind_speed_10m_max: Vec<Option<f64>>,
    #[serde(default)]
    wind_direction_10m_dominant: Vec<Option<f64>>,
    #[serde(default)]
    wave_height_max: Vec<Option<f64>>,
}

impl OpenMeteoClient {
    /// Create a new OpenMeteoClient
    pub fn new(base_url: String, timezone: String, forecast_days: u8) -> Self {
        Self {
            client: Client::new(),
            base_url,
            timezone,
            forecast_days,
        }
    }

    /// Fetch the weather feed for a location
    pub async fn fetch_feed(&self, location: &Location) -> AppResult<LocationFeed> {
        let url = format!(
            "{}/forecast?latitude={}&longitude={}\
             &hourly=wind_speed_10m,wind_direction_10m\
             &daily=wind_speed_10m_max,wind_direction_10m_dominant,wave_height_max\
             &forecast_days={}&timezone={}",
            self.base_url, location.lat, location.lon, self.forecast_days, self.timezone
        );

        tracing::debug!("Fetching Open-Meteo forecast for {}", location.id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("Open-Meteo request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalService(format!(
                "Open-Meteo error: {} - {}",
                status, body
            )));
        }

        let data: OmForecastResponse = response.json().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse Open-Meteo response: {}", e))
        })?;

        Ok(convert_forecast_response(data))
    }
}

/// Convert an Open-Meteo response into a location feed
///
/// Wind speeds are rounded to whole km/h and swell to 0.1 m here so the
/// document carries presentation-ready numbers; the scoring engine itself
/// never rounds. Days without a wind value are dropped.
fn convert_forecast_response(data: OmForecastResponse) -> LocationFeed {
    let now = data.hourly.as_ref().and_then(|hourly| {
        let speed = hourly.wind_speed_10m.first().copied().flatten()?;
        let direction = hourly.wind_direction_10m.first().copied().flatten()?;
        Some(NowReading {
            wind_speed_kmh: speed.round(),
            wind_direction_degrees: direction.round(),
        })
    });

    let daily = data
        .daily
        .map(|daily| {
            daily
                .time
                .iter()
                .enumerate()
                .filter_map(|(i, &date)| {
                    let speed = daily.wind_speed_10m_max.get(i).copied().flatten()?;
                    let direction = daily.wind_direction_10m_dominant.get(i).copied().flatten()?;
                    let swell = daily.wave_height_max.get(i).copied().flatten();
                    Some(WeatherObservation {
                        date,
                        wind_speed_max_kmh: speed.round(),
                        wind_direction_degrees: direction.round(),
                        swell_height_max_meters: swell.map(|s| (s * 10.0).round() / 10.0),
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    LocationFeed { now, daily }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> OmForecastResponse {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_convert_full_response() {
        let data = parse(
            r#"{
                "hourly": {
                    "wind_speed_10m": [13.4, 15.0],
                    "wind_direction_10m": [92.6, 100.0]
                },
                "daily": {
                    "time": ["2026-08-22", "2026-08-23"],
                    "wind_speed_10m_max": [18.7, 9.2],
                    "wind_direction_10m_dominant": [135.0, 47.3],
                    "wave_height_max": [1.46, 0.87]
                }
            }"#,
        );

        let feed = convert_forecast_response(data);

        let now = feed.now.unwrap();
        assert_eq!(now.wind_speed_kmh, 13.0);
        assert_eq!(now.wind_direction_degrees, 93.0);

        assert_eq!(feed.daily.len(), 2);
        assert_eq!(
            feed.daily[0].date,
            NaiveDate::from_ymd_opt(2026, 8, 22).unwrap()
        );
        assert_eq!(feed.daily[0].wind_speed_max_kmh, 19.0);
        assert_eq!(feed.daily[0].wind_direction_degrees, 135.0);
        assert_eq!(feed.daily[0].swell_height_max_meters, Some(1.5));
        assert_eq!(feed.daily[1].swell_height_max_meters, Some(0.9));
    }

    #[test]
    fn test_empty_hourly_arrays_yield_no_now_reading() {
        let data = parse(
            r#"{
                "hourly": { "wind_speed_10m": [], "wind_direction_10m": [] },
                "daily": {
                    "time": ["2026-08-22"],
                    "wind_speed_10m_max": [10.0],
                    "wind_direction_10m_dominant": [180.0],
                    "wave_height_max": [1.0]
                }
            }"#,
        );

        let feed = convert_forecast_response(data);
        assert!(feed.now.is_none());
        assert_eq!(feed.daily.len(), 1);
    }

    #[test]
    fn test_null_swell_tolerated_per_day() {
        let data = parse(
            r#"{
                "hourly": {
                    "wind_speed_10m": [8.0],
                    "wind_direction_10m": [45.0]
                },
                "daily": {
                    "time": ["2026-08-22", "2026-08-23"],
                    "wind_speed_10m_max": [10.0, 12.0],
                    "wind_direction_10m_dominant": [180.0, 200.0],
                    "wave_height_max": [null, 1.2]
                }
            }"#,
        );

        let feed = convert_forecast_response(data);
        assert_eq!(feed.daily[0].swell_height_max_meters, None);
        assert_eq!(feed.daily[1].swell_height_max_meters, Some(1.2));
    }

    #[test]
    fn test_missing_daily_section_yields_empty_window() {
        let data = parse(
            r#"{
                "hourly": {
                    "wind_speed_10m": [8.0],
                    "wind_direction_10m": [45.0]
                }
            }"#,
        );

        let feed = convert_forecast_response(data);
        assert!(feed.now.is_some());
        assert!(feed.daily.is_empty());
    }

    #[test]
    fn test_days_without_wind_are_dropped() {
        let data = parse(
            r#"{
                "daily": {
                    "time": ["2026-08-22", "2026-08-23", "2026-08-24"],
                    "wind_speed_10m_max": [10.0, null, 14.0],
                    "wind_direction_10m_dominant": [180.0, 190.0, 200.0],
                    "wave_height_max": [1.0, 1.1, 1.2]
                }
            }"#,
        );

        let feed = convert_forecast_response(data);
        assert_eq!(feed.daily.len(), 2);
        assert_eq!(
            feed.daily[1].date,
            NaiveDate::from_ymd_opt(2026, 8, 24).unwrap()
        );
    }
}
