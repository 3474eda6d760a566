//! Configuration management for the forecast updater
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with REELCAST_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Location registry configuration
    pub registry: RegistryConfig,

    /// Output document configuration
    pub output: OutputConfig,

    /// Forecast window configuration
    pub forecast: ForecastConfig,

    /// Open-Meteo API configuration
    pub open_meteo: OpenMeteoConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RegistryConfig {
    /// Path to the locations JSON file
    pub locations_file: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    /// Path the forecast document is written to
    pub file: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ForecastConfig {
    /// Number of days requested from the weather API
    pub days: u8,

    /// IANA timezone used for day alignment
    pub timezone: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OpenMeteoConfig {
    /// Forecast API base URL
    pub base_url: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("REELCAST_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("registry.locations_file", "docs/locations.json")?
            .set_default("output.file", "docs/forecast.json")?
            .set_default("forecast.days", 7)?
            .set_default("forecast.timezone", "Australia/Sydney")?
            .set_default("open_meteo.base_url", "https://api.open-meteo.com/v1")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (REELCAST_ prefix)
            .add_source(
                Environment::with_prefix("REELCAST")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
