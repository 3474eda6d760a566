//! Reelcast Forecast Updater
//!
//! Fetches wind and swell forecasts from Open-Meteo for every registered
//! beach, scores fishing conditions, and writes the forecast document that
//! the static site reads.

use std::path::Path;

use chrono::Utc;
use chrono_tz::Tz;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shared::assembler;

mod config;
mod error;
mod external;
mod output;
mod registry;

use error::AppError;
use external::OpenMeteoClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reelcast=debug,shared=debug,reqwest=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Reelcast forecast updater");
    tracing::info!("Environment: {}", config.environment);

    let tz: Tz = config
        .forecast
        .timezone
        .parse()
        .map_err(AppError::Configuration)?;

    // Load the location registry
    let locations = registry::load_locations(Path::new(&config.registry.locations_file))?;
    tracing::info!(
        "Loaded {} locations from {}",
        locations.len(),
        config.registry.locations_file
    );

    let client = OpenMeteoClient::new(
        config.open_meteo.base_url.clone(),
        config.forecast.timezone.clone(),
        config.forecast.days,
    );

    // Fetch feeds per location, skipping any that fail
    let total = locations.len();
    let mut feeds = Vec::with_capacity(total);
    for location in locations {
        match client.fetch_feed(&location).await {
            Ok(feed) => feeds.push((location, feed)),
            Err(e) => tracing::warn!("Skipping {}: {}", location.id, e),
        }
    }

    // Assemble the document, keeping successes even when some locations fail
    let updated_at = Utc::now();
    let today = updated_at.with_timezone(&tz).date_naive();
    let build = assembler::build_document(&feeds, today, updated_at);

    for failure in &build.failures {
        tracing::warn!("Assembly failed for {}: {}", failure.location_id, failure.error);
    }
    tracing::info!(
        "Assembled forecasts for {} of {} locations",
        build.document.len(),
        total
    );

    output::write_document(Path::new(&config.output.file), &build.document)?;
    tracing::info!("Forecast written to {}", config.output.file);

    Ok(())
}
