//! Scoring pipeline: wind score, recommendation, tide heuristic, species ranking
//!
//! Every function here is pure and deterministic. Wind drives the headline
//! score; the recommendation, tide outlook, and species ranking are derived
//! from it independently of one another.

use chrono::{Datelike, NaiveDate};

use crate::models::{
    Recommendation, Species, SpeciesRanking, SpeciesSuitability, TideOutlook, TideState,
    SPECIES_CATALOGUE,
};

/// Fallback daily wind applied when an observation carries none
pub const DEFAULT_WIND_MAX_KMH: f64 = 15.0;

/// Fallback swell applied when an observation carries none
pub const DEFAULT_SWELL_MAX_M: f64 = 1.0;

/// Wind-driven suitability score in 1..=5
///
/// Lower bounds are inclusive: 8 km/h already drops the score to 4.
pub fn score_from_wind(wind_speed_kmh: f64) -> u8 {
    if wind_speed_kmh < 8.0 {
        5
    } else if wind_speed_kmh < 12.0 {
        4
    } else if wind_speed_kmh < 18.0 {
        3
    } else if wind_speed_kmh < 24.0 {
        2
    } else {
        1
    }
}

/// Map a score to fishing advice
pub fn recommendation_from_score(score: u8) -> Recommendation {
    match score {
        4.. => Recommendation::Go,
        3 => Recommendation::Maybe,
        _ => Recommendation::DontGo,
    }
}

/// Approximate tide movement from day-of-month parity
///
/// Even days run in, odd days run out. The outlook is always flagged as
/// approximate; it is a placeholder classifier, not tide-table data.
pub fn tide_outlook(date: NaiveDate) -> TideOutlook {
    let state = if date.day() % 2 == 0 {
        TideState::RunIn
    } else {
        TideState::RunOut
    };
    TideOutlook {
        label: format!("{} (approx)", state),
        state,
        approximate: true,
    }
}

/// Rank the species catalogue for a day's conditions
///
/// Missing wind defaults to [`DEFAULT_WIND_MAX_KMH`] and missing swell to
/// [`DEFAULT_SWELL_MAX_M`]; this is the single site where those fallbacks
/// apply.
pub fn rank_species(
    score: u8,
    wind_max_kmh: Option<f64>,
    swell_max_m: Option<f64>,
) -> SpeciesRanking {
    let wind = wind_max_kmh.unwrap_or(DEFAULT_WIND_MAX_KMH);
    let swell = swell_max_m.unwrap_or(DEFAULT_SWELL_MAX_M);
    let score = f64::from(score);

    let mut ranked: Vec<SpeciesSuitability> = SPECIES_CATALOGUE
        .iter()
        .map(|&species| SpeciesSuitability {
            species,
            suitability: suitability_for(species, score, wind, swell),
        })
        .collect();

    // Stable sort: equal suitabilities keep catalogue order
    ranked.sort_by(|a, b| b.suitability.total_cmp(&a.suitability));

    let top3 = ranked.iter().take(3).map(|s| s.species).collect();

    SpeciesRanking { ranked, top3 }
}

/// Per-species suitability formula, clamped to 0..=100
fn suitability_for(species: Species, score: f64, wind: f64, swell: f64) -> f64 {
    let raw = match species {
        Species::Bream => 60.0 + 6.0 * score - 1.2 * wind,
        Species::Tailor => 45.0 + 7.0 * score + 10.0 * swell,
        Species::Jewfish => 35.0 + 5.0 * score + 8.0 * swell - 0.8 * wind,
        Species::Whiting => 55.0 + 5.0 * score - 1.0 * wind,
        Species::Flathead => 50.0 + 6.0 * score - 0.6 * wind,
        Species::Squid => 40.0 + 6.0 * score - 1.3 * wind,
    };
    raw.max(0.0).min(100.0)
}
