//! Target species models

use serde::{Deserialize, Serialize};

/// Target species catalogue
///
/// Declaration order is the fixed tie-break order used when two species score
/// the same suitability.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Species {
    Bream,
    Tailor,
    Jewfish,
    Whiting,
    Flathead,
    Squid,
}

/// All species in catalogue order
pub const SPECIES_CATALOGUE: [Species; 6] = [
    Species::Bream,
    Species::Tailor,
    Species::Jewfish,
    Species::Whiting,
    Species::Flathead,
    Species::Squid,
];

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Species::Bream => "Bream",
            Species::Tailor => "Tailor",
            Species::Jewfish => "Jewfish",
            Species::Whiting => "Whiting",
            Species::Flathead => "Flathead",
            Species::Squid => "Squid",
        };
        write!(f, "{}", name)
    }
}

/// Suitability of one species under a day's conditions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SpeciesSuitability {
    pub species: Species,
    /// Clamped to the 0..=100 range
    pub suitability: f64,
}

/// Species ranked for a day, best first
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpeciesRanking {
    pub ranked: Vec<SpeciesSuitability>,
    pub top3: Vec<Species>,
}
