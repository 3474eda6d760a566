//! Location registry models

use serde::{Deserialize, Serialize};

/// A fishing location served by the forecast document
///
/// Loaded from the static registry; `id` is the unique key under which the
/// location appears in the output document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub region: String,
    pub lat: f64,
    pub lon: f64,
}
