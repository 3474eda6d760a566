//! Location registry loading and validation

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use shared::models::Location;

use crate::error::{AppError, AppResult};

/// Load the location registry from a JSON file
pub fn load_locations(path: &Path) -> AppResult<Vec<Location>> {
    let raw = fs::read_to_string(path)?;
    parse_locations(&raw)
}

/// Parse and validate a JSON array of locations
///
/// The registry must be non-empty and location ids must be unique since they
/// key the output document.
fn parse_locations(raw: &str) -> AppResult<Vec<Location>> {
    let locations: Vec<Location> = serde_json::from_str(raw)
        .map_err(|e| AppError::Registry(format!("Invalid location registry: {}", e)))?;

    if locations.is_empty() {
        return Err(AppError::Registry(
            "Location registry is empty".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for location in &locations {
        if !seen.insert(location.id.as_str()) {
            return Err(AppError::Registry(format!(
                "Duplicate location id '{}'",
                location.id
            )));
        }
    }

    Ok(locations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_registry() {
        let raw = r#"[
            {"id": "hawks_nest", "name": "Hawks Nest", "region": "Port Stephens", "lat": -32.67, "lon": 152.17},
            {"id": "jimmys_beach", "name": "Jimmys Beach", "region": "Port Stephens", "lat": -32.68, "lon": 152.18}
        ]"#;

        let locations = parse_locations(raw).unwrap();
        assert_eq!(locations.len(), 2);
        assert_eq!(locations[0].id, "hawks_nest");
        assert_eq!(locations[0].name, "Hawks Nest");
        assert_eq!(locations[1].region, "Port Stephens");
    }

    #[test]
    fn test_empty_registry_rejected() {
        let result = parse_locations("[]");
        assert!(matches!(result, Err(AppError::Registry(_))));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let raw = r#"[
            {"id": "hawks_nest", "name": "Hawks Nest", "region": "Port Stephens", "lat": -32.67, "lon": 152.17},
            {"id": "hawks_nest", "name": "Hawks Nest South", "region": "Port Stephens", "lat": -32.69, "lon": 152.17}
        ]"#;

        let err = parse_locations(raw).unwrap_err();
        match err {
            AppError::Registry(msg) => assert!(msg.contains("hawks_nest")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json_rejected() {
        let result = parse_locations(r#"[{"id": "hawks_nest"}]"#);
        assert!(matches!(result, Err(AppError::Registry(_))));
    }
}
