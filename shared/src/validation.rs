//! Boundary validation for weather inputs
//!
//! The scoring functions assume physically valid readings. These checks run
//! once at the assembly boundary: speeds and heights are rejected when
//! non-finite or negative, bearings are normalized into [0, 360).

/// Validate a wind speed in km/h
pub fn validate_wind_speed(speed_kmh: f64) -> Result<(), &'static str> {
    if !speed_kmh.is_finite() {
        return Err("Wind speed must be a finite number");
    }
    if speed_kmh < 0.0 {
        return Err("Wind speed cannot be negative");
    }
    Ok(())
}

/// Validate a swell height in meters
pub fn validate_swell_height(height_m: f64) -> Result<(), &'static str> {
    if !height_m.is_finite() {
        return Err("Swell height must be a finite number");
    }
    if height_m < 0.0 {
        return Err("Swell height cannot be negative");
    }
    Ok(())
}

/// Normalize a wind bearing into [0, 360)
pub fn normalize_direction(degrees: f64) -> Result<f64, &'static str> {
    if !degrees.is_finite() {
        return Err("Wind direction must be a finite number");
    }
    Ok(degrees.rem_euclid(360.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_wind_speed_valid() {
        assert!(validate_wind_speed(0.0).is_ok());
        assert!(validate_wind_speed(12.5).is_ok());
        assert!(validate_wind_speed(120.0).is_ok());
    }

    #[test]
    fn test_validate_wind_speed_invalid() {
        assert!(validate_wind_speed(-0.1).is_err());
        assert!(validate_wind_speed(f64::NAN).is_err());
        assert!(validate_wind_speed(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_swell_height_valid() {
        assert!(validate_swell_height(0.0).is_ok());
        assert!(validate_swell_height(2.3).is_ok());
    }

    #[test]
    fn test_validate_swell_height_invalid() {
        assert!(validate_swell_height(-1.0).is_err());
        assert!(validate_swell_height(f64::NAN).is_err());
    }

    #[test]
    fn test_normalize_direction_in_range() {
        assert_eq!(normalize_direction(0.0).unwrap(), 0.0);
        assert_eq!(normalize_direction(359.9).unwrap(), 359.9);
    }

    #[test]
    fn test_normalize_direction_wraps() {
        assert_eq!(normalize_direction(360.0).unwrap(), 0.0);
        assert_eq!(normalize_direction(370.0).unwrap(), 10.0);
        assert_eq!(normalize_direction(-90.0).unwrap(), 270.0);
        assert_eq!(normalize_direction(725.0).unwrap(), 5.0);
    }

    #[test]
    fn test_normalize_direction_non_finite() {
        assert!(normalize_direction(f64::NAN).is_err());
        assert!(normalize_direction(f64::NEG_INFINITY).is_err());
    }
}
