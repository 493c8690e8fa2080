//! Error types shared across the school-impact workspace.

use thiserror::Error;

/// Result type alias using ImpactError.
pub type ImpactResult<T> = Result<T, ImpactError>;

/// Errors for domain-level parsing and validation.
#[derive(Debug, Error, PartialEq)]
pub enum ImpactError {
    #[error("Unknown grade band: {0}. Expected one of: primary, secondary, vocational, other")]
    UnknownGradeBand(String),

    #[error("Unknown gender: {0}. Expected one of: girls, boys, mixed, unknown")]
    UnknownGender(String),

    #[error("Invalid BBOX format: {0}. Expected 'west,south,east,north'")]
    InvalidBboxFormat(String),

    #[error("Invalid number in BBOX: {0}")]
    InvalidBboxNumber(String),

    #[error("Coordinate out of range: {axis} = {value}")]
    CoordinateOutOfRange { axis: &'static str, value: f64 },
}

impl ImpactError {
    /// Validate a (lon, lat) pair against geographic coordinate ranges.
    pub fn check_lon_lat(lon: f64, lat: f64) -> ImpactResult<()> {
        if !lon.is_finite() || lon < -180.0 || lon > 180.0 {
            return Err(ImpactError::CoordinateOutOfRange {
                axis: "longitude",
                value: lon,
            });
        }
        if !lat.is_finite() || lat < -90.0 || lat > 90.0 {
            return Err(ImpactError::CoordinateOutOfRange {
                axis: "latitude",
                value: lat,
            });
        }
        Ok(())
    }
}
