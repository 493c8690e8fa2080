//! School point records.

use std::fmt;
use std::str::FromStr;

use geo::Point;
use serde::{Deserialize, Serialize};

use crate::error::ImpactError;

/// Gender composition of a school.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Girls,
    Boys,
    Mixed,
    #[default]
    Unknown,
}

impl Gender {
    /// Parse a roster label, accepting the Persian source labels.
    pub fn from_label(label: &str) -> Gender {
        match label.trim() {
            "دخترانه" => Gender::Girls,
            "پسرانه" => Gender::Boys,
            "مختلط" => Gender::Mixed,
            other => match other.to_lowercase().as_str() {
                "girls" | "female" => Gender::Girls,
                "boys" | "male" => Gender::Boys,
                "mixed" | "coed" => Gender::Mixed,
                _ => Gender::Unknown,
            },
        }
    }

    /// All genders, in reporting order.
    pub fn all() -> [Gender; 4] {
        [Gender::Girls, Gender::Boys, Gender::Mixed, Gender::Unknown]
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Gender::Girls => "girls",
            Gender::Boys => "boys",
            Gender::Mixed => "mixed",
            Gender::Unknown => "unknown",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for Gender {
    type Err = ImpactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "girls" => Ok(Gender::Girls),
            "boys" => Ok(Gender::Boys),
            "mixed" => Ok(Gender::Mixed),
            "unknown" => Ok(Gender::Unknown),
            other => Err(ImpactError::UnknownGender(other.to_string())),
        }
    }
}

/// A cleaned school record with validated coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    /// Stable identifier from the source roster, if present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// School name.
    pub name: String,

    /// Principal's name, if present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal: Option<String>,

    /// Free-text grade level as found in the roster.
    pub grade_level: String,

    /// Student headcount (0 when the roster field was missing or junk).
    pub students: u32,

    /// Teacher headcount (0 when the roster field was missing or junk).
    pub teachers: u32,

    /// Gender composition.
    pub gender: Gender,

    /// Latitude in EPSG:4326 degrees.
    pub latitude: f64,

    /// Longitude in EPSG:4326 degrees.
    pub longitude: f64,
}

impl School {
    /// The school's position as an (x=lon, y=lat) point.
    pub fn position(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_from_persian_labels() {
        assert_eq!(Gender::from_label("دخترانه"), Gender::Girls);
        assert_eq!(Gender::from_label("پسرانه"), Gender::Boys);
        assert_eq!(Gender::from_label("مختلط"), Gender::Mixed);
        assert_eq!(Gender::from_label(""), Gender::Unknown);
    }

    #[test]
    fn test_gender_from_english_labels() {
        assert_eq!(Gender::from_label("Girls"), Gender::Girls);
        assert_eq!(Gender::from_label("coed"), Gender::Mixed);
        assert_eq!(Gender::from_label("n/a"), Gender::Unknown);
    }

    #[test]
    fn test_position_is_lon_lat() {
        let school = School {
            id: Some(100013),
            name: "Test".to_string(),
            principal: None,
            grade_level: "متوسطه اول".to_string(),
            students: 490,
            teachers: 31,
            gender: Gender::Boys,
            latitude: 37.31,
            longitude: 54.45,
        };
        let point = school.position();
        assert_eq!(point.x(), 54.45);
        assert_eq!(point.y(), 37.31);
    }
}
