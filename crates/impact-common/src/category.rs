//! Grade-band categorization of free-text grade levels.
//!
//! Source rosters carry the grade level as free text ("دبستان دوره دوم",
//! "متوسطه اول", "Primary school", ...). Reporting groups schools into a
//! small set of bands using keyword matching.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ImpactError;

/// Reporting band for a school's grade level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeBand {
    Primary,
    Secondary,
    Vocational,
    Other,
}

impl GradeBand {
    /// All bands, in reporting order.
    pub fn all() -> [GradeBand; 4] {
        [
            GradeBand::Primary,
            GradeBand::Secondary,
            GradeBand::Vocational,
            GradeBand::Other,
        ]
    }
}

impl fmt::Display for GradeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GradeBand::Primary => "primary",
            GradeBand::Secondary => "secondary",
            GradeBand::Vocational => "vocational",
            GradeBand::Other => "other",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for GradeBand {
    type Err = ImpactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "primary" => Ok(GradeBand::Primary),
            "secondary" => Ok(GradeBand::Secondary),
            "vocational" => Ok(GradeBand::Vocational),
            "other" => Ok(GradeBand::Other),
            other => Err(ImpactError::UnknownGradeBand(other.to_string())),
        }
    }
}

/// Keyword rules mapping free-text grade levels to bands.
///
/// First matching band wins, in the order primary, secondary, vocational.
/// A level matching no keyword falls into `Other`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRules {
    #[serde(default)]
    pub primary_keywords: Vec<String>,
    #[serde(default)]
    pub secondary_keywords: Vec<String>,
    #[serde(default)]
    pub vocational_keywords: Vec<String>,
}

impl Default for CategoryRules {
    fn default() -> Self {
        Self {
            primary_keywords: vec![
                "دبستان".to_string(),
                "پیش دبستانی".to_string(),
                "primary".to_string(),
                "elementary".to_string(),
                "preschool".to_string(),
            ],
            secondary_keywords: vec![
                "متوسطه".to_string(),
                "secondary".to_string(),
                "high school".to_string(),
                "middle school".to_string(),
            ],
            vocational_keywords: vec![
                "فنی".to_string(),
                "کار و دانش".to_string(),
                "vocational".to_string(),
                "technical".to_string(),
            ],
        }
    }
}

impl CategoryRules {
    /// Map a free-text grade level to its reporting band.
    pub fn band_for(&self, grade_level: &str) -> GradeBand {
        let level = grade_level.trim().to_lowercase();

        let matches_any = |keywords: &[String]| {
            keywords
                .iter()
                .any(|kw| !kw.is_empty() && level.contains(&kw.to_lowercase()))
        };

        if matches_any(&self.primary_keywords) {
            GradeBand::Primary
        } else if matches_any(&self.secondary_keywords) {
            GradeBand::Secondary
        } else if matches_any(&self.vocational_keywords) {
            GradeBand::Vocational
        } else {
            GradeBand::Other
        }
    }
}
