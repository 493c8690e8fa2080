//! Roster filtering by grade band and gender.
//!
//! Mirrors the dashboard sidebar: the user narrows the roster to a subset of
//! grade bands and genders before the containment analysis runs.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::category::{CategoryRules, GradeBand};
use crate::school::{Gender, School};

/// Allow-set filter applied to the roster before classification.
///
/// `None` means "no restriction" for that attribute.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade_bands: Option<HashSet<GradeBand>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genders: Option<HashSet<Gender>>,
}

impl RosterFilter {
    /// A filter that lets every school through.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Restrict to the given grade bands. An empty list clears the restriction.
    pub fn with_grade_bands(mut self, bands: impl IntoIterator<Item = GradeBand>) -> Self {
        let set: HashSet<GradeBand> = bands.into_iter().collect();
        self.grade_bands = if set.is_empty() { None } else { Some(set) };
        self
    }

    /// Restrict to the given genders. An empty list clears the restriction.
    pub fn with_genders(mut self, genders: impl IntoIterator<Item = Gender>) -> Self {
        let set: HashSet<Gender> = genders.into_iter().collect();
        self.genders = if set.is_empty() { None } else { Some(set) };
        self
    }

    /// True when the filter imposes no restriction at all.
    pub fn is_unrestricted(&self) -> bool {
        self.grade_bands.is_none() && self.genders.is_none()
    }

    /// Check whether a school passes the filter under the given rules.
    pub fn matches(&self, school: &School, rules: &CategoryRules) -> bool {
        if let Some(bands) = &self.grade_bands {
            if !bands.contains(&rules.band_for(&school.grade_level)) {
                return false;
            }
        }
        if let Some(genders) = &self.genders {
            if !genders.contains(&school.gender) {
                return false;
            }
        }
        true
    }
}
