//! Aggregation of the inside set into an impact report.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use boundary::{ImpactZone, SourceSummary};
use impact_common::{CategoryRules, Gender, GradeBand};

use crate::classify::Classification;

/// Aggregated impact report over the schools inside the zone.
#[derive(Debug, Clone, Serialize)]
pub struct ImpactSummary {
    /// Identifier for this analysis run.
    pub run_id: Uuid,

    /// When the analysis ran.
    pub generated_at: DateTime<Utc>,

    /// Disjoint polygons in the merged zone.
    pub zone_polygons: usize,

    /// Boundary sources that fed the zone.
    pub zone_sources: Vec<SourceSummary>,

    /// Schools excluded by the roster filter.
    pub filtered_out: usize,

    /// Schools tested against the zone.
    pub schools_considered: usize,

    /// Schools inside the zone.
    pub schools_inside: usize,

    /// Student headcount inside the zone.
    pub students_inside: u64,

    /// Teacher headcount inside the zone.
    pub teachers_inside: u64,

    /// School counts inside the zone, by grade band. Bands with no schools
    /// are omitted.
    pub schools_by_band: BTreeMap<GradeBand, usize>,

    /// Student headcounts inside the zone, by gender.
    pub students_by_gender: BTreeMap<Gender, u64>,
}

impl ImpactSummary {
    /// True when nothing landed inside the zone.
    pub fn is_empty(&self) -> bool {
        self.schools_inside == 0
    }
}

/// Aggregate a classification into an [`ImpactSummary`].
pub fn summarize(
    classification: &Classification,
    zone: &ImpactZone,
    rules: &CategoryRules,
) -> ImpactSummary {
    let mut students_inside = 0u64;
    let mut teachers_inside = 0u64;
    let mut schools_by_band: BTreeMap<GradeBand, usize> = BTreeMap::new();
    let mut students_by_gender: BTreeMap<Gender, u64> = BTreeMap::new();

    for school in &classification.inside {
        students_inside += u64::from(school.students);
        teachers_inside += u64::from(school.teachers);
        *schools_by_band
            .entry(rules.band_for(&school.grade_level))
            .or_default() += 1;
        *students_by_gender.entry(school.gender).or_default() += u64::from(school.students);
    }

    ImpactSummary {
        run_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        zone_polygons: zone.polygon_count(),
        zone_sources: zone.sources().to_vec(),
        filtered_out: classification.filtered_out,
        schools_considered: classification.considered(),
        schools_inside: classification.inside.len(),
        students_inside,
        teachers_inside,
        schools_by_band,
        students_by_gender,
    }
}
