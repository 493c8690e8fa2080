//! Roster classification against the impact zone.

use rayon::iter::{Either, IntoParallelRefIterator, ParallelIterator};
use tracing::info;

use boundary::ImpactZone;
use impact_common::{CategoryRules, RosterFilter, School};

/// Outcome of classifying a roster against a zone.
#[derive(Debug, Clone)]
pub struct Classification {
    /// Schools inside the zone, roster order preserved.
    pub inside: Vec<School>,
    /// Schools considered but outside the zone.
    pub outside: Vec<School>,
    /// Schools excluded by the roster filter before the containment test.
    pub filtered_out: usize,
}

impl Classification {
    /// Schools that passed the filter and were tested.
    pub fn considered(&self) -> usize {
        self.inside.len() + self.outside.len()
    }
}

/// Classify every school as inside or outside the merged zone.
///
/// The filter runs first (the sidebar narrows the roster before analysis),
/// then each surviving point gets a strict-interior containment test.
/// The containment pass is parallel; rosters can be province-sized.
pub fn classify(
    roster: &[School],
    zone: &ImpactZone,
    filter: &RosterFilter,
    rules: &CategoryRules,
) -> Classification {
    let considered: Vec<&School> = roster
        .iter()
        .filter(|school| filter.matches(school, rules))
        .collect();
    let filtered_out = roster.len() - considered.len();

    let (inside, outside): (Vec<School>, Vec<School>) =
        considered.par_iter().partition_map(|school| {
            if zone.contains(&school.position()) {
                Either::Left((*school).clone())
            } else {
                Either::Right((*school).clone())
            }
        });

    info!(
        roster = roster.len(),
        filtered_out,
        inside = inside.len(),
        outside = outside.len(),
        "Classified roster against impact zone"
    );

    Classification {
        inside,
        outside,
        filtered_out,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use impact_common::{Gender, GradeBand};
    use test_utils::{roster_grid, school_at, square};

    fn zone() -> ImpactZone {
        // Unit square centered on (54.5, 37.5).
        ImpactZone::from_polygons(vec![square(54.0, 37.0, 1.0)]).unwrap()
    }

    #[test]
    fn test_inside_outside_partition() {
        let roster = vec![
            school_at("in", 54.5, 37.5),
            school_at("out", 55.5, 37.5),
            school_at("also-in", 54.1, 37.9),
        ];
        let result = classify(
            &roster,
            &zone(),
            &RosterFilter::unrestricted(),
            &CategoryRules::default(),
        );

        assert_eq!(result.filtered_out, 0);
        let inside: Vec<&str> = result.inside.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(inside, vec!["in", "also-in"]);
        assert_eq!(result.outside.len(), 1);
        assert_eq!(result.outside[0].name, "out");
    }

    #[test]
    fn test_point_on_edge_is_outside() {
        let roster = vec![school_at("edge", 54.0, 37.5)];
        let result = classify(
            &roster,
            &zone(),
            &RosterFilter::unrestricted(),
            &CategoryRules::default(),
        );
        assert!(result.inside.is_empty());
        assert_eq!(result.outside.len(), 1);
    }

    #[test]
    fn test_filter_runs_before_containment() {
        let mut girls_school = school_at("girls", 54.5, 37.5);
        girls_school.gender = Gender::Girls;
        let mut boys_school = school_at("boys", 54.5, 37.5);
        boys_school.gender = Gender::Boys;

        let filter = RosterFilter::unrestricted().with_genders([Gender::Girls]);
        let result = classify(
            &[girls_school, boys_school],
            &zone(),
            &filter,
            &CategoryRules::default(),
        );

        assert_eq!(result.filtered_out, 1);
        assert_eq!(result.inside.len(), 1);
        assert_eq!(result.inside[0].name, "girls");
        assert!(result.outside.is_empty());
    }

    #[test]
    fn test_grade_band_filter() {
        let mut primary = school_at("primary", 54.5, 37.5);
        primary.grade_level = "دبستان دوره اول".to_string();
        let mut secondary = school_at("secondary", 54.5, 37.5);
        secondary.grade_level = "متوسطه دوم".to_string();

        let filter = RosterFilter::unrestricted().with_grade_bands([GradeBand::Secondary]);
        let result = classify(
            &[primary, secondary],
            &zone(),
            &filter,
            &CategoryRules::default(),
        );

        assert_eq!(result.inside.len(), 1);
        assert_eq!(result.inside[0].name, "secondary");
    }

    #[test]
    fn test_grid_roster_counts() {
        // 10x10 grid from (54.05, 37.05) with 0.1 degree spacing; the unit
        // square holds rows/cols 0..=9 entirely, so all 100 are inside.
        let roster = roster_grid(54.05, 37.05, 10, 10, 0.1);
        let result = classify(
            &roster,
            &zone(),
            &RosterFilter::unrestricted(),
            &CategoryRules::default(),
        );
        assert_eq!(result.inside.len(), 100);

        // Shift the grid half a cell past the east edge: the last column
        // (lon 55.0) lands exactly on the boundary and counts as outside.
        let shifted = roster_grid(54.1, 37.05, 10, 10, 0.1);
        let result = classify(
            &shifted,
            &zone(),
            &RosterFilter::unrestricted(),
            &CategoryRules::default(),
        );
        assert_eq!(result.inside.len(), 90);
        assert_eq!(result.outside.len(), 10);
    }

    #[test]
    fn test_empty_roster_yields_empty_classification() {
        let result = classify(
            &[],
            &zone(),
            &RosterFilter::unrestricted(),
            &CategoryRules::default(),
        );
        assert_eq!(result.considered(), 0);
        assert!(result.inside.is_empty());
    }
}
