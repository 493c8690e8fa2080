//! Plain-text rendering of the impact report for stdout.

use std::fmt::Write as _;

use impact_common::{CategoryRules, School};
use impact_processor::ImpactSummary;

/// Render the aggregate summary as human-readable text.
pub fn render_summary(summary: &ImpactSummary) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Impact analysis {}", summary.run_id);
    let _ = writeln!(
        out,
        "Generated at: {}",
        summary.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(
        out,
        "Zone: {} polygon(s) from {} source(s)",
        summary.zone_polygons,
        summary.zone_sources.len()
    );
    for source in &summary.zone_sources {
        let _ = writeln!(
            out,
            "  - {} ({} polygons, {} skipped)",
            source.label, source.polygons, source.skipped
        );
    }

    let _ = writeln!(
        out,
        "Schools considered: {} (filtered out: {})",
        summary.schools_considered, summary.filtered_out
    );

    if summary.is_empty() {
        let _ = writeln!(out, "No schools inside the impact zone.");
        return out;
    }

    let _ = writeln!(
        out,
        "Inside zone: {} schools, {} students, {} teachers",
        summary.schools_inside, summary.students_inside, summary.teachers_inside
    );

    let _ = writeln!(out, "\nSchools by grade band:");
    for (band, count) in &summary.schools_by_band {
        let _ = writeln!(out, "  {:<12} {}", band.to_string(), count);
    }

    let _ = writeln!(out, "\nStudents by gender:");
    for (gender, students) in &summary.students_by_gender {
        let _ = writeln!(out, "  {:<12} {}", gender.to_string(), students);
    }

    let _ = writeln!(out, "\nNote: results are spatial overlap only and need field verification.");
    out
}

/// Render the impacted-school list as a simple table.
pub fn render_school_list(schools: &[School], rules: &CategoryRules) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<30} {:<12} {:>8} {:>8}  {}",
        "name", "band", "students", "teachers", "gender"
    );
    for school in schools {
        let _ = writeln!(
            out,
            "{:<30} {:<12} {:>8} {:>8}  {}",
            school.name,
            rules.band_for(&school.grade_level).to_string(),
            school.students,
            school.teachers,
            school.gender
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use boundary::ImpactZone;
    use impact_common::RosterFilter;
    use impact_processor::{classify, summarize};
    use test_utils::{school_at, square};

    #[test]
    fn test_summary_text_mentions_totals() {
        let zone = ImpactZone::from_polygons(vec![square(54.0, 37.0, 1.0)]).unwrap();
        let mut school = school_at("a", 54.5, 37.5);
        school.students = 123;
        school.teachers = 7;

        let rules = CategoryRules::default();
        let classification = classify(&[school], &zone, &RosterFilter::unrestricted(), &rules);
        let summary = summarize(&classification, &zone, &rules);

        let text = render_summary(&summary);
        assert!(text.contains("Inside zone: 1 schools, 123 students, 7 teachers"));
        assert!(text.contains("field verification"));
    }

    #[test]
    fn test_empty_summary_text() {
        let zone = ImpactZone::from_polygons(vec![square(10.0, 10.0, 1.0)]).unwrap();
        let rules = CategoryRules::default();
        let classification = classify(
            &[school_at("far", 54.5, 37.5)],
            &zone,
            &RosterFilter::unrestricted(),
            &rules,
        );
        let summary = summarize(&classification, &zone, &rules);

        let text = render_summary(&summary);
        assert!(text.contains("No schools inside the impact zone."));
    }

    #[test]
    fn test_school_list_table() {
        let rules = CategoryRules::default();
        let text = render_school_list(&[school_at("a", 54.0, 37.0)], &rules);
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("name"));
        assert!(lines.next().unwrap().starts_with("a"));
    }
}
