//! JSON export of the aggregated summary.

use std::io::Write;

use impact_processor::ImpactSummary;

use crate::error::Result;

/// Write the summary document as pretty-printed JSON.
pub fn write_summary_json<W: Write>(writer: W, summary: &ImpactSummary) -> Result<()> {
    serde_json::to_writer_pretty(writer, summary)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use boundary::ImpactZone;
    use impact_common::{CategoryRules, RosterFilter};
    use impact_processor::{classify, summarize};
    use test_utils::{school_at, square};

    #[test]
    fn test_summary_json_shape() {
        let zone = ImpactZone::from_polygons(vec![square(54.0, 37.0, 1.0)]).unwrap();
        let mut school = school_at("a", 54.5, 37.5);
        school.grade_level = "متوسطه".to_string();
        school.students = 100;

        let rules = CategoryRules::default();
        let classification = classify(&[school], &zone, &RosterFilter::unrestricted(), &rules);
        let summary = summarize(&classification, &zone, &rules);

        let mut buffer = Vec::new();
        write_summary_json(&mut buffer, &summary).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["schools_inside"], 1);
        assert_eq!(value["students_inside"], 100);
        assert_eq!(value["schools_by_band"]["secondary"], 1);
        assert!(value["run_id"].is_string());
        assert!(value["generated_at"].is_string());
    }
}
