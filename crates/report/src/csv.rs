//! CSV export of school lists.
//!
//! Output is UTF-8 with a BOM so Excel opens Persian school names
//! correctly.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use impact_common::{CategoryRules, School};

use crate::error::Result;

const HEADER: [&str; 9] = [
    "school_id",
    "name",
    "grade_level",
    "grade_band",
    "students",
    "teachers",
    "gender",
    "latitude",
    "longitude",
];

/// Write a school list as CSV to an arbitrary writer.
///
/// Columns are stable regardless of which optional roster fields were
/// present; the computed grade band is included next to the raw level.
pub fn write_schools_csv<W: Write>(
    mut writer: W,
    schools: &[School],
    rules: &CategoryRules,
) -> Result<()> {
    // utf-8-sig BOM for Excel.
    writer.write_all("\u{feff}".as_bytes())?;

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;

    for school in schools {
        csv_writer.write_record([
            school.id.map(|id| id.to_string()).unwrap_or_default(),
            school.name.clone(),
            school.grade_level.clone(),
            rules.band_for(&school.grade_level).to_string(),
            school.students.to_string(),
            school.teachers.to_string(),
            school.gender.to_string(),
            school.latitude.to_string(),
            school.longitude.to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write a school list as CSV to a file path.
pub fn save_schools_csv(
    path: impl AsRef<Path>,
    schools: &[School],
    rules: &CategoryRules,
) -> Result<()> {
    let file = File::create(path)?;
    write_schools_csv(BufWriter::new(file), schools, rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use impact_common::Gender;
    use test_utils::school_at;

    fn sample() -> Vec<School> {
        let mut school = school_at("دبستان آزادی", 54.4901, 37.3450);
        school.id = Some(100016);
        school.grade_level = "دبستان دوره اول".to_string();
        school.students = 350;
        school.teachers = 24;
        school.gender = Gender::Girls;
        vec![school]
    }

    #[test]
    fn test_csv_starts_with_bom_and_header() {
        let mut buffer = Vec::new();
        write_schools_csv(&mut buffer, &sample(), &CategoryRules::default()).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with('\u{feff}'));

        let mut lines = text.trim_start_matches('\u{feff}').lines();
        assert_eq!(
            lines.next().unwrap(),
            "school_id,name,grade_level,grade_band,students,teachers,gender,latitude,longitude"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("100016,دبستان آزادی,دبستان دوره اول,primary,350,24,girls,"));
    }

    #[test]
    fn test_missing_id_serializes_empty() {
        let school = school_at("x", 54.0, 37.0);
        let mut buffer = Vec::new();
        write_schools_csv(&mut buffer, &[school], &CategoryRules::default()).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let row = text.lines().nth(1).unwrap();
        assert!(row.starts_with(",x,"));
    }

    #[test]
    fn test_save_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("impacted.csv");
        save_schools_csv(&path, &sample(), &CategoryRules::default()).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..3], b"\xef\xbb\xbf");
    }
}
