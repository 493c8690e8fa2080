//! CSV roster reading and cleaning.
//!
//! Rosters come from Excel exports, so the reader tolerates a UTF-8 BOM,
//! accepts the Persian source headers alongside English ones, coerces junk
//! numeric fields to 0, and drops rows without usable coordinates. Dropped
//! rows are counted, not fatal.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use impact_common::{Gender, School};

use crate::error::Result;

/// A roster row as it appears in the CSV, before cleaning.
///
/// Every field is optional text; cleaning decides what survives.
#[derive(Debug, Deserialize)]
struct RawSchoolRow {
    #[serde(default, alias = "school_id", alias = "کد_مدرسه")]
    id: Option<String>,

    #[serde(default, alias = "Name", alias = "نام_مدرسه", alias = "نام مدرسه")]
    name: Option<String>,

    #[serde(default, alias = "نام_مدیر")]
    principal: Option<String>,

    #[serde(
        default,
        alias = "Category",
        alias = "مقطع_تحصیلی",
        alias = "مقطع تحصیلی"
    )]
    grade_level: Option<String>,

    #[serde(
        default,
        alias = "Students",
        alias = "تعداد_دانش_آموز",
        alias = "تعداد دانش‌آموزان"
    )]
    students: Option<String>,

    #[serde(default, alias = "تعداد_معلم")]
    teachers: Option<String>,

    #[serde(default, alias = "جنسیت")]
    gender: Option<String>,

    #[serde(
        default,
        alias = "Lat",
        alias = "lat",
        alias = "عرض_جغرافیایی",
        alias = "عرض جغرافیایی"
    )]
    latitude: Option<String>,

    #[serde(
        default,
        alias = "Lon",
        alias = "lon",
        alias = "طول_جغرافیایی",
        alias = "طول جغرافیایی"
    )]
    longitude: Option<String>,
}

/// Counters describing what cleaning did to a roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RosterStats {
    /// Data rows read from the CSV.
    pub rows_read: usize,
    /// Rows that survived cleaning.
    pub rows_kept: usize,
    /// Rows dropped for missing or non-numeric coordinates.
    pub dropped_missing_coords: usize,
    /// Rows dropped for coordinates outside lon/lat ranges.
    pub dropped_out_of_range: usize,
}

/// A cleaned roster along with its cleaning counters.
#[derive(Debug, Clone)]
pub struct Roster {
    pub schools: Vec<School>,
    pub stats: RosterStats,
}

/// Read and clean a roster CSV file.
pub fn read_roster(path: impl AsRef<Path>) -> Result<Roster> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let roster = parse_roster(&text)?;
    debug!(
        path = %path.display(),
        rows_read = roster.stats.rows_read,
        rows_kept = roster.stats.rows_kept,
        "Read roster file"
    );
    Ok(roster)
}

/// Parse and clean roster CSV text.
pub fn parse_roster(text: &str) -> Result<Roster> {
    // Excel writes utf-8-sig; the BOM would otherwise glue onto the first header.
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut stats = RosterStats::default();
    let mut schools = Vec::new();

    for row in reader.deserialize::<RawSchoolRow>() {
        let row = row?;
        stats.rows_read += 1;

        let (latitude, longitude) = match (parse_coord(&row.latitude), parse_coord(&row.longitude))
        {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => {
                stats.dropped_missing_coords += 1;
                warn!(
                    row = stats.rows_read,
                    name = row.name.as_deref().unwrap_or(""),
                    "Dropping roster row without usable coordinates"
                );
                continue;
            }
        };

        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            stats.dropped_out_of_range += 1;
            warn!(
                row = stats.rows_read,
                latitude,
                longitude,
                "Dropping roster row with out-of-range coordinates"
            );
            continue;
        }

        stats.rows_kept += 1;
        schools.push(School {
            id: row.id.as_deref().and_then(parse_id),
            name: row
                .name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "unknown".to_string()),
            principal: row.principal.filter(|p| !p.is_empty()),
            grade_level: row.grade_level.unwrap_or_default(),
            students: parse_count(&row.students),
            teachers: parse_count(&row.teachers),
            gender: Gender::from_label(row.gender.as_deref().unwrap_or("")),
            latitude,
            longitude,
        });
    }

    Ok(Roster { schools, stats })
}

/// Coerce a count field, treating junk and negatives as 0.
fn parse_count(raw: &Option<String>) -> u32 {
    raw.as_deref()
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v as u32)
        .unwrap_or(0)
}

/// Coerce a coordinate field to a finite float.
fn parse_coord(raw: &Option<String>) -> Option<f64> {
    raw.as_deref()
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

fn parse_id(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}
