//! Generators for synthetic rosters and boundary polygons.

use geo::{LineString, Polygon};

use impact_common::{Gender, School};

/// An axis-aligned square polygon with its south-west corner at
/// (`west`, `south`).
pub fn square(west: f64, south: f64, size: f64) -> Polygon<f64> {
    Polygon::new(
        LineString::from(vec![
            (west, south),
            (west + size, south),
            (west + size, south + size),
            (west, south + size),
            (west, south),
        ]),
        Vec::new(),
    )
}

/// A minimal school at the given (lon, lat), with neutral attributes.
pub fn school_at(name: &str, lon: f64, lat: f64) -> School {
    School {
        id: None,
        name: name.to_string(),
        principal: None,
        grade_level: String::new(),
        students: 0,
        teachers: 0,
        gender: Gender::Unknown,
        latitude: lat,
        longitude: lon,
    }
}

/// A grid of `cols * rows` schools with `spacing` degrees between
/// neighbours, starting at (`west`, `south`).
///
/// School names are "r{row}c{col}", so tests can predict which fall inside
/// a given zone.
pub fn roster_grid(west: f64, south: f64, cols: usize, rows: usize, spacing: f64) -> Vec<School> {
    let mut roster = Vec::with_capacity(cols * rows);
    for row in 0..rows {
        for col in 0..cols {
            roster.push(school_at(
                &format!("r{}c{}", row, col),
                west + col as f64 * spacing,
                south + row as f64 * spacing,
            ));
        }
    }
    roster
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Area, Contains, Point};

    #[test]
    fn test_square_geometry() {
        let sq = square(54.0, 37.0, 2.0);
        assert!((sq.unsigned_area() - 4.0).abs() < 1e-12);
        assert!(sq.contains(&Point::new(55.0, 38.0)));
    }

    #[test]
    fn test_roster_grid_layout() {
        let roster = roster_grid(54.0, 37.0, 3, 2, 0.1);
        assert_eq!(roster.len(), 6);
        assert_eq!(roster[0].name, "r0c0");
        assert_eq!(roster[5].name, "r1c2");
        assert!((roster[5].longitude - 54.2).abs() < 1e-12);
        assert!((roster[5].latitude - 37.1).abs() < 1e-12);
    }
}
