//! WKT polygon parsing for hand-specified zones.
//!
//! The dashboard let users draw polygons on the map; on the command line the
//! equivalent is a WKT `POLYGON` or `MULTIPOLYGON` string. Only outer rings
//! are supported, which is all a draw tool produces.

use geo::{LineString, Polygon};

use impact_common::ImpactError;

use crate::error::{BoundaryError, Result};

/// Parse a WKT `POLYGON` or `MULTIPOLYGON` string into polygons.
///
/// Accepts formats:
/// - `POLYGON((lon1 lat1, lon2 lat2, lon3 lat3, lon1 lat1))`
/// - `MULTIPOLYGON(((ring1)),((ring2)))`
pub fn parse_zone_wkt(wkt: &str) -> Result<Vec<Polygon<f64>>> {
    let wkt = wkt.trim();
    let upper = wkt.to_uppercase();

    if upper.starts_with("MULTIPOLYGON") {
        return parse_multipolygon(wkt);
    }

    if upper.starts_with("POLYGON") {
        return Ok(vec![parse_polygon(wkt)?]);
    }

    Err(BoundaryError::InvalidWkt(
        "Expected POLYGON or MULTIPOLYGON format".to_string(),
    ))
}

/// Parse a WKT `POLYGON((...))` string into a single polygon.
fn parse_polygon(wkt: &str) -> Result<Polygon<f64>> {
    let start = wkt
        .find("((")
        .ok_or_else(|| BoundaryError::InvalidWkt("Missing opening parentheses".to_string()))?;
    let end = wkt
        .rfind("))")
        .ok_or_else(|| BoundaryError::InvalidWkt("Missing closing parentheses".to_string()))?;

    if end <= start {
        return Err(BoundaryError::InvalidWkt(
            "Invalid parenthesis order".to_string(),
        ));
    }

    let ring_str = wkt[start + 2..end].trim();
    parse_ring(ring_str)
}

/// Parse a single ring of "lon lat" pairs into a polygon.
fn parse_ring(ring_str: &str) -> Result<Polygon<f64>> {
    let points: Result<Vec<(f64, f64)>> = ring_str
        .split(',')
        .map(|pair| {
            let pair = pair.trim();
            let parts: Vec<&str> = pair.split_whitespace().collect();
            if parts.len() != 2 {
                return Err(BoundaryError::InvalidWkt(format!(
                    "Expected 'lon lat' format, got '{}'",
                    pair
                )));
            }

            let lon: f64 = parts[0]
                .parse()
                .map_err(|_| BoundaryError::InvalidCoordinate(parts[0].to_string()))?;
            let lat: f64 = parts[1]
                .parse()
                .map_err(|_| BoundaryError::InvalidCoordinate(parts[1].to_string()))?;

            ImpactError::check_lon_lat(lon, lat)
                .map_err(|e| BoundaryError::CoordinateOutOfRange(e.to_string()))?;

            Ok((lon, lat))
        })
        .collect();

    let points = points?;

    if points.len() < 4 {
        return Err(BoundaryError::InvalidWkt(
            "Polygon must have at least 4 points (including closing point)".to_string(),
        ));
    }

    // geo closes the ring itself if the last point differs from the first.
    Ok(Polygon::new(LineString::from(points), Vec::new()))
}

/// Parse a WKT `MULTIPOLYGON(((ring1)),((ring2)))` string.
fn parse_multipolygon(wkt: &str) -> Result<Vec<Polygon<f64>>> {
    let start = wkt
        .find('(')
        .ok_or_else(|| BoundaryError::InvalidWkt("Missing opening parenthesis".to_string()))?;
    let end = wkt
        .rfind(')')
        .ok_or_else(|| BoundaryError::InvalidWkt("Missing closing parenthesis".to_string()))?;

    if end <= start {
        return Err(BoundaryError::InvalidWkt(
            "Invalid parenthesis order".to_string(),
        ));
    }

    let inner = &wkt[start + 1..end];

    // Polygons sit in double parentheses: ((ring1)),((ring2))
    let mut polygons = Vec::new();
    let mut depth = 0;
    let mut current = String::new();

    for ch in inner.chars() {
        match ch {
            '(' => {
                depth += 1;
                if depth > 1 {
                    current.push(ch);
                }
            }
            ')' => {
                depth -= 1;
                if depth == 1 {
                    let ring_str = current.trim();
                    if !ring_str.is_empty() {
                        let ring_str = ring_str.trim_start_matches('(').trim_end_matches(')');
                        polygons.push(parse_ring(ring_str)?);
                    }
                    current.clear();
                } else if depth > 1 {
                    current.push(ch);
                }
            }
            _ => {
                if depth > 1 {
                    current.push(ch);
                }
            }
        }
    }

    if polygons.is_empty() {
        return Err(BoundaryError::InvalidWkt(
            "MULTIPOLYGON contains no rings".to_string(),
        ));
    }

    Ok(polygons)
}
