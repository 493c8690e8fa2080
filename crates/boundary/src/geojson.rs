//! GeoJSON boundary reading.
//!
//! Accepts a FeatureCollection, a single Feature, or a bare geometry, and
//! keeps only areal geometries. Non-areal members are skipped with a
//! warning rather than failing the load, matching how the dashboards
//! treated messy uploads.

use std::convert::TryFrom;
use std::fs;
use std::path::Path;

use geo::{MultiPolygon, Polygon};
use geojson::{GeoJson, Geometry, Value};
use tracing::{debug, warn};

use crate::error::Result;

/// Outcome of extracting polygons from one GeoJSON document.
#[derive(Debug, Default)]
pub struct GeoJsonPolygons {
    pub polygons: Vec<Polygon<f64>>,
    /// Geometries skipped for not being Polygon/MultiPolygon.
    pub skipped: usize,
}

/// Read polygons from a GeoJSON file.
pub fn read_geojson_file(path: impl AsRef<Path>) -> Result<GeoJsonPolygons> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let extracted = polygons_from_str(&text)?;
    debug!(
        path = %path.display(),
        polygons = extracted.polygons.len(),
        skipped = extracted.skipped,
        "Read GeoJSON boundary file"
    );
    Ok(extracted)
}

/// Extract polygons from GeoJSON text.
pub fn polygons_from_str(text: &str) -> Result<GeoJsonPolygons> {
    // Tolerate utf-8-sig files here too.
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let geojson: GeoJson = text.parse()?;

    let geometries: Vec<Geometry> = match geojson {
        GeoJson::FeatureCollection(fc) => {
            fc.features.into_iter().filter_map(|f| f.geometry).collect()
        }
        GeoJson::Feature(f) => f.geometry.into_iter().collect(),
        GeoJson::Geometry(g) => vec![g],
    };

    let mut extracted = GeoJsonPolygons::default();
    for geometry in geometries {
        collect_polygons(geometry.value, &mut extracted)?;
    }
    Ok(extracted)
}

fn collect_polygons(value: Value, out: &mut GeoJsonPolygons) -> Result<()> {
    match value {
        Value::Polygon(_) => {
            out.polygons.push(Polygon::<f64>::try_from(value)?);
        }
        Value::MultiPolygon(_) => {
            let multi = MultiPolygon::<f64>::try_from(value)?;
            out.polygons.extend(multi.0);
        }
        Value::GeometryCollection(geometries) => {
            for geometry in geometries {
                collect_polygons(geometry.value, out)?;
            }
        }
        other => {
            out.skipped += 1;
            warn!(geometry = other.type_name(), "Skipping non-areal geometry");
        }
    }
    Ok(())
}
