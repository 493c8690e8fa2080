//! ESRI Shapefile boundary reading.
//!
//! Only the `.shp` geometry file is required; attribute tables are ignored
//! since the zone is pure geometry. Non-polygon shapes are skipped with a
//! warning.

use std::path::Path;

use geo::{MultiPolygon, Polygon};
use shapefile::Shape;
use tracing::{debug, warn};

use crate::error::Result;

/// Outcome of extracting polygons from one shapefile.
#[derive(Debug, Default)]
pub struct ShapefilePolygons {
    pub polygons: Vec<Polygon<f64>>,
    /// Shapes skipped for not being polygons.
    pub skipped: usize,
}

/// Read polygons from a `.shp` file.
pub fn read_shapefile(path: impl AsRef<Path>) -> Result<ShapefilePolygons> {
    let path = path.as_ref();
    let shapes = shapefile::read_shapes(path)?;

    let mut extracted = ShapefilePolygons::default();
    for shape in shapes {
        match shape {
            Shape::Polygon(polygon) => {
                // The shapefile ring-winding rules map one shape to a
                // MultiPolygon (outer rings with their holes).
                let multi: MultiPolygon<f64> = polygon.into();
                extracted.polygons.extend(multi.0);
            }
            _ => {
                extracted.skipped += 1;
                warn!("Skipping non-polygon shape");
            }
        }
    }

    debug!(
        path = %path.display(),
        polygons = extracted.polygons.len(),
        skipped = extracted.skipped,
        "Read shapefile boundary"
    );
    Ok(extracted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Contains, Point};
    use shapefile::{PolygonRing, ShapeWriter};

    #[test]
    fn test_shapefile_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zone.shp");

        let polygon = shapefile::Polygon::with_rings(vec![PolygonRing::Outer(vec![
            shapefile::Point::new(54.0, 37.0),
            shapefile::Point::new(55.0, 37.0),
            shapefile::Point::new(55.0, 38.0),
            shapefile::Point::new(54.0, 38.0),
            shapefile::Point::new(54.0, 37.0),
        ])]);

        let writer = ShapeWriter::from_path(&path).unwrap();
        writer.write_shapes(&vec![polygon]).unwrap();

        let extracted = read_shapefile(&path).unwrap();
        assert_eq!(extracted.polygons.len(), 1);
        assert_eq!(extracted.skipped, 0);
        assert!(extracted.polygons[0].contains(&Point::new(54.5, 37.5)));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(read_shapefile("/nonexistent/zone.shp").is_err());
    }
}
