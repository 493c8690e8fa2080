//! Impact-zone boundary loading and merging.
//!
//! Boundaries arrive from three places: GeoJSON files, ESRI shapefiles, and
//! inline WKT polygons (the command-line stand-in for a map draw tool). All
//! of them funnel through [`ZoneBuilder`] into one merged [`ImpactZone`].

pub mod error;
pub mod geojson;
pub mod shp;
pub mod wkt;
pub mod zone;

pub use crate::error::{BoundaryError, Result};
pub use crate::geojson::{polygons_from_str, read_geojson_file, GeoJsonPolygons};
pub use crate::shp::{read_shapefile, ShapefilePolygons};
pub use crate::wkt::parse_zone_wkt;
pub use crate::zone::{merge_polygons, ImpactZone, SourceKind, SourceSummary, ZoneBuilder};
