//! Impact-zone assembly: gather polygons from every source and merge them
//! into a single region.

use std::path::Path;

use geo::{BooleanOps, BoundingRect, Contains, MultiPolygon, Point, Polygon};
use serde::Serialize;
use tracing::info;
use walkdir::WalkDir;

use impact_common::BoundingBox;

use crate::error::{BoundaryError, Result};
use crate::geojson::read_geojson_file;
use crate::shp::read_shapefile;
use crate::wkt::parse_zone_wkt;

/// Where a batch of boundary polygons came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    GeoJson,
    Shapefile,
    Wkt,
}

/// Per-source bookkeeping for the final report.
#[derive(Debug, Clone, Serialize)]
pub struct SourceSummary {
    /// File path or "wkt" for inline zones.
    pub label: String,
    pub kind: SourceKind,
    /// Polygons contributed by this source.
    pub polygons: usize,
    /// Geometries in the source that were skipped.
    pub skipped: usize,
}

/// Accumulates boundary polygons from files, directories, and WKT strings.
#[derive(Debug, Default)]
pub struct ZoneBuilder {
    polygons: Vec<Polygon<f64>>,
    sources: Vec<SourceSummary>,
}

impl ZoneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add polygons from a single boundary file, dispatching on extension.
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> Result<&mut Self> {
        let path = path.as_ref();
        match extension_of(path) {
            Some("json") | Some("geojson") => {
                let extracted = read_geojson_file(path)?;
                self.record(
                    path.display().to_string(),
                    SourceKind::GeoJson,
                    extracted.polygons,
                    extracted.skipped,
                );
            }
            Some("shp") => {
                let extracted = read_shapefile(path)?;
                self.record(
                    path.display().to_string(),
                    SourceKind::Shapefile,
                    extracted.polygons,
                    extracted.skipped,
                );
            }
            _ => return Err(BoundaryError::UnsupportedExtension(path.to_path_buf())),
        }
        Ok(self)
    }

    /// Add every supported boundary file found under a directory.
    ///
    /// Shapefile sidecars (`.shx`, `.dbf`, `.prj`) are ignored; only `.shp`
    /// and GeoJSON files are loaded.
    pub fn add_dir(&mut self, dir: impl AsRef<Path>) -> Result<&mut Self> {
        let dir = dir.as_ref();
        for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if matches!(extension_of(path), Some("json") | Some("geojson") | Some("shp")) {
                self.add_file(path)?;
            }
        }
        Ok(self)
    }

    /// Add polygons from a WKT POLYGON/MULTIPOLYGON string.
    pub fn add_wkt(&mut self, wkt: &str) -> Result<&mut Self> {
        let polygons = parse_zone_wkt(wkt)?;
        self.record("wkt".to_string(), SourceKind::Wkt, polygons, 0);
        Ok(self)
    }

    /// True when no source has contributed a polygon yet.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Merge everything gathered so far into a single zone.
    ///
    /// Fails with [`BoundaryError::EmptyZone`] when no polygons were added;
    /// an analysis against no zone at all is a user error, not an empty
    /// report.
    pub fn build(self) -> Result<ImpactZone> {
        if self.polygons.is_empty() {
            return Err(BoundaryError::EmptyZone);
        }

        let input_polygons = self.polygons.len();
        let region = merge_polygons(&self.polygons);
        info!(
            input_polygons,
            merged_polygons = region.0.len(),
            sources = self.sources.len(),
            "Merged boundary sources into impact zone"
        );

        Ok(ImpactZone {
            region,
            sources: self.sources,
        })
    }

    fn record(
        &mut self,
        label: String,
        kind: SourceKind,
        polygons: Vec<Polygon<f64>>,
        skipped: usize,
    ) {
        self.sources.push(SourceSummary {
            label,
            kind,
            polygons: polygons.len(),
            skipped,
        });
        self.polygons.extend(polygons);
    }
}

/// Union a set of polygons into one (possibly disjoint) region.
///
/// Overlapping inputs merge, so a point covered by several sources is
/// counted once downstream.
pub fn merge_polygons(polygons: &[Polygon<f64>]) -> MultiPolygon<f64> {
    polygons
        .iter()
        .fold(MultiPolygon::new(Vec::new()), |merged, polygon| {
            merged.union(&MultiPolygon::new(vec![polygon.clone()]))
        })
}

/// The merged impact zone every school is tested against.
#[derive(Debug, Clone)]
pub struct ImpactZone {
    region: MultiPolygon<f64>,
    sources: Vec<SourceSummary>,
}

impl ImpactZone {
    /// Build a zone directly from polygons (mainly for tests).
    pub fn from_polygons(polygons: Vec<Polygon<f64>>) -> Result<Self> {
        if polygons.is_empty() {
            return Err(BoundaryError::EmptyZone);
        }
        Ok(Self {
            region: merge_polygons(&polygons),
            sources: Vec::new(),
        })
    }

    /// Strict-interior containment test for a (lon, lat) point.
    ///
    /// A point exactly on the zone edge counts as outside.
    pub fn contains(&self, point: &Point<f64>) -> bool {
        self.region.contains(point)
    }

    /// The merged region.
    pub fn region(&self) -> &MultiPolygon<f64> {
        &self.region
    }

    /// Number of disjoint polygons after merging.
    pub fn polygon_count(&self) -> usize {
        self.region.0.len()
    }

    /// Per-source bookkeeping.
    pub fn sources(&self) -> &[SourceSummary] {
        &self.sources
    }

    /// Geographic bounding box of the zone.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.region
            .bounding_rect()
            .map(|r| BoundingBox::new(r.min().x, r.min().y, r.max().x, r.max().y))
    }
}

fn extension_of(path: &Path) -> Option<&str> {
    path.extension().and_then(|e| e.to_str())
}
