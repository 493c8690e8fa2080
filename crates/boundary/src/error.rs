//! Error types for boundary loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or merging boundaries.
#[derive(Error, Debug)]
pub enum BoundaryError {
    #[error("Failed to read boundary file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse GeoJSON: {0}")]
    GeoJsonParse(#[from] geojson::Error),

    #[error("Failed to read shapefile: {0}")]
    ShapefileRead(#[from] shapefile::Error),

    #[error("Invalid WKT: {0}")]
    InvalidWkt(String),

    #[error("Invalid coordinate value: {0}")]
    InvalidCoordinate(String),

    #[error("Coordinate out of range: {0}")]
    CoordinateOutOfRange(String),

    #[error("Unsupported boundary file extension: {}", .0.display())]
    UnsupportedExtension(PathBuf),

    #[error("No boundary polygons: draw a zone (WKT) or supply a GeoJSON/shapefile boundary")]
    EmptyZone,
}

/// Result type for boundary operations.
pub type Result<T> = std::result::Result<T, BoundaryError>;
