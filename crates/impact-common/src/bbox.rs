//! Geographic bounding box type and operations.

use serde::{Deserialize, Serialize};

use crate::error::{ImpactError, ImpactResult};

/// A geographic bounding box in EPSG:4326 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl BoundingBox {
    /// Create a new bounding box from edge coordinates.
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// Parse a bbox parameter string: "west,south,east,north"
    pub fn from_param(s: &str) -> ImpactResult<Self> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 4 {
            return Err(ImpactError::InvalidBboxFormat(s.to_string()));
        }

        let mut values = [0.0_f64; 4];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part
                .trim()
                .parse()
                .map_err(|_| ImpactError::InvalidBboxNumber(part.trim().to_string()))?;
        }

        let bbox = Self::new(values[0], values[1], values[2], values[3]);
        ImpactError::check_lon_lat(bbox.west, bbox.south)?;
        ImpactError::check_lon_lat(bbox.east, bbox.north)?;
        Ok(bbox)
    }

    /// Width of the bounding box in degrees.
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    /// Height of the bounding box in degrees.
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// Check if a (lon, lat) point is contained within this bbox.
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        lon >= self.west && lon <= self.east && lat >= self.south && lat <= self.north
    }

    /// Grow the box to include a (lon, lat) point.
    pub fn extend(&mut self, lon: f64, lat: f64) {
        self.west = self.west.min(lon);
        self.east = self.east.max(lon);
        self.south = self.south.min(lat);
        self.north = self.north.max(lat);
    }

    /// Bounding box of a set of (lon, lat) points, or None if empty.
    pub fn of_points<I: IntoIterator<Item = (f64, f64)>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let (lon, lat) = iter.next()?;
        let mut bbox = Self::new(lon, lat, lon, lat);
        for (lon, lat) in iter {
            bbox.extend(lon, lat);
        }
        Some(bbox)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bbox_param() {
        let bbox = BoundingBox::from_param("54.0,36.8,55.0,37.5").unwrap();
        assert_eq!(bbox.west, 54.0);
        assert_eq!(bbox.south, 36.8);
        assert_eq!(bbox.east, 55.0);
        assert_eq!(bbox.north, 37.5);
    }

    #[test]
    fn test_parse_bbox_wrong_arity() {
        assert!(matches!(
            BoundingBox::from_param("54.0,36.8,55.0"),
            Err(ImpactError::InvalidBboxFormat(_))
        ));
    }

    #[test]
    fn test_parse_bbox_bad_number() {
        assert!(matches!(
            BoundingBox::from_param("54.0,x,55.0,37.5"),
            Err(ImpactError::InvalidBboxNumber(_))
        ));
    }

    #[test]
    fn test_parse_bbox_out_of_range() {
        assert!(BoundingBox::from_param("54.0,-95.0,55.0,37.5").is_err());
    }

    #[test]
    fn test_contains_and_extend() {
        let mut bbox = BoundingBox::new(54.0, 36.8, 55.0, 37.5);
        assert!(bbox.contains(54.5, 37.0));
        assert!(!bbox.contains(53.9, 37.0));

        bbox.extend(53.5, 37.0);
        assert!(bbox.contains(53.9, 37.0));
    }

    #[test]
    fn test_of_points() {
        let bbox = BoundingBox::of_points(vec![(54.5, 37.3), (54.1, 37.1), (54.9, 36.9)]).unwrap();
        assert_eq!(bbox.west, 54.1);
        assert_eq!(bbox.south, 36.9);
        assert_eq!(bbox.east, 54.9);
        assert_eq!(bbox.north, 37.3);

        assert!(BoundingBox::of_points(Vec::new()).is_none());
    }
}
