//! Overpass API client for fetching school locations from OpenStreetMap.
//!
//! Some deployments have no roster file at all; this builds one from OSM
//! `amenity=school` nodes inside a bounding box. The analyze path never
//! touches the network — fetched rosters land in a CSV first.

use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, warn};

use impact_common::{BoundingBox, Gender, School};

/// Overpass JSON response envelope.
#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

#[derive(Debug, Deserialize)]
struct OverpassElement {
    id: u64,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
    #[serde(default)]
    tags: HashMap<String, String>,
}

/// Build the Overpass QL query for school nodes in a bbox.
///
/// Overpass bbox order is (south, west, north, east).
pub fn build_query(bbox: &BoundingBox) -> String {
    format!(
        "[out:json][timeout:60];node[\"amenity\"=\"school\"]({},{},{},{});out body;",
        bbox.south, bbox.west, bbox.north, bbox.east
    )
}

/// Fetch school nodes from Overpass and convert them to roster records.
pub async fn fetch_schools(
    client: &reqwest::Client,
    endpoint: &str,
    bbox: &BoundingBox,
) -> Result<Vec<School>> {
    let query = build_query(bbox);
    debug!(endpoint, %query, "Querying Overpass");

    let response = client
        .post(endpoint)
        .form(&[("data", query.as_str())])
        .send()
        .await
        .context("sending Overpass request")?
        .error_for_status()
        .context("Overpass returned an error status")?;

    let body = response.bytes().await.context("reading Overpass response")?;
    let parsed: OverpassResponse =
        serde_json::from_slice(&body).context("parsing Overpass JSON")?;

    Ok(schools_from_elements(parsed.elements))
}

fn schools_from_elements(elements: Vec<OverpassElement>) -> Vec<School> {
    let mut schools = Vec::with_capacity(elements.len());
    for element in elements {
        let (lat, lon) = match (element.lat, element.lon) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => {
                warn!(id = element.id, "Skipping Overpass element without coordinates");
                continue;
            }
        };

        let tags = element.tags;
        schools.push(School {
            id: Some(element.id),
            name: tags
                .get("name")
                .cloned()
                .unwrap_or_else(|| "unknown".to_string()),
            principal: None,
            grade_level: tags.get("isced:level").cloned().unwrap_or_default(),
            students: tags
                .get("capacity")
                .and_then(|c| c.trim().parse().ok())
                .unwrap_or(0),
            teachers: 0,
            gender: tags
                .get("school:gender")
                .map(|g| Gender::from_label(g))
                .unwrap_or(Gender::Unknown),
            latitude: lat,
            longitude: lon,
        });
    }
    schools
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_uses_south_west_north_east_order() {
        let bbox = BoundingBox::new(54.0, 36.8, 55.0, 37.5);
        let query = build_query(&bbox);
        assert!(query.contains("(36.8,54,37.5,55)"));
        assert!(query.contains("amenity"));
    }

    #[test]
    fn test_elements_convert_to_schools() {
        let json = r#"{
            "elements": [
                {
                    "type": "node",
                    "id": 42,
                    "lat": 37.31,
                    "lon": 54.45,
                    "tags": {
                        "amenity": "school",
                        "name": "Andisheh",
                        "school:gender": "male",
                        "capacity": "490"
                    }
                },
                {
                    "type": "node",
                    "id": 43,
                    "tags": {"amenity": "school"}
                }
            ]
        }"#;
        let parsed: OverpassResponse = serde_json::from_str(json).unwrap();
        let schools = schools_from_elements(parsed.elements);

        // The node without coordinates is skipped.
        assert_eq!(schools.len(), 1);
        let school = &schools[0];
        assert_eq!(school.id, Some(42));
        assert_eq!(school.name, "Andisheh");
        assert_eq!(school.gender, Gender::Boys);
        assert_eq!(school.students, 490);
        assert_eq!(school.latitude, 37.31);
        assert_eq!(school.longitude, 54.45);
    }

    #[test]
    fn test_missing_tags_default() {
        let parsed: OverpassResponse =
            serde_json::from_str(r#"{"elements": [{"id": 1, "lat": 37.0, "lon": 54.0}]}"#).unwrap();
        let schools = schools_from_elements(parsed.elements);
        assert_eq!(schools[0].name, "unknown");
        assert_eq!(schools[0].gender, Gender::Unknown);
        assert_eq!(schools[0].students, 0);
    }
}
