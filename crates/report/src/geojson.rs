//! GeoJSON export of impacted schools.
//!
//! One point Feature per school, properties carrying the report fields, so
//! the result drops straight onto any web map.

use std::io::Write;

use geojson::{feature::Id, Feature, FeatureCollection, Geometry, Value};
use serde_json::{json, Map};

use impact_common::{CategoryRules, School};

use crate::error::Result;

/// Build a FeatureCollection of point features for a school list.
pub fn schools_feature_collection(schools: &[School], rules: &CategoryRules) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: schools
            .iter()
            .map(|school| school_feature(school, rules))
            .collect(),
        foreign_members: None,
    }
}

fn school_feature(school: &School, rules: &CategoryRules) -> Feature {
    let mut properties = Map::new();
    properties.insert("name".to_string(), json!(school.name));
    properties.insert(
        "grade_level".to_string(),
        json!(school.grade_level),
    );
    properties.insert(
        "grade_band".to_string(),
        json!(rules.band_for(&school.grade_level).to_string()),
    );
    properties.insert("students".to_string(), json!(school.students));
    properties.insert("teachers".to_string(), json!(school.teachers));
    properties.insert("gender".to_string(), json!(school.gender.to_string()));
    if let Some(principal) = &school.principal {
        properties.insert("principal".to_string(), json!(principal));
    }

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Point(vec![
            school.longitude,
            school.latitude,
        ]))),
        id: school.id.map(|id| Id::Number(id.into())),
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Write a school list as a GeoJSON FeatureCollection.
pub fn write_schools_geojson<W: Write>(
    writer: W,
    schools: &[School],
    rules: &CategoryRules,
) -> Result<()> {
    let collection = schools_feature_collection(schools, rules);
    serde_json::to_writer_pretty(writer, &collection)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use impact_common::Gender;
    use test_utils::school_at;

    #[test]
    fn test_feature_geometry_is_lon_lat() {
        let school = school_at("s", 54.45, 37.31);
        let collection = schools_feature_collection(&[school], &CategoryRules::default());
        assert_eq!(collection.features.len(), 1);

        let geometry = collection.features[0].geometry.as_ref().unwrap();
        match &geometry.value {
            Value::Point(coords) => {
                assert_eq!(coords[0], 54.45);
                assert_eq!(coords[1], 37.31);
            }
            other => panic!("expected point, got {:?}", other),
        }
    }

    #[test]
    fn test_feature_properties() {
        let mut school = school_at("متوسطه اندیشه", 54.4552, 37.3105);
        school.id = Some(100014);
        school.grade_level = "متوسطه اول".to_string();
        school.students = 490;
        school.teachers = 31;
        school.gender = Gender::Boys;

        let collection = schools_feature_collection(&[school], &CategoryRules::default());
        let feature = &collection.features[0];
        let properties = feature.properties.as_ref().unwrap();

        assert_eq!(properties["grade_band"], "secondary");
        assert_eq!(properties["students"], 490);
        assert_eq!(properties["gender"], "boys");
        assert!(!properties.contains_key("principal"));
        assert_eq!(feature.id, Some(Id::Number(100014.into())));
    }

    #[test]
    fn test_written_document_parses_back() {
        let school = school_at("s", 54.0, 37.0);
        let mut buffer = Vec::new();
        write_schools_geojson(&mut buffer, &[school], &CategoryRules::default()).unwrap();

        let parsed: geojson::GeoJson = String::from_utf8(buffer).unwrap().parse().unwrap();
        assert!(matches!(parsed, geojson::GeoJson::FeatureCollection(_)));
    }
}
