//! `GeoJSON` export of rendered map points.

use geojson::{Feature, FeatureCollection, Geometry};
use rcce_activity_models::GeocodedRecord;
use rcce_dashboard_models::{MapPoint, MapView};

/// Converts a geocoded record into a map marker.
#[must_use]
pub fn map_point(record: &GeocodedRecord) -> MapPoint {
    MapPoint {
        longitude: record.longitude(),
        latitude: record.latitude(),
        label: record.name_label(),
        region: record.region.clone(),
        status: record.status.clone(),
        language_group: record.language_group.clone(),
        communication_group: record.communication_group.clone(),
        information_gap: record.information_gap.clone(),
    }
}

/// Builds a point feature carrying the marker's hover fields as properties.
#[must_use]
pub fn point_feature(point: &MapPoint) -> Feature {
    let geometry = Geometry::new(geojson::Value::from(&geo::Point::new(
        point.longitude,
        point.latitude,
    )));

    let mut feature = Feature::from(geometry);
    feature.set_property("nameLabel", point.label.clone());
    feature.set_property("REGION", point.region.clone());
    feature.set_property("STATUS", point.status.clone());
    feature.set_property("LANG_GRP", point.language_group.clone());
    feature.set_property("COMM_GRP", point.communication_group.clone());
    feature.set_property("INFO_GAP", point.information_gap.clone());
    feature
}

/// All markers of `map` as a `FeatureCollection`.
#[must_use]
pub fn feature_collection(map: &MapView) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: map.points.iter().map(point_feature).collect(),
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::geocoded;
    use rcce_dashboard_models::{MapCenter, MapViewport};

    #[test]
    fn features_carry_coordinates_and_hover_fields() {
        let record = geocoded("NCR", "Ongoing");
        let map = MapView {
            viewport: MapViewport {
                center: MapCenter { lon: 121.0, lat: 14.6 },
                zoom: 5.0,
            },
            points: vec![map_point(&record)],
        };

        let collection = feature_collection(&map);
        assert_eq!(collection.features.len(), 1);

        let json = serde_json::to_value(&collection).unwrap();
        let feature = &json["features"][0];
        assert_eq!(feature["geometry"]["type"], "Point");
        assert_eq!(
            feature["geometry"]["coordinates"],
            serde_json::json!([record.longitude(), record.latitude()])
        );
        assert_eq!(feature["properties"]["STATUS"], "Ongoing");
        assert_eq!(feature["properties"]["nameLabel"], record.name_label());
    }

    #[test]
    fn empty_map_is_an_empty_collection() {
        let map = MapView {
            viewport: MapViewport {
                center: MapCenter { lon: 0.0, lat: 0.0 },
                zoom: 4.0,
            },
            points: Vec::new(),
        };
        assert!(feature_collection(&map).features.is_empty());
    }
}
