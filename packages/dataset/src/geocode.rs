//! Builds the geocoded view that every map renders from.

use rcce_activity_models::{ActivityRecord, GeocodedRecord};

/// Projects activities to their mapping fields and drops those without a
/// usable longitude/latitude pair.
///
/// Dropped rows are not reported to the caller; maps simply never see them.
#[must_use]
pub fn build_geocoded_view(activities: &[ActivityRecord]) -> Vec<GeocodedRecord> {
    let view: Vec<GeocodedRecord> = activities
        .iter()
        .filter_map(GeocodedRecord::from_activity)
        .collect();

    log::debug!(
        "Geocoded view: {} of {} activities have coordinates",
        view.len(),
        activities.len()
    );

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use rcce_activity_models::NATIONWIDE_REGION;

    fn activity(region: &str, coords: Option<(f64, f64)>) -> ActivityRecord {
        ActivityRecord {
            region: region.to_string(),
            province: String::new(),
            city: String::new(),
            activity: None,
            status: "Completed".to_string(),
            language: "English".to_string(),
            language_group: "English".to_string(),
            communication_group: "Print".to_string(),
            communication_channel: "Poster".to_string(),
            information_gap: "None".to_string(),
            longitude: coords.map(|(lng, _)| lng),
            latitude: coords.map(|(_, lat)| lat),
            start: None,
            finish: None,
        }
    }

    #[test]
    fn keeps_exactly_the_records_with_coordinates() {
        let mut missing_lat = activity("NCR", Some((121.0, 14.6)));
        missing_lat.latitude = None;

        let activities = vec![
            activity("NCR", Some((121.0, 14.6))),
            activity(NATIONWIDE_REGION, None),
            missing_lat,
            activity("Region VII", Some((123.9, 10.3))),
        ];

        let view = build_geocoded_view(&activities);

        assert!(view.len() <= activities.len());
        assert_eq!(view.len(), 2);
        assert_eq!(view[0].region, "NCR");
        assert_eq!(view[1].region, "Region VII");
    }

    #[test]
    fn empty_input_yields_empty_view() {
        assert!(build_geocoded_view(&[]).is_empty());
    }
}
