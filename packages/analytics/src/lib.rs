#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Category aggregation for the RCCE dashboard charts.
//!
//! Every function here is a pure scan over a slice of records. None of them
//! can fail: an empty input produces an empty result, which charts render
//! as having no slices.

pub mod breakdown;

use std::collections::BTreeMap;

use rcce_activity_models::{Categorized, CategoryColumn};
use rcce_analytics_models::{CategoryCount, CategoryFrequency};

/// Counts labels in first-seen order.
#[must_use]
pub fn count_labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> CategoryFrequency {
    let mut index: BTreeMap<&'a str, usize> = BTreeMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();

    for label in labels {
        if let Some(&i) = index.get(label) {
            counts[i].count += 1;
        } else {
            index.insert(label, counts.len());
            counts.push(CategoryCount {
                label: label.to_owned(),
                count: 1,
            });
        }
    }

    CategoryFrequency::from_counts(counts)
}

/// Counts the values of `column` across `records`, in first-seen order.
///
/// The count for each label equals the number of records whose `column`
/// holds that label, so the counts always sum to the number of records.
#[must_use]
pub fn count_by<'a, T: Categorized + 'a>(
    records: impl IntoIterator<Item = &'a T>,
    column: CategoryColumn,
) -> CategoryFrequency {
    count_labels(records.into_iter().map(|r| r.category(column)))
}

/// Distinct values of `column` across `records`, in first-seen order.
///
/// Used to populate a page's category dropdown.
#[must_use]
pub fn distinct_values<'a, T: Categorized + 'a>(
    records: impl IntoIterator<Item = &'a T>,
    column: CategoryColumn,
) -> Vec<String> {
    count_by(records, column)
        .into_iter()
        .map(|c| c.label)
        .collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use rcce_activity_models::ActivityRecord;

    pub fn record(
        region: &str,
        status: &str,
        language: &str,
        language_group: &str,
        comm: (&str, &str),
    ) -> ActivityRecord {
        ActivityRecord {
            region: region.to_string(),
            province: String::new(),
            city: String::new(),
            activity: None,
            status: status.to_string(),
            language: language.to_string(),
            language_group: language_group.to_string(),
            communication_group: comm.0.to_string(),
            communication_channel: comm.1.to_string(),
            information_gap: "Vaccination".to_string(),
            longitude: None,
            latitude: None,
            start: None,
            finish: None,
        }
    }
}
