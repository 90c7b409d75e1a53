//! Region and category narrowing over the geocoded view.

use rcce_activity_models::{Categorized, CategoryColumn};

/// Records in `region`, or every record when `region` is `None`.
#[must_use]
pub fn in_region<'a, T: Categorized>(records: &'a [T], region: Option<&str>) -> Vec<&'a T> {
    match region {
        None => records.iter().collect(),
        Some(region) => records.iter().filter(|r| r.region() == region).collect(),
    }
}

/// Records whose `column` equals `value`, or all of `records` when `value`
/// is `None`.
#[must_use]
pub fn matching<'a, T: Categorized>(
    records: &[&'a T],
    column: CategoryColumn,
    value: Option<&str>,
) -> Vec<&'a T> {
    match value {
        None => records.to_vec(),
        Some(value) => records
            .iter()
            .copied()
            .filter(|r| r.category(column) == value)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::geocoded;

    #[test]
    fn no_region_keeps_the_national_view() {
        let records = vec![
            geocoded("NCR", "Ongoing"),
            geocoded("Region IV-A", "Completed"),
        ];
        assert_eq!(in_region(&records, None).len(), 2);
    }

    #[test]
    fn region_yields_a_subset_in_that_region() {
        let records = vec![
            geocoded("NCR", "Ongoing"),
            geocoded("Region IV-A", "Completed"),
            geocoded("Region IV-A", "Ongoing"),
        ];
        let subset = in_region(&records, Some("Region IV-A"));
        assert_eq!(subset.len(), 2);
        assert!(subset.iter().all(|r| r.region == "Region IV-A"));
    }

    #[test]
    fn category_value_narrows_to_exact_matches() {
        let records = vec![
            geocoded("NCR", "Ongoing"),
            geocoded("NCR", "Ongoing"),
            geocoded("NCR", "Completed"),
        ];
        let all = in_region(&records, None);

        let ongoing = matching(&all, CategoryColumn::Status, Some("Ongoing"));
        assert_eq!(ongoing.len(), 2);
        assert!(ongoing.iter().all(|r| r.status == "Ongoing"));

        assert_eq!(matching(&all, CategoryColumn::Status, None).len(), 3);
        assert!(matching(&all, CategoryColumn::Status, Some("Cancelled")).is_empty());
    }
}
