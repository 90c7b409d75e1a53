#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Chart input types produced by the RCCE aggregator.
//!
//! A [`CategoryFrequency`] is derived fresh on every render and never
//! mutated after it is built; the ordering helpers return new values.

use serde::{Deserialize, Serialize};

/// Occurrences of a single category label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    /// Category label (e.g. "Ongoing").
    pub label: String,
    /// Number of records carrying the label.
    pub count: u64,
}

/// Label → count mapping that remembers label order.
///
/// Built in first-seen order. Use [`Self::ranked`] or [`Self::top`] for
/// descending-frequency order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryFrequency {
    counts: Vec<CategoryCount>,
}

impl CategoryFrequency {
    /// Wraps already-counted entries. Labels are expected to be distinct.
    #[must_use]
    pub const fn from_counts(counts: Vec<CategoryCount>) -> Self {
        Self { counts }
    }

    /// Count for `label`, or 0 if the label never occurred.
    #[must_use]
    pub fn get(&self, label: &str) -> u64 {
        self.counts
            .iter()
            .find(|c| c.label == label)
            .map_or(0, |c| c.count)
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|c| c.count).sum()
    }

    /// Number of distinct labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no label was counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries in their current order.
    #[must_use]
    pub fn counts(&self) -> &[CategoryCount] {
        &self.counts
    }

    /// Labels in their current order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.counts.iter().map(|c| c.label.as_str())
    }

    /// Copy ordered by descending count. Ties keep their first-seen order.
    #[must_use]
    pub fn ranked(&self) -> Self {
        let mut counts = self.counts.clone();
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        Self { counts }
    }

    /// The `n` most frequent labels, in descending order.
    #[must_use]
    pub fn top(&self, n: usize) -> Self {
        let mut ranked = self.ranked();
        ranked.counts.truncate(n);
        ranked
    }
}

impl IntoIterator for CategoryFrequency {
    type Item = CategoryCount;
    type IntoIter = std::vec::IntoIter<CategoryCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

/// A node of a two-level sunburst (group → item).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyNode {
    /// Node label.
    pub label: String,
    /// Records under this node; for a parent, the sum of its children.
    pub count: u64,
    /// Child nodes (empty for leaves).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Self>,
}

/// Language chart input: group counts plus the leading individual
/// languages among the `Others` group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageBreakdown {
    /// Counts per language group, descending.
    pub groups: CategoryFrequency,
    /// Top individual languages within the `Others` group, descending.
    pub others: CategoryFrequency,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frequency(entries: &[(&str, u64)]) -> CategoryFrequency {
        CategoryFrequency::from_counts(
            entries
                .iter()
                .map(|(label, count)| CategoryCount {
                    label: (*label).to_string(),
                    count: *count,
                })
                .collect(),
        )
    }

    #[test]
    fn ranked_is_stable_for_ties() {
        let freq = frequency(&[("Planned", 1), ("Ongoing", 3), ("Completed", 1)]);
        let ranked = freq.ranked();
        let labels: Vec<&str> = ranked.labels().collect();
        assert_eq!(labels, vec!["Ongoing", "Planned", "Completed"]);
    }

    #[test]
    fn top_truncates_after_ranking() {
        let freq = frequency(&[("a", 1), ("b", 5), ("c", 3)]);
        let top = freq.top(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top.counts()[0].label, "b");
        assert_eq!(top.counts()[1].label, "c");
    }

    #[test]
    fn get_and_total() {
        let freq = frequency(&[("Ongoing", 2), ("Completed", 1)]);
        assert_eq!(freq.get("Ongoing"), 2);
        assert_eq!(freq.get("Planned"), 0);
        assert_eq!(freq.total(), 3);
        assert!(CategoryFrequency::default().is_empty());
    }

    #[test]
    fn serializes_as_a_list_of_counts() {
        let freq = frequency(&[("Ongoing", 2)]);
        let json = serde_json::to_value(&freq).unwrap();
        assert_eq!(json, serde_json::json!([{ "label": "Ongoing", "count": 2 }]));
    }
}
