//! Page-specific breakdowns built on top of [`crate::count_by`].

use std::collections::BTreeMap;

use rcce_activity_models::{Categorized, CategoryColumn};
use rcce_analytics_models::{HierarchyNode, LanguageBreakdown};

use crate::{count_by, count_labels};

/// Language group whose members are broken out individually.
pub const OTHER_LANGUAGE_GROUP: &str = "Others";

/// How many individual `Others` languages the language chart shows.
pub const TOP_OTHER_LANGUAGES: usize = 12;

/// Language group counts plus the `top_n` individual languages among
/// records in the [`OTHER_LANGUAGE_GROUP`] group.
#[must_use]
pub fn language_breakdown<'a, T: Categorized + 'a>(
    records: impl IntoIterator<Item = &'a T> + Clone,
    top_n: usize,
) -> LanguageBreakdown {
    let groups = count_by(records.clone(), CategoryColumn::LanguageGroup).ranked();

    let others = count_labels(
        records
            .into_iter()
            .filter(|r| r.category(CategoryColumn::LanguageGroup) == OTHER_LANGUAGE_GROUP)
            .map(Categorized::language),
    )
    .top(top_n);

    LanguageBreakdown { groups, others }
}

/// Two-level communication sunburst: group → channel.
///
/// Groups and channels appear in first-seen order. Each group's count is the
/// sum of its channel counts.
#[must_use]
pub fn communication_hierarchy<'a, T: Categorized + 'a>(
    records: impl IntoIterator<Item = &'a T>,
) -> Vec<HierarchyNode> {
    let mut index: BTreeMap<&'a str, usize> = BTreeMap::new();
    let mut channels: Vec<(&'a str, Vec<&'a str>)> = Vec::new();

    for record in records {
        let group = record.category(CategoryColumn::CommunicationGroup);
        let i = *index.entry(group).or_insert_with(|| {
            channels.push((group, Vec::new()));
            channels.len() - 1
        });
        channels[i].1.push(record.communication_channel());
    }

    log::trace!("Communication hierarchy: {} groups", channels.len());

    channels
        .into_iter()
        .map(|(group, items)| {
            let children: Vec<HierarchyNode> = count_labels(items)
                .into_iter()
                .map(|c| HierarchyNode {
                    label: c.label,
                    count: c.count,
                    children: Vec::new(),
                })
                .collect();
            HierarchyNode {
                label: group.to_owned(),
                count: children.iter().map(|c| c.count).sum(),
                children,
            }
        })
        .collect()
}
