//! Page headings, copy, and dropdown options.

use rcce_activity_models::Page;
use rcce_analytics::distinct_values;
use rcce_dashboard_models::PageInfo;
use rcce_dataset::Dataset;

/// Heading of the landing page.
pub const HOME_TITLE: &str = "What is RCCE?";

/// Body of the landing page.
pub const HOME_PARAGRAPHS: &[&str] = &[
    "Risk Communication and Community Engagement (RCCE) involves engaging and informing the \
     public about risks in their community. This dashboard focuses on the COVID-19 response, \
     method of communication, and issues faced from January 2020 - June 2021.",
    "To begin, start by selecting an item on the sidebar!",
];

/// Heading of the sidebar usage hint shown next to every page.
pub const INSTRUCTIONS_TITLE: &str = "Instructions";

/// Sidebar usage hint.
pub const INSTRUCTIONS: &str =
    "Click from the menu above. Select from the dropdown menu to show the density of each value \
     on the map.";

const fn title(page: Page) -> &'static str {
    match page {
        Page::Status => "Status of Projects",
        Page::Language => "Language Used",
        Page::Communication => "Communication Channels",
        Page::InformationGap => "Information Gaps",
        Page::Cases => "Cases",
    }
}

const fn paragraphs(page: Page) -> &'static [&'static str] {
    match page {
        Page::Status => &[
            "From January 2020 to June 2021, you can see and zoom in on certain parts of the \
             Philippines that have planned and completed their RCCE projects. As for the ongoing \
             projects, those were only during the period of the data set.",
            "You can see which regions have different statuses regarding their project. However, \
             there are a lot of Nationwide projects. These are visible in the donut chart below.",
        ],
        Page::Language => &[
            "In these charts, you can see the different languages for the RCCE projects. Apart \
             from English and Filipino, it also shows the top languages used to relay information \
             across the country.",
        ],
        Page::Communication => &[
            "The map shows the communication channels utilized to relay information and where it \
             is most used. The chart below shows a data breakdown to further dissect the data on \
             the map.",
            "You can click certain parts of the chart below to see how much each category fills \
             each group.",
        ],
        Page::InformationGap => &[
            "Though communication may be efficient in our time, there is no perfect communication \
             channel that everyone can use. In this section, you can see the information gaps or \
             issues faced during the period per region.",
            "In the donut chart below, you can see the information gaps nationwide and per region.",
        ],
        Page::Cases => &[
            "The chart presents COVID-19 cases and deaths in the Philippines during the RCCE \
             period.",
        ],
    }
}

/// Dropdown options for `page`: the distinct values of its column over the
/// full activity table, in first-seen order. Empty for the cases page.
#[must_use]
pub fn options(dataset: &Dataset, page: Page) -> Vec<String> {
    page.category_column()
        .map(|column| distinct_values(dataset.activities(), column))
        .unwrap_or_default()
}

/// Describes `page`.
#[must_use]
pub fn page_info(dataset: &Dataset, page: Page) -> PageInfo {
    PageInfo {
        page,
        title: title(page).to_owned(),
        paragraphs: paragraphs(page).iter().map(|p| (*p).to_owned()).collect(),
        options: options(dataset, page),
    }
}

/// Describes every page in navigation order.
#[must_use]
pub fn catalog(dataset: &Dataset) -> Vec<PageInfo> {
    Page::all().iter().map(|page| page_info(dataset, *page)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::dataset;

    #[test]
    fn options_come_from_the_full_activity_table() {
        let dataset = dataset();
        // The nationwide campaign has no coordinates but still contributes
        // its status to the dropdown.
        assert_eq!(
            options(&dataset, Page::Status),
            vec!["Ongoing".to_string(), "Completed".to_string(), "Planned".to_string()]
        );
        assert!(options(&dataset, Page::Cases).is_empty());
    }

    #[test]
    fn instructions_point_at_the_menu_and_dropdown() {
        assert_eq!(INSTRUCTIONS_TITLE, "Instructions");
        assert_eq!(
            INSTRUCTIONS,
            "Click from the menu above. Select from the dropdown menu to show the density of \
             each value on the map."
        );
    }

    #[test]
    fn catalog_lists_every_page() {
        let catalog = catalog(&dataset());
        assert_eq!(catalog.len(), Page::all().len());
        assert_eq!(catalog[0].title, "Status of Projects");
        assert!(catalog.iter().all(|p| !p.paragraphs.is_empty()));
    }
}
