//! Chart construction for each page.

use rcce_activity_models::{CaseDeathQuarter, Categorized, CategoryColumn};
use rcce_analytics::breakdown::{TOP_OTHER_LANGUAGES, communication_hierarchy, language_breakdown};
use rcce_analytics::count_by;
use rcce_dashboard_models::{Chart, LineChart, LineSeries, PieTrace};

/// Title prefix used when no region is selected.
pub const NATIONWIDE_SCOPE: &str = "Nationwide";

/// Title prefix for charts over national campaigns only.
pub const NATIONWIDE_CAMPAIGNS_SCOPE: &str = "Nationwide Campaigns";

/// Builds the chart for `column` over `records`.
///
/// `scope` names the area the records cover (a region name or
/// [`NATIONWIDE_SCOPE`]) and prefixes the title.
#[must_use]
pub fn breakdown_chart<T: Categorized>(
    column: CategoryColumn,
    records: &[&T],
    scope: &str,
) -> Chart {
    let title = format!("{scope} {}", column.label());

    match column {
        CategoryColumn::Status | CategoryColumn::InformationGap => Chart::Pie {
            title,
            slices: count_by(records.iter().copied(), column).ranked(),
        },
        CategoryColumn::LanguageGroup => {
            let breakdown = language_breakdown(records.iter().copied(), TOP_OTHER_LANGUAGES);
            Chart::PiePair {
                title,
                left: PieTrace {
                    title: "Language Group".to_owned(),
                    slices: breakdown.groups,
                },
                right: PieTrace {
                    title: "Others".to_owned(),
                    slices: breakdown.others,
                },
            }
        }
        CategoryColumn::CommunicationGroup => Chart::Sunburst {
            title,
            nodes: communication_hierarchy(records.iter().copied()),
        },
    }
}

/// The static case/death trend: cumulative cases and deaths for 2020 and
/// 2021, one point per quarter.
#[must_use]
pub fn case_trend(quarters: &[CaseDeathQuarter]) -> LineChart {
    let series = |name: &str, value: fn(&CaseDeathQuarter) -> Option<u64>| LineSeries {
        name: name.to_owned(),
        values: quarters.iter().map(value).collect(),
    };

    LineChart {
        title: "Total Cases and Deaths During the RCCE Period".to_owned(),
        x_label: "Quarter".to_owned(),
        y_label: "Population".to_owned(),
        categories: quarters.iter().map(|q| q.quarter.clone()).collect(),
        series: vec![
            series("Total Cases 2020", |q| q.cases_2020),
            series("Total Cases 2021", |q| q.cases_2021),
            series("Total Deaths 2020", |q| q.deaths_2020),
            series("Total Deaths 2021", |q| q.deaths_2021),
        ],
    }
}
