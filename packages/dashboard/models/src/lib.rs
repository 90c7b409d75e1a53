#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Selection and render result types for the RCCE dashboard.
//!
//! A [`Selection`] captures everything a page render depends on. Rendering
//! is a pure function of the selection and the loaded dataset, so nothing
//! here carries state between renders.

use rcce_activity_models::{CategoryColumn, Page};
use rcce_analytics_models::{CategoryFrequency, HierarchyNode};
use serde::{Deserialize, Serialize};

/// What the user has selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Selection {
    /// A category page (status, language, communication, information gap).
    #[serde(rename_all = "camelCase")]
    Breakdown {
        /// Column the page visualizes.
        column: CategoryColumn,
        /// Category value narrowing the map, if any.
        value: Option<String>,
        /// Region narrowing both map and chart, if any.
        region: Option<String>,
    },
    /// The static case/death trend page.
    Cases,
}

impl Selection {
    /// Builds the selection for `page`. The cases page ignores `value` and
    /// `region`.
    #[must_use]
    pub fn for_page(page: Page, value: Option<String>, region: Option<String>) -> Self {
        page.category_column()
            .map_or(Self::Cases, |column| Self::Breakdown {
                column,
                value,
                region,
            })
    }

    /// The page this selection renders.
    #[must_use]
    pub const fn page(&self) -> Page {
        match self {
            Self::Breakdown { column, .. } => Page::for_column(*column),
            Self::Cases => Page::Cases,
        }
    }
}

/// A longitude/latitude pair the map is centered on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapCenter {
    /// Longitude.
    pub lon: f64,
    /// Latitude.
    pub lat: f64,
}

/// Map centering rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    /// Center used when no region is selected.
    pub national_center: MapCenter,
    /// Zoom used when no region is selected.
    pub national_zoom: f64,
    /// Zoom used when centering on a region.
    pub region_zoom: f64,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            national_center: MapCenter {
                lon: 122.818,
                lat: 12.096,
            },
            national_zoom: 4.0,
            region_zoom: 5.0,
        }
    }
}

/// Where the map is centered and how far it is zoomed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapViewport {
    /// Map center.
    pub center: MapCenter,
    /// Zoom level.
    pub zoom: f64,
}

/// One activity marker on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapPoint {
    /// Longitude.
    pub longitude: f64,
    /// Latitude.
    pub latitude: f64,
    /// Hover label (`"city, province, region"`).
    pub label: String,
    /// Region.
    pub region: String,
    /// Project status.
    pub status: String,
    /// Language group.
    pub language_group: String,
    /// Communication channel group.
    pub communication_group: String,
    /// Information-gap category.
    pub information_gap: String,
}

/// The map half of a breakdown render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    /// Center and zoom.
    pub viewport: MapViewport,
    /// Markers after region and category filtering.
    pub points: Vec<MapPoint>,
}

/// A single pie trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieTrace {
    /// Trace title.
    pub title: String,
    /// Slices, largest first.
    pub slices: CategoryFrequency,
}

/// Chart shown below the map on a breakdown page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Chart {
    /// A single donut chart.
    Pie {
        /// Chart title.
        title: String,
        /// Slices, largest first.
        slices: CategoryFrequency,
    },
    /// Two donut charts side by side.
    #[serde(rename_all = "camelCase")]
    PiePair {
        /// Chart title.
        title: String,
        /// Left trace.
        left: PieTrace,
        /// Right trace.
        right: PieTrace,
    },
    /// A two-level sunburst.
    Sunburst {
        /// Chart title.
        title: String,
        /// Root nodes.
        nodes: Vec<HierarchyNode>,
    },
}

impl Chart {
    /// The chart's title.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Pie { title, .. }
            | Self::PiePair { title, .. }
            | Self::Sunburst { title, .. } => title,
        }
    }
}

/// One line in a line chart. `None` values are drawn as gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSeries {
    /// Legend name.
    pub name: String,
    /// One value per x category.
    pub values: Vec<Option<u64>>,
}

/// A categorical-x line chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineChart {
    /// Chart title.
    pub title: String,
    /// X axis label.
    pub x_label: String,
    /// Y axis label.
    pub y_label: String,
    /// X categories.
    pub categories: Vec<String>,
    /// Series, each with one value per category.
    pub series: Vec<LineSeries>,
}

/// Output of one render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RenderResult {
    /// Map plus chart for a category page.
    Breakdown {
        /// Filtered map.
        map: MapView,
        /// Region-level chart.
        chart: Chart,
    },
    /// The case/death trend.
    Cases {
        /// Trend chart.
        chart: LineChart,
    },
}

/// Static description of a page for the navigation and page header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Page identifier.
    pub page: Page,
    /// Page heading.
    pub title: String,
    /// Explanatory paragraphs.
    pub paragraphs: Vec<String>,
    /// Category dropdown options (empty for the cases page).
    pub options: Vec<String>,
}
