#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the RCCE dashboard server.
//!
//! Render results and charts are served as-is from
//! `rcce_dashboard_models`; the types here cover the envelopes and query
//! parameters that only exist at the HTTP boundary.

use rcce_activity_models::{Page, RegionCentroid};
use rcce_dashboard_models::PageInfo;
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// Query parameters for the render and map endpoints.
///
/// Both parameters are optional. Empty strings are treated as "no
/// selection", which is what a cleared dropdown sends.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderQueryParams {
    /// Category value narrowing the map.
    pub value: Option<String>,
    /// Region narrowing map and chart.
    pub region: Option<String>,
}

impl RenderQueryParams {
    /// The selected category value, if non-blank.
    #[must_use]
    pub fn value(&self) -> Option<String> {
        non_blank(self.value.as_deref())
    }

    /// The selected region, if non-blank.
    #[must_use]
    pub fn region(&self) -> Option<String> {
        non_blank(self.region.as_deref())
    }
}

fn non_blank(s: Option<&str>) -> Option<String> {
    s.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// The landing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHome {
    /// Heading.
    pub title: String,
    /// Body paragraphs.
    pub paragraphs: Vec<String>,
}

/// Sidebar usage hint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiInstructions {
    /// Heading.
    pub title: String,
    /// Hint text.
    pub text: String,
}

/// Everything the front end needs to build its navigation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPageCatalog {
    /// Landing page.
    pub home: ApiHome,
    /// Sidebar usage hint.
    pub instructions: ApiInstructions,
    /// Dashboard pages in navigation order.
    pub pages: Vec<PageInfo>,
}

/// A selectable region with its map centroid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRegion {
    /// Region name, as used in the `region` query parameter.
    pub name: String,
    /// Centroid longitude.
    pub longitude: f64,
    /// Centroid latitude.
    pub latitude: f64,
}

impl From<&RegionCentroid> for ApiRegion {
    fn from(region: &RegionCentroid) -> Self {
        Self {
            name: region.name.clone(),
            longitude: region.longitude,
            latitude: region.latitude,
        }
    }
}

/// Dropdown options for one page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiOptions {
    /// The page.
    pub page: Page,
    /// Distinct category values, first-seen order.
    pub options: Vec<String>,
}
