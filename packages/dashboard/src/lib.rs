#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Filter-and-render pipeline behind every RCCE dashboard page.
//!
//! [`render`] turns a [`Selection`] into the map markers and chart for one
//! page. It reads the immutable [`Dataset`] and recomputes everything from
//! scratch, so concurrent renders never interfere with each other.
//!
//! For a category page the pipeline is:
//!
//! 1. narrow the geocoded view to the selected region (or keep it whole),
//! 2. narrow that further by the selected category value for the map,
//! 3. aggregate the page's column over the region-only set for the chart,
//! 4. center the map on the region centroid, or on the national default.

pub mod charts;
pub mod filter;
pub mod map_features;
pub mod pages;

use rcce_activity_models::{CategoryColumn, GeocodedRecord};
use rcce_dashboard_models::{
    Chart, MapCenter, MapSettings, MapView, MapViewport, RenderResult, Selection,
};
use rcce_dataset::Dataset;
use thiserror::Error;

use crate::charts::{
    NATIONWIDE_CAMPAIGNS_SCOPE, NATIONWIDE_SCOPE, breakdown_chart, case_trend,
};

/// Errors that can occur while rendering a selection.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The selected region has no centroid entry.
    #[error("Unknown region: {0}")]
    UnknownRegion(String),
}

/// Renders one page for `selection`.
///
/// # Errors
///
/// Returns [`RenderError::UnknownRegion`] if the selected region is not in
/// the region centroid table. A category value that matches nothing is not
/// an error; it yields an empty map.
pub fn render(
    dataset: &Dataset,
    selection: &Selection,
    settings: &MapSettings,
) -> Result<RenderResult, RenderError> {
    log::debug!("Rendering {} page", selection.page());

    match selection {
        Selection::Cases => Ok(RenderResult::Cases {
            chart: case_trend(dataset.case_summary()),
        }),
        Selection::Breakdown {
            column,
            value,
            region,
        } => render_breakdown(
            dataset,
            *column,
            value.as_deref(),
            region.as_deref(),
            settings,
        ),
    }
}

fn render_breakdown(
    dataset: &Dataset,
    column: CategoryColumn,
    value: Option<&str>,
    region: Option<&str>,
    settings: &MapSettings,
) -> Result<RenderResult, RenderError> {
    let viewport = viewport(dataset, region, settings)?;

    let regional: Vec<&GeocodedRecord> = filter::in_region(dataset.geocoded(), region);
    let chart = breakdown_chart(column, &regional, region.unwrap_or(NATIONWIDE_SCOPE));

    let points = filter::matching(&regional, column, value)
        .into_iter()
        .map(map_features::map_point)
        .collect::<Vec<_>>();

    log::debug!(
        "Rendered '{}' (value={value:?}): {} of {} regional points",
        chart.title(),
        points.len(),
        regional.len()
    );

    Ok(RenderResult::Breakdown {
        map: MapView { viewport, points },
        chart,
    })
}

/// Map center and zoom for `region`.
///
/// # Errors
///
/// Returns [`RenderError::UnknownRegion`] if `region` has no centroid.
pub fn viewport(
    dataset: &Dataset,
    region: Option<&str>,
    settings: &MapSettings,
) -> Result<MapViewport, RenderError> {
    let Some(name) = region else {
        return Ok(MapViewport {
            center: settings.national_center,
            zoom: settings.national_zoom,
        });
    };

    let centroid = dataset
        .region(name)
        .ok_or_else(|| RenderError::UnknownRegion(name.to_owned()))?;

    Ok(MapViewport {
        center: MapCenter {
            lon: centroid.longitude,
            lat: centroid.latitude,
        },
        zoom: settings.region_zoom,
    })
}

/// Chart for `column` over the national campaigns (region `NATIONWIDE`),
/// which never appear on the map because they have no coordinates.
#[must_use]
pub fn nationwide_chart(dataset: &Dataset, column: CategoryColumn) -> Chart {
    let records: Vec<_> = dataset.nationwide().collect();
    log::debug!("Nationwide {column} chart over {} campaigns", records.len());
    breakdown_chart(column, &records, NATIONWIDE_CAMPAIGNS_SCOPE)
}
