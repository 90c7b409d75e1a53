#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! RCCE activity, region, and case summary types.
//!
//! This crate defines the canonical record types used across the whole
//! dashboard. The dataset loader normalizes spreadsheet rows into these
//! types once at startup; everything downstream treats them as read-only.

use chrono::NaiveDate;
use geo::Point;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Region value marking a national campaign with no specific location.
pub const NATIONWIDE_REGION: &str = "NATIONWIDE";

/// Label substituted for blank categorical values at load time.
pub const UNSPECIFIED_LABEL: &str = "Unspecified";

/// The categorical dimensions a dashboard page can visualize.
///
/// Each variant serializes as the spreadsheet column header it is read
/// from.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum CategoryColumn {
    /// Project status (planned, ongoing, completed).
    #[serde(rename = "STATUS")]
    #[strum(serialize = "STATUS")]
    Status,
    /// Language group (Filipino, English, Others, ...).
    #[serde(rename = "LANG_GRP")]
    #[strum(serialize = "LANG_GRP")]
    LanguageGroup,
    /// Communication channel group (online, print, broadcast, ...).
    #[serde(rename = "COMM_GRP")]
    #[strum(serialize = "COMM_GRP")]
    CommunicationGroup,
    /// Information-gap category.
    #[serde(rename = "INFO_GAP")]
    #[strum(serialize = "INFO_GAP")]
    InformationGap,
}

impl CategoryColumn {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Status,
            Self::LanguageGroup,
            Self::CommunicationGroup,
            Self::InformationGap,
        ]
    }

    /// Human-readable name used in chart titles.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Status => "Status",
            Self::LanguageGroup => "Language Groups",
            Self::CommunicationGroup => "Communication Channels",
            Self::InformationGap => "Information Gaps",
        }
    }
}

/// Dashboard pages.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Page {
    /// Status of projects.
    Status,
    /// Languages used.
    Language,
    /// Communication channels.
    Communication,
    /// Information gaps.
    InformationGap,
    /// Case and death trend.
    Cases,
}

impl Page {
    /// Returns all pages in navigation order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Status,
            Self::Language,
            Self::Communication,
            Self::InformationGap,
            Self::Cases,
        ]
    }

    /// The category column this page visualizes, or `None` for the cases
    /// page.
    #[must_use]
    pub const fn category_column(self) -> Option<CategoryColumn> {
        match self {
            Self::Status => Some(CategoryColumn::Status),
            Self::Language => Some(CategoryColumn::LanguageGroup),
            Self::Communication => Some(CategoryColumn::CommunicationGroup),
            Self::InformationGap => Some(CategoryColumn::InformationGap),
            Self::Cases => None,
        }
    }

    /// The page that visualizes `column`.
    #[must_use]
    pub const fn for_column(column: CategoryColumn) -> Self {
        match column {
            CategoryColumn::Status => Self::Status,
            CategoryColumn::LanguageGroup => Self::Language,
            CategoryColumn::CommunicationGroup => Self::Communication,
            CategoryColumn::InformationGap => Self::InformationGap,
        }
    }
}

/// Read access to the categorical fields shared by activity and geocoded
/// records.
pub trait Categorized {
    /// Region name.
    fn region(&self) -> &str;

    /// Value of `column` for this record.
    fn category(&self, column: CategoryColumn) -> &str;

    /// Individual language (finer than the language group).
    fn language(&self) -> &str;

    /// Individual communication channel (finer than the communication
    /// group).
    fn communication_channel(&self) -> &str;
}

/// One RCCE activity as loaded from the activity table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    /// Region name, or [`NATIONWIDE_REGION`]. Never empty.
    pub region: String,
    /// Province.
    pub province: String,
    /// City or municipality.
    pub city: String,
    /// Free-text activity description.
    pub activity: Option<String>,
    /// Project status.
    pub status: String,
    /// Language the activity was delivered in.
    pub language: String,
    /// Language group.
    pub language_group: String,
    /// Communication channel group.
    pub communication_group: String,
    /// Specific communication channel.
    pub communication_channel: String,
    /// Information-gap category.
    pub information_gap: String,
    /// Longitude (WGS84), if known.
    pub longitude: Option<f64>,
    /// Latitude (WGS84), if known.
    pub latitude: Option<f64>,
    /// Start date.
    pub start: Option<NaiveDate>,
    /// Finish date.
    pub finish: Option<NaiveDate>,
}

impl ActivityRecord {
    /// Whether this is a national campaign rather than a located activity.
    #[must_use]
    pub fn is_nationwide(&self) -> bool {
        self.region == NATIONWIDE_REGION
    }

    /// The activity's point, if both coordinates are present and finite.
    #[must_use]
    pub fn point(&self) -> Option<Point<f64>> {
        let longitude = self.longitude?;
        let latitude = self.latitude?;
        if !longitude.is_finite() || !latitude.is_finite() {
            return None;
        }
        Some(Point::new(longitude, latitude))
    }
}

impl Categorized for ActivityRecord {
    fn region(&self) -> &str {
        &self.region
    }

    fn category(&self, column: CategoryColumn) -> &str {
        match column {
            CategoryColumn::Status => &self.status,
            CategoryColumn::LanguageGroup => &self.language_group,
            CategoryColumn::CommunicationGroup => &self.communication_group,
            CategoryColumn::InformationGap => &self.information_gap,
        }
    }

    fn language(&self) -> &str {
        &self.language
    }

    fn communication_channel(&self) -> &str {
        &self.communication_channel
    }
}

/// An activity restricted to its mapping fields, with a derived point.
///
/// Only built for activities whose coordinates are both present.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedRecord {
    /// Region name.
    pub region: String,
    /// Province.
    pub province: String,
    /// City or municipality.
    pub city: String,
    /// Project status.
    pub status: String,
    /// Language.
    pub language: String,
    /// Language group.
    pub language_group: String,
    /// Communication channel group.
    pub communication_group: String,
    /// Specific communication channel.
    pub communication_channel: String,
    /// Information-gap category.
    pub information_gap: String,
    /// Location (x = longitude, y = latitude).
    pub point: Point<f64>,
}

impl GeocodedRecord {
    /// Builds a geocoded record from an activity, or `None` when the
    /// activity has no usable coordinates.
    #[must_use]
    pub fn from_activity(activity: &ActivityRecord) -> Option<Self> {
        let point = activity.point()?;
        Some(Self {
            region: activity.region.clone(),
            province: activity.province.clone(),
            city: activity.city.clone(),
            status: activity.status.clone(),
            language: activity.language.clone(),
            language_group: activity.language_group.clone(),
            communication_group: activity.communication_group.clone(),
            communication_channel: activity.communication_channel.clone(),
            information_gap: activity.information_gap.clone(),
            point,
        })
    }

    /// Hover label in `"city, province, region"` form.
    #[must_use]
    pub fn name_label(&self) -> String {
        format!("{}, {}, {}", self.city, self.province, self.region)
    }

    /// Longitude.
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.point.x()
    }

    /// Latitude.
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.point.y()
    }
}

impl Categorized for GeocodedRecord {
    fn region(&self) -> &str {
        &self.region
    }

    fn category(&self, column: CategoryColumn) -> &str {
        match column {
            CategoryColumn::Status => &self.status,
            CategoryColumn::LanguageGroup => &self.language_group,
            CategoryColumn::CommunicationGroup => &self.communication_group,
            CategoryColumn::InformationGap => &self.information_gap,
        }
    }

    fn language(&self) -> &str {
        &self.language
    }

    fn communication_channel(&self) -> &str {
        &self.communication_channel
    }
}

/// Representative map center for a region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionCentroid {
    /// Region name as it appears in the activity table.
    pub name: String,
    /// Centroid longitude.
    pub longitude: f64,
    /// Centroid latitude.
    pub latitude: f64,
}

/// Cumulative case and death counts for one reporting quarter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseDeathQuarter {
    /// Quarter label (e.g. "Q1").
    pub quarter: String,
    /// Total cases in 2020.
    pub cases_2020: Option<u64>,
    /// Total deaths in 2020.
    pub deaths_2020: Option<u64>,
    /// Total cases in 2021.
    pub cases_2021: Option<u64>,
    /// Total deaths in 2021.
    pub deaths_2021: Option<u64>,
}
