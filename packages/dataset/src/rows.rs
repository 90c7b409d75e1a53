//! Raw spreadsheet row shapes and the parsing helpers that normalize them.
//!
//! Each struct mirrors the column headers of one exported sheet. Rows are
//! converted into the shared record types from `rcce_activity_models`
//! before anything else sees them.

use chrono::{NaiveDate, NaiveDateTime};
use rcce_activity_models::{ActivityRecord, CaseDeathQuarter, RegionCentroid, UNSPECIFIED_LABEL};
use serde::Deserialize;

/// Columns that must be present in the activity sheet.
pub const ACTIVITY_COLUMNS: &[&str] = &[
    "REGION",
    "PROVINCE",
    "CITY/MUNICIPALITY",
    "STATUS",
    "LANGUAGE",
    "LANG_GRP",
    "COMM_GRP",
    "COMMUNICATION_CHANNEL",
    "INFO_GAP",
    "Longitude",
    "Latitude",
];

/// Columns that must be present in the case summary sheet.
pub const CASE_SUMMARY_COLUMNS: &[&str] = &[
    "QUARTER",
    "T_CASES_2020",
    "T_DEATHS_2020",
    "T_CASES_2021",
    "T_DEATHS_2021",
];

/// Columns that must be present in the region centroid sheet.
pub const REGION_COLUMNS: &[&str] = &["Region", "Longitude", "Latitude"];

/// One row of the `RCCE` activity sheet.
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityRow {
    #[serde(rename = "REGION")]
    pub region: String,
    #[serde(rename = "PROVINCE")]
    pub province: String,
    #[serde(rename = "CITY/MUNICIPALITY")]
    pub city: String,
    #[serde(rename = "ACTIVITY", default)]
    pub activity: Option<String>,
    #[serde(rename = "STATUS")]
    pub status: String,
    #[serde(rename = "LANGUAGE")]
    pub language: String,
    #[serde(rename = "LANG_GRP")]
    pub language_group: String,
    #[serde(rename = "COMM_GRP")]
    pub communication_group: String,
    #[serde(rename = "COMMUNICATION_CHANNEL")]
    pub communication_channel: String,
    #[serde(rename = "INFO_GAP")]
    pub information_gap: String,
    #[serde(rename = "Longitude", deserialize_with = "csv::invalid_option")]
    pub longitude: Option<f64>,
    #[serde(rename = "Latitude", deserialize_with = "csv::invalid_option")]
    pub latitude: Option<f64>,
    #[serde(rename = "START", default)]
    pub start: Option<String>,
    #[serde(rename = "FINISH", default)]
    pub finish: Option<String>,
}

impl ActivityRow {
    /// Normalizes the row into an [`ActivityRecord`].
    ///
    /// Returns `None` when the region is blank, which violates the
    /// non-empty region invariant.
    #[must_use]
    pub fn into_record(self) -> Option<ActivityRecord> {
        let region = self.region.trim().to_owned();
        if region.is_empty() {
            return None;
        }

        Some(ActivityRecord {
            region,
            province: self.province.trim().to_owned(),
            city: self.city.trim().to_owned(),
            activity: self
                .activity
                .map(|a| a.trim().to_owned())
                .filter(|a| !a.is_empty()),
            status: category_label(&self.status),
            language: category_label(&self.language),
            language_group: category_label(&self.language_group),
            communication_group: category_label(&self.communication_group),
            communication_channel: category_label(&self.communication_channel),
            information_gap: category_label(&self.information_gap),
            longitude: self.longitude,
            latitude: self.latitude,
            start: self.start.as_deref().and_then(parse_date),
            finish: self.finish.as_deref().and_then(parse_date),
        })
    }
}

/// One row of the `summary` case sheet.
#[derive(Debug, Clone, Deserialize)]
pub struct CaseSummaryRow {
    #[serde(rename = "QUARTER")]
    pub quarter: String,
    #[serde(rename = "T_CASES_2020")]
    pub cases_2020: String,
    #[serde(rename = "T_DEATHS_2020")]
    pub deaths_2020: String,
    #[serde(rename = "T_CASES_2021")]
    pub cases_2021: String,
    #[serde(rename = "T_DEATHS_2021")]
    pub deaths_2021: String,
}

impl From<CaseSummaryRow> for CaseDeathQuarter {
    fn from(row: CaseSummaryRow) -> Self {
        Self {
            quarter: row.quarter.trim().to_owned(),
            cases_2020: parse_count(&row.cases_2020),
            deaths_2020: parse_count(&row.deaths_2020),
            cases_2021: parse_count(&row.cases_2021),
            deaths_2021: parse_count(&row.deaths_2021),
        }
    }
}

/// One row of the `Region` centroid sheet.
#[derive(Debug, Clone, Deserialize)]
pub struct RegionRow {
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Longitude", deserialize_with = "csv::invalid_option")]
    pub longitude: Option<f64>,
    #[serde(rename = "Latitude", deserialize_with = "csv::invalid_option")]
    pub latitude: Option<f64>,
}

impl RegionRow {
    /// Converts the row into a [`RegionCentroid`], or `None` if the name is
    /// blank or either coordinate is missing.
    #[must_use]
    pub fn into_centroid(self) -> Option<RegionCentroid> {
        let name = self.region.trim().to_owned();
        if name.is_empty() {
            return None;
        }
        let longitude = self.longitude.filter(|v| v.is_finite())?;
        let latitude = self.latitude.filter(|v| v.is_finite())?;
        Some(RegionCentroid {
            name,
            longitude,
            latitude,
        })
    }
}

/// Trims a categorical value, substituting [`UNSPECIFIED_LABEL`] for blanks.
#[must_use]
pub fn category_label(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        UNSPECIFIED_LABEL.to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Parses a spreadsheet date cell. Accepts ISO dates, ISO datetimes as
/// written by spreadsheet exports, and US `MM/DD/YYYY` dates.
#[must_use]
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(s, "%m/%d/%Y").ok()
}

/// Parses a count cell. Spreadsheet exports often write whole numbers as
/// floats (`"1234.0"`), so those are accepted too. Negative, fractional, or
/// non-numeric values yield `None`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_count(s: &str) -> Option<u64> {
    let s = s.trim().replace(',', "");
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<u64>() {
        return Some(n);
    }
    let f = s.parse::<f64>().ok()?;
    if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= 9_007_199_254_740_992.0 {
        Some(f as u64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_category_becomes_unspecified() {
        assert_eq!(category_label("  "), UNSPECIFIED_LABEL);
        assert_eq!(category_label(" Ongoing "), "Ongoing");
    }

    #[test]
    fn parses_supported_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2020, 3, 15).unwrap();
        assert_eq!(parse_date("2020-03-15"), Some(expected));
        assert_eq!(parse_date("2020-03-15 00:00:00"), Some(expected));
        assert_eq!(parse_date("03/15/2020"), Some(expected));
        assert_eq!(parse_date("ongoing"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn parses_counts_written_as_floats() {
        assert_eq!(parse_count("1234"), Some(1234));
        assert_eq!(parse_count("1234.0"), Some(1234));
        assert_eq!(parse_count("1,234"), Some(1234));
        assert_eq!(parse_count("12.5"), None);
        assert_eq!(parse_count("-3"), None);
        assert_eq!(parse_count(""), None);
    }

    #[test]
    fn region_row_requires_both_coordinates() {
        let row = RegionRow {
            region: "NCR".to_string(),
            longitude: Some(121.0),
            latitude: None,
        };
        assert!(row.into_centroid().is_none());
    }
}
