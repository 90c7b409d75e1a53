#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Startup loader for the RCCE dashboard tables.
//!
//! Reads the activity, case summary, and region centroid sheets (exported
//! as CSV) into an immutable [`Dataset`], and derives the geocoded view
//! used by every map. Loading is all-or-nothing: any missing file, missing
//! column, or malformed row aborts the load.

pub mod geocode;
pub mod rows;

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use rcce_activity_models::{ActivityRecord, CaseDeathQuarter, GeocodedRecord, RegionCentroid};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::rows::{
    ACTIVITY_COLUMNS, ActivityRow, CASE_SUMMARY_COLUMNS, CaseSummaryRow, REGION_COLUMNS,
    RegionRow,
};

/// Errors that can occur while loading the dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// A source file could not be opened.
    #[error("Failed to open {table} file {}: {source}", path.display())]
    Io {
        /// Which table was being loaded.
        table: &'static str,
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// CSV parsing failed.
    #[error("CSV error in {table}: {source}")]
    Csv {
        /// Which table was being loaded.
        table: &'static str,
        /// Underlying CSV error.
        source: csv::Error,
    },

    /// A required column is absent from the header row.
    #[error("Missing column '{column}' in {table}")]
    MissingColumn {
        /// Which table was being loaded.
        table: &'static str,
        /// The absent column header.
        column: &'static str,
    },

    /// A row violates a table invariant.
    #[error("Invalid row at line {line} in {table}: {reason}")]
    InvalidRow {
        /// Which table was being loaded.
        table: &'static str,
        /// 1-based line number in the source file.
        line: u64,
        /// What is wrong with the row.
        reason: &'static str,
    },
}

/// Locations of the three source tables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DataPaths {
    /// Activity sheet (`RCCE`).
    pub activities: PathBuf,
    /// Quarterly case/death summary sheet (`summary`).
    pub case_summary: PathBuf,
    /// Region centroid sheet (`Region`).
    pub regions: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            activities: PathBuf::from("data/rcce.csv"),
            case_summary: PathBuf::from("data/owid-summary.csv"),
            regions: PathBuf::from("data/regions.csv"),
        }
    }
}

/// The immutable application dataset.
///
/// Constructed once at startup and shared by reference with every render.
#[derive(Debug, Clone)]
pub struct Dataset {
    activities: Vec<ActivityRecord>,
    geocoded: Vec<GeocodedRecord>,
    regions: Vec<RegionCentroid>,
    case_summary: Vec<CaseDeathQuarter>,
}

impl Dataset {
    /// Loads all three tables from disk.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if any file is missing, lacks a required
    /// column, or contains a malformed row.
    pub fn load(paths: &DataPaths) -> Result<Self, DatasetError> {
        log::info!("Loading activities from {}", paths.activities.display());
        let activities = open("activities", &paths.activities)?;
        log::info!("Loading case summary from {}", paths.case_summary.display());
        let case_summary = open("case summary", &paths.case_summary)?;
        log::info!("Loading region centroids from {}", paths.regions.display());
        let regions = open("regions", &paths.regions)?;

        Self::from_readers(activities, case_summary, regions)
    }

    /// Loads all three tables from arbitrary CSV readers.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if a reader lacks a required column or
    /// contains a malformed row.
    pub fn from_readers(
        activities: impl Read,
        case_summary: impl Read,
        regions: impl Read,
    ) -> Result<Self, DatasetError> {
        let activities = read_table::<ActivityRow, _>("activities", activities, ACTIVITY_COLUMNS)?
            .into_iter()
            .map(|(line, row)| {
                row.into_record().ok_or(DatasetError::InvalidRow {
                    table: "activities",
                    line,
                    reason: "region is empty",
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let case_summary = read_table::<CaseSummaryRow, _>(
            "case summary",
            case_summary,
            CASE_SUMMARY_COLUMNS,
        )?
        .into_iter()
        .map(|(_, row)| CaseDeathQuarter::from(row))
        .collect();

        let regions = read_table::<RegionRow, _>("regions", regions, REGION_COLUMNS)?
            .into_iter()
            .map(|(line, row)| {
                row.into_centroid().ok_or(DatasetError::InvalidRow {
                    table: "regions",
                    line,
                    reason: "region name or centroid coordinate is missing",
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_parts(activities, case_summary, regions))
    }

    /// Assembles a dataset from already-normalized records and derives the
    /// geocoded view.
    #[must_use]
    pub fn from_parts(
        activities: Vec<ActivityRecord>,
        case_summary: Vec<CaseDeathQuarter>,
        regions: Vec<RegionCentroid>,
    ) -> Self {
        let geocoded = geocode::build_geocoded_view(&activities);

        log::info!(
            "Dataset ready: {} activities ({} mapped), {} quarters, {} regions",
            activities.len(),
            geocoded.len(),
            case_summary.len(),
            regions.len()
        );

        Self {
            activities,
            geocoded,
            regions,
            case_summary,
        }
    }

    /// Every activity record, in source order.
    #[must_use]
    pub fn activities(&self) -> &[ActivityRecord] {
        &self.activities
    }

    /// Activities that have coordinates, in source order.
    #[must_use]
    pub fn geocoded(&self) -> &[GeocodedRecord] {
        &self.geocoded
    }

    /// Region centroids, in source order.
    #[must_use]
    pub fn regions(&self) -> &[RegionCentroid] {
        &self.regions
    }

    /// Quarterly case/death series.
    #[must_use]
    pub fn case_summary(&self) -> &[CaseDeathQuarter] {
        &self.case_summary
    }

    /// Looks up a region centroid by exact name.
    #[must_use]
    pub fn region(&self, name: &str) -> Option<&RegionCentroid> {
        self.regions.iter().find(|r| r.name == name)
    }

    /// National campaigns (region `NATIONWIDE`).
    pub fn nationwide(&self) -> impl Iterator<Item = &ActivityRecord> {
        self.activities.iter().filter(|a| a.is_nationwide())
    }
}

fn open(table: &'static str, path: &Path) -> Result<File, DatasetError> {
    File::open(path).map_err(|source| DatasetError::Io {
        table,
        path: path.to_path_buf(),
        source,
    })
}

/// Reads every row of a CSV table into `T`, after checking that all
/// `required` headers are present. Each row is paired with its 1-based
/// line number.
fn read_table<T: DeserializeOwned, R: Read>(
    table: &'static str,
    reader: R,
    required: &[&'static str],
) -> Result<Vec<(u64, T)>, DatasetError> {
    let csv_err = |source: csv::Error| DatasetError::Csv { table, source };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers().map_err(csv_err)?.clone();

    if let Some(column) = required
        .iter()
        .copied()
        .find(|column| !headers.iter().any(|h| h == *column))
    {
        return Err(DatasetError::MissingColumn { table, column });
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_err)?;
        let line = record.position().map_or(0, csv::Position::line);
        let row: T = record.deserialize(Some(&headers)).map_err(csv_err)?;
        rows.push((line, row));
    }

    log::debug!("Read {} rows from {table}", rows.len());

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACTIVITIES: &str = "\
REGION,PROVINCE,CITY/MUNICIPALITY,ACTIVITY,STATUS,LANGUAGE,LANG_GRP,COMM_GRP,COMMUNICATION_CHANNEL,INFO_GAP,Longitude,Latitude,START,FINISH
Region IV-A,Laguna,Calamba,Radio spots,Ongoing,Tagalog,Filipino,Broadcast,Radio,Vaccination,121.16,14.21,2020-04-01,
NATIONWIDE,,,TV ads,Completed,English,English,Broadcast,Television,Testing,,,2020-03-15,2020-06-30
NCR,Metro Manila,Quezon City,Posters,Planned,Tagalog,Filipino,Print,Poster,,n/a,14.65,,
";

    const CASES: &str = "\
QUARTER,T_CASES_2020,T_DEATHS_2020,T_CASES_2021,T_DEATHS_2021
Q1,2084,88,731894.0,13170
Q2,36438,1255,1412559,24456
Q3,311694,5504,,
";

    const REGIONS: &str = "\
Region,Longitude,Latitude
NCR,121.0,14.6
Region IV-A,121.4,14.1
";

    #[test]
    fn loads_all_three_tables() {
        let dataset =
            Dataset::from_readers(ACTIVITIES.as_bytes(), CASES.as_bytes(), REGIONS.as_bytes())
                .unwrap();

        assert_eq!(dataset.activities().len(), 3);
        assert_eq!(dataset.case_summary().len(), 3);
        assert_eq!(dataset.regions().len(), 2);

        let first = &dataset.activities()[0];
        assert_eq!(first.activity.as_deref(), Some("Radio spots"));
        assert_eq!(first.start, chrono::NaiveDate::from_ymd_opt(2020, 4, 1));
        assert_eq!(first.finish, None);

        let third = &dataset.activities()[2];
        assert_eq!(third.information_gap, rcce_activity_models::UNSPECIFIED_LABEL);
        assert_eq!(third.longitude, None);
    }

    #[test]
    fn geocoded_view_excludes_rows_without_coordinates() {
        let dataset =
            Dataset::from_readers(ACTIVITIES.as_bytes(), CASES.as_bytes(), REGIONS.as_bytes())
                .unwrap();

        assert_eq!(dataset.geocoded().len(), 1);
        assert_eq!(dataset.geocoded()[0].city, "Calamba");
        assert_eq!(dataset.nationwide().count(), 1);
    }

    #[test]
    fn case_counts_tolerate_blank_and_float_cells() {
        let dataset =
            Dataset::from_readers(ACTIVITIES.as_bytes(), CASES.as_bytes(), REGIONS.as_bytes())
                .unwrap();

        let q1 = &dataset.case_summary()[0];
        assert_eq!(q1.cases_2021, Some(731_894));
        let q3 = &dataset.case_summary()[2];
        assert_eq!(q3.cases_2021, None);
        assert_eq!(q3.deaths_2020, Some(5504));
    }

    #[test]
    fn missing_column_is_fatal() {
        let activities = "REGION,PROVINCE\nNCR,Metro Manila\n";
        let err = Dataset::from_readers(activities.as_bytes(), CASES.as_bytes(), REGIONS.as_bytes())
            .unwrap_err();
        assert!(matches!(
            err,
            DatasetError::MissingColumn {
                table: "activities",
                column: "CITY/MUNICIPALITY"
            }
        ));
    }

    #[test]
    fn blank_region_is_fatal() {
        let activities = ACTIVITIES.replace("NCR,Metro Manila", ",Metro Manila");
        let err = Dataset::from_readers(activities.as_bytes(), CASES.as_bytes(), REGIONS.as_bytes())
            .unwrap_err();
        assert!(matches!(
            err,
            DatasetError::InvalidRow {
                table: "activities",
                line: 4,
                ..
            }
        ));
    }

    #[test]
    fn missing_file_is_fatal() {
        let paths = DataPaths {
            activities: PathBuf::from("does/not/exist.csv"),
            ..DataPaths::default()
        };
        let err = Dataset::load(&paths).unwrap_err();
        assert!(matches!(err, DatasetError::Io { table: "activities", .. }));
    }

    #[test]
    fn padded_coordinates_are_still_geocoded() {
        let activities =
            ACTIVITIES.replace("Vaccination,121.16,14.21", "Vaccination, 121.16 , 14.21 ");
        let regions = REGIONS.replace("NCR,121.0,14.6", "NCR, 121.0 ,14.6 ");
        let dataset =
            Dataset::from_readers(activities.as_bytes(), CASES.as_bytes(), regions.as_bytes())
                .unwrap();

        let longitude = dataset.activities()[0].longitude.unwrap();
        assert!((longitude - 121.16).abs() < f64::EPSILON);
        assert_eq!(dataset.geocoded().len(), 1);
        assert!((dataset.geocoded()[0].latitude() - 14.21).abs() < f64::EPSILON);
        assert!((dataset.region("NCR").unwrap().longitude - 121.0).abs() < f64::EPSILON);
    }

    #[test]
    fn malformed_row_is_fatal() {
        let activities = format!("{ACTIVITIES}NCR,Metro Manila\n");
        let err = Dataset::from_readers(activities.as_bytes(), CASES.as_bytes(), REGIONS.as_bytes())
            .unwrap_err();
        assert!(matches!(err, DatasetError::Csv { table: "activities", .. }));
    }

    #[test]
    fn missing_case_summary_column_is_fatal() {
        let cases = "QUARTER,T_CASES_2020,T_DEATHS_2020,T_CASES_2021\nQ1,2084,88,731894\n";
        let err = Dataset::from_readers(ACTIVITIES.as_bytes(), cases.as_bytes(), REGIONS.as_bytes())
            .unwrap_err();
        assert!(matches!(
            err,
            DatasetError::MissingColumn {
                table: "case summary",
                column: "T_DEATHS_2021"
            }
        ));
    }

    #[test]
    fn missing_region_column_is_fatal() {
        let regions = "Region,Longitude\nNCR,121.0\n";
        let err = Dataset::from_readers(ACTIVITIES.as_bytes(), CASES.as_bytes(), regions.as_bytes())
            .unwrap_err();
        assert!(matches!(
            err,
            DatasetError::MissingColumn {
                table: "regions",
                column: "Latitude"
            }
        ));
    }

    #[test]
    fn region_without_coordinate_is_fatal() {
        let regions = REGIONS.replace("Region IV-A,121.4,14.1", "Region IV-A,121.4,");
        let err = Dataset::from_readers(ACTIVITIES.as_bytes(), CASES.as_bytes(), regions.as_bytes())
            .unwrap_err();
        assert!(matches!(
            err,
            DatasetError::InvalidRow {
                table: "regions",
                line: 3,
                ..
            }
        ));
    }

    #[test]
    fn looks_up_regions_by_name() {
        let dataset =
            Dataset::from_readers(ACTIVITIES.as_bytes(), CASES.as_bytes(), REGIONS.as_bytes())
                .unwrap();
        let centroid = dataset.region("Region IV-A").unwrap();
        assert!((centroid.longitude - 121.4).abs() < f64::EPSILON);
        assert!(dataset.region("Region XIII").is_none());
    }
}
