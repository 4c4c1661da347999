//! Parse raw provider payloads and disk fixtures into [`NavSeries`]
//!
//! The upstream feed ships NAV rows as strings with day-first dates:
//! `{ "meta": { "scheme_name": ... }, "data": [ { "date": "28-06-2024",
//! "nav": "125.3310" }, ... ] }`. Individual rows that fail to parse are
//! skipped with a warning; a bad row never fails the whole series.

use super::{NavObservation, NavSeries};
use crate::provider::{ProviderError, SchemeMeta};
use chrono::NaiveDate;
use std::error::Error;
use std::path::Path;

/// Date format used by the upstream feed
const PAYLOAD_DATE_FORMAT: &str = "%d-%m-%Y";

/// Raw scheme payload as delivered by the provider
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
pub struct SchemePayload {
    #[serde(default)]
    pub meta: SchemeMeta,
    #[serde(default)]
    pub data: Vec<PayloadRow>,
}

/// One raw NAV row; both fields arrive as strings
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct PayloadRow {
    pub date: String,
    pub nav: String,
}

impl SchemePayload {
    /// Deserialize a payload from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, ProviderError> {
        serde_json::from_str(json).map_err(|e| ProviderError::Malformed(e.to_string()))
    }

    /// Convert the raw rows into a sorted series, dropping rows with
    /// unparseable dates, unparseable NAVs, or non-positive NAVs.
    pub fn into_series(self) -> NavSeries {
        let observations = self
            .data
            .into_iter()
            .filter_map(|row| match parse_row(&row) {
                Some(obs) => Some(obs),
                None => {
                    log::warn!("skipping malformed NAV row: {:?}", row);
                    None
                }
            })
            .collect();

        NavSeries::new(observations)
    }
}

fn parse_row(row: &PayloadRow) -> Option<NavObservation> {
    let date = NaiveDate::parse_from_str(row.date.trim(), PAYLOAD_DATE_FORMAT).ok()?;
    let nav: f64 = row.nav.trim().parse().ok()?;
    if nav <= 0.0 {
        return None;
    }
    Some(NavObservation { date, nav })
}

/// Load a NAV series from a CSV file with ISO-dated `date,nav` columns.
pub fn load_series_csv<P: AsRef<Path>>(path: P) -> Result<NavSeries, Box<dyn Error>> {
    load_series_from_reader(std::fs::File::open(path)?)
}

/// Load a NAV series from any CSV reader (e.g. string buffer).
pub fn load_series_from_reader<R: std::io::Read>(reader: R) -> Result<NavSeries, Box<dyn Error>> {
    #[derive(serde::Deserialize)]
    struct CsvRow {
        date: NaiveDate,
        nav: f64,
    }

    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut observations = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        observations.push(NavObservation {
            date: row.date,
            nav: row.nav,
        });
    }

    Ok(NavSeries::new(observations))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_parses_day_first_dates() {
        let json = r#"{
            "meta": { "scheme_name": "Example Flexi Cap Fund" },
            "data": [
                { "date": "28-06-2024", "nav": "125.3310" },
                { "date": "30-06-2023", "nav": "110.0000" }
            ]
        }"#;

        let payload = SchemePayload::from_json(json).unwrap();
        assert_eq!(
            payload.meta.scheme_name.as_deref(),
            Some("Example Flexi Cap Fund")
        );

        let series = payload.into_series();
        assert_eq!(series.len(), 2);
        assert_eq!(
            series.first().unwrap().date,
            NaiveDate::from_ymd_opt(2023, 6, 30).unwrap()
        );
        assert_eq!(series.last().unwrap().nav, 125.331);
    }

    #[test]
    fn test_malformed_rows_are_skipped() {
        let json = r#"{
            "data": [
                { "date": "28-06-2024", "nav": "125.33" },
                { "date": "not-a-date", "nav": "99.0" },
                { "date": "27-06-2024", "nav": "n/a" },
                { "date": "26-06-2024", "nav": "-1.0" }
            ]
        }"#;

        let series = SchemePayload::from_json(json).unwrap().into_series();
        assert_eq!(series.len(), 1);
        assert_eq!(series.first().unwrap().nav, 125.33);
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let err = SchemePayload::from_json("{ nope").unwrap_err();
        assert!(matches!(err, ProviderError::Malformed(_)));
    }

    #[test]
    fn test_missing_meta_defaults_to_absent_name() {
        let payload = SchemePayload::from_json(r#"{ "data": [] }"#).unwrap();
        assert!(payload.meta.scheme_name.is_none());
    }

    #[test]
    fn test_load_series_from_csv_reader() {
        let csv = "date,nav\n2023-06-30,110.0\n2024-06-28,125.33\n";
        let series = load_series_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(
            series.last().unwrap().date,
            NaiveDate::from_ymd_opt(2024, 6, 28).unwrap()
        );
    }
}
