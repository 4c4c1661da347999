//! Fixture-backed provider for tests and offline analysis

use super::{NavProvider, ProviderError, SchemeMeta};
use crate::nav::{NavSeries, SchemePayload};
use std::collections::HashMap;
use std::error::Error;
use std::path::Path;

/// [`NavProvider`] serving pre-loaded payloads from memory.
///
/// Payloads can be inserted directly or read from a directory of
/// `<fund_code>.json` files in the upstream payload format.
#[derive(Debug, Clone, Default)]
pub struct FixtureProvider {
    schemes: HashMap<String, (NavSeries, SchemeMeta)>,
}

impl FixtureProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a parsed payload under a fund code.
    pub fn insert_payload(&mut self, fund_code: &str, payload: SchemePayload) {
        let meta = payload.meta.clone();
        let series = payload.into_series();
        self.schemes.insert(fund_code.to_string(), (series, meta));
    }

    /// Register an already-built series with optional display name.
    pub fn insert_series(&mut self, fund_code: &str, series: NavSeries, scheme_name: Option<&str>) {
        let meta = SchemeMeta {
            scheme_name: scheme_name.map(str::to_string),
            ..SchemeMeta::default()
        };
        self.schemes.insert(fund_code.to_string(), (series, meta));
    }

    /// Load every `<fund_code>.json` payload found directly under `dir`.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, Box<dyn Error>> {
        let mut provider = Self::new();

        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(fund_code) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let json = std::fs::read_to_string(&path)?;
            let payload = SchemePayload::from_json(&json)?;
            provider.insert_payload(fund_code, payload);
        }

        log::info!("loaded {} fixture schemes", provider.schemes.len());
        Ok(provider)
    }

    pub fn fund_codes(&self) -> impl Iterator<Item = &str> {
        self.schemes.keys().map(String::as_str)
    }
}

impl NavProvider for FixtureProvider {
    fn nav_series(&self, fund_code: &str) -> Result<NavSeries, ProviderError> {
        match self.schemes.get(fund_code) {
            Some((series, _)) if !series.is_empty() => Ok(series.clone()),
            _ => Err(ProviderError::NoData {
                fund_code: fund_code.to_string(),
            }),
        }
    }

    fn scheme_meta(&self, fund_code: &str) -> Result<SchemeMeta, ProviderError> {
        self.schemes
            .get(fund_code)
            .map(|(_, meta)| meta.clone())
            .ok_or_else(|| ProviderError::NoData {
                fund_code: fund_code.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::NavObservation;
    use chrono::NaiveDate;

    fn sample_series() -> NavSeries {
        NavSeries::new(vec![NavObservation {
            date: NaiveDate::from_ymd_opt(2024, 6, 28).unwrap(),
            nav: 125.33,
        }])
    }

    #[test]
    fn test_known_code_resolves() {
        let mut provider = FixtureProvider::new();
        provider.insert_series("120503", sample_series(), Some("Example Fund"));

        let series = provider.nav_series("120503").unwrap();
        assert_eq!(series.len(), 1);

        let meta = provider.scheme_meta("120503").unwrap();
        assert_eq!(meta.scheme_name.as_deref(), Some("Example Fund"));
    }

    #[test]
    fn test_unknown_code_is_no_data() {
        let provider = FixtureProvider::new();
        let err = provider.nav_series("999999").unwrap_err();
        assert!(matches!(err, ProviderError::NoData { .. }));
    }

    #[test]
    fn test_empty_series_is_no_data() {
        let mut provider = FixtureProvider::new();
        provider.insert_series("120503", NavSeries::default(), None);
        assert!(provider.nav_series("120503").is_err());
    }
}
