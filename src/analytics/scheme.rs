//! Scheme display-name resolution

use crate::provider::NavProvider;

/// Resolve the display name for a fund code.
///
/// Total function: a provider failure or a scheme with no recorded name both
/// collapse to the fund code itself, so report rendering never has to handle
/// an error here.
pub fn resolve_scheme_name<P: NavProvider + ?Sized>(provider: &P, fund_code: &str) -> String {
    match provider.scheme_meta(fund_code) {
        Ok(meta) => meta.scheme_name.unwrap_or_else(|| fund_code.to_string()),
        Err(err) => {
            log::debug!("scheme name lookup failed for {}: {}", fund_code, err);
            fund_code.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::NavSeries;
    use crate::provider::{FixtureProvider, ProviderError, SchemeMeta};

    struct FailingProvider;

    impl NavProvider for FailingProvider {
        fn nav_series(&self, fund_code: &str) -> Result<NavSeries, ProviderError> {
            Err(ProviderError::NoData {
                fund_code: fund_code.to_string(),
            })
        }

        fn scheme_meta(&self, _fund_code: &str) -> Result<SchemeMeta, ProviderError> {
            Err(ProviderError::Malformed("boom".to_string()))
        }
    }

    #[test]
    fn test_resolves_recorded_name() {
        let mut provider = FixtureProvider::new();
        provider.insert_series("120503", NavSeries::default(), Some("Example Mid Cap Fund"));
        assert_eq!(
            resolve_scheme_name(&provider, "120503"),
            "Example Mid Cap Fund"
        );
    }

    #[test]
    fn test_unknown_code_falls_back_to_code() {
        let provider = FixtureProvider::new();
        assert_eq!(resolve_scheme_name(&provider, "999999"), "999999");
    }

    #[test]
    fn test_absent_name_falls_back_to_code() {
        let mut provider = FixtureProvider::new();
        provider.insert_series("120503", NavSeries::default(), None);
        assert_eq!(resolve_scheme_name(&provider, "120503"), "120503");
    }

    #[test]
    fn test_provider_error_falls_back_to_code() {
        assert_eq!(resolve_scheme_name(&FailingProvider, "120503"), "120503");
    }
}
