//! External NAV data provider seam
//!
//! The analytics engine treats the data source as a collaborator behind
//! [`NavProvider`]: anything that can produce a NAV history and scheme
//! metadata for a fund code. This crate ships fixture-backed implementations;
//! a network-backed one plugs into the same trait.

mod fixture;
pub mod tickers;

pub use fixture::FixtureProvider;
pub use tickers::load_ticker_list;

use crate::nav::NavSeries;
use thiserror::Error;

/// Failure modes of a NAV data provider
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider has no data at all for this fund code
    #[error("no NAV data for fund code {fund_code}")]
    NoData { fund_code: String },

    /// The provider returned a payload that could not be understood
    #[error("malformed provider payload: {0}")]
    Malformed(String),

    #[error("provider I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Descriptive metadata for a fund scheme.
///
/// `scheme_name` stays `None` when the provider has no display name; the
/// absence is only collapsed to the fund code at the resolve boundary.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SchemeMeta {
    pub scheme_name: Option<String>,
    pub fund_house: Option<String>,
    pub scheme_category: Option<String>,
}

/// Source of NAV histories and scheme metadata, keyed by fund code.
///
/// Calls are blocking; retry and timeout policy belongs to implementations.
pub trait NavProvider {
    /// Full NAV history for a fund, sorted ascending by date
    fn nav_series(&self, fund_code: &str) -> Result<NavSeries, ProviderError>;

    /// Descriptive metadata for a fund
    fn scheme_meta(&self, fund_code: &str) -> Result<SchemeMeta, ProviderError>;
}
