//! Fund Analytics - Goal-based SIP planning and mutual fund return analytics
//!
//! This library provides:
//! - Goal projection: inflation-adjusted target corpus, required annual SIP,
//!   and the year-by-year accumulation glide path
//! - Fund return analytics: year-over-year returns and rolling CAGR from
//!   historical NAV series, tolerant of missing data
//! - Anchor-date generation (working-day-adjusted yearly references)
//! - A provider seam for external NAV data sources, with fixture-backed
//!   implementations for tests and offline runs

pub mod analytics;
pub mod calendar;
pub mod goal;
pub mod nav;
pub mod provider;

// Re-export commonly used types
pub use analytics::{analyze_batch, analyze_fund, FundReport, ReturnReport};
pub use goal::{project, GoalInput, GoalProjection};
pub use nav::{NavObservation, NavSeries};
pub use provider::{NavProvider, ProviderError, SchemeMeta};
