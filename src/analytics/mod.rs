//! Fund return analytics: YoY returns, rolling CAGR, batch reports

mod batch;
mod returns;
mod scheme;

pub use batch::{analyze_batch, analyze_fund, FundReport};
pub use returns::{compute_rolling_cagr, compute_yoy_returns, ReturnEntry, ReturnReport};
pub use scheme::resolve_scheme_name;
