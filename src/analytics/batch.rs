//! Per-fund report assembly and parallel batch analysis

use super::returns::{compute_rolling_cagr, compute_yoy_returns, ReturnReport};
use super::scheme::resolve_scheme_name;
use crate::provider::NavProvider;
use chrono::NaiveDate;
use rayon::prelude::*;

/// Full analysis output for one fund
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FundReport {
    pub fund_code: String,
    pub scheme_name: String,
    pub yoy: ReturnReport,
    pub rolling_cagr: ReturnReport,
}

/// Analyze one fund: fetch its series once and compute both reports.
///
/// A failed series fetch is absorbed: the report carries empty YoY and CAGR
/// sections (no data at all, as opposed to labelled absent entries for
/// per-period lookup failures).
pub fn analyze_fund<P: NavProvider + ?Sized>(
    provider: &P,
    fund_code: &str,
    anchor_dates: &[NaiveDate],
) -> FundReport {
    let scheme_name = resolve_scheme_name(provider, fund_code);

    let (yoy, rolling_cagr) = match provider.nav_series(fund_code) {
        Ok(series) => (
            compute_yoy_returns(&series, anchor_dates),
            compute_rolling_cagr(&series, anchor_dates),
        ),
        Err(err) => {
            log::warn!("NAV fetch failed for {}: {}", fund_code, err);
            (ReturnReport::default(), ReturnReport::default())
        }
    };

    FundReport {
        fund_code: fund_code.to_string(),
        scheme_name,
        yoy,
        rolling_cagr,
    }
}

/// Analyze many funds in parallel, preserving input order.
///
/// Funds are independent of each other, so the batch is embarrassingly
/// parallel across codes.
pub fn analyze_batch<P: NavProvider + Sync + ?Sized>(
    provider: &P,
    fund_codes: &[String],
    anchor_dates: &[NaiveDate],
) -> Vec<FundReport> {
    fund_codes
        .par_iter()
        .map(|code| analyze_fund(provider, code, anchor_dates))
        .collect()
}
