//! Year-over-year and rolling-CAGR return computations
//!
//! Both operate on an already-fetched NAV series and a descending list of
//! anchor dates (index 0 = most recent). Every return needs two NAV
//! observations; when a nearest-prior lookup fails the period keeps its
//! entry with an absent value, so callers can render "insufficient data"
//! instead of mistaking it for a zero return.

use crate::nav::NavSeries;
use chrono::NaiveDate;

/// Days per year including the leap-year correction
const DAYS_PER_YEAR: f64 = 365.25;

/// One labelled return figure; `None` means insufficient NAV data.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ReturnEntry {
    pub period: String,
    pub value: Option<f64>,
}

/// Insertion-ordered map from period label to optional return percentage.
///
/// Vec-backed rather than a sorted map: period labels like "10-Year Return"
/// must stay in computation order, not lexical order.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct ReturnReport {
    entries: Vec<ReturnEntry>,
}

impl ReturnReport {
    pub fn push(&mut self, period: String, value: Option<f64>) {
        self.entries.push(ReturnEntry { period, value });
    }

    /// Value for a period label; outer `None` means the label is not present.
    pub fn get(&self, period: &str) -> Option<Option<f64>> {
        self.entries
            .iter()
            .find(|entry| entry.period == period)
            .map(|entry| entry.value)
    }

    pub fn entries(&self) -> &[ReturnEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Year-over-year returns between consecutive anchor dates.
///
/// `anchor_dates` must be sorted descending. Each consecutive pair
/// (newer, older) yields one period labelled `"{newer} to {older}"` with
/// `(nav_newer - nav_older) / nav_older * 100`, looked up as the latest NAV
/// on or before each anchor.
pub fn compute_yoy_returns(series: &NavSeries, anchor_dates: &[NaiveDate]) -> ReturnReport {
    let mut report = ReturnReport::default();

    for pair in anchor_dates.windows(2) {
        let (newer, older) = (pair[0], pair[1]);
        let period = format!("{} to {}", newer, older);

        let value = match (series.nav_on_or_before(older), series.nav_on_or_before(newer)) {
            (Some(start), Some(end)) => Some((end.nav - start.nav) / start.nav * 100.0),
            _ => None,
        };

        report.push(period, value);
    }

    report
}

/// Rolling CAGR from each prior anchor to the most recent one.
///
/// Every window shares `anchor_dates[0]` as its end; the window starting at
/// `anchor_dates[i]` is labelled `"{i}-Year Return"`. Elapsed time is the
/// day count between the two resolved observation dates over 365.25, so a
/// window whose endpoints resolve to the same observation reports 0 rather
/// than an unbounded exponent. A non-positive start NAV yields an absent
/// value.
pub fn compute_rolling_cagr(series: &NavSeries, anchor_dates: &[NaiveDate]) -> ReturnReport {
    let mut report = ReturnReport::default();
    let Some(&end_anchor) = anchor_dates.first() else {
        return report;
    };
    let end_obs = series.nav_on_or_before(end_anchor);

    for (i, &start_anchor) in anchor_dates.iter().enumerate().skip(1) {
        let period = format!("{}-Year Return", i);

        let value = match (series.nav_on_or_before(start_anchor), end_obs) {
            (Some(start), Some(end)) if start.nav > 0.0 => {
                let years = end.date.signed_duration_since(start.date).num_days() as f64
                    / DAYS_PER_YEAR;
                if years > 0.0 {
                    Some(((end.nav / start.nav).powf(1.0 / years) - 1.0) * 100.0)
                } else {
                    Some(0.0)
                }
            }
            _ => None,
        };

        report.push(period, value);
    }

    report
}
