//! Date-indexed NAV series with nearest-prior lookup

use chrono::NaiveDate;

/// One published NAV value for a fund
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavObservation {
    /// Publication date
    pub date: NaiveDate,

    /// Per-unit net asset value
    pub nav: f64,
}

/// Historical NAV series for one fund, sorted ascending by date
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavSeries {
    observations: Vec<NavObservation>,
}

impl NavSeries {
    /// Build a series from observations in any order; sorts by date.
    pub fn new(mut observations: Vec<NavObservation>) -> Self {
        observations.sort_by_key(|obs| obs.date);
        Self { observations }
    }

    /// Latest observation published on or before `date`, or `None` when the
    /// series has no observation that early.
    pub fn nav_on_or_before(&self, date: NaiveDate) -> Option<&NavObservation> {
        // First index with obs.date > date; the predecessor is the answer
        let idx = self.observations.partition_point(|obs| obs.date <= date);
        if idx == 0 {
            None
        } else {
            Some(&self.observations[idx - 1])
        }
    }

    pub fn observations(&self) -> &[NavObservation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Earliest observation in the series
    pub fn first(&self) -> Option<&NavObservation> {
        self.observations.first()
    }

    /// Most recent observation in the series
    pub fn last(&self) -> Option<&NavObservation> {
        self.observations.last()
    }
}
