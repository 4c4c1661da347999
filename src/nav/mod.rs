//! NAV time-series model and payload loading

pub mod loader;
mod series;

pub use loader::{load_series_csv, load_series_from_reader, SchemePayload};
pub use series::{NavObservation, NavSeries};
