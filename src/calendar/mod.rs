//! Anchor-date generation for return windows
//!
//! NAVs are only published on working days, so every anchor is rolled back
//! from a weekend to the preceding Friday before it is used as a lookup
//! reference.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Roll a date back to the most recent working day (Mon-Fri) on or before it.
pub fn last_working_day_on_or_before(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date - Days::new(1),
        Weekday::Sun => date - Days::new(2),
        _ => date,
    }
}

/// Yearly anchor dates, most recent first.
///
/// The reference date is adjusted to its last working day and becomes the
/// first anchor; each of the `num_years` prior years contributes the same
/// calendar date, also working-day-adjusted. Result length is
/// `num_years + 1`. A Feb 29 reference clamps to Feb 28 in non-leap years.
pub fn yearly_anchor_dates(ref_date: NaiveDate, num_years: u32) -> Vec<NaiveDate> {
    let start = last_working_day_on_or_before(ref_date);

    let mut anchors = Vec::with_capacity(num_years as usize + 1);
    anchors.push(start);
    for years_back in 1..=num_years {
        let shifted = same_date_years_before(start, years_back);
        anchors.push(last_working_day_on_or_before(shifted));
    }
    anchors
}

fn same_date_years_before(date: NaiveDate, years: u32) -> NaiveDate {
    let year = date.year() - years as i32;
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        // Only reachable for Feb 29 landing in a non-leap year
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 2, 28).expect("Feb 28 always exists"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekday_is_unchanged() {
        // 2024-06-28 is a Friday
        assert_eq!(
            last_working_day_on_or_before(date(2024, 6, 28)),
            date(2024, 6, 28)
        );
    }

    #[test]
    fn test_weekend_rolls_back_to_friday() {
        // 2024-06-29 Sat, 2024-06-30 Sun
        assert_eq!(
            last_working_day_on_or_before(date(2024, 6, 29)),
            date(2024, 6, 28)
        );
        assert_eq!(
            last_working_day_on_or_before(date(2024, 6, 30)),
            date(2024, 6, 28)
        );
    }

    #[test]
    fn test_anchor_list_shape() {
        let anchors = yearly_anchor_dates(date(2024, 6, 28), 3);
        assert_eq!(anchors.len(), 4);
        assert_eq!(anchors[0], date(2024, 6, 28));
        // Descending, each roughly one year apart
        for pair in anchors.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn test_prior_anchors_avoid_weekends() {
        // 2023-06-28 was a Wednesday, 2021-06-28 a Monday; 2019-06-28 a
        // Friday. None of the generated anchors may be Sat/Sun.
        let anchors = yearly_anchor_dates(date(2024, 6, 28), 5);
        for anchor in &anchors {
            assert!(!matches!(anchor.weekday(), Weekday::Sat | Weekday::Sun));
        }
    }

    #[test]
    fn test_feb_29_clamps_in_non_leap_years() {
        // 2024-02-29 exists; 2023 has no Feb 29, so the prior anchor starts
        // from Feb 28 before working-day adjustment (2023-02-28 is a Tuesday)
        let anchors = yearly_anchor_dates(date(2024, 2, 29), 1);
        assert_eq!(anchors[0], date(2024, 2, 29)); // Thursday
        assert_eq!(anchors[1], date(2023, 2, 28));
    }
}
