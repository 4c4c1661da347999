//! Goal projection: inflate today's goal value to the target horizon and
//! solve for the annual SIP that accumulates to it.

use super::annuity::{fv_ordinary_annuity, pmt_for_future_value};

/// Default textual form-field values, used as parse fallbacks.
pub const DEFAULT_GOAL_VALUE: f64 = 2_400_000.0;
pub const DEFAULT_INFLATION_PCT: f64 = 10.0;
pub const DEFAULT_YEARS_TO_GOAL: u32 = 16;
pub const DEFAULT_RETURN_PCT: f64 = 10.0;

/// Inputs for one goal-planning calculation
#[derive(Debug, Clone, PartialEq)]
pub struct GoalInput {
    /// Value of the financial goal in today's money
    pub goal_value_today: f64,

    /// Expected annual inflation of the goal value (%)
    pub inflation_rate_pct: f64,

    /// Years left to build the corpus
    pub years_to_goal: u32,

    /// Expected annual rate of return on investments (%)
    pub return_rate_pct: f64,
}

impl GoalInput {
    /// Build from raw text fields, e.g. form input.
    ///
    /// Each field is parsed independently; a field that fails to parse falls
    /// back to its documented default without affecting the others. This
    /// never fails.
    pub fn from_fields(
        goal_value_today: &str,
        inflation_rate_pct: &str,
        years_to_goal: &str,
        return_rate_pct: &str,
    ) -> Self {
        Self {
            goal_value_today: parse_or(goal_value_today, DEFAULT_GOAL_VALUE),
            inflation_rate_pct: parse_or(inflation_rate_pct, DEFAULT_INFLATION_PCT),
            years_to_goal: parse_or(years_to_goal, DEFAULT_YEARS_TO_GOAL),
            return_rate_pct: parse_or(return_rate_pct, DEFAULT_RETURN_PCT),
        }
    }
}

impl Default for GoalInput {
    fn default() -> Self {
        Self {
            goal_value_today: DEFAULT_GOAL_VALUE,
            inflation_rate_pct: DEFAULT_INFLATION_PCT,
            years_to_goal: DEFAULT_YEARS_TO_GOAL,
            return_rate_pct: DEFAULT_RETURN_PCT,
        }
    }
}

fn parse_or<T: std::str::FromStr>(raw: &str, default: T) -> T {
    raw.trim().parse().unwrap_or(default)
}

/// Corpus value at the end of a projection year
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryPoint {
    /// Projection year (1-indexed)
    pub year: u32,

    /// Accumulated corpus at end of year, assuming end-of-year contributions
    pub corpus_value: f64,
}

/// Result of one goal-planning calculation
#[derive(Debug, Clone, PartialEq)]
pub struct GoalProjection {
    /// Goal value inflated to the target year, rounded to 2 decimals
    pub future_goal_value: f64,

    /// Annual end-of-year SIP required to accumulate the future goal value
    pub periodic_contribution: f64,

    /// Year-by-year corpus glide path, years 1..=years_to_goal
    pub trajectory: Vec<TrajectoryPoint>,
}

/// Project the goal: inflate today's value over the horizon, solve the
/// ordinary-annuity payment for it, and lay out the accumulation glide path.
///
/// The final trajectory point equals `future_goal_value` up to rounding,
/// since the contribution is derived by inverting the same annuity formula.
pub fn project(input: &GoalInput) -> GoalProjection {
    let inflation = input.inflation_rate_pct / 100.0;
    let rate = input.return_rate_pct / 100.0;
    let years = input.years_to_goal;

    let future_goal_value =
        round2(input.goal_value_today * (1.0 + inflation).powi(years as i32));

    let periodic_contribution = pmt_for_future_value(future_goal_value, rate, years);

    let trajectory = (1..=years)
        .map(|year| TrajectoryPoint {
            year,
            corpus_value: fv_ordinary_annuity(periodic_contribution, rate, year),
        })
        .collect();

    GoalProjection {
        future_goal_value,
        periodic_contribution,
        trajectory,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
