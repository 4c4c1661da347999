//! Goal-based SIP planning

mod annuity;
mod planner;

pub use annuity::{fv_ordinary_annuity, pmt_for_future_value};
pub use planner::{project, GoalInput, GoalProjection, TrajectoryPoint};
pub use planner::{
    DEFAULT_GOAL_VALUE, DEFAULT_INFLATION_PCT, DEFAULT_RETURN_PCT, DEFAULT_YEARS_TO_GOAL,
};
