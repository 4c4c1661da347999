//! Fund Analytics CLI
//!
//! Demo driver: runs a goal plan with the documented defaults, then analyzes
//! a small in-memory fund history.

use chrono::NaiveDate;
use fund_analytics::analytics::analyze_fund;
use fund_analytics::calendar::yearly_anchor_dates;
use fund_analytics::goal::{project, GoalInput};
use fund_analytics::nav::{NavObservation, NavSeries};
use fund_analytics::provider::FixtureProvider;

fn main() {
    env_logger::init();

    println!("Fund Analytics v0.1.0");
    println!("=====================\n");

    // Goal plan with the documented form defaults
    let input = GoalInput::default();
    println!("Goal Plan:");
    println!("  Goal value today:   {:>14.2}", input.goal_value_today);
    println!("  Inflation rate:     {:>13.2}%", input.inflation_rate_pct);
    println!("  Years to goal:      {:>14}", input.years_to_goal);
    println!("  Return rate:        {:>13.2}%", input.return_rate_pct);
    println!();

    let plan = project(&input);
    println!("  Corpus needed:      {:>14.2}", plan.future_goal_value);
    println!("  Annual SIP:         {:>14.2}", plan.periodic_contribution);
    println!();

    println!("Glide path:");
    println!("{:>6} {:>16}", "Year", "Corpus Value");
    println!("{}", "-".repeat(24));
    for point in &plan.trajectory {
        println!("{:>6} {:>16.2}", point.year, point.corpus_value);
    }

    // Fund analysis over a synthetic 5-year NAV history
    let as_of = NaiveDate::from_ymd_opt(2024, 6, 28).expect("valid date");
    let series = NavSeries::new(
        (0..=5)
            .map(|years_back| NavObservation {
                date: NaiveDate::from_ymd_opt(2024 - years_back, 6, 28).expect("valid date"),
                nav: 100.0 * 1.12_f64.powi(5 - years_back),
            })
            .collect(),
    );

    let mut provider = FixtureProvider::new();
    provider.insert_series("demo", series, Some("Demo Flexi Cap Fund"));

    let anchors = yearly_anchor_dates(as_of, 5);
    let report = analyze_fund(&provider, "demo", &anchors);

    println!("\nFund: {} ({})", report.scheme_name, report.fund_code);
    println!("\nYear-over-year returns:");
    for entry in report.yoy.entries() {
        match entry.value {
            Some(pct) => println!("  {:<26} {:>8.2}%", entry.period, pct),
            None => println!("  {:<26} {:>9}", entry.period, "n/a"),
        }
    }

    println!("\nRolling CAGR:");
    for entry in report.rolling_cagr.entries() {
        match entry.value {
            Some(pct) => println!("  {:<26} {:>8.2}%", entry.period, pct),
            None => println!("  {:<26} {:>9}", entry.period, "n/a"),
        }
    }
}
