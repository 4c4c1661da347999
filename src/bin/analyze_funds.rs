//! Batch fund analysis for a fund category
//!
//! Loads the category's ticker list, serves NAV payloads from a fixture
//! directory, and writes one CSV row per computed return figure.

use chrono::{Local, NaiveDate};
use clap::Parser;
use fund_analytics::analytics::{analyze_batch, FundReport};
use fund_analytics::calendar::yearly_anchor_dates;
use fund_analytics::provider::{load_ticker_list, FixtureProvider};
use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "analyze_funds", about = "Batch YoY and rolling-CAGR analysis for a fund category")]
struct Args {
    /// Category code, matching <tickers_dir>/<category>.txt (e.g. FX, LC, MC, SC)
    #[arg(long)]
    category: String,

    /// Directory holding per-category ticker lists
    #[arg(long, default_value = "data/tickers")]
    tickers_dir: PathBuf,

    /// Directory holding <fund_code>.json NAV payloads
    #[arg(long, default_value = "data/navs")]
    fixtures_dir: PathBuf,

    /// Years of lookback
    #[arg(long, default_value_t = 5)]
    years: u32,

    /// Reference date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Output CSV path
    #[arg(long, default_value = "fund_returns.csv")]
    output: PathBuf,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = run(args) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let start = Instant::now();

    let fund_codes = load_ticker_list(&args.category, &args.tickers_dir)?;
    println!("Loaded {} fund codes for category {}", fund_codes.len(), args.category);

    let provider = FixtureProvider::from_dir(&args.fixtures_dir)?;

    let as_of = args.as_of.unwrap_or_else(|| Local::now().date_naive());
    let anchors = yearly_anchor_dates(as_of, args.years);
    println!("Anchor dates: {:?}", anchors);

    let reports = analyze_batch(&provider, &fund_codes, &anchors);
    println!("Analyzed {} funds in {:?}", reports.len(), start.elapsed());

    write_report_csv(&args.output, &reports)?;
    println!("Output written to {}", args.output.display());

    Ok(())
}

fn write_report_csv(path: &PathBuf, reports: &[FundReport]) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["fund_code", "scheme_name", "metric", "period", "value_pct"])?;

    for report in reports {
        let sections = [("yoy", &report.yoy), ("rolling_cagr", &report.rolling_cagr)];
        for (metric, section) in sections {
            for entry in section.entries() {
                let value = entry
                    .value
                    .map(|pct| format!("{:.4}", pct))
                    .unwrap_or_default();
                writer.write_record([
                    report.fund_code.as_str(),
                    report.scheme_name.as_str(),
                    metric,
                    entry.period.as_str(),
                    value.as_str(),
                ])?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}
