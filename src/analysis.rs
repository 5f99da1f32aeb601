use anyhow::{Context, Result};
use std::time::Instant;
use tracing::{info, warn};

use crate::buckets::DailyCounts;
use crate::config::{LONG_WINDOW_DAYS, SHORT_WINDOW_DAYS};
use crate::record::read_events;
use crate::stats::{AnalysisResult, Report, WindowedAverages};
use crate::window::WindowMode;
use crate::Args;

pub fn analyze_event_log(args: &Args) -> Result<AnalysisResult> {
    let total_start_time = Instant::now();
    info!(action = "start", component = "analysis", file_path = ?args.log, "Starting event log analysis");

    let records = read_events(&args.log).context("Failed to read event log")?;

    let bucketing_start = Instant::now();
    let logins = DailyCounts::logins(&records);
    let unique_logins = DailyCounts::unique_user_logins(&records, args.unique_scope);
    info!(
        action = "complete",
        component = "daily_buckets",
        login_days = logins.len(),
        unique_login_days = unique_logins.len(),
        unique_scope = ?args.unique_scope,
        duration_ms = bucketing_start.elapsed().as_millis(),
        "Bucketed login events by day"
    );

    if logins.is_empty() {
        warn!(
            action = "complete",
            component = "daily_buckets",
            record_count = records.len(),
            "No login events found"
        );
    }

    let report = build_report(&logins, &unique_logins, args.window_mode);

    info!(
        action = "complete",
        component = "analysis",
        window_mode = ?args.window_mode,
        duration_ms = total_start_time.elapsed().as_millis(),
        "Analysis completed successfully"
    );

    Ok(AnalysisResult {
        logins,
        unique_logins,
        report,
    })
}

pub fn build_report(logins: &DailyCounts, unique_logins: &DailyCounts, mode: WindowMode) -> Report {
    let averages = |daily: &DailyCounts| WindowedAverages {
        short: daily.windowed_average(SHORT_WINDOW_DAYS, mode),
        long: daily.windowed_average(LONG_WINDOW_DAYS, mode),
    };

    Report {
        short_window: SHORT_WINDOW_DAYS,
        long_window: LONG_WINDOW_DAYS,
        logins: averages(logins),
        unique_logins: averages(unique_logins),
    }
}

pub fn print_analysis_results(result: &AnalysisResult, args: &Args) {
    print!("{}", result.report);

    if args.daily {
        print_daily_counts("Daily Logins:", &result.logins);
        print_daily_counts("Daily Unique User Logins:", &result.unique_logins);
    }
}

pub fn print_daily_counts(title: &str, daily: &DailyCounts) {
    println!("{}", title);
    for (day, count) in daily.iter() {
        println!("{} | {}", day, count);
    }
}
