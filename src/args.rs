use clap::Parser;
use std::path::PathBuf;

use crate::buckets::UniqueScope;
use crate::config::DEFAULT_LOG_PATH;
use crate::window::WindowMode;

#[derive(Parser, Debug)]
#[command(
    name = "events-log-parser",
    about = "Report average daily logins from an organisation event log export",
    version,
    long_about = None
)]
pub struct Args {
    /// Event log CSV export
    #[arg(short, long, default_value = DEFAULT_LOG_PATH)]
    pub log: PathBuf,

    /// Which days an N-day window covers
    #[arg(long, value_enum, default_value_t = WindowMode::Earliest)]
    pub window_mode: WindowMode,

    /// How users are deduplicated for unique user logins
    #[arg(long, value_enum, default_value_t = UniqueScope::FirstSeen)]
    pub unique_scope: UniqueScope,

    /// Also print the per-day counts
    #[arg(short, long)]
    pub daily: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
