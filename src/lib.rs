pub mod analysis;
pub mod args;
pub mod buckets;
pub mod config;
pub mod error;
pub mod record;
pub mod stats;
pub mod utils;
pub mod window;

pub use analysis::{analyze_event_log, build_report, print_analysis_results};
pub use args::Args;
pub use buckets::{DailyCounts, UniqueScope};
pub use error::{Error, Result};
pub use record::{parse_events, read_events, EventRecord};
pub use stats::{AnalysisResult, Report, WindowedAverages};
pub use window::WindowMode;
