use clap::ValueEnum;

use crate::buckets::DailyCounts;

/// Which days a window of N days covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum WindowMode {
    /// The first N days in the order they appear in the log.
    #[default]
    Earliest,
    /// The N chronologically latest days.
    Latest,
}

impl DailyCounts {
    /// Mean of the daily counts over `min(window, days)` days selected by `mode`.
    ///
    /// Returns `None` when the window covers no days at all.
    pub fn windowed_average(&self, window: usize, mode: WindowMode) -> Option<f64> {
        let take = window.min(self.len());
        if take == 0 {
            return None;
        }

        let selected: Vec<&str> = match mode {
            WindowMode::Earliest => self.days()[..take].iter().map(String::as_str).collect(),
            WindowMode::Latest => {
                // YYYY-MM-DD keys order chronologically as plain strings.
                let mut sorted: Vec<&str> = self.days().iter().map(String::as_str).collect();
                sorted.sort_unstable();
                sorted.split_off(sorted.len() - take)
            }
        };

        let sum: u64 = selected
            .iter()
            .map(|day| u64::from(self.count(day).unwrap_or(0)))
            .sum();

        Some(sum as f64 / take as f64)
    }
}
