use std::fmt;

use crate::buckets::DailyCounts;
use crate::utils::format_average;

/// Averages over the short and long report windows. `None` means no login days were found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowedAverages {
    pub short: Option<f64>,
    pub long: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub short_window: usize,
    pub long_window: usize,
    pub logins: WindowedAverages,
    pub unique_logins: WindowedAverages,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(
            f,
            "Last {} days daily logins average: {}",
            self.short_window,
            format_average(self.logins.short)
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "Last {} days daily logins average: {}",
            self.long_window,
            format_average(self.logins.long)
        )?;
        writeln!(f)?;
        writeln!(f)?;
        writeln!(
            f,
            "Last {} days daily unique user logins average: {}",
            self.short_window,
            format_average(self.unique_logins.short)
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "Last {} days daily unique user logins average: {}",
            self.long_window,
            format_average(self.unique_logins.long)
        )?;
        writeln!(f)
    }
}

#[derive(Debug)]
pub struct AnalysisResult {
    pub logins: DailyCounts,
    pub unique_logins: DailyCounts,
    pub report: Report,
}
