use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::config::{DATE_TIME_FORMAT, DAY_KEY_FORMAT, EVENT_USER_LOGGED_IN};
use crate::error::{Error, Result};

/// One row of the event export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub message: String,
    pub app_icon: String,
    pub app_name: String,
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
    pub timestamp: DateTime<Utc>,
    pub ip: String,
    pub event_type: String,
    pub installation_id: String,
}

impl EventRecord {
    /// Calendar date of the event as `YYYY-MM-DD`.
    pub fn day_key(&self) -> String {
        self.timestamp.format(DAY_KEY_FORMAT).to_string()
    }

    pub fn is_login(&self) -> bool {
        self.event_type == EVENT_USER_LOGGED_IN
    }
}

/// Columns in export order. Deserialized by position, the header names are never consulted.
#[derive(Debug, Deserialize)]
struct RawEvent {
    message: String,
    app_icon: String,
    app_name: String,
    user_id: String,
    user_name: String,
    user_email: String,
    date: String,
    ip: String,
    event_type: String,
    installation_id: String,
}

impl RawEvent {
    fn into_record(self, line: u64) -> Result<EventRecord> {
        let timestamp = NaiveDateTime::parse_from_str(&self.date, DATE_TIME_FORMAT)
            .map_err(|source| Error::Timestamp {
                line,
                value: self.date.clone(),
                source,
            })?
            .and_utc();

        Ok(EventRecord {
            message: self.message,
            app_icon: self.app_icon,
            app_name: self.app_name,
            user_id: self.user_id,
            user_name: self.user_name,
            user_email: self.user_email,
            timestamp,
            ip: self.ip,
            event_type: self.event_type,
            installation_id: self.installation_id,
        })
    }
}

/// Read every [`EventRecord`] from the export at `path`.
///
/// The first row is treated as a header and skipped. Any unreadable row or
/// malformed timestamp fails the whole read.
pub fn read_events(path: &Path) -> Result<Vec<EventRecord>> {
    let start_time = Instant::now();
    info!(action = "start", component = "event_reader", file_path = ?path, "Reading event log");

    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_events(file)?;

    info!(
        action = "complete",
        component = "event_reader",
        record_count = records.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Event log read"
    );
    Ok(records)
}

/// Parse [`EventRecord`]s from CSV content with a header row.
pub fn parse_events(reader: impl Read) -> Result<Vec<EventRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let raw: RawEvent = row.deserialize(None)?;
        records.push(raw.into_record(line)?);
    }

    Ok(records)
}
