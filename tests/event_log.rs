use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use events_log_parser::{
    build_report, read_events, DailyCounts, Error, UniqueScope, WindowMode,
};

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("bitwarden_org-events_export.csv")
}

fn as_map(daily: &DailyCounts) -> HashMap<String, u32> {
    daily
        .iter()
        .map(|(day, count)| (day.to_string(), count))
        .collect()
}

#[test]
fn reads_every_data_row() {
    let records = read_events(&fixture()).unwrap();
    assert_eq!(records.len(), 17);

    let first = &records[0];
    assert_eq!(first.user_name, "Alice Example");
    assert_eq!(first.event_type, "User_LoggedIn");
    assert_eq!(first.day_key(), "2023-02-07");
    assert_eq!(first.installation_id, "");

    assert_eq!(records[3].message, "Edited item 4c2e9a1d, collection Ops.");
    assert_eq!(records[4].app_name, "CLI");
}

#[test]
fn daily_login_counts() {
    let records = read_events(&fixture()).unwrap();
    let logins = DailyCounts::logins(&records);

    let expected: HashMap<String, u32> = [
        ("2023-01-09", 2),
        ("2023-01-10", 1),
        ("2023-01-26", 1),
        ("2023-02-06", 1),
        ("2023-02-07", 1),
    ]
    .into_iter()
    .map(|(day, count)| (day.to_string(), count))
    .collect();
    assert_eq!(as_map(&logins), expected);
    assert_eq!(
        logins.days(),
        ["2023-02-07", "2023-02-06", "2023-01-26", "2023-01-10", "2023-01-09"]
    );
}

#[test]
fn daily_unique_user_login_counts() {
    let records = read_events(&fixture()).unwrap();

    for scope in [UniqueScope::FirstSeen, UniqueScope::PerDay] {
        let unique = DailyCounts::unique_user_logins(&records, scope);
        assert_eq!(unique.len(), 5);
        assert!(unique.iter().all(|(_, count)| count == 1));
    }
}

#[test]
fn average_daily_logins() {
    let records = read_events(&fixture()).unwrap();
    let logins = DailyCounts::logins(&records);

    assert_eq!(logins.windowed_average(5, WindowMode::Earliest), Some(1.2));
    assert_eq!(logins.windowed_average(3, WindowMode::Earliest), Some(1.0));
    assert_eq!(logins.windowed_average(3, WindowMode::Latest), Some(1.0));
}

#[test]
fn average_daily_unique_user_logins() {
    let records = read_events(&fixture()).unwrap();
    let unique = DailyCounts::unique_user_logins(&records, UniqueScope::FirstSeen);

    assert_eq!(unique.windowed_average(5, WindowMode::Earliest), Some(1.0));
    assert_eq!(unique.windowed_average(3, WindowMode::Earliest), Some(1.0));
}

#[test]
fn header_only_export_has_no_averages() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "message,appIcon,appName,userId,userName,userEmail,date,ip,type,installationId"
    )
    .unwrap();

    let records = read_events(file.path()).unwrap();
    assert!(records.is_empty());

    let logins = DailyCounts::logins(&records);
    let unique = DailyCounts::unique_user_logins(&records, UniqueScope::FirstSeen);
    assert!(logins.is_empty());
    assert!(unique.is_empty());

    let report = build_report(&logins, &unique, WindowMode::Earliest);
    assert_eq!(report.logins.short, None);
    assert_eq!(report.unique_logins.long, None);
}

#[test]
fn bad_timestamp_returns_no_records() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let content = std::fs::read_to_string(fixture()).unwrap();
    let broken = content.replacen("2023-01-26T08:02:45.6633333Z", "26/01/2023 08:02", 1);
    file.write_all(broken.as_bytes()).unwrap();

    match read_events(file.path()) {
        Err(Error::Timestamp { line, value, .. }) => {
            assert_eq!(line, 7);
            assert_eq!(value, "26/01/2023 08:02");
        }
        other => panic!("expected timestamp error, got {other:?}"),
    }
}
