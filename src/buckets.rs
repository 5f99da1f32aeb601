use clap::ValueEnum;
use std::collections::{HashMap, HashSet};

use crate::record::EventRecord;

/// How the unique-user variant deduplicates users.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum UniqueScope {
    /// Deduplicate across the whole log. The first login of each new day still opens
    /// that day with a count of one.
    #[default]
    FirstSeen,
    /// Count each user once per day they logged in.
    PerDay,
}

/// Login counts per day key, plus the order in which the days were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyCounts {
    counts: HashMap<String, u32>,
    days: Vec<String>,
}

impl DailyCounts {
    /// Count every login event per day.
    pub fn logins(records: &[EventRecord]) -> Self {
        let mut daily = Self::default();
        for record in records.iter().filter(|r| r.is_login()) {
            daily.increment(record.day_key());
        }
        daily
    }

    /// Count unique users logging in per day, deduplicated according to `scope`.
    pub fn unique_user_logins(records: &[EventRecord], scope: UniqueScope) -> Self {
        let mut daily = Self::default();

        match scope {
            UniqueScope::FirstSeen => {
                let mut seen_users: HashSet<&str> = HashSet::new();
                for record in records.iter().filter(|r| r.is_login()) {
                    let day = record.day_key();
                    let first_of_user = seen_users.insert(record.user_name.as_str());
                    if first_of_user || !daily.counts.contains_key(&day) {
                        daily.increment(day);
                    }
                }
            }
            UniqueScope::PerDay => {
                let mut seen: HashSet<(String, &str)> = HashSet::new();
                for record in records.iter().filter(|r| r.is_login()) {
                    let day = record.day_key();
                    if seen.insert((day.clone(), record.user_name.as_str())) {
                        daily.increment(day);
                    }
                }
            }
        }

        daily
    }

    fn increment(&mut self, day: String) {
        match self.counts.get_mut(&day) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(day.clone(), 1);
                self.days.push(day);
            }
        }
    }

    /// Day keys in first-seen order.
    pub fn days(&self) -> &[String] {
        &self.days
    }

    pub fn count(&self, day: &str) -> Option<u32> {
        self.counts.get(day).copied()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// `(day, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.days
            .iter()
            .map(|day| (day.as_str(), self.counts.get(day).copied().unwrap_or(0)))
    }
}
