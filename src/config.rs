/// Layout of the `date` column in the event export, e.g. `2023-01-09T10:21:03.4866667Z`.
///
/// The fractional part is optional when parsing and may carry up to nine digits.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// Layout of a day key.
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Event type of a successful user login.
pub const EVENT_USER_LOGGED_IN: &str = "User_LoggedIn";

pub const DEFAULT_LOG_PATH: &str = "logs/bitwarden-events_export.csv";

pub const SHORT_WINDOW_DAYS: usize = 3;
pub const LONG_WINDOW_DAYS: usize = 5;
