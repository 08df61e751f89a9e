use chrono::{Datelike, Local, NaiveDate};

/// Formats a calendar date as the `YYYY_MM_DD` prefix used to namespace
/// stored filenames by upload day. Month is the calendar month (1-12),
/// month and day are zero-padded to two digits.
pub fn date_prefix(date: NaiveDate) -> String {
    format!("{:04}_{:02}_{:02}", date.year(), date.month(), date.day())
}

/// Prefix for the host's current local date. Called once at startup; the
/// result is injected into storage construction so every file uploaded
/// during one process run shares the same prefix, even across midnight.
pub fn today_prefix() -> String {
    date_prefix(Local::now().date_naive())
}
