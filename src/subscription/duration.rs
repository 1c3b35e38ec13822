use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Subscription term controlling how far an expiry lies past the start date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Duration {
    OneWeek,
    OneMonth,
    OneYear,
}

impl Duration {
    pub fn label(&self) -> &'static str {
        match self {
            Duration::OneWeek => "One Week",
            Duration::OneMonth => "One Month",
            Duration::OneYear => "One Year",
        }
    }

    /// Parses the short forms accepted on the command line.
    pub fn parse(input: &str) -> Option<Self> {
        match input.to_ascii_lowercase().as_str() {
            "week" | "one-week" | "one_week" => Some(Duration::OneWeek),
            "month" | "one-month" | "one_month" => Some(Duration::OneMonth),
            "year" | "one-year" | "one_year" => Some(Duration::OneYear),
            _ => None,
        }
    }
}

/// Derives the expiry instant for a subscription that began at `start`.
///
/// Week terms advance by exactly seven days. Month and year terms advance on
/// the calendar, preserving day-of-month and time-of-day; when the target
/// month is shorter the day clamps to its last valid day (Jan 31 + 1 month
/// lands on Feb 28/29, never Mar 2-3).
pub fn expiry_from(start: DateTime<Utc>, duration: Duration) -> DateTime<Utc> {
    match duration {
        Duration::OneWeek => start + chrono::Duration::days(7),
        Duration::OneMonth => with_shifted_date(start, |date| shift_month(date, 1)),
        Duration::OneYear => with_shifted_date(start, |date| shift_year(date, 1)),
    }
}

/// Inverse of [`expiry_from`]: derives the start instant that yields the
/// given expiry. The start date is the persisted source of truth, so editing
/// an expiry goes through here rather than storing the expiry itself.
///
/// The round trip `start_from_expiry(expiry_from(s, d), d) == s` holds except
/// where month-length or leap-year clamping collapsed distinct start days
/// onto the same expiry day.
pub fn start_from_expiry(expiry: DateTime<Utc>, duration: Duration) -> DateTime<Utc> {
    match duration {
        Duration::OneWeek => expiry - chrono::Duration::days(7),
        Duration::OneMonth => with_shifted_date(expiry, |date| shift_month(date, -1)),
        Duration::OneYear => with_shifted_date(expiry, |date| shift_year(date, -1)),
    }
}

fn with_shifted_date(
    instant: DateTime<Utc>,
    shift: impl FnOnce(NaiveDate) -> NaiveDate,
) -> DateTime<Utc> {
    let shifted = shift(instant.date_naive());
    Utc.from_utc_datetime(&shifted.and_time(instant.time()))
}

fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    let mut day = date.day();
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    day = day.min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap_or(date)
}

fn shift_year(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year() + years;
    let day = date.day().min(days_in_month(year, date.month()));
    NaiveDate::from_ymd_opt(year, date.month(), day).unwrap_or(date)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    let last_current = first_next - chrono::Duration::days(1);
    last_current.day()
}
