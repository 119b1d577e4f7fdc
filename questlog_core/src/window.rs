//! Time windows anchored to an explicit "now".
//!
//! All calendar decisions (same day, ISO week, month, hour of day) use the
//! time zone carried by `now`. Log instants are converted into that zone
//! before any truncation.

use crate::{Error, Result};
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Reporting period for aggregated summaries
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TimeWindow {
    Daily,
    Weekly,
    Monthly,
    Overall,
}

impl TimeWindow {
    /// Whether `instant` falls inside this window relative to `now`.
    ///
    /// Weekly uses ISO weeks (Monday start), which also pins the ISO year.
    pub fn contains<Tz: TimeZone>(&self, instant: &DateTime<Utc>, now: &DateTime<Tz>) -> bool {
        let day = local_date(instant, &now.timezone());
        let today = now.date_naive();

        match self {
            TimeWindow::Daily => day == today,
            TimeWindow::Weekly => day.iso_week() == today.iso_week(),
            TimeWindow::Monthly => day.year() == today.year() && day.month() == today.month(),
            TimeWindow::Overall => true,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::Daily => "daily",
            TimeWindow::Weekly => "weekly",
            TimeWindow::Monthly => "monthly",
            TimeWindow::Overall => "overall",
        }
    }
}

impl std::str::FromStr for TimeWindow {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "daily" | "day" | "today" => Ok(TimeWindow::Daily),
            "weekly" | "week" => Ok(TimeWindow::Weekly),
            "monthly" | "month" => Ok(TimeWindow::Monthly),
            "overall" | "all" | "lifetime" => Ok(TimeWindow::Overall),
            other => Err(Error::Time(format!("Unknown window: {}", other))),
        }
    }
}

/// Calendar day of `instant` as seen from `tz`
pub fn local_date<Tz: TimeZone>(instant: &DateTime<Utc>, tz: &Tz) -> NaiveDate {
    instant.with_timezone(tz).date_naive()
}

/// Parse an RFC 3339 evaluation instant, keeping its offset as the local zone
pub fn parse_now(s: &str) -> Result<DateTime<chrono::FixedOffset>> {
    DateTime::parse_from_rfc3339(s).map_err(|e| Error::Time(format!("{}: {}", s, e)))
}
