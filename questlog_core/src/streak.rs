//! Current activity streak.
//!
//! A streak is the run of consecutive local calendar days with at least one
//! log of any kind, ending today or yesterday. Not having logged yet today
//! keeps yesterday's streak alive.

use crate::window::local_date;
use crate::LogBook;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::collections::HashSet;

/// Streak over every collection in `book`
pub fn current_streak<Tz: TimeZone>(book: &LogBook, now: &DateTime<Tz>) -> u32 {
    streak_from_dates(book.all_dates(), now)
}

/// Streak over an arbitrary set of log instants
pub fn streak_from_dates<I, Tz>(dates: I, now: &DateTime<Tz>) -> u32
where
    I: IntoIterator<Item = DateTime<Utc>>,
    Tz: TimeZone,
{
    let tz = now.timezone();
    let days: HashSet<NaiveDate> = dates.into_iter().map(|d| local_date(&d, &tz)).collect();

    let today = now.date_naive();
    let start = if days.contains(&today) {
        today
    } else {
        match today.pred_opt() {
            Some(yesterday) if days.contains(&yesterday) => yesterday,
            _ => return 0,
        }
    };

    let mut streak = 0;
    let mut day = Some(start);
    while let Some(d) = day.filter(|d| days.contains(d)) {
        streak += 1;
        day = d.pred_opt();
    }

    tracing::debug!("Current streak: {} days ending {}", streak, start);
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};

    fn now() -> DateTime<FixedOffset> {
        crate::window::parse_now("2024-06-05T10:00:00+02:00").unwrap()
    }

    fn days_ago(days: &[i64]) -> Vec<DateTime<Utc>> {
        days.iter()
            .map(|d| (now() - Duration::days(*d)).with_timezone(&Utc))
            .collect()
    }

    #[test]
    fn test_three_day_run_with_gap() {
        assert_eq!(streak_from_dates(days_ago(&[0, 1, 2, 4, 5]), &now()), 3);
    }

    #[test]
    fn test_yesterday_keeps_streak_alive() {
        assert_eq!(streak_from_dates(days_ago(&[1]), &now()), 1);
        assert_eq!(streak_from_dates(days_ago(&[1, 2, 3]), &now()), 3);
    }

    #[test]
    fn test_no_recent_activity_is_zero() {
        assert_eq!(streak_from_dates(days_ago(&[2, 3, 4, 5]), &now()), 0);
        assert_eq!(streak_from_dates(Vec::new(), &now()), 0);
    }

    #[test]
    fn test_single_log_today() {
        assert_eq!(streak_from_dates(days_ago(&[0]), &now()), 1);
    }

    #[test]
    fn test_multiple_logs_same_day_count_once() {
        let mut dates = days_ago(&[0, 0, 0, 1]);
        dates.push((now() - Duration::hours(1)).with_timezone(&Utc));
        assert_eq!(streak_from_dates(dates, &now()), 2);
    }

    #[test]
    fn test_current_run_not_historical_max() {
        // Ten-day run a month ago, two-day run now
        let mut offsets: Vec<i64> = (30..40).collect();
        offsets.extend([0, 1]);
        assert_eq!(streak_from_dates(days_ago(&offsets), &now()), 2);
    }

    #[test]
    fn test_streak_uses_local_day() {
        // 2024-06-04T23:30Z is already June 5th at UTC+2
        let today_local = DateTime::parse_from_rfc3339("2024-06-04T23:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(streak_from_dates(vec![today_local], &now()), 1);

        // ...but at UTC-5 evaluated on June 6th it is two days back
        let later = crate::window::parse_now("2024-06-06T09:00:00-05:00").unwrap();
        assert_eq!(streak_from_dates(vec![today_local], &later), 0);
    }

    #[test]
    fn test_current_streak_spans_collections() {
        let dates = days_ago(&[0, 1]);
        let book = LogBook {
            weight: vec![crate::WeightLog {
                id: "w".into(),
                weight: 80.0,
                date: dates[0],
            }],
            nutrition: vec![crate::NutritionLog {
                id: "n".into(),
                status: crate::NutritionStatus::Red,
                date: dates[1],
            }],
            ..Default::default()
        };
        assert_eq!(current_streak(&book, &now()), 2);
    }
}
