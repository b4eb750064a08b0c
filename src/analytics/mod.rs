//! Pure completion/streak analytics. Every function here takes fully
//! materialized input and an explicit `today`; nothing in this module
//! reads a clock or touches the database, so callers (and tests) control
//! the day boundary. The binary uses the local civil date, taken once at
//! the CLI/TUI edge.

pub mod calendar;
pub mod goals;
pub mod rates;
pub mod streak;

pub use calendar::{month_grid, CalendarCell};
pub use goals::goal_progress;
pub use rates::{overall_rate, window_rate};
pub use streak::{compute_streak, streak_from_days};

use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};

use crate::models::DailyTask;

/// Completion flags of a day's task rows, keyed by calendar day.
pub type DayBuckets = HashMap<NaiveDate, Vec<bool>>;

/// Group task rows by calendar day. Rows with an unparseable date are
/// dropped rather than poisoning a bucket.
pub fn bucket_by_day(tasks: &[DailyTask]) -> DayBuckets {
    let mut buckets: DayBuckets = HashMap::new();
    for task in tasks {
        if let Ok(date) = NaiveDate::parse_from_str(&task.date, "%Y-%m-%d") {
            buckets.entry(date).or_default().push(task.completed);
        }
    }
    buckets
}

/// A day counts only when it holds at least `threshold` rows and every one
/// is completed. An empty or partially seeded day can never count.
pub fn is_day_complete(flags: &[bool], threshold: usize) -> bool {
    flags.len() >= threshold && flags.iter().all(|&done| done)
}

/// The set of days that classify as complete, shared by the streak walk
/// and the calendar grid so both always agree.
pub fn completed_days(buckets: &DayBuckets, threshold: usize) -> HashSet<NaiveDate> {
    buckets
        .iter()
        .filter(|(_, flags)| is_day_complete(flags, threshold))
        .map(|(date, _)| *date)
        .collect()
}

/// Rounded integer percent, 0 when `total` is 0.
pub(crate) fn percent(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(date: &str, completed: bool) -> DailyTask {
        DailyTask {
            id: None,
            task: "x".to_string(),
            date: date.to_string(),
            completed,
        }
    }

    #[test]
    fn day_complete_requires_threshold_and_all_done() {
        assert!(is_day_complete(&[true, true, true], 3));
        assert!(is_day_complete(&[true, true, true, true], 3));
        assert!(!is_day_complete(&[true, true], 3));
        assert!(!is_day_complete(&[true, false, true], 3));
    }

    #[test]
    fn empty_day_is_never_complete() {
        assert!(!is_day_complete(&[], 1));
        assert!(!is_day_complete(&[], 9));
        // Degenerate threshold: vacuously true over no rows
        assert!(is_day_complete(&[], 0));
    }

    #[test]
    fn bucketing_groups_by_day_and_skips_bad_dates() {
        let tasks = vec![
            task("2025-03-01", true),
            task("2025-03-01", false),
            task("2025-03-02", true),
            task("not-a-date", true),
        ];
        let buckets = bucket_by_day(&tasks);
        assert_eq!(buckets.len(), 2);
        let d1 = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(buckets[&d1], vec![true, false]);
    }

    #[test]
    fn completed_days_applies_classifier() {
        let tasks = vec![
            task("2025-03-01", true),
            task("2025-03-01", true),
            task("2025-03-02", true),
            task("2025-03-03", true),
            task("2025-03-03", false),
        ];
        let buckets = bucket_by_day(&tasks);
        let done = completed_days(&buckets, 2);
        assert_eq!(done.len(), 1);
        assert!(done.contains(&NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()));
    }

    #[test]
    fn bucketing_does_not_mutate_input() {
        let tasks = vec![task("2025-03-01", true), task("2025-03-02", false)];
        let a = bucket_by_day(&tasks);
        let b = bucket_by_day(&tasks);
        assert_eq!(a, b);
    }

    #[test]
    fn percent_rounds_and_guards_zero() {
        assert_eq!(percent(3, 7), 43);
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(7, 7), 100);
        assert_eq!(percent(1, 3), 33);
    }
}
