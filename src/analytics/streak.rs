use chrono::{Duration, NaiveDate};
use std::collections::HashSet;

use super::{completed_days, DayBuckets};
use crate::models::Streak;

/// Walk backward from `today` over at most `window_days` days and report the
/// current and longest runs of completed days. Days earlier than
/// `today - window_days` are never considered, so `window_days` is also the
/// maximum reportable streak.
pub fn compute_streak(
    buckets: &DayBuckets,
    today: NaiveDate,
    window_days: u32,
    threshold: usize,
) -> Streak {
    let done = completed_days(buckets, threshold);
    streak_from_days(&done, today, window_days)
}

/// Streak walk over a precomputed completed-day set. Used directly for gym
/// days, where "complete" is derived from the workout log rather than a
/// task-count threshold.
pub fn streak_from_days(days: &HashSet<NaiveDate>, today: NaiveDate, window_days: u32) -> Streak {
    // Current streak: break on the first gap scanning backward from today.
    // A completed yesterday earns nothing once today itself is incomplete.
    let mut current = 0u32;
    for i in 0..window_days {
        if days.contains(&(today - Duration::days(i as i64))) {
            current += 1;
        } else {
            break;
        }
    }

    // Longest streak needs the full window, no early exit.
    let mut longest = 0u32;
    let mut run = 0u32;
    for i in 0..window_days {
        if days.contains(&(today - Duration::days(i as i64))) {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }

    Streak { current, longest }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::bucket_by_day;
    use crate::models::DailyTask;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn day_set(today: NaiveDate, offsets: &[i64]) -> HashSet<NaiveDate> {
        offsets
            .iter()
            .map(|&i| today - Duration::days(i))
            .collect()
    }

    #[test]
    fn unbroken_ten_day_window() {
        let today = date("2025-06-20");
        let days = day_set(today, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let s = streak_from_days(&days, today, 365);
        assert_eq!(s, Streak { current: 10, longest: 10 });
    }

    #[test]
    fn gap_three_days_back_splits_runs() {
        let today = date("2025-06-20");
        // today-3 incomplete: current run is days 0..=2, earlier run 4..=9
        let days = day_set(today, &[0, 1, 2, 4, 5, 6, 7, 8, 9]);
        let s = streak_from_days(&days, today, 365);
        assert_eq!(s.current, 3);
        assert_eq!(s.longest, 6);
    }

    #[test]
    fn incomplete_today_zeroes_current() {
        let today = date("2025-06-20");
        let days = day_set(today, &[1, 2, 3, 4]);
        let s = streak_from_days(&days, today, 365);
        assert_eq!(s.current, 0);
        assert_eq!(s.longest, 4);
    }

    #[test]
    fn window_caps_both_counters() {
        let today = date("2025-06-20");
        let days = day_set(today, &(0..30).collect::<Vec<_>>());
        let s = streak_from_days(&days, today, 7);
        assert_eq!(s, Streak { current: 7, longest: 7 });
    }

    #[test]
    fn empty_set_is_zero() {
        let today = date("2025-06-20");
        let s = streak_from_days(&HashSet::new(), today, 365);
        assert_eq!(s, Streak::default());
    }

    #[test]
    fn compute_streak_applies_threshold() {
        let mut tasks = Vec::new();
        for offset in 0..5i64 {
            let d = (date("2025-06-20") - Duration::days(offset))
                .format("%Y-%m-%d")
                .to_string();
            for _ in 0..9 {
                tasks.push(DailyTask {
                    id: None,
                    task: "t".to_string(),
                    date: d.clone(),
                    completed: true,
                });
            }
        }
        // today-2 has 9 rows but one incomplete
        if let Some(t) = tasks.iter_mut().find(|t| t.date == "2025-06-18") {
            t.completed = false;
        }
        let buckets = bucket_by_day(&tasks);
        let s = compute_streak(&buckets, date("2025-06-20"), 365, 9);
        assert_eq!(s.current, 2);
        assert_eq!(s.longest, 2);
    }

    // An alternative formulation keeps one forward counter that starts at
    // i == 0 and only increments while the run is alive. Both forms must
    // agree whenever the run ending at today is the only thing that matters.
    #[test]
    fn break_form_matches_forward_counter_form() {
        fn forward_current(days: &HashSet<NaiveDate>, today: NaiveDate, window: u32) -> u32 {
            let mut current = 0;
            let mut alive = true;
            for i in 0..window {
                if !alive {
                    break;
                }
                if days.contains(&(today - Duration::days(i as i64))) {
                    if i == 0 || current > 0 {
                        current += 1;
                    }
                } else {
                    if i == 0 {
                        current = 0;
                    }
                    alive = false;
                }
            }
            current
        }

        let today = date("2025-06-20");
        let cases = [
            day_set(today, &[]),
            day_set(today, &[0]),
            day_set(today, &[1, 2, 3]),
            day_set(today, &[0, 1, 2, 4, 5]),
            day_set(today, &(0..15).collect::<Vec<_>>()),
        ];
        for days in &cases {
            assert_eq!(
                streak_from_days(days, today, 365).current,
                forward_current(days, today, 365)
            );
        }
    }
}
