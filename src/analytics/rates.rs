use chrono::{Duration, NaiveDate};

use super::{is_day_complete, percent, DayBuckets};

const EMPTY: &[bool] = &[];

/// Rounded percent of complete days over the trailing `window_days` window,
/// today inclusive. Days with no rows at all count as incomplete.
pub fn window_rate(
    buckets: &DayBuckets,
    today: NaiveDate,
    window_days: u32,
    threshold: usize,
) -> u8 {
    let complete = (0..window_days)
        .filter(|&i| {
            let date = today - Duration::days(i as i64);
            let flags = buckets.get(&date).map(Vec::as_slice).unwrap_or(EMPTY);
            is_day_complete(flags, threshold)
        })
        .count();
    percent(complete, window_days as usize)
}

/// Rounded percent of complete days over every distinct day present in the
/// history. 0 when there is no history at all.
pub fn overall_rate(buckets: &DayBuckets, threshold: usize) -> u8 {
    let complete = buckets
        .values()
        .filter(|flags| is_day_complete(flags, threshold))
        .count();
    percent(complete, buckets.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn buckets_with(today: NaiveDate, complete_offsets: &[i64], threshold: usize) -> DayBuckets {
        let mut buckets = DayBuckets::new();
        for &i in complete_offsets {
            buckets.insert(today - Duration::days(i), vec![true; threshold]);
        }
        buckets
    }

    #[test]
    fn three_of_seven_rounds_to_43() {
        let today = date("2025-06-20");
        let buckets = buckets_with(today, &[0, 2, 4], 9);
        assert_eq!(window_rate(&buckets, today, 7, 9), 43);
    }

    #[test]
    fn missing_days_count_against_the_window() {
        let today = date("2025-06-20");
        let buckets = buckets_with(today, &[0], 9);
        assert_eq!(window_rate(&buckets, today, 7, 9), 14);
        assert_eq!(window_rate(&DayBuckets::new(), today, 7, 9), 0);
    }

    #[test]
    fn under_threshold_days_are_incomplete() {
        let today = date("2025-06-20");
        let mut buckets = DayBuckets::new();
        buckets.insert(today, vec![true; 5]); // seeded short of the threshold
        assert_eq!(window_rate(&buckets, today, 7, 9), 0);
    }

    #[test]
    fn overall_rate_uses_only_days_present() {
        let today = date("2025-06-20");
        let mut buckets = buckets_with(today, &[0, 1], 3);
        buckets.insert(today - Duration::days(50), vec![true, false, true]);
        // 2 complete out of 3 days with history
        assert_eq!(overall_rate(&buckets, 3), 67);
    }

    #[test]
    fn overall_rate_of_empty_history_is_zero() {
        assert_eq!(overall_rate(&DayBuckets::new(), 9), 0);
    }
}
