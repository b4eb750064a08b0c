use chrono::{Datelike, Duration, NaiveDate};
use std::collections::HashSet;

/// One cell of a month grid laid out in weekday columns (0 = Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub in_month: bool,
    pub is_today: bool,
    pub completed: bool,
}

/// Build the flat cell sequence for one month: leading filler cells from the
/// previous month align day 1 to its weekday column, then one cell per day.
/// Filler cells are never marked today or completed. No trailing padding.
pub fn month_grid(
    completed: &HashSet<NaiveDate>,
    year: i32,
    month: u32,
    today: NaiveDate,
) -> Vec<CalendarCell> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap_or_else(|| today.with_day(1).unwrap_or(today));
    let leading = first.weekday().num_days_from_sunday() as i64;

    let mut cells = Vec::with_capacity((leading + 31) as usize);
    for i in 0..leading {
        cells.push(CalendarCell {
            date: first - Duration::days(leading - i),
            in_month: false,
            is_today: false,
            completed: false,
        });
    }

    for day in 1..=days_in_month(year, month) {
        // first is valid, so every day of its month is too
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap_or(first);
        cells.push(CalendarCell {
            date,
            in_month: true,
            is_today: date == today,
            completed: completed.contains(&date),
        });
    }

    cells
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.and_then(|d| d.pred_opt()).map(|d| d.day()).unwrap_or(30)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn wednesday_start_gets_three_fillers() {
        // 2025-01-01 is a Wednesday
        let cells = month_grid(&HashSet::new(), 2025, 1, date("2025-01-15"));
        assert_eq!(cells.len(), 3 + 31);
        assert!(cells[..3].iter().all(|c| !c.in_month && !c.completed));
        assert_eq!(cells[0].date, date("2024-12-29"));
        assert!(cells[3..].iter().all(|c| c.in_month));
        assert_eq!(cells[3].date, date("2025-01-01"));
    }

    #[test]
    fn sunday_start_has_no_fillers() {
        // 2025-06-01 is a Sunday
        let cells = month_grid(&HashSet::new(), 2025, 6, date("2025-06-01"));
        assert_eq!(cells.len(), 30);
        assert!(cells[0].in_month);
    }

    #[test]
    fn today_flag_set_exactly_once_and_only_in_month() {
        let today = date("2025-01-15");
        let cells = month_grid(&HashSet::new(), 2025, 1, today);
        let marked: Vec<_> = cells.iter().filter(|c| c.is_today).collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].date, today);

        // Viewing another month: no cell is today
        let cells = month_grid(&HashSet::new(), 2025, 2, today);
        assert!(cells.iter().all(|c| !c.is_today));
    }

    #[test]
    fn completed_lookup_ignores_filler_dates() {
        let mut done = HashSet::new();
        done.insert(date("2024-12-30")); // falls in the filler range
        done.insert(date("2025-01-05"));
        let cells = month_grid(&done, 2025, 1, date("2025-01-15"));
        let completed: Vec<_> = cells.iter().filter(|c| c.completed).collect();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].date, date("2025-01-05"));
    }

    #[test]
    fn leap_february() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2025, 12), 31);
        let cells = month_grid(&HashSet::new(), 2024, 2, date("2024-02-10"));
        assert_eq!(cells.iter().filter(|c| c.in_month).count(), 29);
    }
}
