use std::collections::HashSet;

use super::percent;
use crate::models::{GoalTarget, MonthlyGoal};

/// Percent of completed targets under the goals of one month. Targets whose
/// parent goal belongs to another month never enter the denominator; a month
/// with no targets reports 0.
pub fn goal_progress(goals: &[MonthlyGoal], targets: &[GoalTarget], month: u32, year: i32) -> u8 {
    let goal_ids: HashSet<i64> = goals
        .iter()
        .filter(|g| g.month == month && g.year == year)
        .map(|g| g.id)
        .collect();

    let in_month: Vec<&GoalTarget> = targets
        .iter()
        .filter(|t| goal_ids.contains(&t.goal_id))
        .collect();
    let completed = in_month.iter().filter(|t| t.completed).count();

    percent(completed, in_month.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(id: i64, month: u32, year: i32) -> MonthlyGoal {
        MonthlyGoal {
            id,
            goal: format!("goal {}", id),
            month,
            year,
        }
    }

    fn target(id: i64, goal_id: i64, completed: bool) -> GoalTarget {
        GoalTarget {
            id,
            goal_id,
            target: format!("target {}", id),
            completed,
            progress: 0,
            resource_url: None,
        }
    }

    #[test]
    fn counts_only_targets_of_the_queried_month() {
        let goals = vec![goal(1, 6, 2025), goal(2, 7, 2025)];
        let targets = vec![
            target(10, 1, true),
            target(11, 1, false),
            target(12, 2, true), // other month, ignored
        ];
        assert_eq!(goal_progress(&goals, &targets, 6, 2025), 50);
    }

    #[test]
    fn no_targets_means_zero_not_a_panic() {
        let goals = vec![goal(1, 6, 2025)];
        assert_eq!(goal_progress(&goals, &[], 6, 2025), 0);
        assert_eq!(goal_progress(&[], &[], 6, 2025), 0);
    }

    #[test]
    fn same_month_different_year_is_excluded() {
        let goals = vec![goal(1, 6, 2024)];
        let targets = vec![target(10, 1, true)];
        assert_eq!(goal_progress(&goals, &targets, 6, 2025), 0);
    }

    #[test]
    fn all_done_is_100() {
        let goals = vec![goal(1, 6, 2025)];
        let targets = vec![target(10, 1, true), target(11, 1, true)];
        assert_eq!(goal_progress(&goals, &targets, 6, 2025), 100);
    }
}
