use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyGoal {
    pub id: i64,
    pub goal: String,
    /// 1-12
    pub month: u32,
    pub year: i32,
}

/// A concrete target under a monthly goal. Progress over a month is defined
/// only over targets whose parent goal matches that month/year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalTarget {
    pub id: i64,
    pub goal_id: i64,
    pub target: String,
    pub completed: bool,
    pub progress: i32,
    pub resource_url: Option<String>,
}
