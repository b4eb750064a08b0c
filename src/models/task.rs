use serde::{Deserialize, Serialize};

/// One task instance on one calendar day. A fresh day is seeded from the
/// template; toggling flips `completed`, rows are never deleted in normal flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyTask {
    pub id: Option<i64>,
    pub task: String,
    /// Calendar day in "%Y-%m-%d" form.
    pub date: String,
    pub completed: bool,
}
