use serde::{Deserialize, Serialize};

/// One of the three free-form wins pinned to a day. Slots are fixed (0-2);
/// text starts empty and completion is toggled per slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyWin {
    pub id: i64,
    pub date: String,
    pub slot: usize,
    pub win: String,
    pub completed: bool,
}
