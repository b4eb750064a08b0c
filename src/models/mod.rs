pub mod goal;
pub mod log;
pub mod stats;
pub mod task;
pub mod win;
pub mod workout;

pub use goal::{GoalTarget, MonthlyGoal};
pub use log::{LogEntry, LogKind};
pub use stats::Streak;
pub use task::DailyTask;
pub use win::DailyWin;
pub use workout::{Workout, WorkoutEntry};
