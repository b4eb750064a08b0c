use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    pub id: i64,
    pub name: String,
    /// Free-form rep scheme, e.g. "3x12".
    pub reps: Option<String>,
    /// Required workouts gate whether a gym day counts as complete.
    pub required: bool,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutEntry {
    pub id: Option<i64>,
    pub workout_id: i64,
    pub date: String,
    pub reps_completed: Option<i32>,
}
