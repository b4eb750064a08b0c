use serde::{Deserialize, Serialize};

/// Consecutive completed days. `current` is the run that is unbroken up
/// through today; `longest` is the best run anywhere in the scanned window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub current: u32,
    pub longest: u32,
}
