pub mod analytics;
pub mod calendar;
pub mod goals;
pub mod header;
pub mod logs;
pub mod pomodoro;
pub mod statusbar;
pub mod streak;
pub mod tasks;
pub mod thread;
pub mod wins;
