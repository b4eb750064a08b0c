use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "daygrid", version, author, about = "A terminal dashboard for daily tasks, monthly goals and streaks")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Today's task checklist
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Monthly goals and their targets
    Goal {
        #[command(subcommand)]
        action: GoalCommands,
    },
    /// Gym workouts and the workout log
    Gym {
        #[command(subcommand)]
        action: GymCommands,
    },
    /// Three wins to aim for today
    Win {
        #[command(subcommand)]
        action: WinCommands,
    },
    /// Weekly thread row: one checkbox per weekday, blank each ISO week
    Thread {
        #[command(subcommand)]
        action: ThreadCommands,
    },
    /// Quick thought/airdrop capture
    Log {
        #[command(subcommand)]
        action: LogCommands,
    },
    /// Record focus minutes for today
    Focus {
        /// Minutes of focused work
        minutes: u32,
    },
    /// Show streaks and completion rates
    Stats {
        /// Show a dot row for the last 7 days
        #[arg(long)]
        week: bool,
    },
    /// Show the month calendar with completed days
    Calendar {
        /// Month 1-12 (defaults to the current month)
        #[arg(long)]
        month: Option<u32>,
        /// Year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
    },
    /// Print a weekly summary to stdout
    Export {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// Show today's checklist (seeds it from the template on first use)
    List,
    /// Toggle a task by its position in the list (1-based)
    Toggle {
        /// Task number as shown by `task list`
        number: usize,
    },
    /// Rename one of today's tasks without touching the template
    Edit {
        /// Task number as shown by `task list`
        number: usize,
        /// New task label
        task: String,
    },
    /// Show or edit the daily template
    Template {
        #[command(subcommand)]
        action: Option<TemplateCommands>,
    },
}

#[derive(Subcommand, Debug)]
pub enum TemplateCommands {
    /// Show the template
    Show,
    /// Replace one template slot (1-based)
    Set {
        /// Slot number
        number: usize,
        /// New task label
        task: String,
    },
    /// Restore the default nine-slot template
    Reset,
}

#[derive(Subcommand, Debug)]
pub enum GoalCommands {
    /// Add a goal for a month (defaults to the current month)
    Add {
        /// Goal description
        goal: String,
        #[arg(long)]
        month: Option<u32>,
        #[arg(long)]
        year: Option<i32>,
    },
    /// List goals and targets for a month with progress
    List {
        #[arg(long)]
        month: Option<u32>,
        #[arg(long)]
        year: Option<i32>,
    },
    /// Add a target under a goal
    Target {
        /// Goal id as shown by `goal list`
        goal_id: i64,
        /// Target description
        target: String,
        /// Optional resource link
        #[arg(long)]
        url: Option<String>,
    },
    /// Mark a target as completed
    Done {
        /// Target id as shown by `goal list`
        target_id: i64,
    },
    /// Set a target's progress percent (100 completes it)
    Progress {
        target_id: i64,
        percent: i32,
    },
}

#[derive(Subcommand, Debug)]
pub enum GymCommands {
    /// Show today's workouts and which are logged
    List,
    /// Add a workout to the plan
    Add {
        /// Workout name
        name: String,
        /// Rep scheme, e.g. "3x12"
        #[arg(long)]
        reps: Option<String>,
        /// Optional workouts don't gate the gym day
        #[arg(long)]
        optional: bool,
    },
    /// Log a workout for today
    Mark {
        /// Workout name
        name: String,
        /// Reps actually completed
        #[arg(long)]
        reps: Option<i32>,
    },
    /// Show the gym streak and recent completed days
    History,
}

#[derive(Subcommand, Debug)]
pub enum WinCommands {
    /// Show today's three win slots
    List,
    /// Set the text of a slot (1-3)
    Set {
        /// Slot number
        number: usize,
        /// What winning today looks like
        win: String,
    },
    /// Toggle a slot's completion (1-3)
    Done {
        /// Slot number
        number: usize,
    },
}

#[derive(Subcommand, Debug)]
pub enum ThreadCommands {
    /// Show this week's row with today highlighted
    List,
    /// Toggle a weekday (defaults to today)
    Mark {
        /// Weekday name, e.g. "mon" or "thursday"
        day: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum LogCommands {
    /// Capture a thought
    Thought {
        text: String,
    },
    /// Capture an airdrop note
    Airdrop {
        text: String,
    },
    /// List recent log entries
    List {
        /// Filter: thought or airdrop
        #[arg(long)]
        kind: Option<String>,
        /// Maximum entries to show
        #[arg(long)]
        limit: Option<usize>,
    },
}
