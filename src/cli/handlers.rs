use anyhow::{anyhow, Result};
use chrono::{Datelike, Duration, Local, NaiveDate};
use rusqlite::Connection;
use serde::Serialize;
use std::collections::HashSet;
use std::str::FromStr;

use crate::analytics;
use crate::cli::args::{
    GoalCommands, GymCommands, LogCommands, TaskCommands, TemplateCommands, ThreadCommands,
    WinCommands,
};
use crate::config::AppConfig;
use crate::db::migrations::DEFAULT_TEMPLATE;
use crate::db::repository::{
    FocusRepo, GoalRepo, GymRepo, LogRepo, TaskRepo, TemplateRepo, ThreadRepo, WinRepo,
};
use crate::models::{LogKind, Streak};
use crate::utils::format::{format_minutes, month_name, progress_bar};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const TEAL: &str = "\x1b[38;2;90;170;170m";

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn date_str(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

// ─── Tasks ───────────────────────────────────────────────────────────────────

pub fn handle_task(conn: &Connection, config: &AppConfig, action: &TaskCommands) -> Result<()> {
    let today = today();
    let today_str = date_str(today);

    match action {
        TaskCommands::List => {
            let template = TemplateRepo::get(conn)?;
            TaskRepo::ensure_day_rows(conn, &today_str, &template)?;
            let tasks = TaskRepo::get_by_date(conn, &today_str)?;

            let all = TaskRepo::get_all(conn)?;
            let buckets = analytics::bucket_by_day(&all);
            let streak = analytics::compute_streak(
                &buckets,
                today,
                config.tasks.streak_window_days,
                config.tasks.completion_threshold,
            );

            let done = tasks.iter().filter(|t| t.completed).count();
            println!();
            println_colored!(
                TEAL,
                "  Daily Tasks — {}  ({}/{} done · {} day streak)",
                today_str,
                done,
                tasks.len(),
                streak.current
            );
            println!();
            for (i, task) in tasks.iter().enumerate() {
                if task.completed {
                    println_colored!(GREEN, "  {:>2}. ● {}", i + 1, task.task);
                } else {
                    println!("  {:>2}. ○ {}", i + 1, task.task);
                }
            }
            if done == tasks.len() && tasks.len() >= config.tasks.completion_threshold {
                println!();
                println_colored!(GREEN, "  ✓ Streak day!");
            }
            println!();
        }
        TaskCommands::Toggle { number } => {
            let template = TemplateRepo::get(conn)?;
            TaskRepo::ensure_day_rows(conn, &today_str, &template)?;
            let tasks = TaskRepo::get_by_date(conn, &today_str)?;
            let task = tasks
                .get(number.wrapping_sub(1))
                .ok_or_else(|| anyhow!("No task #{} (today has {})", number, tasks.len()))?;
            let id = task.id.ok_or_else(|| anyhow!("Task without id"))?;
            TaskRepo::set_completed(conn, id, !task.completed)?;
            if task.completed {
                println_colored!(DIM, "  ○ {} — unmarked", task.task);
            } else {
                println_colored!(GREEN, "  ✓ {}", task.task);
            }
        }
        TaskCommands::Edit { number, task: label } => {
            let tasks = TaskRepo::get_by_date(conn, &today_str)?;
            let task = tasks
                .get(number.wrapping_sub(1))
                .ok_or_else(|| anyhow!("No task #{} (today has {})", number, tasks.len()))?;
            let id = task.id.ok_or_else(|| anyhow!("Task without id"))?;
            TaskRepo::update_label(conn, id, label)?;
            println_colored!(GREEN, "  ✓ Task {} → {}", number, label);
        }
        TaskCommands::Template { action } => match action {
            None | Some(TemplateCommands::Show) => {
                let template = TemplateRepo::get(conn)?;
                println!();
                println_colored!(TEAL, "  Daily Template");
                println!();
                for (i, task) in template.iter().enumerate() {
                    println!("  {:>2}. {}", i + 1, task);
                }
                println!();
            }
            Some(TemplateCommands::Set { number, task }) => {
                if TemplateRepo::set_entry(conn, number.wrapping_sub(1), task)? {
                    println_colored!(GREEN, "  ✓ Template slot {} → {}", number, task);
                } else {
                    return Err(anyhow!("No template slot #{}", number));
                }
            }
            Some(TemplateCommands::Reset) => {
                let defaults: Vec<String> =
                    DEFAULT_TEMPLATE.iter().map(|s| s.to_string()).collect();
                TemplateRepo::replace(conn, &defaults)?;
                println_colored!(GREEN, "  ✓ Template restored to defaults");
            }
        },
    }
    Ok(())
}

// ─── Goals ───────────────────────────────────────────────────────────────────

pub fn handle_goal(conn: &Connection, action: &GoalCommands) -> Result<()> {
    let now = today();

    match action {
        GoalCommands::Add { goal, month, year } => {
            let month = month.unwrap_or(now.month());
            let year = year.unwrap_or(now.year());
            if !(1..=12).contains(&month) {
                return Err(anyhow!("Month must be 1-12, got {}", month));
            }
            let id = GoalRepo::add(conn, goal, month, year)?;
            println_colored!(
                GREEN,
                "  ✓ Goal #{} added for {} {}",
                id,
                month_name(month),
                year
            );
        }
        GoalCommands::List { month, year } => {
            let month = month.unwrap_or(now.month());
            let year = year.unwrap_or(now.year());
            let goals = GoalRepo::for_month(conn, month, year)?;
            let targets = GoalRepo::targets_all(conn)?;
            let progress = analytics::goal_progress(&goals, &targets, month, year);

            println!();
            println_colored!(
                TEAL,
                "  Goals — {} {}  ({}% complete)",
                month_name(month),
                year,
                progress
            );
            println!();
            if goals.is_empty() {
                println_colored!(DIM, "  No goals for this month yet");
            }
            for goal in &goals {
                println_colored!(BOLD, "  #{} {}", goal.id, goal.goal);
                for target in targets.iter().filter(|t| t.goal_id == goal.id) {
                    if target.completed {
                        println_colored!(GREEN, "     ● [{}] {}", target.id, target.target);
                    } else if target.progress > 0 {
                        println_colored!(
                            AMBER,
                            "     ◑ [{}] {} ({}%)",
                            target.id,
                            target.target,
                            target.progress
                        );
                    } else {
                        println!("     ○ [{}] {}", target.id, target.target);
                    }
                }
            }
            println!();
        }
        GoalCommands::Target { goal_id, target, url } => {
            let id = GoalRepo::add_target(conn, *goal_id, target, url.as_deref())?;
            println_colored!(GREEN, "  ✓ Target [{}] added under goal #{}", id, goal_id);
        }
        GoalCommands::Done { target_id } => {
            GoalRepo::set_target_completed(conn, *target_id, true)?;
            println_colored!(GREEN, "  ✓ Target [{}] completed", target_id);
        }
        GoalCommands::Progress { target_id, percent } => {
            if !(0..=100).contains(percent) {
                return Err(anyhow!("Percent must be 0-100, got {}", percent));
            }
            GoalRepo::set_target_progress(conn, *target_id, *percent)?;
            println_colored!(AMBER, "  ◑ Target [{}] at {}%", target_id, percent);
        }
    }
    Ok(())
}

// ─── Gym ─────────────────────────────────────────────────────────────────────

pub fn handle_gym(conn: &Connection, config: &AppConfig, action: &GymCommands) -> Result<()> {
    let today = today();
    let today_str = date_str(today);

    match action {
        GymCommands::List => {
            let workouts = GymRepo::active_workouts(conn)?;
            let log = GymRepo::log_for_date(conn, &today_str)?;
            let logged: HashSet<i64> = log.iter().map(|e| e.workout_id).collect();

            println!();
            println_colored!(TEAL, "  Gym — {}", today_str);
            println!();
            if workouts.is_empty() {
                println_colored!(DIM, "  No workouts yet — add one with `daygrid gym add`");
            }
            for workout in &workouts {
                let reps = workout.reps.as_deref().unwrap_or("-");
                let tag = if workout.required { "" } else { " (optional)" };
                if logged.contains(&workout.id) {
                    println_colored!(GREEN, "  ● {:<24} {}{}", workout.name, reps, tag);
                } else {
                    println!("  ○ {:<24} {}{}", workout.name, reps, tag);
                }
            }
            println!();
        }
        GymCommands::Add { name, reps, optional } => {
            GymRepo::add_workout(conn, name, reps.as_deref(), !optional)?;
            println_colored!(GREEN, "  ✓ Added workout: {}", name);
        }
        GymCommands::Mark { name, reps } => {
            let workout = GymRepo::find_workout(conn, name)?
                .ok_or_else(|| anyhow!("Workout '{}' not found", name))?;
            GymRepo::mark(conn, workout.id, &today_str, *reps)?;
            println_colored!(GREEN, "  ✓ {} logged for today", workout.name);
        }
        GymCommands::History => {
            let streak = gym_streak(conn, today, config.tasks.streak_window_days)?;
            let dates = GymRepo::completed_dates(conn)?;
            println!();
            println_colored!(
                TEAL,
                "  Gym streak: {} days current  |  {} days longest",
                streak.current,
                streak.longest
            );
            println!();
            for date in dates.iter().rev().take(10) {
                println_colored!(DIM, "  ● {}", date);
            }
            println!();
        }
    }
    Ok(())
}

/// The gym shares the task streak walk; its completed-day set comes from the
/// workout log instead of a task-count threshold.
pub fn gym_streak(conn: &Connection, today: NaiveDate, window_days: u32) -> Result<Streak> {
    let days: HashSet<NaiveDate> = GymRepo::completed_dates(conn)?
        .iter()
        .filter_map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
        .collect();
    Ok(analytics::streak_from_days(&days, today, window_days))
}

// ─── Daily wins ──────────────────────────────────────────────────────────────

pub fn handle_win(conn: &Connection, action: &WinCommands) -> Result<()> {
    let today_str = date_str(today());
    WinRepo::ensure_day_rows(conn, &today_str)?;

    match action {
        WinCommands::List => {
            let wins = WinRepo::get_by_date(conn, &today_str)?;
            println!();
            println_colored!(TEAL, "  Wins — {}", today_str);
            println!();
            for win in &wins {
                if win.win.is_empty() {
                    println_colored!(DIM, "  {}. ○ (empty)", win.slot + 1);
                } else if win.completed {
                    println_colored!(GREEN, "  {}. ● {}", win.slot + 1, win.win);
                } else {
                    println!("  {}. ○ {}", win.slot + 1, win.win);
                }
            }
            println!();
        }
        WinCommands::Set { number, win } => {
            let slot = win_slot(*number)?;
            WinRepo::set_text(conn, &today_str, slot, win)?;
            println_colored!(GREEN, "  ✓ Win {} → {}", number, win);
        }
        WinCommands::Done { number } => {
            let slot = win_slot(*number)?;
            let wins = WinRepo::get_by_date(conn, &today_str)?;
            let current = wins.iter().find(|w| w.slot == slot).map_or(false, |w| w.completed);
            WinRepo::set_completed(conn, &today_str, slot, !current)?;
            if current {
                println_colored!(DIM, "  ○ Win {} unmarked", number);
            } else {
                println_colored!(GREEN, "  ✓ Win {} done", number);
            }
        }
    }
    Ok(())
}

fn win_slot(number: usize) -> Result<usize> {
    if !(1..=WinRepo::SLOTS).contains(&number) {
        return Err(anyhow!("Win slot must be 1-{}, got {}", WinRepo::SLOTS, number));
    }
    Ok(number - 1)
}

// ─── Weekly thread ───────────────────────────────────────────────────────────

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub fn handle_thread(conn: &Connection, action: &ThreadCommands) -> Result<()> {
    let today = today();

    match action {
        ThreadCommands::List => {
            let days = ThreadRepo::week_days(conn, today)?;
            let today_idx = today.weekday().num_days_from_sunday() as usize;
            println!();
            println_colored!(TEAL, "  Weekly thread");
            println!();
            print!("  ");
            for i in 0..days.len() {
                let abbr = &WEEKDAYS[i][..2];
                if i == today_idx {
                    print!("{}{}{}", BOLD, TEAL, abbr);
                } else {
                    print!("{}{}", DIM, abbr);
                }
                print!("\x1b[0m ");
            }
            println!();
            print!("  ");
            for done in &days {
                if *done {
                    print!("{}●\x1b[0m  ", GREEN);
                } else {
                    print!("{}○\x1b[0m  ", DIM);
                }
            }
            println!();
            println!();
        }
        ThreadCommands::Mark { day } => {
            let idx = match day {
                Some(name) => parse_weekday(name)?,
                None => today.weekday().num_days_from_sunday(),
            };
            let done = ThreadRepo::toggle(conn, idx, today)?;
            if done {
                println_colored!(GREEN, "  ✓ {} threaded", WEEKDAYS[idx as usize]);
            } else {
                println_colored!(DIM, "  ○ {} unmarked", WEEKDAYS[idx as usize]);
            }
        }
    }
    Ok(())
}

fn parse_weekday(name: &str) -> Result<u32> {
    let lower = name.to_lowercase();
    if lower.len() < 2 {
        return Err(anyhow!("Weekday needs at least two letters, got '{}'", name));
    }
    WEEKDAYS
        .iter()
        .position(|d| d.to_lowercase().starts_with(&lower))
        .map(|i| i as u32)
        .ok_or_else(|| anyhow!("Unknown weekday: {}", name))
}

// ─── Logs ────────────────────────────────────────────────────────────────────

pub fn handle_log(conn: &Connection, config: &AppConfig, action: &LogCommands) -> Result<()> {
    match action {
        LogCommands::Thought { text } => {
            LogRepo::add(conn, LogKind::Thought, text)?;
            println_colored!(GREEN, "  ✓ Thought logged");
        }
        LogCommands::Airdrop { text } => {
            LogRepo::add(conn, LogKind::Airdrop, text)?;
            println_colored!(GREEN, "  ✓ Airdrop logged");
        }
        LogCommands::List { kind, limit } => {
            let kind = match kind {
                Some(s) => Some(LogKind::from_str(s)?),
                None => None,
            };
            let limit = limit.unwrap_or(config.logs.list_limit);
            let entries = LogRepo::recent(conn, kind, limit)?;
            println!();
            if entries.is_empty() {
                println_colored!(DIM, "  No log entries yet");
            }
            for entry in &entries {
                println!(
                    "  {}[{}]\x1b[0m {}  {}{}\x1b[0m",
                    AMBER,
                    entry.kind.display_name(),
                    entry.body,
                    DIM,
                    entry.created_at
                );
            }
            println!();
        }
    }
    Ok(())
}

// ─── Focus ───────────────────────────────────────────────────────────────────

pub fn handle_focus(conn: &Connection, minutes: u32) -> Result<()> {
    let today_str = date_str(today());
    FocusRepo::add_minutes(conn, &today_str, minutes as i64)?;
    let total = FocusRepo::get_today(conn, &today_str)?;
    println_colored!(
        GREEN,
        "  ✓ Logged {} — today's focus: {}",
        format_minutes(minutes as i64),
        format_minutes(total)
    );
    Ok(())
}

// ─── Stats ───────────────────────────────────────────────────────────────────

pub fn handle_stats(conn: &Connection, config: &AppConfig, week: bool) -> Result<()> {
    let today = today();
    let today_str = date_str(today);
    let week_start = date_str(today - Duration::days(6));
    let threshold = config.tasks.completion_threshold;
    let window = config.tasks.streak_window_days;

    let all = TaskRepo::get_all(conn)?;
    let buckets = analytics::bucket_by_day(&all);
    let streak = analytics::compute_streak(&buckets, today, window, threshold);
    let weekly_rate = analytics::window_rate(&buckets, today, 7, threshold);
    let overall = analytics::overall_rate(&buckets, threshold);

    let goals = GoalRepo::all(conn)?;
    let targets = GoalRepo::targets_all(conn)?;
    let goal_pct = analytics::goal_progress(&goals, &targets, today.month(), today.year());

    let gym = gym_streak(conn, today, window)?;
    let focus_today = FocusRepo::get_today(conn, &today_str)?;
    let focus_week = FocusRepo::range_total(conn, &week_start, &today_str)?;

    println!();
    println_colored!(TEAL, "  Statistics — {}", today_str);
    println!();
    let streak_color = if streak.current > 0 { BOLD } else { RED };
    println_colored!(
        streak_color,
        "  Task streak:  {} days current  |  {} days longest",
        streak.current,
        streak.longest
    );
    println!(
        "  Weekly rate:  {}%   {}",
        weekly_rate,
        progress_bar(weekly_rate as u32, 100, 12)
    );
    println!("  Daily avg:    {}%  (all history)", overall);
    println!(
        "  Goals:        {}% of {} {} targets",
        goal_pct,
        month_name(today.month()),
        today.year()
    );
    println_colored!(
        BOLD,
        "  Gym streak:   {} days current  |  {} days longest",
        gym.current,
        gym.longest
    );
    println!(
        "  Focus:        {} today  ·  {} this week",
        format_minutes(focus_today),
        format_minutes(focus_week)
    );

    if week {
        println!();
        println_colored!(DIM, "  Last 7 days  (● = complete, ○ = incomplete)");
        println!();
        print!("  ");
        let done = analytics::completed_days(&buckets, threshold);
        for i in (0..7).rev() {
            let date = today - Duration::days(i);
            if done.contains(&date) {
                print!("{}●\x1b[0m ", GREEN);
            } else {
                print!("{}○\x1b[0m ", DIM);
            }
        }
        println!();
    }

    println!();
    Ok(())
}

// ─── Calendar ────────────────────────────────────────────────────────────────

pub fn handle_calendar(
    conn: &Connection,
    config: &AppConfig,
    month: Option<u32>,
    year: Option<i32>,
) -> Result<()> {
    let today = today();
    let month = month.unwrap_or(today.month());
    let year = year.unwrap_or(today.year());
    if !(1..=12).contains(&month) {
        return Err(anyhow!("Month must be 1-12, got {}", month));
    }

    let all = TaskRepo::get_all(conn)?;
    let buckets = analytics::bucket_by_day(&all);
    let done = analytics::completed_days(&buckets, config.tasks.completion_threshold);
    let cells = analytics::month_grid(&done, year, month, today);

    println!();
    println_colored!(TEAL, "  {} {}", month_name(month), year);
    println!();
    println_colored!(DIM, "  Su Mo Tu We Th Fr Sa");
    print!("  ");
    for (i, cell) in cells.iter().enumerate() {
        if !cell.in_month {
            print!("   ");
        } else if cell.is_today {
            print!("{}{}{:>2}\x1b[0m ", BOLD, TEAL, cell.date.day());
        } else if cell.completed {
            print!("{}{:>2}\x1b[0m ", GREEN, cell.date.day());
        } else {
            print!("{:>2} ", cell.date.day());
        }
        if (i + 1) % 7 == 0 {
            println!();
            print!("  ");
        }
    }
    println!();
    println_colored!(DIM, "  green = completed day · highlighted = today");
    println!();
    Ok(())
}

// ─── Export ──────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct DaySummary {
    date: String,
    done: usize,
    total: usize,
    complete: bool,
}

#[derive(Debug, Serialize)]
struct WeeklySummary {
    date: String,
    task_streak: Streak,
    gym_streak: Streak,
    weekly_rate: u8,
    daily_average: u8,
    goal_progress: u8,
    focus_week_minutes: i64,
    days: Vec<DaySummary>,
}

pub fn handle_export(conn: &Connection, config: &AppConfig, json: bool) -> Result<()> {
    let today = today();
    let today_str = date_str(today);
    let week_start = date_str(today - Duration::days(6));
    let threshold = config.tasks.completion_threshold;
    let window = config.tasks.streak_window_days;

    let all = TaskRepo::get_all(conn)?;
    let buckets = analytics::bucket_by_day(&all);
    let streak = analytics::compute_streak(&buckets, today, window, threshold);
    let goals = GoalRepo::all(conn)?;
    let targets = GoalRepo::targets_all(conn)?;

    let mut days = Vec::new();
    for i in (0..7).rev() {
        let date = today - Duration::days(i);
        let flags = buckets.get(&date).map(Vec::as_slice).unwrap_or(&[]);
        days.push(DaySummary {
            date: date_str(date),
            done: flags.iter().filter(|&&d| d).count(),
            total: flags.len(),
            complete: analytics::is_day_complete(flags, threshold),
        });
    }

    let summary = WeeklySummary {
        date: today_str.clone(),
        task_streak: streak,
        gym_streak: gym_streak(conn, today, window)?,
        weekly_rate: analytics::window_rate(&buckets, today, 7, threshold),
        daily_average: analytics::overall_rate(&buckets, threshold),
        goal_progress: analytics::goal_progress(&goals, &targets, today.month(), today.year()),
        focus_week_minutes: FocusRepo::range_total(conn, &week_start, &today_str)?,
        days,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("# daygrid — Weekly Summary");
    println!("# {}", summary.date);
    println!();
    println!("## Task Completion (last 7 days)");
    for day in &summary.days {
        let mark = if day.complete { "●" } else { "○" };
        println!(
            "  {}  {:>2}/{:<2} {}  {}",
            day.date,
            day.done,
            day.total,
            progress_bar(day.done as u32, day.total.max(1) as u32, 9),
            mark
        );
    }
    println!();
    println!("## Summary");
    println!(
        "  Task streak:  {} days (longest: {})",
        summary.task_streak.current, summary.task_streak.longest
    );
    println!(
        "  Gym streak:   {} days (longest: {})",
        summary.gym_streak.current, summary.gym_streak.longest
    );
    println!("  Weekly rate:  {}%", summary.weekly_rate);
    println!("  Daily avg:    {}%", summary.daily_average);
    println!("  Goals:        {}%", summary.goal_progress);
    println!(
        "  Focus (7d):   {}",
        format_minutes(summary.focus_week_minutes)
    );
    Ok(())
}
