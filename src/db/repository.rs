use chrono::{Datelike, NaiveDate};
use rusqlite::{params, Connection, OptionalExtension};
use std::str::FromStr;

use crate::db::{StoreError, StoreResult};
use crate::models::{
    DailyTask, DailyWin, GoalTarget, LogEntry, LogKind, MonthlyGoal, Workout, WorkoutEntry,
};

// ─── Daily tasks ─────────────────────────────────────────────────────────────

pub struct TaskRepo;

impl TaskRepo {
    /// Seed today's checklist from the template if the day has no rows yet.
    pub fn ensure_day_rows(conn: &Connection, date: &str, template: &[String]) -> StoreResult<()> {
        let existing: i64 = conn.query_row(
            "SELECT COUNT(*) FROM daily_tasks WHERE date = ?1",
            params![date],
            |row| row.get(0),
        )?;
        if existing > 0 {
            return Ok(());
        }
        for task in template {
            conn.execute(
                "INSERT INTO daily_tasks (task, date, completed) VALUES (?1, ?2, 0)",
                params![task, date],
            )?;
        }
        Ok(())
    }

    pub fn get_by_date(conn: &Connection, date: &str) -> StoreResult<Vec<DailyTask>> {
        let mut stmt = conn.prepare(
            "SELECT id, task, date, completed FROM daily_tasks
             WHERE date = ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![date], |row| {
            Ok(DailyTask {
                id: Some(row.get::<_, i64>(0)?),
                task: row.get(1)?,
                date: row.get(2)?,
                completed: row.get::<_, i32>(3)? != 0,
            })
        })?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(StoreError::from)
    }

    /// Full history, the input for streak/rate calculations. Callers must
    /// feed the complete set; a partial read silently skews the numbers.
    pub fn get_all(conn: &Connection) -> StoreResult<Vec<DailyTask>> {
        let mut stmt = conn.prepare(
            "SELECT id, task, date, completed FROM daily_tasks ORDER BY date, id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(DailyTask {
                id: Some(row.get::<_, i64>(0)?),
                task: row.get(1)?,
                date: row.get(2)?,
                completed: row.get::<_, i32>(3)? != 0,
            })
        })?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(StoreError::from)
    }

    pub fn set_completed(conn: &Connection, id: i64, completed: bool) -> StoreResult<()> {
        conn.execute(
            "UPDATE daily_tasks SET completed = ?1 WHERE id = ?2",
            params![completed as i32, id],
        )?;
        Ok(())
    }

    pub fn update_label(conn: &Connection, id: i64, task: &str) -> StoreResult<()> {
        conn.execute(
            "UPDATE daily_tasks SET task = ?1 WHERE id = ?2",
            params![task, id],
        )?;
        Ok(())
    }
}

// ─── Task template ───────────────────────────────────────────────────────────

pub struct TemplateRepo;

impl TemplateRepo {
    pub fn get(conn: &Connection) -> StoreResult<Vec<String>> {
        let mut stmt =
            conn.prepare("SELECT task FROM task_templates ORDER BY sort_order, id")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(StoreError::from)
    }

    pub fn set_entry(conn: &Connection, index: usize, task: &str) -> StoreResult<bool> {
        let changed = conn.execute(
            "UPDATE task_templates SET task = ?1 WHERE sort_order = ?2",
            params![task, index as i64],
        )?;
        Ok(changed > 0)
    }

    pub fn replace(conn: &Connection, tasks: &[String]) -> StoreResult<()> {
        conn.execute("DELETE FROM task_templates", [])?;
        for (order, task) in tasks.iter().enumerate() {
            conn.execute(
                "INSERT INTO task_templates (sort_order, task) VALUES (?1, ?2)",
                params![order as i64, task],
            )?;
        }
        Ok(())
    }
}

// ─── Monthly goals ───────────────────────────────────────────────────────────

pub struct GoalRepo;

impl GoalRepo {
    pub fn add(conn: &Connection, goal: &str, month: u32, year: i32) -> StoreResult<i64> {
        conn.execute(
            "INSERT INTO monthly_goals (goal, month, year) VALUES (?1, ?2, ?3)",
            params![goal, month, year],
        )?;
        Ok(conn.last_insert_rowid())
    }

    pub fn all(conn: &Connection) -> StoreResult<Vec<MonthlyGoal>> {
        let mut stmt =
            conn.prepare("SELECT id, goal, month, year FROM monthly_goals ORDER BY year, month, id")?;
        let rows = stmt.query_map([], |row| {
            Ok(MonthlyGoal {
                id: row.get(0)?,
                goal: row.get(1)?,
                month: row.get::<_, i64>(2)? as u32,
                year: row.get::<_, i64>(3)? as i32,
            })
        })?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(StoreError::from)
    }

    pub fn for_month(conn: &Connection, month: u32, year: i32) -> StoreResult<Vec<MonthlyGoal>> {
        let mut stmt = conn.prepare(
            "SELECT id, goal, month, year FROM monthly_goals
             WHERE month = ?1 AND year = ?2 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![month, year], |row| {
            Ok(MonthlyGoal {
                id: row.get(0)?,
                goal: row.get(1)?,
                month: row.get::<_, i64>(2)? as u32,
                year: row.get::<_, i64>(3)? as i32,
            })
        })?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(StoreError::from)
    }

    pub fn add_target(
        conn: &Connection,
        goal_id: i64,
        target: &str,
        resource_url: Option<&str>,
    ) -> StoreResult<i64> {
        conn.execute(
            "INSERT INTO monthly_goal_targets (goal_id, target, completed, progress, resource_url)
             VALUES (?1, ?2, 0, 0, ?3)",
            params![goal_id, target, resource_url],
        )?;
        Ok(conn.last_insert_rowid())
    }

    pub fn targets_all(conn: &Connection) -> StoreResult<Vec<GoalTarget>> {
        let mut stmt = conn.prepare(
            "SELECT id, goal_id, target, completed, progress, resource_url
             FROM monthly_goal_targets ORDER BY goal_id, id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(GoalTarget {
                id: row.get(0)?,
                goal_id: row.get(1)?,
                target: row.get(2)?,
                completed: row.get::<_, i32>(3)? != 0,
                progress: row.get(4)?,
                resource_url: row.get(5)?,
            })
        })?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(StoreError::from)
    }

    pub fn set_target_completed(conn: &Connection, id: i64, completed: bool) -> StoreResult<()> {
        let progress = if completed { 100 } else { 0 };
        conn.execute(
            "UPDATE monthly_goal_targets SET completed = ?1, progress = ?2 WHERE id = ?3",
            params![completed as i32, progress, id],
        )?;
        Ok(())
    }

    pub fn set_target_progress(conn: &Connection, id: i64, progress: i32) -> StoreResult<()> {
        conn.execute(
            "UPDATE monthly_goal_targets SET progress = ?1, completed = (?1 >= 100) WHERE id = ?2",
            params![progress, id],
        )?;
        Ok(())
    }
}

// ─── Gym ─────────────────────────────────────────────────────────────────────

pub struct GymRepo;

impl GymRepo {
    pub fn active_workouts(conn: &Connection) -> StoreResult<Vec<Workout>> {
        let mut stmt = conn.prepare(
            "SELECT id, name, reps, required, active FROM workouts
             WHERE active = 1 ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Workout {
                id: row.get(0)?,
                name: row.get(1)?,
                reps: row.get(2)?,
                required: row.get::<_, i32>(3)? != 0,
                active: row.get::<_, i32>(4)? != 0,
            })
        })?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(StoreError::from)
    }

    pub fn add_workout(
        conn: &Connection,
        name: &str,
        reps: Option<&str>,
        required: bool,
    ) -> StoreResult<()> {
        conn.execute(
            "INSERT INTO workouts (name, reps, required, active) VALUES (?1, ?2, ?3, 1)",
            params![name, reps, required as i32],
        )?;
        Ok(())
    }

    pub fn find_workout(conn: &Connection, name: &str) -> StoreResult<Option<Workout>> {
        let workouts = Self::active_workouts(conn)?;
        Ok(workouts
            .into_iter()
            .find(|w| w.name.to_lowercase() == name.to_lowercase()))
    }

    pub fn log_for_date(conn: &Connection, date: &str) -> StoreResult<Vec<WorkoutEntry>> {
        let mut stmt = conn.prepare(
            "SELECT id, workout_id, date, reps_completed FROM workout_log WHERE date = ?1",
        )?;
        let rows = stmt.query_map(params![date], |row| {
            Ok(WorkoutEntry {
                id: Some(row.get::<_, i64>(0)?),
                workout_id: row.get(1)?,
                date: row.get(2)?,
                reps_completed: row.get(3)?,
            })
        })?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(StoreError::from)
    }

    pub fn mark(
        conn: &Connection,
        workout_id: i64,
        date: &str,
        reps_completed: Option<i32>,
    ) -> StoreResult<()> {
        conn.execute(
            "INSERT INTO workout_log (workout_id, date, reps_completed)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(workout_id, date) DO UPDATE SET reps_completed = ?3",
            params![workout_id, date, reps_completed],
        )?;
        Ok(())
    }

    /// Dates on which every required active workout has a log row. These are
    /// the gym's "completed days" for the streak walk.
    pub fn completed_dates(conn: &Connection) -> StoreResult<Vec<String>> {
        let mut stmt = conn.prepare(
            "SELECT l.date FROM workout_log l
             JOIN workouts w ON w.id = l.workout_id AND w.required = 1 AND w.active = 1
             GROUP BY l.date
             HAVING COUNT(DISTINCT l.workout_id) =
                    (SELECT COUNT(*) FROM workouts WHERE required = 1 AND active = 1)
             ORDER BY l.date",
        )?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(StoreError::from)
    }
}

// ─── Daily wins ──────────────────────────────────────────────────────────────

pub struct WinRepo;

impl WinRepo {
    pub const SLOTS: usize = 3;

    /// Seed the fixed three slots for a day. Existing rows are left alone.
    pub fn ensure_day_rows(conn: &Connection, date: &str) -> StoreResult<()> {
        for slot in 0..Self::SLOTS {
            conn.execute(
                "INSERT OR IGNORE INTO daily_wins (date, slot) VALUES (?1, ?2)",
                params![date, slot as i64],
            )?;
        }
        Ok(())
    }

    pub fn get_by_date(conn: &Connection, date: &str) -> StoreResult<Vec<DailyWin>> {
        let mut stmt = conn.prepare(
            "SELECT id, date, slot, win, completed FROM daily_wins
             WHERE date = ?1 ORDER BY slot",
        )?;
        let rows = stmt.query_map(params![date], |row| {
            Ok(DailyWin {
                id: row.get(0)?,
                date: row.get(1)?,
                slot: row.get::<_, i64>(2)? as usize,
                win: row.get(3)?,
                completed: row.get::<_, i32>(4)? != 0,
            })
        })?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(StoreError::from)
    }

    pub fn set_text(conn: &Connection, date: &str, slot: usize, win: &str) -> StoreResult<bool> {
        let changed = conn.execute(
            "UPDATE daily_wins SET win = ?1 WHERE date = ?2 AND slot = ?3",
            params![win, date, slot as i64],
        )?;
        Ok(changed > 0)
    }

    pub fn set_completed(
        conn: &Connection,
        date: &str,
        slot: usize,
        completed: bool,
    ) -> StoreResult<bool> {
        let changed = conn.execute(
            "UPDATE daily_wins SET completed = ?1 WHERE date = ?2 AND slot = ?3",
            params![completed as i32, date, slot as i64],
        )?;
        Ok(changed > 0)
    }
}

// ─── Weekly thread ───────────────────────────────────────────────────────────

pub struct ThreadRepo;

impl ThreadRepo {
    fn week_stamp(today: NaiveDate) -> String {
        let iso = today.iso_week();
        format!("{}-W{:02}", iso.year(), iso.week())
    }

    /// Per-weekday completion flags (0 = Sunday). Rows stamped with an
    /// earlier ISO week are reset before reading, so a new week always
    /// starts blank.
    pub fn week_days(conn: &Connection, today: NaiveDate) -> StoreResult<[bool; 7]> {
        let week = Self::week_stamp(today);
        conn.execute(
            "UPDATE thread_days SET completed = 0, week = ?1 WHERE week <> ?1",
            params![week],
        )?;

        let mut days = [false; 7];
        let mut stmt = conn.prepare("SELECT day_of_week, completed FROM thread_days")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, i32>(1)? != 0))
        })?;
        for r in rows {
            let (day, done) = r?;
            if (0..7).contains(&day) {
                days[day as usize] = done;
            }
        }
        Ok(days)
    }

    /// Flip one weekday and return its new state.
    pub fn toggle(conn: &Connection, day_of_week: u32, today: NaiveDate) -> StoreResult<bool> {
        let week = Self::week_stamp(today);
        conn.execute(
            "UPDATE thread_days SET completed = 0, week = ?1 WHERE week <> ?1",
            params![week],
        )?;
        conn.execute(
            "INSERT INTO thread_days (day_of_week, completed, week) VALUES (?1, 1, ?2)
             ON CONFLICT(day_of_week) DO UPDATE SET completed = 1 - completed, week = ?2",
            params![day_of_week, week],
        )?;
        conn.query_row(
            "SELECT completed FROM thread_days WHERE day_of_week = ?1",
            params![day_of_week],
            |row| row.get::<_, i32>(0),
        )
        .map(|v| v != 0)
        .map_err(StoreError::from)
    }
}

// ─── Quick logs ──────────────────────────────────────────────────────────────

pub struct LogRepo;

impl LogRepo {
    pub fn add(conn: &Connection, kind: LogKind, body: &str) -> StoreResult<()> {
        conn.execute(
            "INSERT INTO logs (kind, body) VALUES (?1, ?2)",
            params![kind.as_str(), body],
        )?;
        Ok(())
    }

    pub fn recent(
        conn: &Connection,
        kind: Option<LogKind>,
        limit: usize,
    ) -> StoreResult<Vec<LogEntry>> {
        let mut stmt = conn.prepare(
            "SELECT id, kind, body, created_at FROM logs
             WHERE (?1 IS NULL OR kind = ?1)
             ORDER BY created_at DESC, id DESC LIMIT ?2",
        )?;
        let rows = stmt.query_map(
            params![kind.map(|k| k.as_str()), limit as i64],
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                ))
            },
        )?;

        let mut result = Vec::new();
        for r in rows {
            let (id, kind, body, created_at) = r?;
            result.push(LogEntry {
                id,
                kind: LogKind::from_str(&kind).map_err(|e| StoreError::Corrupt {
                    table: "logs",
                    detail: e.to_string(),
                })?,
                body,
                created_at,
            });
        }
        Ok(result)
    }
}

// ─── Focus time ──────────────────────────────────────────────────────────────

pub struct FocusRepo;

impl FocusRepo {
    pub fn add_minutes(conn: &Connection, date: &str, minutes: i64) -> StoreResult<()> {
        conn.execute(
            "INSERT INTO focus_log (date, minutes) VALUES (?1, ?2)
             ON CONFLICT(date) DO UPDATE SET minutes = minutes + ?2",
            params![date, minutes],
        )?;
        Ok(())
    }

    pub fn get_today(conn: &Connection, date: &str) -> StoreResult<i64> {
        conn.query_row(
            "SELECT COALESCE(minutes, 0) FROM focus_log WHERE date = ?1",
            params![date],
            |row| row.get(0),
        )
        .optional()
        .map(|v| v.unwrap_or(0))
        .map_err(StoreError::from)
    }

    pub fn range_total(conn: &Connection, start: &str, end: &str) -> StoreResult<i64> {
        conn.query_row(
            "SELECT COALESCE(SUM(minutes), 0) FROM focus_log WHERE date >= ?1 AND date <= ?2",
            params![start, end],
            |row| row.get(0),
        )
        .map_err(StoreError::from)
    }
}

// ─── App meta ────────────────────────────────────────────────────────────────

pub struct MetaRepo;

impl MetaRepo {
    pub fn get(conn: &Connection, key: &str) -> StoreResult<Option<String>> {
        conn.query_row(
            "SELECT value FROM app_meta WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(StoreError::from)
    }

    pub fn set(conn: &Connection, key: &str, value: &str) -> StoreResult<()> {
        conn.execute(
            "INSERT INTO app_meta (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = ?2",
            params![key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    #[test]
    fn day_rows_seed_once_from_template() {
        let conn = test_conn();
        let template = TemplateRepo::get(&conn).unwrap();
        TaskRepo::ensure_day_rows(&conn, "2025-06-20", &template).unwrap();
        TaskRepo::ensure_day_rows(&conn, "2025-06-20", &template).unwrap();
        let tasks = TaskRepo::get_by_date(&conn, "2025-06-20").unwrap();
        assert_eq!(tasks.len(), 9);
        assert!(tasks.iter().all(|t| !t.completed));
    }

    #[test]
    fn toggling_a_task_persists() {
        let conn = test_conn();
        let template = TemplateRepo::get(&conn).unwrap();
        TaskRepo::ensure_day_rows(&conn, "2025-06-20", &template).unwrap();
        let tasks = TaskRepo::get_by_date(&conn, "2025-06-20").unwrap();
        let id = tasks[0].id.unwrap();
        TaskRepo::set_completed(&conn, id, true).unwrap();
        let tasks = TaskRepo::get_by_date(&conn, "2025-06-20").unwrap();
        assert!(tasks[0].completed);
    }

    #[test]
    fn template_set_entry_rejects_unknown_slot() {
        let conn = test_conn();
        assert!(TemplateRepo::set_entry(&conn, 0, "edited").unwrap());
        assert!(!TemplateRepo::set_entry(&conn, 42, "nope").unwrap());
        assert_eq!(TemplateRepo::get(&conn).unwrap()[0], "edited");
    }

    #[test]
    fn goal_targets_round_trip() {
        let conn = test_conn();
        let goal_id = GoalRepo::add(&conn, "Ship the tracker", 6, 2025).unwrap();
        GoalRepo::add_target(&conn, goal_id, "Write the core", None).unwrap();
        let t2 = GoalRepo::add_target(&conn, goal_id, "Write the docs", Some("https://docs.rs")).unwrap();
        GoalRepo::set_target_completed(&conn, t2, true).unwrap();

        let targets = GoalRepo::targets_all(&conn).unwrap();
        assert_eq!(targets.len(), 2);
        let done = targets.iter().find(|t| t.id == t2).unwrap();
        assert!(done.completed);
        assert_eq!(done.progress, 100);
        assert_eq!(GoalRepo::for_month(&conn, 6, 2025).unwrap().len(), 1);
        assert!(GoalRepo::for_month(&conn, 7, 2025).unwrap().is_empty());
    }

    #[test]
    fn target_progress_completes_at_100() {
        let conn = test_conn();
        let goal_id = GoalRepo::add(&conn, "g", 6, 2025).unwrap();
        let t = GoalRepo::add_target(&conn, goal_id, "t", None).unwrap();
        GoalRepo::set_target_progress(&conn, t, 40).unwrap();
        assert!(!GoalRepo::targets_all(&conn).unwrap()[0].completed);
        GoalRepo::set_target_progress(&conn, t, 100).unwrap();
        assert!(GoalRepo::targets_all(&conn).unwrap()[0].completed);
    }

    #[test]
    fn gym_day_completes_when_all_required_logged() {
        let conn = test_conn();
        GymRepo::add_workout(&conn, "Squats", Some("3x8"), true).unwrap();
        GymRepo::add_workout(&conn, "Bench", Some("3x8"), true).unwrap();
        GymRepo::add_workout(&conn, "Curls", None, false).unwrap();

        let workouts = GymRepo::active_workouts(&conn).unwrap();
        let squats = workouts.iter().find(|w| w.name == "Squats").unwrap().id;
        let bench = workouts.iter().find(|w| w.name == "Bench").unwrap().id;

        GymRepo::mark(&conn, squats, "2025-06-20", Some(24)).unwrap();
        assert!(GymRepo::completed_dates(&conn).unwrap().is_empty());

        GymRepo::mark(&conn, bench, "2025-06-20", None).unwrap();
        assert_eq!(
            GymRepo::completed_dates(&conn).unwrap(),
            vec!["2025-06-20".to_string()]
        );

        // Re-marking is an upsert, not a duplicate
        GymRepo::mark(&conn, bench, "2025-06-20", Some(30)).unwrap();
        assert_eq!(GymRepo::log_for_date(&conn, "2025-06-20").unwrap().len(), 2);
    }

    #[test]
    fn logs_filter_by_kind_and_respect_limit() {
        let conn = test_conn();
        LogRepo::add(&conn, LogKind::Thought, "first").unwrap();
        LogRepo::add(&conn, LogKind::Airdrop, "claimed X").unwrap();
        LogRepo::add(&conn, LogKind::Thought, "second").unwrap();

        let all = LogRepo::recent(&conn, None, 10).unwrap();
        assert_eq!(all.len(), 3);
        let thoughts = LogRepo::recent(&conn, Some(LogKind::Thought), 10).unwrap();
        assert_eq!(thoughts.len(), 2);
        let limited = LogRepo::recent(&conn, None, 1).unwrap();
        assert_eq!(limited.len(), 1);
    }

    #[test]
    fn focus_minutes_accumulate_per_day() {
        let conn = test_conn();
        FocusRepo::add_minutes(&conn, "2025-06-20", 25).unwrap();
        FocusRepo::add_minutes(&conn, "2025-06-20", 10).unwrap();
        FocusRepo::add_minutes(&conn, "2025-06-21", 25).unwrap();
        assert_eq!(FocusRepo::get_today(&conn, "2025-06-20").unwrap(), 35);
        assert_eq!(
            FocusRepo::range_total(&conn, "2025-06-14", "2025-06-21").unwrap(),
            60
        );
        assert_eq!(FocusRepo::get_today(&conn, "2025-06-22").unwrap(), 0);
    }

    #[test]
    fn win_slots_seed_once_and_toggle() {
        let conn = test_conn();
        WinRepo::ensure_day_rows(&conn, "2025-06-20").unwrap();
        WinRepo::ensure_day_rows(&conn, "2025-06-20").unwrap();

        let wins = WinRepo::get_by_date(&conn, "2025-06-20").unwrap();
        assert_eq!(wins.len(), 3);
        assert!(wins.iter().all(|w| w.win.is_empty() && !w.completed));

        assert!(WinRepo::set_text(&conn, "2025-06-20", 0, "Ship the release").unwrap());
        assert!(WinRepo::set_completed(&conn, "2025-06-20", 0, true).unwrap());
        assert!(!WinRepo::set_text(&conn, "2025-06-20", 9, "no such slot").unwrap());

        let wins = WinRepo::get_by_date(&conn, "2025-06-20").unwrap();
        assert_eq!(wins[0].win, "Ship the release");
        assert!(wins[0].completed);
        assert!(!wins[1].completed);
    }

    #[test]
    fn thread_days_reset_on_a_new_iso_week() {
        let conn = test_conn();
        // 2025-06-20 is a Friday in ISO week 25; the next Monday starts week 26
        let friday = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
        let monday = NaiveDate::from_ymd_opt(2025, 6, 23).unwrap();

        assert!(ThreadRepo::toggle(&conn, 5, friday).unwrap());
        assert!(ThreadRepo::toggle(&conn, 2, friday).unwrap());
        let days = ThreadRepo::week_days(&conn, friday).unwrap();
        assert!(days[5] && days[2]);
        assert!(!days[0]);

        // Toggling twice within the week flips back
        assert!(!ThreadRepo::toggle(&conn, 2, friday).unwrap());

        // A read in the following week starts from a blank row
        let days = ThreadRepo::week_days(&conn, monday).unwrap();
        assert_eq!(days, [false; 7]);
    }

    #[test]
    fn meta_upserts() {
        let conn = test_conn();
        MetaRepo::set(&conn, "k", "1").unwrap();
        MetaRepo::set(&conn, "k", "2").unwrap();
        assert_eq!(MetaRepo::get(&conn, "k").unwrap().as_deref(), Some("2"));
        assert_eq!(MetaRepo::get(&conn, "missing").unwrap(), None);
    }
}
