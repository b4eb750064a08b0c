use rusqlite::Connection;

use crate::db::repository::MetaRepo;
use crate::db::StoreResult;

pub fn run_migrations(conn: &Connection) -> StoreResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS daily_tasks (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            task        TEXT NOT NULL,
            date        TEXT NOT NULL,
            completed   INTEGER DEFAULT 0,
            created_at  TEXT DEFAULT (datetime('now'))
        );
        CREATE INDEX IF NOT EXISTS idx_daily_tasks_date ON daily_tasks(date);

        CREATE TABLE IF NOT EXISTS task_templates (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            sort_order  INTEGER NOT NULL,
            task        TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS monthly_goals (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            goal        TEXT NOT NULL,
            month       INTEGER NOT NULL,
            year        INTEGER NOT NULL,
            created_at  TEXT DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS monthly_goal_targets (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            goal_id      INTEGER NOT NULL REFERENCES monthly_goals(id),
            target       TEXT NOT NULL,
            completed    INTEGER DEFAULT 0,
            progress     INTEGER DEFAULT 0,
            resource_url TEXT,
            created_at   TEXT DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS workouts (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            name      TEXT NOT NULL UNIQUE,
            reps      TEXT,
            required  INTEGER DEFAULT 1,
            active    INTEGER DEFAULT 1
        );

        CREATE TABLE IF NOT EXISTS workout_log (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            workout_id     INTEGER NOT NULL REFERENCES workouts(id),
            date           TEXT NOT NULL,
            reps_completed INTEGER,
            UNIQUE(workout_id, date)
        );

        CREATE TABLE IF NOT EXISTS daily_wins (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            slot      INTEGER NOT NULL,
            win       TEXT NOT NULL DEFAULT '',
            completed INTEGER DEFAULT 0,
            UNIQUE(date, slot)
        );

        CREATE TABLE IF NOT EXISTS thread_days (
            day_of_week INTEGER PRIMARY KEY,
            completed   INTEGER DEFAULT 0,
            week        TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS logs (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            kind        TEXT NOT NULL CHECK(kind IN ('thought','airdrop')),
            body        TEXT NOT NULL,
            created_at  TEXT DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS focus_log (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            date    TEXT NOT NULL UNIQUE,
            minutes INTEGER DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS app_meta (
            key   TEXT PRIMARY KEY,
            value TEXT
        );
    ",
    )?;

    seed_template(conn)?;
    Ok(())
}

pub const DEFAULT_TEMPLATE: [&str; 9] = [
    "Deep focus block",
    "Airdrop farming",
    "Content creation",
    "Community replies",
    "Leisure (30m games/books)",
    "Debug / practice",
    "Side project",
    "Second farming round + logs",
    "Reflection + plan",
];

/// Seed the nine-slot daily template once. Edits afterwards belong to the
/// user, so the guard is a meta flag rather than a row count.
fn seed_template(conn: &Connection) -> StoreResult<()> {
    if MetaRepo::get(conn, "template_seeded")?.as_deref() == Some("1") {
        return Ok(());
    }

    for (order, task) in DEFAULT_TEMPLATE.iter().enumerate() {
        conn.execute(
            "INSERT INTO task_templates (sort_order, task) VALUES (?1, ?2)",
            rusqlite::params![order as i64, task],
        )?;
    }
    MetaRepo::set(conn, "template_seeded", "1")?;
    log::info!("seeded {} template tasks", DEFAULT_TEMPLATE.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::TemplateRepo;

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();
        assert_eq!(TemplateRepo::get(&conn).unwrap().len(), 9);
    }

    #[test]
    fn template_is_seeded_once_even_after_edits() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        TemplateRepo::replace(&conn, &["only one".to_string()]).unwrap();
        run_migrations(&conn).unwrap();
        assert_eq!(TemplateRepo::get(&conn).unwrap().len(), 1);
    }
}
