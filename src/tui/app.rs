use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use rusqlite::Connection;
use std::collections::HashSet;

use crate::analytics;
use crate::cli::handlers::gym_streak;
use crate::config::AppConfig;
use crate::db::repository::{
    FocusRepo, GoalRepo, LogRepo, TaskRepo, TemplateRepo, ThreadRepo, WinRepo,
};
use crate::models::{DailyTask, DailyWin, GoalTarget, LogEntry, LogKind, MonthlyGoal, Streak};
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{
    analytics as analytics_widget, calendar, goals, header, logs, pomodoro, statusbar, streak,
    tasks, thread, wins,
};

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Dashboard,
    Calendar,
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FocusSection {
    Tasks,
    Wins,
    Targets,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    LogInput(LogKind),
}

pub struct App {
    pub view: View,
    pub config: AppConfig,
    pub focus_section: FocusSection,
    pub focus_idx: usize,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub input_buffer: String,

    // Day boundary, fixed per load and refreshed on rollover
    pub today: NaiveDate,
    pub today_str: String,

    // Calendar view cursor
    pub cal_year: i32,
    pub cal_month: u32,

    // Pomodoro countdown (tick-driven, 1s resolution)
    pub pomo_active: bool,
    pub pomo_remaining: u32,
    pub pomo_elapsed: u32,

    // Cached state (refreshed on action)
    pub tasks: Vec<DailyTask>,
    pub wins: Vec<DailyWin>,
    pub thread_days: [bool; 7],
    pub goals: Vec<MonthlyGoal>,
    pub targets: Vec<GoalTarget>,
    pub goal_pct: u8,
    pub streak: Streak,
    pub gym: Streak,
    pub weekly_rate: u8,
    pub overall_rate: u8,
    pub completed: HashSet<NaiveDate>,
    pub logs: Vec<LogEntry>,
    pub focus_today: i64,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let today = Local::now().date_naive();
        let focus_secs = config.pomodoro.focus_minutes * 60;

        App {
            view: View::Dashboard,
            config,
            focus_section: FocusSection::Tasks,
            focus_idx: 0,
            should_quit: false,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            today,
            today_str: today.format("%Y-%m-%d").to_string(),
            cal_year: today.year(),
            cal_month: today.month(),
            pomo_active: false,
            pomo_remaining: focus_secs,
            pomo_elapsed: 0,
            tasks: Vec::new(),
            wins: Vec::new(),
            thread_days: [false; 7],
            goals: Vec::new(),
            targets: Vec::new(),
            goal_pct: 0,
            streak: Streak::default(),
            gym: Streak::default(),
            weekly_rate: 0,
            overall_rate: 0,
            completed: HashSet::new(),
            logs: Vec::new(),
            focus_today: 0,
        }
    }

    pub fn load(&mut self, conn: &Connection) -> Result<()> {
        let threshold = self.config.tasks.completion_threshold;
        let window = self.config.tasks.streak_window_days;

        // Seed today's checklist from the template on first load of the day
        let template = TemplateRepo::get(conn)?;
        TaskRepo::ensure_day_rows(conn, &self.today_str, &template)?;
        self.tasks = TaskRepo::get_by_date(conn, &self.today_str)?;

        WinRepo::ensure_day_rows(conn, &self.today_str)?;
        self.wins = WinRepo::get_by_date(conn, &self.today_str)?;
        self.thread_days = ThreadRepo::week_days(conn, self.today)?;

        let all = TaskRepo::get_all(conn)?;
        let buckets = analytics::bucket_by_day(&all);
        self.streak = analytics::compute_streak(&buckets, self.today, window, threshold);
        self.weekly_rate = analytics::window_rate(&buckets, self.today, 7, threshold);
        self.overall_rate = analytics::overall_rate(&buckets, threshold);
        self.completed = analytics::completed_days(&buckets, threshold);

        self.goals = GoalRepo::for_month(conn, self.today.month(), self.today.year())?;
        self.targets = {
            let goal_ids: HashSet<i64> = self.goals.iter().map(|g| g.id).collect();
            GoalRepo::targets_all(conn)?
                .into_iter()
                .filter(|t| goal_ids.contains(&t.goal_id))
                .collect()
        };
        self.goal_pct = analytics::goal_progress(
            &self.goals,
            &self.targets,
            self.today.month(),
            self.today.year(),
        );

        self.gym = if self.config.gym.enabled {
            gym_streak(conn, self.today, window)?
        } else {
            Streak::default()
        };
        self.logs = LogRepo::recent(conn, None, 6)?;
        self.focus_today = FocusRepo::get_today(conn, &self.today_str)?;

        Ok(())
    }

    pub fn tick(&mut self, conn: &Connection) {
        // Day rollover: re-anchor and reload so the streak walk starts at
        // the right day even if the terminal stayed open overnight
        let now = Local::now().date_naive();
        if now != self.today {
            self.today = now;
            self.today_str = now.format("%Y-%m-%d").to_string();
            self.cal_year = now.year();
            self.cal_month = now.month();
            let _ = self.load(conn);
        }

        if self.pomo_active {
            self.pomo_remaining = self.pomo_remaining.saturating_sub(1);
            self.pomo_elapsed += 1;
            if self.pomo_remaining == 0 {
                self.pomo_active = false;
                self.flush_focus(conn);
                self.pomo_elapsed = 0;
                self.pomo_remaining = self.config.pomodoro.focus_minutes * 60;
            }
        }
    }

    /// Persist the whole minutes accumulated so far; leftover seconds stay
    /// in the counter.
    fn flush_focus(&mut self, conn: &Connection) {
        let minutes = (self.pomo_elapsed / 60) as i64;
        if minutes > 0 {
            let _ = FocusRepo::add_minutes(conn, &self.today_str, minutes);
            self.pomo_elapsed %= 60;
            if let Ok(total) = FocusRepo::get_today(conn, &self.today_str) {
                self.focus_today = total;
            }
        }
    }

    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent, conn: &Connection) {
        match self.input_mode.clone() {
            InputMode::LogInput(kind) => self.handle_log_input(key, kind, conn),
            InputMode::Normal => match self.view {
                View::Dashboard => self.handle_dashboard_key(key, conn),
                View::Calendar => self.handle_calendar_key(key),
                View::Help => self.handle_help_key(key),
            },
        }
    }

    fn handle_dashboard_key(&mut self, key: crossterm::event::KeyEvent, conn: &Connection) {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => {
                self.view = View::Help;
            }
            KeyCode::Char('c') => {
                self.view = View::Calendar;
            }
            KeyCode::Char('t') => {
                self.input_mode = InputMode::LogInput(LogKind::Thought);
                self.input_buffer.clear();
            }
            KeyCode::Char('a') => {
                self.input_mode = InputMode::LogInput(LogKind::Airdrop);
                self.input_buffer.clear();
            }
            KeyCode::Char('w') => {
                let today_idx = self.today.weekday().num_days_from_sunday();
                let _ = ThreadRepo::toggle(conn, today_idx, self.today);
                if let Ok(days) = ThreadRepo::week_days(conn, self.today) {
                    self.thread_days = days;
                }
            }
            KeyCode::Char('p') => {
                self.pomo_active = !self.pomo_active;
                if !self.pomo_active {
                    self.flush_focus(conn);
                }
            }
            KeyCode::Char('P') => {
                self.pomo_active = false;
                self.flush_focus(conn);
                self.pomo_elapsed = 0;
                self.pomo_remaining = self.config.pomodoro.focus_minutes * 60;
            }
            KeyCode::Up => {
                if self.focus_idx > 0 {
                    self.focus_idx -= 1;
                }
            }
            KeyCode::Down => {
                let max = match self.focus_section {
                    FocusSection::Tasks => self.tasks.len().saturating_sub(1),
                    FocusSection::Wins => self.wins.len().saturating_sub(1),
                    FocusSection::Targets => self.targets.len().saturating_sub(1),
                };
                if self.focus_idx < max {
                    self.focus_idx += 1;
                }
            }
            KeyCode::Tab => {
                self.focus_section = match self.focus_section {
                    FocusSection::Tasks => FocusSection::Wins,
                    FocusSection::Wins => FocusSection::Targets,
                    FocusSection::Targets => FocusSection::Tasks,
                };
                self.focus_idx = 0;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.toggle_focused(conn);
            }
            _ => {}
        }
    }

    fn handle_calendar_key(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('c') => {
                self.view = View::Dashboard;
            }
            KeyCode::Left => {
                if self.cal_month == 1 {
                    self.cal_month = 12;
                    self.cal_year -= 1;
                } else {
                    self.cal_month -= 1;
                }
            }
            KeyCode::Right => {
                if self.cal_month == 12 {
                    self.cal_month = 1;
                    self.cal_year += 1;
                } else {
                    self.cal_month += 1;
                }
            }
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') => {
                self.view = View::Dashboard;
            }
            _ => {}
        }
    }

    fn handle_log_input(
        &mut self,
        key: crossterm::event::KeyEvent,
        kind: LogKind,
        conn: &Connection,
    ) {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.input_buffer.clear();
            }
            KeyCode::Enter => {
                let trimmed = self.input_buffer.trim();
                if !trimmed.is_empty() {
                    let _ = LogRepo::add(conn, kind, trimmed);
                    let _ = self.load(conn);
                }
                self.input_mode = InputMode::Normal;
                self.input_buffer.clear();
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
            }
            _ => {}
        }
    }

    fn toggle_focused(&mut self, conn: &Connection) {
        match self.focus_section {
            FocusSection::Tasks => {
                if let Some(task) = self.tasks.get(self.focus_idx) {
                    if let Some(id) = task.id {
                        let _ = TaskRepo::set_completed(conn, id, !task.completed);
                        let _ = self.load(conn);
                    }
                }
            }
            FocusSection::Wins => {
                if let Some(win) = self.wins.get(self.focus_idx) {
                    let _ = WinRepo::set_completed(conn, &win.date, win.slot, !win.completed);
                    let _ = self.load(conn);
                }
            }
            FocusSection::Targets => {
                // Rendered order groups targets under their goals
                let ordered = self.targets_in_render_order();
                if let Some(target) = ordered.get(self.focus_idx) {
                    let _ = GoalRepo::set_target_completed(conn, target.id, !target.completed);
                    let _ = self.load(conn);
                }
            }
        }
    }

    fn targets_in_render_order(&self) -> Vec<GoalTarget> {
        let mut ordered = Vec::new();
        for goal in &self.goals {
            for target in self.targets.iter().filter(|t| t.goal_id == goal.id) {
                ordered.push(target.clone());
            }
        }
        ordered
    }

    pub fn draw(&self, frame: &mut Frame) {
        match self.view {
            View::Dashboard => self.draw_dashboard(frame),
            View::Calendar => self.draw_calendar(frame),
            View::Help => {
                self.draw_dashboard(frame);
                self.draw_help_overlay(frame);
            }
        }

        if let InputMode::LogInput(kind) = &self.input_mode {
            self.draw_log_input(frame, *kind);
        }
    }

    fn draw_dashboard(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let outer_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // header
                Constraint::Min(0),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        header::render(frame, outer_chunks[0], &self.streak, self.today);
        statusbar::render(frame, outer_chunks[2]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(outer_chunks[1]);

        // Left column: tasks + wins + thread + goals
        let left_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(self.tasks.len() as u16 + 2),
                Constraint::Length(self.wins.len() as u16 + 2),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(columns[0]);

        tasks::render(
            frame,
            left_chunks[0],
            &self.tasks,
            self.config.tasks.completion_threshold,
            self.focus_idx,
            self.focus_section == FocusSection::Tasks,
        );
        wins::render(
            frame,
            left_chunks[1],
            &self.wins,
            self.focus_idx,
            self.focus_section == FocusSection::Wins,
        );
        thread::render(frame, left_chunks[2], &self.thread_days, self.today);
        goals::render(
            frame,
            left_chunks[3],
            &self.goals,
            &self.targets,
            self.goal_pct,
            self.focus_idx,
            self.focus_section == FocusSection::Targets,
        );

        // Right column: streak + calendar + analytics + pomodoro + logs
        let right_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8),
                Constraint::Length(9),
                Constraint::Length(8),
                Constraint::Length(7),
                Constraint::Min(0),
            ])
            .split(columns[1]);

        streak::render(
            frame,
            right_chunks[0],
            &self.streak,
            &self.gym,
            &self.completed,
            self.today,
        );
        calendar::render(
            frame,
            right_chunks[1],
            &self.completed,
            self.today.year(),
            self.today.month(),
            self.today,
        );
        analytics_widget::render(
            frame,
            right_chunks[2],
            &analytics_widget::Summary {
                streak: self.streak,
                weekly_rate: self.weekly_rate,
                overall_rate: self.overall_rate,
                goal_progress: self.goal_pct,
                focus_today: self.focus_today,
            },
        );
        pomodoro::render(
            frame,
            right_chunks[3],
            self.pomo_remaining,
            self.pomo_active,
            self.focus_today,
        );
        logs::render(frame, right_chunks[4], &self.logs);
    }

    fn draw_calendar(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "  Calendar  ",
                theme::teal().add_modifier(Modifier::BOLD),
            ),
            Span::styled("  [← →] month  ·  [Esc] back", theme::dim()),
        ]));
        frame.render_widget(title, chunks[0]);

        // Center the grid
        let grid_area = Rect {
            x: chunks[1].x + chunks[1].width.saturating_sub(28) / 2,
            y: chunks[1].y,
            width: 28.min(chunks[1].width),
            height: 10.min(chunks[1].height),
        };
        calendar::render(
            frame,
            grid_area,
            &self.completed,
            self.cal_year,
            self.cal_month,
            self.today,
        );

        let legend = Paragraph::new(Line::from(Span::styled(
            "green = completed day · inverted = today",
            theme::dim(),
        )))
        .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(legend, chunks[2]);
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();
        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 4,
            width: area.width / 2,
            height: area.height / 2,
        };

        frame.render_widget(Clear, popup_area);

        let entry = |key: &str, label: &str| {
            Line::from(vec![
                Span::styled(format!("  {:<13}", key), theme::teal()),
                Span::styled(label.to_string(), theme::dim()),
            ])
        };

        let help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                theme::teal().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            entry("[Space]/Enter", "Toggle focused task, win or target"),
            entry("[Tab]", "Cycle tasks / wins / targets"),
            entry("[↑ ↓]", "Navigate items"),
            entry("[t]", "Log a thought"),
            entry("[a]", "Log an airdrop note"),
            entry("[w]", "Thread today's weekday"),
            entry("[p]", "Start / pause pomodoro"),
            entry("[P]", "Reset pomodoro"),
            entry("[c]", "Calendar view"),
            entry("[?]", "Toggle help"),
            entry("[Esc]", "Quit"),
        ];

        let block = Block::default()
            .title(Span::styled(" Help ", theme::teal()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::teal())
            .style(theme::surface());

        let paragraph = Paragraph::new(help_text).block(block);
        frame.render_widget(paragraph, popup_area);
    }

    fn draw_log_input(&self, frame: &mut Frame, kind: LogKind) {
        let area = frame.area();
        let popup_area = Rect {
            x: area.width / 6,
            y: (area.height / 2).saturating_sub(3),
            width: area.width * 2 / 3,
            height: 5.min(area.height),
        };

        frame.render_widget(Clear, popup_area);

        let text = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  > ", theme::dim()),
                Span::styled(
                    self.input_buffer.as_str(),
                    theme::teal().add_modifier(Modifier::BOLD),
                ),
                Span::styled("█", theme::amber()), // block cursor
            ]),
            Line::from(Span::styled(
                "  [Enter] save  ·  [Esc] cancel",
                theme::dim(),
            )),
        ];

        let block = Block::default()
            .title(Span::styled(
                format!(" Log {} ", kind.display_name()),
                theme::teal(),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::amber())
            .style(theme::surface());

        let paragraph = Paragraph::new(text).block(block);
        frame.render_widget(paragraph, popup_area);
    }
}

/// Run the TUI event loop.
pub fn run(conn: Connection, config: AppConfig) -> Result<()> {
    let mut app = App::new(config);
    app.load(&conn)?;

    let mut terminal = ratatui::init();
    // 1s tick drives the pomodoro countdown
    let events = EventHandler::new(1000);

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        match events.next()? {
            Event::Key(key) => {
                app.handle_key(key, &conn);
                if app.should_quit {
                    break;
                }
            }
            Event::Tick => {
                app.tick(&conn);
            }
        }
    }

    ratatui::restore();
    Ok(())
}
