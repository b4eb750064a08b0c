use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::Streak;
use crate::tui::theme;
use crate::utils::format::{format_minutes, progress_bar};

pub struct Summary {
    pub streak: Streak,
    pub weekly_rate: u8,
    pub overall_rate: u8,
    pub goal_progress: u8,
    pub focus_today: i64,
}

pub fn render(frame: &mut Frame, area: Rect, summary: &Summary) {
    let block = Block::default()
        .title(Span::styled(" Analytics ", theme::teal()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(false))
        .style(theme::surface());

    let rate_line = |label: &str, pct: u8| {
        Line::from(vec![
            Span::styled(format!("  {:<12}", label), theme::dim()),
            Span::styled(progress_bar(pct as u32, 100, 10), theme::teal()),
            Span::styled(format!("  {:>3}%", pct), theme::bold()),
        ])
    };

    let text = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Streak      ", theme::dim()),
            Span::styled(
                format!("{} days", summary.streak.current),
                if summary.streak.current > 0 {
                    theme::green().add_modifier(Modifier::BOLD)
                } else {
                    theme::red()
                },
            ),
            Span::styled(
                format!("  (longest {})", summary.streak.longest),
                theme::dim(),
            ),
        ]),
        rate_line("Weekly", summary.weekly_rate),
        rate_line("All-time", summary.overall_rate),
        rate_line("Goals", summary.goal_progress),
        Line::from(vec![
            Span::styled("  Focus       ", theme::dim()),
            Span::styled(format_minutes(summary.focus_today), theme::amber()),
            Span::styled("  today", theme::dim()),
        ]),
    ];

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
