use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use tui_big_text::{BigText, PixelSize};

use crate::tui::theme;
use crate::utils::format::{format_clock, format_minutes};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    remaining_secs: u32,
    active: bool,
    focus_today: i64,
) {
    let block = Block::default()
        .title(Span::styled(" Pomodoro ", theme::teal()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(false))
        .style(theme::surface());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(1)])
        .split(inner);

    let clock_style = if active { theme::green() } else { theme::dim() };
    let clock = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(clock_style)
        .lines(vec![format_clock(remaining_secs).into()])
        .alignment(Alignment::Center)
        .build();
    frame.render_widget(clock, chunks[0]);

    let state = if active { "[p] pause" } else { "[p] start" };
    let hint = Line::from(vec![
        Span::styled(format!("  {}  ·  [P] reset  ·  ", state), theme::dim()),
        Span::styled(format_minutes(focus_today), theme::amber()),
        Span::styled(" focused today", theme::dim()),
    ]);
    frame.render_widget(Paragraph::new(hint).alignment(Alignment::Center), chunks[1]);
}
