use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::tui::theme;

const ABBREVS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

pub fn render(frame: &mut Frame, area: Rect, days: &[bool; 7], today: NaiveDate) {
    let block = Block::default()
        .title(Span::styled(" Thread ", theme::teal()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(false))
        .style(theme::surface());

    let today_idx = today.weekday().num_days_from_sunday() as usize;

    let mut spans = vec![Span::styled("  ", theme::dim())];
    for (i, done) in days.iter().enumerate() {
        let style = if *done {
            theme::green().add_modifier(Modifier::BOLD)
        } else {
            theme::dim()
        };
        let style = if i == today_idx {
            style.add_modifier(Modifier::UNDERLINED)
        } else {
            style
        };
        let mark = if *done { "●" } else { "○" };
        spans.push(Span::styled(format!("{} {}", ABBREVS[i], mark), style));
        spans.push(Span::styled("  ", theme::dim()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
