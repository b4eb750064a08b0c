use chrono::NaiveDate;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::Streak;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, streak: &Streak, today: NaiveDate) {
    let date_str = today.format("%A, %b %d, %Y").to_string();

    let title_line = Line::from(vec![
        Span::styled("  ▦  ", theme::teal().add_modifier(Modifier::BOLD)),
        Span::styled("daygrid", theme::teal().add_modifier(Modifier::BOLD)),
    ]);

    let streak_span = if streak.current > 0 {
        Span::styled(format!("{} day streak", streak.current), theme::green())
    } else {
        Span::styled("no active streak", theme::dim())
    };

    let date_line = Line::from(vec![
        Span::styled(&date_str, theme::dim()),
        Span::styled("  ·  ", theme::dim()),
        streak_span,
    ]);

    let text = vec![title_line, Line::from(""), date_line];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::teal().add_modifier(Modifier::BOLD))
        .style(theme::base());

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn header_shows_the_injected_date_not_the_clock() {
        let mut terminal = Terminal::new(TestBackend::new(60, 5)).unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let streak = Streak {
            current: 4,
            longest: 9,
        };

        terminal
            .draw(|frame| render(frame, frame.area(), &streak, today))
            .unwrap();

        let rendered: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(rendered.contains("Wednesday, Jan 15, 2025"));
        assert!(rendered.contains("4 day streak"));
    }
}
