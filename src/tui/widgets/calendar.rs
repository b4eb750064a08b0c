use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use std::collections::HashSet;

use crate::analytics;
use crate::tui::theme;
use crate::utils::format::month_name;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    completed: &HashSet<NaiveDate>,
    year: i32,
    month: u32,
    today: NaiveDate,
) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} {} ", month_name(month), year),
            theme::teal(),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(false))
        .style(theme::surface());

    let cells = analytics::month_grid(completed, year, month, today);

    let mut lines = vec![Line::from(Span::styled(
        "   Su Mo Tu We Th Fr Sa",
        theme::dim(),
    ))];

    let mut row: Vec<Span> = vec![Span::styled("  ", theme::dim())];
    for (i, cell) in cells.iter().enumerate() {
        let span = if !cell.in_month {
            Span::styled("   ", theme::dim())
        } else if cell.is_today {
            Span::styled(
                format!(" {:>2}", cell.date.day()),
                theme::teal().add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
        } else if cell.completed {
            Span::styled(
                format!(" {:>2}", cell.date.day()),
                theme::green().add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" {:>2}", cell.date.day()), theme::bold())
        };
        row.push(span);

        if (i + 1) % 7 == 0 {
            lines.push(Line::from(std::mem::take(&mut row)));
            row.push(Span::styled("  ", theme::dim()));
        }
    }
    if row.len() > 1 {
        lines.push(Line::from(row));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
