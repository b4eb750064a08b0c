use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use crate::models::DailyWin;
use crate::tui::theme;
use crate::utils::format::truncate_width;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    wins: &[DailyWin],
    focus_idx: usize,
    focused: bool,
) {
    let done = wins.iter().filter(|w| w.completed).count();
    let block = Block::default()
        .title(Span::styled(
            format!(" Wins {}/{} ", done, wins.len()),
            theme::teal(),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(focused))
        .style(theme::surface());

    let label_width = area.width.saturating_sub(8) as usize;

    let items: Vec<ListItem> = wins
        .iter()
        .enumerate()
        .map(|(i, win)| {
            let is_focused = focused && i == focus_idx;

            let (icon, icon_style) = if win.completed {
                ("●", theme::green())
            } else {
                ("○", theme::dim())
            };

            let (label, label_style) = if win.win.is_empty() {
                (
                    format!("Win {}", win.slot + 1),
                    theme::dim().add_modifier(Modifier::ITALIC),
                )
            } else if is_focused {
                (win.win.clone(), theme::teal().add_modifier(Modifier::BOLD))
            } else if win.completed {
                (win.win.clone(), theme::dim().add_modifier(Modifier::CROSSED_OUT))
            } else {
                (win.win.clone(), theme::bold())
            };

            let line = Line::from(vec![
                Span::styled(format!("  {} ", icon), icon_style),
                Span::styled(truncate_width(&label, label_width), label_style),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
