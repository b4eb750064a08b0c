use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use crate::models::DailyTask;
use crate::tui::theme;
use crate::utils::format::truncate_width;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks: &[DailyTask],
    threshold: usize,
    focus_idx: usize,
    focused: bool,
) {
    let done = tasks.iter().filter(|t| t.completed).count();
    let title = if done == tasks.len() && tasks.len() >= threshold {
        format!(" Tasks {}/{} ✓ ", done, tasks.len())
    } else {
        format!(" Tasks {}/{} ", done, tasks.len())
    };

    let block = Block::default()
        .title(Span::styled(title, theme::teal()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(focused))
        .style(theme::surface());

    let label_width = area.width.saturating_sub(8) as usize;

    let items: Vec<ListItem> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let is_focused = focused && i == focus_idx;

            let (icon, icon_style) = if task.completed {
                ("●", theme::green())
            } else {
                ("○", theme::dim())
            };

            let label_style = if is_focused {
                theme::teal().add_modifier(Modifier::BOLD)
            } else if task.completed {
                theme::dim().add_modifier(Modifier::CROSSED_OUT)
            } else {
                theme::bold()
            };

            let line = Line::from(vec![
                Span::styled(format!("  {} ", icon), icon_style),
                Span::styled(truncate_width(&task.task, label_width), label_style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
