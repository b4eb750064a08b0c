use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use crate::models::{GoalTarget, MonthlyGoal};
use crate::tui::theme;
use crate::utils::format::truncate_width;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    goals: &[MonthlyGoal],
    targets: &[GoalTarget],
    progress_pct: u8,
    focus_idx: usize,
    focused: bool,
) {
    let block = Block::default()
        .title(Span::styled(
            format!(" Goals {}% ", progress_pct),
            theme::teal(),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(focused))
        .style(theme::surface());

    let label_width = area.width.saturating_sub(10) as usize;
    let mut items: Vec<ListItem> = Vec::new();
    let mut target_row = 0usize;

    for goal in goals {
        items.push(ListItem::new(Line::from(Span::styled(
            format!("  {}", truncate_width(&goal.goal, label_width)),
            theme::amber().add_modifier(Modifier::BOLD),
        ))));

        for target in targets.iter().filter(|t| t.goal_id == goal.id) {
            let is_focused = focused && target_row == focus_idx;
            target_row += 1;

            let (icon, icon_style) = if target.completed {
                ("●", theme::green())
            } else if target.progress > 0 {
                ("◑", theme::amber())
            } else {
                ("○", theme::dim())
            };

            let label_style = if is_focused {
                theme::teal().add_modifier(Modifier::BOLD)
            } else if target.completed {
                theme::dim()
            } else {
                theme::bold()
            };

            items.push(ListItem::new(Line::from(vec![
                Span::styled(format!("    {} ", icon), icon_style),
                Span::styled(truncate_width(&target.target, label_width), label_style),
            ])));
        }
    }

    if items.is_empty() {
        items.push(ListItem::new(Line::from(Span::styled(
            "  No goals this month",
            theme::dim(),
        ))));
    }

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
