use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use crate::models::{LogEntry, LogKind};
use crate::tui::theme;
use crate::utils::format::truncate_width;

pub fn render(frame: &mut Frame, area: Rect, entries: &[LogEntry]) {
    let block = Block::default()
        .title(Span::styled(" Logs ", theme::teal()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(false))
        .style(theme::surface());

    let body_width = area.width.saturating_sub(14) as usize;

    let items: Vec<ListItem> = if entries.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "  Nothing captured yet — [t] thought · [a] airdrop",
            theme::dim(),
        )))]
    } else {
        entries
            .iter()
            .map(|entry| {
                let tag_style = match entry.kind {
                    LogKind::Thought => theme::teal(),
                    LogKind::Airdrop => theme::amber(),
                };
                let line = Line::from(vec![
                    Span::styled(format!("  {:<8}", entry.kind.display_name()), tag_style),
                    Span::styled(truncate_width(&entry.body, body_width), theme::bold()),
                ]);
                ListItem::new(line)
            })
            .collect()
    };

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
