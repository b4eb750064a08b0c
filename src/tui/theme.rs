use ratatui::style::{Color, Modifier, Style};

pub const BG: Color = Color::Rgb(14, 17, 20);
pub const SURFACE: Color = Color::Rgb(21, 26, 30);
pub const BORDER: Color = Color::Rgb(44, 54, 60);
pub const BORDER_FOCUS: Color = Color::Rgb(90, 170, 170);
pub const TEXT: Color = Color::Rgb(208, 216, 220);
pub const TEXT_DIM: Color = Color::Rgb(108, 122, 130);
pub const TEAL: Color = Color::Rgb(90, 170, 170);
pub const GREEN: Color = Color::Rgb(104, 160, 96);
pub const AMBER: Color = Color::Rgb(214, 150, 64);
pub const RED: Color = Color::Rgb(192, 88, 70);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn teal() -> Style {
    Style::default().fg(TEAL)
}

pub fn green() -> Style {
    Style::default().fg(GREEN)
}

pub fn amber() -> Style {
    Style::default().fg(AMBER)
}

pub fn red() -> Style {
    Style::default().fg(RED)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub fn border(focused: bool) -> Style {
    if focused {
        Style::default().fg(BORDER_FOCUS)
    } else {
        Style::default().fg(BORDER)
    }
}
