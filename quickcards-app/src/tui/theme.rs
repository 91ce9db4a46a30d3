use ratatui::style::{Color, Style, Stylize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Title,
    Hint,
    Focused,
    Footer,
    /// The dark-red action buttons (submit, show answer, next).
    Button,
}

pub fn style(role: Role) -> Style {
    let base = Style::default();
    match role {
        Role::Title => base.fg(Color::Cyan).bold(),
        Role::Hint => base.fg(Color::DarkGray),
        Role::Focused => base.fg(Color::Yellow).bold(),
        Role::Footer => base.fg(Color::Gray),
        Role::Button => base.fg(Color::White).bg(Color::Rgb(0x8B, 0x00, 0x00)),
    }
}
