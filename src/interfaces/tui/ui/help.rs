use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::popup;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "CONTROLS",
        &[
            ("Up/Down, Tab", "Move focus"),
            ("Left/Right, -/+", "Change length (6-20)"),
            ("Space, Enter", "Toggle focused option"),
            ("d", "Toggle digits"),
            ("s", "Toggle symbols"),
        ],
    ),
    (
        "PASSWORD",
        &[("r", "Generate a new password"), ("c, y", "Copy to clipboard")],
    ),
    ("OTHER", &[("?", "Show this help"), ("q, Esc", "Quit")]),
];

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let inner_area = Popup::new("Help - Keyboard Shortcuts", popup::HELP).render(frame, area);

    let mut help_text = Vec::new();
    for (title, keys) in SECTIONS {
        help_text.push(Line::from(""));
        help_text.push(Line::from(Span::styled(
            *title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        for (key, desc) in keys.iter() {
            help_text.push(Line::from(vec![
                Span::styled(format!("  {:<18}", key), Style::default().fg(Color::Cyan)),
                Span::styled(*desc, Style::default().fg(Color::White)),
            ]));
        }
    }

    frame.render_widget(Paragraph::new(help_text), inner_area);
}
