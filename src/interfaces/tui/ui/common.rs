use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::constants::colors;

/// Draw title bar with version
pub fn draw_title_bar(frame: &mut Frame, area: Rect) {
    let title_text = vec![Line::from(vec![
        Span::styled(
            "Password Generator",
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(colors::MUTED),
        ),
    ])];

    let title = Paragraph::new(title_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::PRIMARY)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, status_style) = if !app.error_message.is_empty() {
        (
            format!("[WARN] {}", app.error_message),
            Style::default()
                .fg(Color::White)
                .bg(colors::ERROR)
                .add_modifier(Modifier::BOLD),
        )
    } else if !app.status_message.is_empty() {
        (
            format!("[OK] {}", app.status_message),
            Style::default()
                .fg(Color::Black)
                .bg(colors::SUCCESS)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("Ready".to_string(), Style::default().fg(colors::PRIMARY))
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Center);

    frame.render_widget(status, area);
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = match app.current_screen {
        CurrentScreen::Main => vec![
            ("Up/Down", "Focus", Color::Cyan),
            ("Left/Right", "Length", Color::Cyan),
            ("Space", "Toggle", Color::Cyan),
            ("r", "Regenerate", Color::Yellow),
            ("c", "Copy", Color::Green),
            ("?", "Help", Color::Blue),
            ("q", "Quit", Color::Magenta),
        ],
        CurrentScreen::Help => vec![("q/Esc", "Close", Color::Red)],
        CurrentScreen::Exiting => vec![("y", "Yes", Color::Green), ("n", "No", Color::Red)],
    };

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(colors::MUTED)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
