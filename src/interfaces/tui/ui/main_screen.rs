use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
};

use crate::generator::{MAX_LENGTH, MIN_LENGTH};
use crate::interfaces::tui::app::{App, Focus};
use crate::interfaces::tui::constants::colors;

pub fn draw_main_screen(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Password field
            Constraint::Length(3), // Length slider
            Constraint::Length(4), // Options
            Constraint::Min(0),
        ])
        .split(area);

    draw_password_field(frame, app, chunks[0]);
    draw_length_slider(frame, app, chunks[1]);
    draw_options(frame, app, chunks[2]);
}

fn draw_password_field(frame: &mut Frame, app: &App, area: Rect) {
    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(14)])
        .split(area);

    let password = Paragraph::new(Line::from(Span::styled(
        app.session.password(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .title("Password")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors::PRIMARY)),
    );
    frame.render_widget(password, row[0]);

    let readout = Paragraph::new(format!("{} chars", app.session.password_len()))
        .style(Style::default().fg(colors::WARNING))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::MUTED)),
        );
    frame.render_widget(readout, row[1]);
}

fn draw_length_slider(frame: &mut Frame, app: &App, area: Rect) {
    let length = app.session.config().length;
    let ratio = (length - MIN_LENGTH) as f64 / (MAX_LENGTH - MIN_LENGTH) as f64;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!("Length ({}-{})", MIN_LENGTH, MAX_LENGTH))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(focus_style(app.focus == Focus::Length)),
        )
        .gauge_style(Style::default().fg(colors::PRIMARY).bg(Color::Black))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("Length : {}", length));

    frame.render_widget(gauge, area);
}

fn draw_options(frame: &mut Frame, app: &App, area: Rect) {
    let config = app.session.config();
    let alphabet_len = config.alphabet().len();

    let lines = vec![
        checkbox_line("Digits  (0-9)", config.include_digits, app.focus == Focus::Digits),
        checkbox_line(
            "Symbols (@#$%^&*!)",
            config.include_symbols,
            app.focus == Focus::Symbols,
        ),
    ];

    let options = Paragraph::new(lines).block(
        Block::default()
            .title(format!("Options · {} characters", alphabet_len))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(focus_style(app.focus != Focus::Length)),
    );

    frame.render_widget(options, area);
}

fn checkbox_line(label: &str, checked: bool, focused: bool) -> Line<'static> {
    let marker = if focused { "> " } else { "  " };
    let mark = if checked { "[x] " } else { "[ ] " };
    let style = if focused {
        Style::default()
            .fg(colors::HIGHLIGHT_FG)
            .bg(colors::HIGHLIGHT_BG)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    Line::from(vec![
        Span::styled(marker, Style::default().fg(colors::WARNING)),
        Span::styled(format!("{}{}", mark, label), style),
    ])
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(colors::WARNING)
    } else {
        Style::default().fg(colors::MUTED)
    }
}
