//! UI rendering

mod history_view;
mod prompt_view;

use crate::app::{App, Stage};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_title(f, chunks[0]);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    prompt_view::draw(f, app, content[0]);
    history_view::draw(f, app, content[1]);

    draw_keybindings(f, app, chunks[2]);
}

fn draw_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Weapon Damage Roller",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::ALL));

    f.render_widget(title, area);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let stage_keys: Vec<(&str, &str)> = match app.stage {
        Stage::SelectModifiers => vec![
            ("0", "Plain"),
            ("1", "Magic"),
            ("2", "Flaming"),
            ("3", "Both"),
        ],
        Stage::SelectWeapon { .. } => vec![("S", "Sword 3d6"), ("A", "Arrow 1d6")],
        Stage::ShowResult(_) => vec![("any key", "Next roll")],
    };

    let mut spans = Vec::new();
    for (key, desc) in stage_keys.iter().chain([("Esc", "Quit")].iter()) {
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ));
        spans.push(Span::raw(format!(" {}  ", desc)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}
