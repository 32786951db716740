//! Recent turns

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let visible = area.height.saturating_sub(2) as usize;

    let items: Vec<ListItem> = app
        .history
        .iter()
        .take(visible)
        .map(|turn| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:6}", turn.weapon.name()),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(format!(
                    " {:>2} -> {:>3} HP  {}",
                    turn.roll,
                    turn.damage,
                    turn.modifiers.label()
                )),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" History ({}) ", app.history.len())),
    );

    f.render_widget(list, area);
}
