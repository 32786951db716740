//! Prompt and result panel

use crate::app::{App, Stage};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use weapon_core::WeaponKind;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let prompt_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

    let mut lines = match app.stage {
        Stage::SelectModifiers => vec![Line::from(Span::styled(
            "0 for no magic/flaming, 1 for magic, 2 for flaming, 3 for both, anything else to quit:",
            prompt_style,
        ))],
        Stage::SelectWeapon { modifiers } => vec![
            Line::from(vec![
                Span::raw("Modifiers: "),
                Span::styled(modifiers.label(), Style::default().fg(Color::Magenta)),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "S for sword, A for arrow, anything else to quit:",
                prompt_style,
            )),
        ],
        Stage::ShowResult(turn) => vec![
            Line::from(vec![
                Span::raw(format!("{} ({}): ", turn.weapon.name(), turn.modifiers.label())),
                Span::styled(
                    format!("Rolled {} for {} HP", turn.roll, turn.damage),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Press any key to roll again",
                Style::default().fg(Color::DarkGray),
            )),
        ],
    };

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "═══ Weapons ═══",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));
    for kind in WeaponKind::all() {
        let weapon = app.weapon(*kind);
        lines.push(Line::from(format!(
            "  {:6} roll {:>2}  {:16} {:>3} HP",
            kind.name(),
            weapon.roll(),
            weapon.modifiers().label(),
            weapon.damage()
        )));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Roll "));

    f.render_widget(paragraph, area);
}
