//! Overlay rendering (help popup)

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::utils::centered_rect;

pub fn render_help_popup(frame: &mut Frame) {
    let keybindings = [
        ("", "── Catalog ──"),
        ("type", "Search (after a short pause)"),
        ("Enter", "Search now / open details"),
        ("Tab", "Switch search box / list"),
        ("↑ / ↓", "Move selection"),
        ("Esc", "Clear search"),
        ("", ""),
        ("", "── Details ──"),
        ("1 - 5", "Rate the movie"),
        ("Esc / Backspace", "Back to the list"),
        ("", ""),
        ("", "── General ──"),
        ("R", "Retry after an error"),
        ("?", "Toggle this help"),
        ("Q / Ctrl+C", "Quit"),
    ];

    let popup_area = centered_rect(frame.area(), 56, keybindings.len() as u16 + 2);

    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = keybindings
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                Line::from(Span::styled(
                    format!("{:^50}", desc),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{:>16}", key),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(desc.to_string(), Style::default().fg(Color::White)),
                ])
            }
        })
        .collect();

    let help_text = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Help (? or Esc to close) ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(help_text, popup_area);
}
