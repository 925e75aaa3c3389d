//! Layout rendering (title and search bar, footer)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::{AppSnapshot, Focus, Screen};

const APP_TITLE: &str = "GusFlix";

pub fn render_top_bar(frame: &mut Frame, area: Rect, snapshot: &AppSnapshot) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(13), // App title
            Constraint::Min(0),     // Search input
        ])
        .split(area);

    let title = Paragraph::new(APP_TITLE)
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).padding(Padding::horizontal(1)));
    frame.render_widget(title, chunks[0]);

    let ui = &snapshot.ui;
    let focused = ui.screen == Screen::Catalog && ui.focus == Focus::Search;
    let accent = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let text = if ui.search_input.is_empty() {
        Span::styled("Search...", Style::default().fg(Color::DarkGray))
    } else if focused {
        Span::styled(format!("{}▏", ui.search_input), accent)
    } else {
        Span::raw(ui.search_input.as_str())
    };

    let search = Paragraph::new(Line::from(text)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" 🔍 Search ")
            .padding(Padding::horizontal(1))
            .border_style(accent),
    );
    frame.render_widget(search, chunks[1]);
}

pub fn render_footer(frame: &mut Frame, area: Rect, snapshot: &AppSnapshot) {
    let hints = match (snapshot.ui.screen, snapshot.ui.focus) {
        (Screen::Details(_), _) => "1-5 rate · r retry · Esc back · ? help · q quit",
        (Screen::Catalog, Focus::Search) => "type to search · Enter search now · Tab list · Esc clear · Ctrl+C quit",
        (Screen::Catalog, Focus::List) => "↑/↓ move · Enter details · Tab search · r retry · ? help · q quit",
    };
    let footer = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, area);
}
