//! Catalog list rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::{AppSnapshot, Focus, Movie, ViewState};
use super::utils::truncate_string;

pub fn render_catalog(frame: &mut Frame, area: Rect, snapshot: &AppSnapshot) {
    let is_focused = snapshot.ui.focus == Focus::List;
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let title = if snapshot.catalog_query.is_empty() {
        " Popular Movies ".to_string()
    } else {
        format!(" Results for \"{}\" ", truncate_string(&snapshot.catalog_query, 30))
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding::horizontal(1))
        .border_style(border_style);

    match &snapshot.catalog {
        ViewState::Idle => {
            let idle = Paragraph::new("Type in search to find movies")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(idle, area);
        }
        ViewState::Loading => {
            let loading = Paragraph::new("Loading...")
                .style(Style::default().fg(Color::Yellow))
                .block(block);
            frame.render_widget(loading, area);
        }
        ViewState::Error { message, retryable } => {
            render_error(frame, area, block, message, *retryable);
        }
        ViewState::Loaded(movies) if movies.is_empty() => {
            let empty = Paragraph::new("No movies found")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
        }
        ViewState::Loaded(movies) => {
            render_movie_list(frame, area, block, movies, snapshot, is_focused);
        }
    }
}

fn render_movie_list(
    frame: &mut Frame,
    area: Rect,
    block: Block,
    movies: &[Movie],
    snapshot: &AppSnapshot,
    is_focused: bool,
) {
    let selected = snapshot.ui.list_selected;
    let title_width = area.width.saturating_sub(8) as usize;

    let items: Vec<ListItem> = movies
        .iter()
        .enumerate()
        .map(|(i, movie)| {
            let style = if i == selected && is_focused {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else if i == selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let poster = match movie.poster_path {
                Some(_) => Span::raw(""),
                None => Span::styled("  (no poster)", Style::default().fg(Color::DarkGray)),
            };

            ListItem::new(Line::from(vec![
                Span::styled(truncate_string(&movie.title, title_width), style),
                poster,
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_symbol("▶ ")
        .highlight_style(Style::default()); // Highlight handled by item styles

    let mut list_state = ListState::default();
    list_state.select(Some(selected));

    frame.render_stateful_widget(list, area, &mut list_state);
}

pub fn render_error(frame: &mut Frame, area: Rect, block: Block, message: &str, retryable: bool) {
    let mut lines = vec![Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(Color::Red),
    ))];
    if retryable {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "Press r to retry",
            Style::default().fg(Color::Yellow),
        )));
    }

    let error = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
    frame.render_widget(error, area);
}
