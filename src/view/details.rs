//! Details screen rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::{rating_label, AppSnapshot, MovieDetails, MovieId, ViewState, MAX_RATING};
use super::content::render_error;
use super::utils::stars;

pub fn render_details(frame: &mut Frame, area: Rect, id: MovieId, snapshot: &AppSnapshot) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Details ")
        .padding(Padding::horizontal(1))
        .border_style(Style::default().fg(Color::Green));

    match snapshot.details.as_ref() {
        None | Some(ViewState::Idle) | Some(ViewState::Loading) => {
            let loading = Paragraph::new("Loading...")
                .style(Style::default().fg(Color::Yellow))
                .block(block);
            frame.render_widget(loading, area);
        }
        Some(ViewState::Error { message, retryable }) => {
            tracing::trace!(id, "Rendering details error");
            render_error(frame, area, block, message, *retryable);
        }
        Some(ViewState::Loaded(details)) => {
            render_loaded(frame, area, block, details, snapshot);
        }
    }
}

fn render_loaded(frame: &mut Frame, area: Rect, block: Block, details: &MovieDetails, snapshot: &AppSnapshot) {
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Title, release date, genres
            Constraint::Length(4), // Rating
            Constraint::Min(0),    // Overview
        ])
        .split(inner);

    let heading = match details.release_year() {
        Some(year) => format!("{} ({})", details.title, year),
        None => details.title.clone(),
    };
    let release = if details.release_date.is_empty() {
        "unknown".to_string()
    } else {
        details.release_date.clone()
    };
    let poster = details
        .poster_url(&snapshot.image_base_url)
        .unwrap_or_else(|| "no poster".to_string());

    let header = Paragraph::new(vec![
        Line::from(Span::styled(heading, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(format!("Release date: {}", release)),
        Line::from(Span::styled(details.genre_names(), Style::default().fg(Color::Cyan))),
        Line::from(Span::styled(poster, Style::default().fg(Color::DarkGray))),
    ]);
    frame.render_widget(header, chunks[0]);

    let mut rating_lines = vec![
        Line::from(Span::styled("Rating:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(
            stars(snapshot.rating, MAX_RATING),
            Style::default().fg(Color::Yellow),
        )),
    ];
    if let Some(rating) = snapshot.rating {
        let label = rating_label(rating).unwrap_or_default();
        rating_lines.push(Line::from(format!("You rated this {} stars. {}", rating, label)));
    }
    frame.render_widget(Paragraph::new(rating_lines), chunks[1]);

    let overview = if details.overview.is_empty() {
        "No overview available."
    } else {
        details.overview.as_str()
    };
    frame.render_widget(Paragraph::new(overview).wrap(Wrap { trim: true }), chunks[2]);
}
