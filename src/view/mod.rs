//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It only reads [`AppSnapshot`]s; it never talks to the controllers.
//!
//! - `utils`: Shared utility functions (truncation, centered popups)
//! - `layout`: Title and search bar, footer hints
//! - `content`: Catalog list
//! - `details`: Movie details and rating
//! - `overlays`: Help popup

mod utils;
mod layout;
mod content;
mod details;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{AppSnapshot, Screen};

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, snapshot: &AppSnapshot) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title + search bar
                Constraint::Min(0),    // Main content
                Constraint::Length(1), // Key hints
            ])
            .split(frame.area());

        layout::render_top_bar(frame, chunks[0], snapshot);

        match snapshot.ui.screen {
            Screen::Catalog => content::render_catalog(frame, chunks[1], snapshot),
            Screen::Details(id) => details::render_details(frame, chunks[1], id, snapshot),
        }

        layout::render_footer(frame, chunks[2], snapshot);

        if snapshot.ui.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}
