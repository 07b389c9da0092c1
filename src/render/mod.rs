// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called on every
//! terminal tick or state change to provide a reactive user interface.
//!
//! Which sections appear is gated by exactly two things: whether an artist
//! is selected (the detail panel), and which drill-down collections are
//! non-empty (their lists). Fetch failures never show up here.

mod detail;
mod results;
mod search_bar;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Paragraph,
};

use crate::{
    App,
    render::{detail::draw_detail, results::draw_results, search_bar::draw_search_bar},
};

/// Renders the user interface to the terminal frame.
///
/// This function calculates the layout constraints and populates the frame
/// with widgets based on the current state of the [`App`].
///
/// It handles:
///
/// * **Layout**: Partitioning the screen into the search bar, the main
///   results/detail area, and the key-hint footer.
/// * **State Mapping**: Converting application data (search results and the
///   drill-down collections) into interactive widgets.
/// * **Styling**: Applying colors and borders defined in the application
///   theme.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing the UI
///   to reflect changes and update internal view state (like list scroll
///   positions).
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Outer layout: search bar, main, footer
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    draw_search_bar(f, outer[0], app);

    // The detail panel only exists while an artist is selected.
    if app.detail.is_visible() {
        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(outer[1]);

        draw_results(f, main[0], app);
        draw_detail(f, main[1], app);
    } else {
        draw_results(f, outer[1], app);
    }

    draw_footer(f, outer[2], app);
}

fn draw_footer(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let hints = " / query  t kind  Tab focus  j/k move  Enter open  q quit";
    f.render_widget(
        Paragraph::new(hints).style(Style::default().fg(app.theme.hint_fg)),
        area,
    );
}
