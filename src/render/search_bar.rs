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

//! Render the search bar.
//!
//! This module provides the visual representation of the query input and
//! the current search kind, including the text cursor while the input has
//! focus.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::{App, Focus};

pub(crate) fn draw_search_bar(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Query;

    let border_style = if focused {
        Style::default()
            .fg(app.theme.accent_colour)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.border_colour)
    };

    let title = format!(" Search [{}] ", app.search_bar.kind.label());

    f.render_widget(
        Paragraph::new(app.search_bar.input.value())
            .style(Style::default().fg(app.theme.query_fg))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(border_style),
            ),
        area,
    );

    if focused {
        let cursor_x = area.x + 1 + app.search_bar.input.cursor() as u16;
        let cursor_y = area.y + 1;
        f.set_cursor_position((cursor_x, cursor_y));
    }
}
