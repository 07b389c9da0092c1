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

//! Render the search results list.
//!
//! Rows follow the kind captured when the results were fetched: artist rows
//! show the name with the display image URL underneath when the service
//! provided one, album rows show the album and artist names. There is no
//! payload inspection here.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem},
};

use crate::{App, Focus, model::{SearchKind, SearchResultItem}};

pub(crate) fn draw_results(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme;

    let items: Vec<ListItem> = app
        .results
        .items
        .iter()
        .map(|item| match item {
            SearchResultItem::Artist(artist) => {
                let mut lines = vec![
                    Line::from(artist.name.clone())
                        .style(Style::default().fg(theme.result_name_fg)),
                ];
                if let Some(url) = artist.display_image() {
                    lines.push(
                        Line::from(format!("  {url}"))
                            .style(Style::default().fg(theme.result_meta_fg)),
                    );
                }
                ListItem::new(Text::from(lines))
            }
            SearchResultItem::Album(album) => ListItem::new(Line::from(vec![
                Span::styled(album.name.clone(), Style::default().fg(theme.result_name_fg)),
                Span::raw(" - "),
                Span::styled(
                    album.artist_name.clone(),
                    Style::default().fg(theme.result_meta_fg),
                ),
            ])),
        })
        .collect();

    let title = match app.results.kind {
        SearchKind::Artist => " Artists ",
        SearchKind::Album => " Albums ",
    };

    let is_active = app.focus == Focus::Results;
    let style = if is_active {
        Style::default()
            .fg(theme.accent_colour)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border_colour)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(style),
        )
        .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, &mut app.results.state);
}
