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

//! Render the artist detail panel.
//!
//! This module provides the visual representation of the selected artist and
//! the three drill-down panes: similar artists, top tracks, and top albums.
//! Each pane lists its collection in fetch order; a pane whose collection
//! has not been loaded yet stays blank.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::{App, Focus, detail::DetailPane, theme::Theme};

/// Renders the artist detail widget including the three drill-down panes.
pub(crate) fn draw_detail(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme;

    let Some(artist) = &app.detail.artist else {
        return;
    };

    let outer = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", artist.name))
        .border_style(Style::default().fg(theme.accent_colour));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(inner);

    let detail_focused = app.focus == Focus::Detail;

    let similar_items: Vec<ListItem> = app
        .detail
        .similar
        .iter()
        .map(|a| {
            ListItem::new(
                Line::from(a.name.clone()).style(Style::default().fg(theme.detail_name_fg)),
            )
        })
        .collect();

    render_list(
        f,
        chunks[0],
        " Similar ",
        similar_items,
        &mut app.detail.similar_state,
        detail_focused && app.detail.active_pane == DetailPane::Similar,
        &theme,
    );

    let width = app.detail.top_tracks.len().to_string().len().max(2);
    let track_items: Vec<ListItem> = app
        .detail
        .top_tracks
        .iter()
        .enumerate()
        .map(|(i, t)| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:0width$} ", i + 1)),
                Span::styled(t.name.clone(), Style::default().fg(theme.detail_name_fg)),
                Span::raw(" - "),
                Span::styled(
                    t.artist_name.clone(),
                    Style::default().fg(theme.detail_artist_fg),
                ),
            ]))
        })
        .collect();

    render_list(
        f,
        chunks[1],
        " Top Tracks ",
        track_items,
        &mut app.detail.top_tracks_state,
        detail_focused && app.detail.active_pane == DetailPane::TopTracks,
        &theme,
    );

    let album_items: Vec<ListItem> = app
        .detail
        .top_albums
        .iter()
        .map(|a| {
            ListItem::new(Line::from(vec![
                Span::styled(a.name.clone(), Style::default().fg(theme.detail_name_fg)),
                Span::raw(" - "),
                Span::styled(
                    a.artist_name.clone(),
                    Style::default().fg(theme.detail_artist_fg),
                ),
            ]))
        })
        .collect();

    render_list(
        f,
        chunks[2],
        " Top Albums ",
        album_items,
        &mut app.detail.top_albums_state,
        detail_focused && app.detail.active_pane == DetailPane::TopAlbums,
        &theme,
    );
}

fn render_list(
    f: &mut Frame,
    area: Rect,
    title: &str,
    items: Vec<ListItem>,
    state: &mut ratatui::widgets::ListState,
    is_active: bool,
    theme: &Theme,
) {
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

    f.render_stateful_widget(list, area, state);
}
