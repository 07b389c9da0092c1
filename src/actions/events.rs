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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard), API worker results, and
//! the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: The [`apply_event`] function updates the [`App`] state
//!    and dispatches commands to the API worker.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.
//!
//! Result events replace their state wholesale and in arrival order. There
//! is deliberately no guard against a slow search result landing after a
//! faster artist selection: the search result still resets the drill-down
//! state, last write wins.

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    App, Focus,
    actions::commands::AppCommand,
    detail::DetailPane,
    model::{ArtistInfo, SearchKind, SearchResultItem, SimilarArtist, TopAlbum, TopTrack},
    render::draw,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    SearchResultsReady(SearchKind, Vec<SearchResultItem>),
    ArtistInfoReady(ArtistInfo),
    SimilarArtistsReady(Vec<SimilarArtist>),
    TopTracksReady(Vec<TopTrack>),
    TopAlbumsReady(Vec<TopAlbum>),

    Tick,

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in
/// the terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        apply_event(app, event)?;

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Applies a single event to the application state.
///
/// Fetch results replace the state fields their operation owns and nothing
/// else; a worker error is logged and mutates no state at all.
pub(crate) fn apply_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,

        AppEvent::SearchResultsReady(kind, items) => {
            app.results.set_results(kind, items);
            // A fresh top-level search always clears the drill-down state,
            // so stale artist detail cannot linger under new results.
            app.detail.reset();
            if app.focus == Focus::Detail {
                app.focus = Focus::Results;
            }
        }

        AppEvent::ArtistInfoReady(artist) => app.detail.set_artist(artist),
        AppEvent::SimilarArtistsReady(similar) => app.detail.set_similar(similar),
        AppEvent::TopTracksReady(tracks) => app.detail.set_top_tracks(tracks),
        AppEvent::TopAlbumsReady(albums) => app.detail.set_top_albums(albums),

        AppEvent::Error(message) => tracing::error!("remote request failed: {message}"),

        AppEvent::Tick => {}
        AppEvent::ExitApplication => {}
    }

    Ok(())
}

/// Maps keyboard input to application actions and fetch commands.
///
/// While the query input has focus all keys are routed to it; otherwise
/// keys drive navigation and trigger the remote operations.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.focus == Focus::Query {
        return process_query_key_event(app, key);
    }

    process_global_key_event(app, key)
}

fn process_query_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => app.focus = Focus::Results,

        KeyCode::Enter => {
            // Query and kind are read here, at dispatch time, exactly as
            // typed.
            let query = app.search_bar.input.value().to_string();
            let kind = app.search_bar.kind;
            app.command_tx.send(AppCommand::Search { query, kind })?;
            app.focus = Focus::Results;
        }

        _ => {
            // Delegate all other key events to the managed input component.
            app.search_bar.input.handle_event(&Event::Key(key));
        }
    }

    Ok(())
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        KeyCode::Char('/') => app.focus = Focus::Query,

        KeyCode::Char('t') => app.search_bar.toggle_kind(),

        KeyCode::Tab => {
            app.focus = match app.focus {
                Focus::Results if app.detail.is_visible() => Focus::Detail,
                _ => Focus::Results,
            };
        }

        // Navigation: Down / j
        KeyCode::Char('j') | KeyCode::Down => match app.focus {
            Focus::Results => app.results.next(),
            Focus::Detail => app.detail.next(),
            Focus::Query => {}
        },

        // Navigation: Up / k
        KeyCode::Char('k') | KeyCode::Up => match app.focus {
            Focus::Results => app.results.previous(),
            Focus::Detail => app.detail.previous(),
            Focus::Query => {}
        },

        // Pane Navigation
        KeyCode::Char('h') | KeyCode::Left => {
            if app.focus == Focus::Detail {
                app.detail.previous_pane();
            }
        }
        KeyCode::Char('l') | KeyCode::Right => {
            if app.focus == Focus::Detail {
                app.detail.next_pane();
            }
        }

        KeyCode::Enter => activate_selection(app)?,

        _ => {}
    }

    Ok(())
}

/// Triggers the remote operation for the focused row or pane.
fn activate_selection(app: &mut App) -> Result<()> {
    match app.focus {
        Focus::Results => {
            // Only artist rows drill down; album rows have no detail view.
            if let Some(SearchResultItem::Artist(artist)) = app.results.selected_item() {
                app.command_tx
                    .send(AppCommand::GetArtistInfo(artist.name.clone()))?;
            }
        }

        Focus::Detail => {
            if let Some(artist) = &app.detail.artist {
                let name = artist.name.clone();
                let command = match app.detail.active_pane {
                    DetailPane::Similar => AppCommand::GetSimilarArtists(name),
                    DetailPane::TopTracks => AppCommand::GetTopTracks(name),
                    DetailPane::TopAlbums => AppCommand::GetTopAlbums(name),
                };
                app.command_tx.send(command)?;
            }
        }

        Focus::Query => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::AppConfig, model::ArtistSummary};
    use crossterm::event::KeyModifiers;
    use std::sync::mpsc::{self, Receiver};

    fn test_app() -> (App, Receiver<AppCommand>) {
        let (command_tx, command_rx) = mpsc::channel();
        (App::new(AppConfig::default(), command_tx), command_rx)
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn artist_item(name: &str) -> SearchResultItem {
        SearchResultItem::Artist(ArtistSummary {
            name: name.into(),
            images: vec![],
        })
    }

    fn populated_app() -> (App, Receiver<AppCommand>) {
        let (mut app, command_rx) = test_app();
        apply_event(
            &mut app,
            AppEvent::SearchResultsReady(SearchKind::Artist, vec![artist_item("Nirvana")]),
        )
        .unwrap();
        apply_event(
            &mut app,
            AppEvent::ArtistInfoReady(ArtistInfo { name: "Nirvana".into() }),
        )
        .unwrap();
        apply_event(
            &mut app,
            AppEvent::SimilarArtistsReady(vec![SimilarArtist { name: "Hole".into() }]),
        )
        .unwrap();
        (app, command_rx)
    }

    #[test]
    fn search_results_clear_the_selected_artist_and_drill_downs() {
        let (mut app, _command_rx) = populated_app();
        assert!(app.detail.is_visible());

        apply_event(
            &mut app,
            AppEvent::SearchResultsReady(SearchKind::Artist, vec![artist_item("Melvins")]),
        )
        .unwrap();

        assert_eq!(app.results.items.len(), 1);
        assert!(!app.detail.is_visible());
        assert!(app.detail.similar.is_empty());
        assert!(app.detail.top_tracks.is_empty());
        assert!(app.detail.top_albums.is_empty());
    }

    #[test]
    fn selecting_an_artist_resets_every_drill_down_collection() {
        let (mut app, _command_rx) = populated_app();
        assert_eq!(app.detail.similar.len(), 1);

        apply_event(
            &mut app,
            AppEvent::ArtistInfoReady(ArtistInfo { name: "Melvins".into() }),
        )
        .unwrap();

        assert_eq!(app.detail.artist.as_ref().unwrap().name, "Melvins");
        assert!(app.detail.similar.is_empty());
        assert!(app.detail.top_tracks.is_empty());
        assert!(app.detail.top_albums.is_empty());
    }

    #[test]
    fn each_drill_down_event_mutates_only_its_own_collection() {
        let (mut app, _command_rx) = populated_app();

        apply_event(
            &mut app,
            AppEvent::TopTracksReady(vec![TopTrack {
                name: "Lithium".into(),
                artist_name: "Nirvana".into(),
            }]),
        )
        .unwrap();

        assert_eq!(app.detail.top_tracks.len(), 1);
        assert_eq!(app.detail.similar.len(), 1);
        assert!(app.detail.top_albums.is_empty());
    }

    #[test]
    fn a_failed_fetch_leaves_every_state_field_untouched() {
        let (mut app, _command_rx) = populated_app();

        apply_event(&mut app, AppEvent::Error("request failed".into())).unwrap();

        assert_eq!(app.results.items.len(), 1);
        assert_eq!(app.detail.artist.as_ref().unwrap().name, "Nirvana");
        assert_eq!(app.detail.similar.len(), 1);
        assert!(app.detail.top_tracks.is_empty());
        assert!(app.detail.top_albums.is_empty());
    }

    #[test]
    fn drill_down_results_replace_rather_than_append() {
        let (mut app, _command_rx) = populated_app();
        let similar = vec![
            SimilarArtist { name: "Hole".into() },
            SimilarArtist { name: "Melvins".into() },
        ];

        apply_event(&mut app, AppEvent::SimilarArtistsReady(similar.clone())).unwrap();
        apply_event(&mut app, AppEvent::SimilarArtistsReady(similar)).unwrap();

        assert_eq!(app.detail.similar.len(), 2);
    }

    #[test]
    fn artist_search_then_select_then_top_tracks_scenario() {
        let (mut app, _command_rx) = test_app();

        apply_event(
            &mut app,
            AppEvent::SearchResultsReady(SearchKind::Artist, vec![artist_item("Nirvana")]),
        )
        .unwrap();
        assert!(matches!(
            app.results.selected_item(),
            Some(SearchResultItem::Artist(a)) if a.name == "Nirvana"
        ));

        apply_event(
            &mut app,
            AppEvent::ArtistInfoReady(ArtistInfo { name: "Nirvana".into() }),
        )
        .unwrap();
        assert_eq!(app.detail.artist.as_ref().unwrap().name, "Nirvana");
        assert!(app.detail.similar.is_empty());
        assert!(app.detail.top_tracks.is_empty());
        assert!(app.detail.top_albums.is_empty());

        apply_event(
            &mut app,
            AppEvent::TopTracksReady(vec![TopTrack {
                name: "Smells Like Teen Spirit".into(),
                artist_name: "Nirvana".into(),
            }]),
        )
        .unwrap();
        assert!(!app.detail.top_tracks.is_empty());
        assert!(app.detail.similar.is_empty());
        assert!(app.detail.top_albums.is_empty());
    }

    #[test]
    fn typing_a_query_and_pressing_enter_dispatches_a_search() {
        let (mut app, command_rx) = test_app();

        apply_event(&mut app, key(KeyCode::Char('/'))).unwrap();
        assert_eq!(app.focus, Focus::Query);

        for c in "Neva".chars() {
            apply_event(&mut app, key(KeyCode::Char(c))).unwrap();
        }
        apply_event(&mut app, key(KeyCode::Char('t'))).unwrap();
        assert_eq!(app.search_bar.input.value(), "Nevat");

        apply_event(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.focus, Focus::Results);

        // The query is sent exactly as typed, and the kind read at dispatch
        // time.
        let command = command_rx.try_recv().unwrap();
        assert!(matches!(
            command,
            AppCommand::Search { ref query, kind: SearchKind::Artist } if query == "Nevat"
        ));
    }

    #[test]
    fn toggling_the_search_kind_does_not_clear_results() {
        let (mut app, _command_rx) = test_app();
        apply_event(
            &mut app,
            AppEvent::SearchResultsReady(SearchKind::Artist, vec![artist_item("Nirvana")]),
        )
        .unwrap();

        apply_event(&mut app, key(KeyCode::Char('t'))).unwrap();

        assert_eq!(app.search_bar.kind, SearchKind::Album);
        assert_eq!(app.results.items.len(), 1);
        assert_eq!(app.results.kind, SearchKind::Artist);
    }

    #[test]
    fn activating_an_artist_row_requests_the_artist_info() {
        let (mut app, command_rx) = test_app();
        apply_event(
            &mut app,
            AppEvent::SearchResultsReady(SearchKind::Artist, vec![artist_item("Nirvana")]),
        )
        .unwrap();

        apply_event(&mut app, key(KeyCode::Enter)).unwrap();

        let command = command_rx.try_recv().unwrap();
        assert!(matches!(command, AppCommand::GetArtistInfo(name) if name == "Nirvana"));
    }

    #[test]
    fn album_rows_have_no_drill_down() {
        let (mut app, command_rx) = test_app();
        apply_event(
            &mut app,
            AppEvent::SearchResultsReady(
                SearchKind::Album,
                vec![SearchResultItem::Album(crate::model::AlbumSummary {
                    name: "Nevermind".into(),
                    artist_name: "Nirvana".into(),
                })],
            ),
        )
        .unwrap();

        apply_event(&mut app, key(KeyCode::Enter)).unwrap();

        assert!(command_rx.try_recv().is_err());
    }

    #[test]
    fn activating_a_detail_pane_requests_that_collection() {
        let (mut app, command_rx) = populated_app();

        apply_event(&mut app, key(KeyCode::Tab)).unwrap();
        assert_eq!(app.focus, Focus::Detail);

        apply_event(&mut app, key(KeyCode::Char('l'))).unwrap();
        apply_event(&mut app, key(KeyCode::Enter)).unwrap();

        let command = command_rx.try_recv().unwrap();
        assert!(matches!(command, AppCommand::GetTopTracks(name) if name == "Nirvana"));
    }

    #[test]
    fn search_results_pull_focus_back_from_a_cleared_detail_panel() {
        let (mut app, _command_rx) = populated_app();
        apply_event(&mut app, key(KeyCode::Tab)).unwrap();
        assert_eq!(app.focus, Focus::Detail);

        apply_event(
            &mut app,
            AppEvent::SearchResultsReady(SearchKind::Artist, vec![artist_item("Melvins")]),
        )
        .unwrap();

        assert_eq!(app.focus, Focus::Results);
    }
}
