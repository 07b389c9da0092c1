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

//! Artist detail state management.
//!
//! This module provides state for the artist drill-down panel, managing the
//! selected artist, the three drill-down collections (similar artists, top
//! tracks, top albums), and navigation between the panes.
//!
//! Invariant: no selected artist implies all three collections are empty.
//! Each collection is only ever replaced wholesale by the outcome of its
//! own fetch.

use ratatui::widgets::ListState;

use crate::model::{ArtistInfo, SimilarArtist, TopAlbum, TopTrack};

#[derive(Debug, Default, Eq, PartialEq)]
pub(crate) enum DetailPane {
    #[default]
    Similar,
    TopTracks,
    TopAlbums,
}

#[derive(Default)]
pub(crate) struct ArtistDetail {
    pub(crate) active_pane: DetailPane,

    pub(crate) artist: Option<ArtistInfo>,

    pub(crate) similar: Vec<SimilarArtist>,
    pub(crate) top_tracks: Vec<TopTrack>,
    pub(crate) top_albums: Vec<TopAlbum>,

    pub(crate) similar_state: ListState,
    pub(crate) top_tracks_state: ListState,
    pub(crate) top_albums_state: ListState,
}

impl ArtistDetail {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Whether the detail panel should be shown at all.
    pub(crate) fn is_visible(&self) -> bool {
        self.artist.is_some()
    }

    pub(crate) fn next_pane(&mut self) {
        self.active_pane = match self.active_pane {
            DetailPane::Similar => DetailPane::TopTracks,
            DetailPane::TopTracks => DetailPane::TopAlbums,
            DetailPane::TopAlbums => DetailPane::Similar,
        };
    }

    pub(crate) fn previous_pane(&mut self) {
        self.active_pane = match self.active_pane {
            DetailPane::Similar => DetailPane::TopAlbums,
            DetailPane::TopTracks => DetailPane::Similar,
            DetailPane::TopAlbums => DetailPane::TopTracks,
        };
    }

    /// Replaces the selected artist, starting from a clean panel: all three
    /// drill-down collections are emptied.
    pub(crate) fn set_artist(&mut self, artist: ArtistInfo) {
        self.artist = Some(artist);
        self.clear_collections();
    }

    /// Clears the selection and, with it, every drill-down collection.
    pub(crate) fn reset(&mut self) {
        self.artist = None;
        self.active_pane = DetailPane::default();
        self.clear_collections();
    }

    pub(crate) fn set_similar(&mut self, similar: Vec<SimilarArtist>) {
        self.similar = similar;
        self.similar_state.select((!self.similar.is_empty()).then_some(0));
    }

    pub(crate) fn set_top_tracks(&mut self, tracks: Vec<TopTrack>) {
        self.top_tracks = tracks;
        self.top_tracks_state.select((!self.top_tracks.is_empty()).then_some(0));
    }

    pub(crate) fn set_top_albums(&mut self, albums: Vec<TopAlbum>) {
        self.top_albums = albums;
        self.top_albums_state.select((!self.top_albums.is_empty()).then_some(0));
    }

    pub(crate) fn next(&mut self) {
        match self.active_pane {
            DetailPane::Similar => Self::step_next(&mut self.similar_state, self.similar.len()),
            DetailPane::TopTracks => Self::step_next(&mut self.top_tracks_state, self.top_tracks.len()),
            DetailPane::TopAlbums => Self::step_next(&mut self.top_albums_state, self.top_albums.len()),
        }
    }

    pub(crate) fn previous(&mut self) {
        match self.active_pane {
            DetailPane::Similar => Self::step_previous(&mut self.similar_state, self.similar.len()),
            DetailPane::TopTracks => Self::step_previous(&mut self.top_tracks_state, self.top_tracks.len()),
            DetailPane::TopAlbums => Self::step_previous(&mut self.top_albums_state, self.top_albums.len()),
        }
    }

    fn clear_collections(&mut self) {
        self.similar.clear();
        self.top_tracks.clear();
        self.top_albums.clear();
        self.similar_state.select(None);
        self.top_tracks_state.select(None);
        self.top_albums_state.select(None);
    }

    fn step_next(state: &mut ListState, len: usize) {
        if len == 0 { return; }
        let i = match state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        state.select(Some(i));
    }

    fn step_previous(state: &mut ListState, len: usize) {
        if len == 0 { return; }
        let i = match state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        state.select(Some(i));
    }
}
