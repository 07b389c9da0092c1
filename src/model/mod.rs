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

//! Domain models and core data structures.
//!
//! This module defines the central view-state entities of the application:
//! search results, the selected artist, and the drill-down collections.
//! Everything here is a transient in-memory snapshot; nothing is persisted.

/// Which catalog the search targets.
///
/// Selects both the remote search method and the result rendering branch.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum SearchKind {
    #[default]
    Artist,
    Album,
}

impl SearchKind {
    pub(crate) fn toggle(self) -> Self {
        match self {
            SearchKind::Artist => SearchKind::Album,
            SearchKind::Album => SearchKind::Artist,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            SearchKind::Artist => "artist",
            SearchKind::Album => "album",
        }
    }
}

/// A single search result row.
///
/// The variant is fixed by the [`SearchKind`] that was active when the
/// results were fetched, never by inspecting the payload shape.
#[derive(Debug, Clone)]
pub(crate) enum SearchResultItem {
    Artist(ArtistSummary),
    Album(AlbumSummary),
}

#[derive(Debug, Clone)]
pub(crate) struct ArtistSummary {
    pub name: String,
    /// Image URLs in service order, smallest first.
    pub images: Vec<String>,
}

impl ArtistSummary {
    /// The image shown alongside the artist name, when the service provided
    /// one at the display slot (the third entry).
    pub(crate) fn display_image(&self) -> Option<&str> {
        self.images
            .get(2)
            .map(String::as_str)
            .filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone)]
pub(crate) struct AlbumSummary {
    pub name: String,
    pub artist_name: String,
}

#[derive(Debug, Clone)]
pub(crate) struct ArtistInfo {
    pub name: String,
}

#[derive(Debug, Clone)]
pub(crate) struct SimilarArtist {
    pub name: String,
}

#[derive(Debug, Clone)]
pub(crate) struct TopTrack {
    pub name: String,
    pub artist_name: String,
}

#[derive(Debug, Clone)]
pub(crate) struct TopAlbum {
    pub name: String,
    pub artist_name: String,
}
