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

//! Remote access layer for the Last.fm web service.
//!
//! This module handles all interactions with the remote metadata service,
//! one blocking HTTP GET per operation, JSON responses decoded through the
//! envelopes in [`model`].
//!
//! # Methods
//!
//! * `artist.search` / `album.search` - top-level catalog search.
//! * `artist.getinfo` - a single artist record.
//! * `artist.getSimilar`, `artist.getTopTracks`, `artist.getTopAlbums` -
//!   the drill-down collections for a named artist.
//!
//! Query values are embedded into the request target verbatim, and the
//! configured API key is always sent even when empty. A response is decoded
//! in full or rejected; there is no retry and no partial-result handling.

mod model;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::{
    api::model::{
        AlbumSearchResponse, ArtistInfoResponse, ArtistSearchResponse, SimilarArtistsResponse,
        TopAlbumsResponse, TopTracksResponse,
    },
    config::AppConfig,
    model::{AlbumSummary, ArtistInfo, ArtistSummary, SimilarArtist, TopAlbum, TopTrack},
};

/// A failed fetch: either the transport failed or the payload did not have
/// the expected shape. Callers treat both the same way.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Client for the Last.fm `2.0` web service.
pub(crate) struct LastFm {
    client: reqwest::blocking::Client,
    api_url: String,
    api_key: String,
}

impl LastFm {
    /// Create a new service client from the application configuration.
    pub(crate) fn new(config: &AppConfig) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Search the artist catalog.
    pub(crate) fn search_artists(&self, query: &str) -> Result<Vec<ArtistSummary>, ApiError> {
        let response: ArtistSearchResponse = self.get("artist.search", "artist", query)?;
        Ok(response
            .results
            .artist_matches
            .artist
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// Search the album catalog.
    pub(crate) fn search_albums(&self, query: &str) -> Result<Vec<AlbumSummary>, ApiError> {
        let response: AlbumSearchResponse = self.get("album.search", "album", query)?;
        Ok(response
            .results
            .album_matches
            .album
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// Fetch the record for a single named artist.
    pub(crate) fn artist_info(&self, name: &str) -> Result<ArtistInfo, ApiError> {
        let response: ArtistInfoResponse = self.get("artist.getinfo", "artist", name)?;
        Ok(response.artist.into())
    }

    /// Fetch artists similar to the named artist.
    pub(crate) fn similar_artists(&self, name: &str) -> Result<Vec<SimilarArtist>, ApiError> {
        let response: SimilarArtistsResponse = self.get("artist.getSimilar", "artist", name)?;
        Ok(response
            .similar_artists
            .artist
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// Fetch the named artist's most-played tracks.
    pub(crate) fn top_tracks(&self, name: &str) -> Result<Vec<TopTrack>, ApiError> {
        let response: TopTracksResponse = self.get("artist.getTopTracks", "artist", name)?;
        Ok(response
            .top_tracks
            .track
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// Fetch the named artist's most-played albums.
    pub(crate) fn top_albums(&self, name: &str) -> Result<Vec<TopAlbum>, ApiError> {
        let response: TopAlbumsResponse = self.get("artist.getTopAlbums", "artist", name)?;
        Ok(response
            .top_albums
            .album
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// Issue a GET for the given method and decode the response envelope.
    fn get<T: DeserializeOwned>(
        &self,
        method: &str,
        param: &str,
        value: &str,
    ) -> Result<T, ApiError> {
        let url = request_url(&self.api_url, &self.api_key, method, param, value);

        let body = self
            .client
            .get(&url)
            .send()?
            .error_for_status()?
            .text()?;

        Ok(serde_json::from_str(&body)?)
    }
}

/// Builds the request target for a service method.
///
/// The parameter value is embedded without escaping, matching the service's
/// tolerance for raw query text, and the API key is included even when it
/// is the empty string.
fn request_url(base: &str, api_key: &str, method: &str, param: &str, value: &str) -> String {
    format!("{base}?method={method}&{param}={value}&api_key={api_key}&format=json")
}
