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

//! Wire models for the Last.fm web service.
//!
//! Each response envelope mirrors the JSON shape documented for the
//! corresponding `2.0` API method, declaring only the fields this
//! application consumes. Unknown fields are ignored. Conversions into the
//! domain models in [`crate::model`] live alongside the envelopes.

use serde::Deserialize;

use crate::model::{AlbumSummary, ArtistInfo, ArtistSummary, SimilarArtist, TopAlbum, TopTrack};

/// `artist.search` envelope: `results.artistmatches.artist`.
#[derive(Debug, Deserialize)]
pub(crate) struct ArtistSearchResponse {
    pub results: ArtistSearchResults,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArtistSearchResults {
    #[serde(rename = "artistmatches")]
    pub artist_matches: ArtistMatches,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArtistMatches {
    #[serde(default)]
    pub artist: Vec<ArtistMatch>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArtistMatch {
    pub name: String,
    #[serde(default)]
    pub image: Vec<Image>,
}

/// Image URLs are keyed `#text` in the service payload.
#[derive(Debug, Deserialize)]
pub(crate) struct Image {
    #[serde(rename = "#text")]
    pub url: String,
}

impl From<ArtistMatch> for ArtistSummary {
    fn from(m: ArtistMatch) -> Self {
        Self {
            name: m.name,
            images: m.image.into_iter().map(|i| i.url).collect(),
        }
    }
}

/// `album.search` envelope: `results.albummatches.album`.
///
/// Unlike every other method, the artist here is a plain string.
#[derive(Debug, Deserialize)]
pub(crate) struct AlbumSearchResponse {
    pub results: AlbumSearchResults,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AlbumSearchResults {
    #[serde(rename = "albummatches")]
    pub album_matches: AlbumMatches,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AlbumMatches {
    #[serde(default)]
    pub album: Vec<AlbumMatch>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AlbumMatch {
    pub name: String,
    pub artist: String,
}

impl From<AlbumMatch> for AlbumSummary {
    fn from(m: AlbumMatch) -> Self {
        Self {
            name: m.name,
            artist_name: m.artist,
        }
    }
}

/// `artist.getinfo` envelope: a single `artist` object.
#[derive(Debug, Deserialize)]
pub(crate) struct ArtistInfoResponse {
    pub artist: ArtistInfoEntry,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArtistInfoEntry {
    pub name: String,
}

impl From<ArtistInfoEntry> for ArtistInfo {
    fn from(e: ArtistInfoEntry) -> Self {
        Self { name: e.name }
    }
}

/// `artist.getSimilar` envelope: `similarartists.artist`.
#[derive(Debug, Deserialize)]
pub(crate) struct SimilarArtistsResponse {
    #[serde(rename = "similarartists")]
    pub similar_artists: SimilarArtistList,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SimilarArtistList {
    #[serde(default)]
    pub artist: Vec<SimilarArtistEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SimilarArtistEntry {
    pub name: String,
}

impl From<SimilarArtistEntry> for SimilarArtist {
    fn from(e: SimilarArtistEntry) -> Self {
        Self { name: e.name }
    }
}

/// Nested artist reference used by the top-track and top-album methods.
#[derive(Debug, Deserialize)]
pub(crate) struct ArtistRef {
    pub name: String,
}

/// `artist.getTopTracks` envelope: `toptracks.track`.
#[derive(Debug, Deserialize)]
pub(crate) struct TopTracksResponse {
    #[serde(rename = "toptracks")]
    pub top_tracks: TopTrackList,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TopTrackList {
    #[serde(default)]
    pub track: Vec<TopTrackEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TopTrackEntry {
    pub name: String,
    pub artist: ArtistRef,
}

impl From<TopTrackEntry> for TopTrack {
    fn from(e: TopTrackEntry) -> Self {
        Self {
            name: e.name,
            artist_name: e.artist.name,
        }
    }
}

/// `artist.getTopAlbums` envelope: `topalbums.album`.
#[derive(Debug, Deserialize)]
pub(crate) struct TopAlbumsResponse {
    #[serde(rename = "topalbums")]
    pub top_albums: TopAlbumList,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TopAlbumList {
    #[serde(default)]
    pub album: Vec<TopAlbumEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TopAlbumEntry {
    pub name: String,
    pub artist: ArtistRef,
}

impl From<TopAlbumEntry> for TopAlbum {
    fn from(e: TopAlbumEntry) -> Self {
        Self {
            name: e.name,
            artist_name: e.artist.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_artist_search_response() {
        let body = r##"{
            "results": {
                "opensearch:totalResults": "2",
                "artistmatches": {
                    "artist": [
                        {
                            "name": "Nirvana",
                            "listeners": "5977844",
                            "url": "https://www.last.fm/music/Nirvana",
                            "image": [
                                { "#text": "http://img/34s.png", "size": "small" },
                                { "#text": "http://img/64s.png", "size": "medium" },
                                { "#text": "http://img/174s.png", "size": "large" }
                            ]
                        },
                        { "name": "Nirvana UK", "image": [] }
                    ]
                }
            }
        }"##;

        let decoded: ArtistSearchResponse = serde_json::from_str(body).unwrap();
        let matches = decoded.results.artist_matches.artist;
        assert_eq!(matches.len(), 2);

        let summary = ArtistSummary::from(matches.into_iter().next().unwrap());
        assert_eq!(summary.name, "Nirvana");
        assert_eq!(summary.display_image(), Some("http://img/174s.png"));
    }

    #[test]
    fn decodes_album_search_response_with_plain_string_artist() {
        let body = r#"{
            "results": {
                "albummatches": {
                    "album": [
                        {
                            "name": "Nevermind",
                            "artist": "Nirvana",
                            "url": "https://www.last.fm/music/Nirvana/Nevermind"
                        }
                    ]
                }
            }
        }"#;

        let decoded: AlbumSearchResponse = serde_json::from_str(body).unwrap();
        let album = AlbumSummary::from(decoded.results.album_matches.album.into_iter().next().unwrap());
        assert_eq!(album.name, "Nevermind");
        assert_eq!(album.artist_name, "Nirvana");
    }

    #[test]
    fn decodes_artist_info_response() {
        let body = r#"{
            "artist": {
                "name": "Nirvana",
                "mbid": "9282c8b4-ca0b-4c6b-b7e3-4f7762dfc4d6",
                "stats": { "listeners": "5977844", "playcount": "396735026" }
            }
        }"#;

        let decoded: ArtistInfoResponse = serde_json::from_str(body).unwrap();
        assert_eq!(ArtistInfo::from(decoded.artist).name, "Nirvana");
    }

    #[test]
    fn decodes_similar_artists_response() {
        let body = r#"{
            "similarartists": {
                "artist": [
                    { "name": "Foo Fighters", "match": "1.0" },
                    { "name": "Alice in Chains", "match": "0.8" }
                ],
                "@attr": { "artist": "Nirvana" }
            }
        }"#;

        let decoded: SimilarArtistsResponse = serde_json::from_str(body).unwrap();
        let names: Vec<String> = decoded
            .similar_artists
            .artist
            .into_iter()
            .map(|e| SimilarArtist::from(e).name)
            .collect();
        assert_eq!(names, ["Foo Fighters", "Alice in Chains"]);
    }

    #[test]
    fn decodes_top_tracks_response() {
        let body = r#"{
            "toptracks": {
                "track": [
                    {
                        "name": "Smells Like Teen Spirit",
                        "playcount": "23242925",
                        "artist": { "name": "Nirvana", "url": "https://www.last.fm/music/Nirvana" }
                    }
                ]
            }
        }"#;

        let decoded: TopTracksResponse = serde_json::from_str(body).unwrap();
        let track = TopTrack::from(decoded.top_tracks.track.into_iter().next().unwrap());
        assert_eq!(track.name, "Smells Like Teen Spirit");
        assert_eq!(track.artist_name, "Nirvana");
    }

    #[test]
    fn decodes_top_albums_response() {
        let body = r#"{
            "topalbums": {
                "album": [
                    {
                        "name": "Nevermind",
                        "playcount": 4549994,
                        "artist": { "name": "Nirvana" }
                    }
                ]
            }
        }"#;

        let decoded: TopAlbumsResponse = serde_json::from_str(body).unwrap();
        let album = TopAlbum::from(decoded.top_albums.album.into_iter().next().unwrap());
        assert_eq!(album.name, "Nevermind");
        assert_eq!(album.artist_name, "Nirvana");
    }

    #[test]
    fn missing_match_list_decodes_as_empty() {
        let body = r#"{ "results": { "artistmatches": {} } }"#;
        let decoded: ArtistSearchResponse = serde_json::from_str(body).unwrap();
        assert!(decoded.results.artist_matches.artist.is_empty());
    }
}
