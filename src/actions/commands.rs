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

//! Asynchronous application command processing.
//!
//! This module implements the command pattern used to offload blocking HTTP
//! requests from the main UI thread. It provides a dedicated worker loop
//! that translates [`AppCommand`] requests into remote service calls and
//! broadcasts the results back to the application via [`AppEvent`]s.
//!
//! Commands are fire-and-forget: there is no cancellation, no timeout, and
//! no retry. A failed request produces no state-bearing event at all, so
//! the UI keeps whatever it was already showing.

use anyhow::Result;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use crate::{
    actions::events::AppEvent,
    api::LastFm,
    config::AppConfig,
    model::{SearchKind, SearchResultItem},
};

#[derive(Debug)]
pub(crate) enum AppCommand {
    Search { query: String, kind: SearchKind },
    GetArtistInfo(String),
    GetSimilarArtists(String),
    GetTopTracks(String),
    GetTopAlbums(String),
}

/// Spawns a background thread to process application commands.
///
/// This worker thread initializes its own service client and enters a
/// blocking loop, listening for incoming [`AppCommand`]s. Commands are
/// processed strictly in arrival order.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `command_rx` - The receiving end of the command channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_command_worker(
    config: &AppConfig,
    command_rx: Receiver<AppCommand>,
    event_tx: Sender<AppEvent>,
) {
    let config = config.clone();

    thread::spawn(move || {
        let client = LastFm::new(&config);

        while let Ok(request) = command_rx.recv() {
            if let Err(e) = handle_command(&client, request, &event_tx) {
                let _ = event_tx.send(AppEvent::Error(format!("{e:#}")));
            }
        }
    });
}

/// Orchestrates the execution of a single command.
///
/// This function performs the remote call for each command and sends the
/// result back through the application event channel. Any failure surfaces
/// here as an error and never as a state-bearing event.
fn handle_command(
    client: &LastFm,
    command: AppCommand,
    event_tx: &Sender<AppEvent>,
) -> Result<()> {
    match command {
        AppCommand::Search { query, kind } => {
            let items: Vec<SearchResultItem> = match kind {
                SearchKind::Artist => client
                    .search_artists(&query)?
                    .into_iter()
                    .map(SearchResultItem::Artist)
                    .collect(),
                SearchKind::Album => client
                    .search_albums(&query)?
                    .into_iter()
                    .map(SearchResultItem::Album)
                    .collect(),
            };
            event_tx.send(AppEvent::SearchResultsReady(kind, items))?;
        }
        AppCommand::GetArtistInfo(name) => {
            let artist = client.artist_info(&name)?;
            event_tx.send(AppEvent::ArtistInfoReady(artist))?;
        }
        AppCommand::GetSimilarArtists(name) => {
            let similar = client.similar_artists(&name)?;
            event_tx.send(AppEvent::SimilarArtistsReady(similar))?;
        }
        AppCommand::GetTopTracks(name) => {
            let tracks = client.top_tracks(&name)?;
            event_tx.send(AppEvent::TopTracksReady(tracks))?;
        }
        AppCommand::GetTopAlbums(name) => {
            let albums = client.top_albums(&name)?;
            event_tx.send(AppEvent::TopAlbumsReady(albums))?;
        }
    }

    Ok(())
}
