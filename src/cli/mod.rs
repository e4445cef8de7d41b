//! # CLI Module
//!
//! Command handlers for the `spotcat` binary. Each handler builds a client
//! from the environment, performs one catalog operation behind a spinner and
//! prints the result as a table.
//!
//! ## Commands
//!
//! ### Artists
//! - [`artist`] - A single artist with genres and popularity
//! - [`artists`] - Several artists by id, unknown ids reported as missing
//! - [`related`] - Artists related to a given one
//!
//! ### Albums
//! - [`album`] - An album and its first page of tracks
//! - [`albums`] - Several albums by id
//! - [`album_tracks`] - One page of an album's tracks
//!
//! ### Tracks
//! - [`track`] - A single track
//! - [`tracks`] - Several tracks by id
//!
//! ### Search
//! - [`search`] - Catalog search over the requested categories
//!
//! Failures end the process through the [`error!`](crate::error!) macro with a
//! non-zero status; there is nothing to recover at this layer.

mod albums;
mod artists;
mod search;
mod tracks;

use tokio_util::sync::CancellationToken;

pub use albums::{album, album_tracks, albums};
pub use artists::{artist, artists, related};
pub use search::search;
pub use tracks::{track, tracks};

use crate::{
    entity::{Album, Artist, PlaylistSummary, Track},
    error,
    spotify::Client,
    types::{AlbumTableRow, ArtistTableRow, PlaylistTableRow, TrackTableRow},
};

/// Builds the client from configuration, bound to `cancel`.
pub fn connect(cancel: &CancellationToken) -> Client {
    match Client::from_env() {
        Ok(client) => client.with_cancellation(cancel.clone()),
        Err(e) => error!("Cannot create client. Err: {}", e),
    }
}

fn or_dash(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}

pub(crate) fn artist_row(artist: &Artist) -> ArtistTableRow {
    ArtistTableRow {
        id: artist.id.clone(),
        name: artist.name.clone(),
        genres: artist
            .genres
            .iter()
            .take(3)
            .cloned()
            .collect::<Vec<_>>()
            .join(","),
        popularity: or_dash(artist.popularity.map(|p| p.to_string())),
    }
}

pub(crate) fn album_row(album: &Album) -> AlbumTableRow {
    AlbumTableRow {
        id: album.id.clone(),
        name: album.name.clone(),
        artists: album.artist_names().join(", "),
        released: or_dash(album.release_date.clone()),
        tracks: or_dash(album.total_tracks.map(|t| t.to_string())),
    }
}

pub(crate) fn track_row(track: &Track) -> TrackTableRow {
    TrackTableRow {
        id: track.id.clone(),
        name: track.name.clone(),
        artists: track.artist_names().join(", "),
        duration: or_dash(track.duration()),
    }
}

pub(crate) fn playlist_row(playlist: &PlaylistSummary) -> PlaylistTableRow {
    PlaylistTableRow {
        id: playlist.id.clone(),
        name: playlist.name.clone(),
        owner: or_dash(playlist.owner.clone()),
        tracks: or_dash(playlist.total_tracks.map(|t| t.to_string())),
    }
}

/// Reports the ids a bulk lookup could not resolve.
pub(crate) fn report_missing<T>(ids: &[String], results: &[Option<T>]) {
    for (id, result) in ids.iter().zip(results) {
        if result.is_none() {
            crate::warning!("No entity found for id {}", id);
        }
    }
}
