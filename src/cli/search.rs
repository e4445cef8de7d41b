use tabled::Table;
use tokio_util::sync::CancellationToken;

use super::{album_row, artist_row, connect, playlist_row, track_row};
use crate::{entity::SearchType, error, info, utils, warning};

pub async fn search(
    query: String,
    types: SearchType,
    limit: u32,
    offset: u32,
    cancel: &CancellationToken,
) {
    let client = connect(cancel);
    let pb = utils::spinner(&format!("Searching for '{query}'..."));
    let result = client.search(&query, types, limit, offset).await;
    pb.finish_and_clear();

    let results = match result {
        Ok(results) => results,
        Err(e) => error!("Search failed. Err: {}", e),
    };

    let mut printed = false;
    if let Some(page) = results.artists.as_ref().filter(|p| !p.is_empty()) {
        info!("Artists ({} total)", page.total);
        println!("{}", Table::new(page.iter().map(artist_row)));
        printed = true;
    }
    if let Some(page) = results.albums.as_ref().filter(|p| !p.is_empty()) {
        info!("Albums ({} total)", page.total);
        println!("{}", Table::new(page.iter().map(album_row)));
        printed = true;
    }
    if let Some(page) = results.tracks.as_ref().filter(|p| !p.is_empty()) {
        info!("Tracks ({} total)", page.total);
        println!("{}", Table::new(page.iter().map(track_row)));
        printed = true;
    }
    if let Some(page) = results.playlists.as_ref().filter(|p| !p.is_empty()) {
        info!("Playlists ({} total)", page.total);
        println!("{}", Table::new(page.iter().map(playlist_row)));
        printed = true;
    }

    if !printed {
        warning!("Nothing found for '{}'", query);
    }
}
