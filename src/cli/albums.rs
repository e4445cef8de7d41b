use tabled::Table;
use tokio_util::sync::CancellationToken;

use super::{album_row, connect, report_missing, track_row};
use crate::{entity::PageDirection, error, info, utils};

pub async fn album(id: String, cancel: &CancellationToken) {
    let client = connect(cancel);
    let pb = utils::spinner("Fetching album...");
    let result = client.get_album(&id).await;
    pb.finish_and_clear();

    let album = match result {
        Ok(album) => album,
        Err(e) => error!("Cannot fetch album {}. Err: {}", id, e),
    };

    println!("{}", Table::new([album_row(&album)]));
    if let Some(label) = &album.label {
        info!("Label: {}", label);
    }
    if let Some(tracks) = &album.tracks {
        println!("{}", Table::new(tracks.iter().map(track_row)));
        if tracks.has_next() {
            info!(
                "Showing {} of {} tracks, use album-tracks --offset {} for more",
                tracks.len(),
                tracks.total,
                tracks.offset + tracks.limit
            );
        }
    }
}

pub async fn albums(ids: Vec<String>, cancel: &CancellationToken) {
    let client = connect(cancel);
    let pb = utils::spinner("Fetching albums...");
    let result = client.get_albums(&ids).await;
    pb.finish_and_clear();

    match result {
        Ok(albums) => {
            report_missing(&ids, &albums);
            println!("{}", Table::new(albums.iter().flatten().map(album_row)));
        }
        Err(e) => error!("Cannot fetch albums. Err: {}", e),
    }
}

/// Prints one page of tracks, or every page from `offset` on when `all` is set.
pub async fn album_tracks(
    id: String,
    limit: u32,
    offset: u32,
    all: bool,
    cancel: &CancellationToken,
) {
    let client = connect(cancel);
    let pb = utils::spinner("Fetching album tracks...");

    let mut page = match client.get_album_tracks(&id, limit, offset).await {
        Ok(page) => page,
        Err(e) => {
            pb.finish_and_clear();
            error!("Cannot fetch tracks of album {}. Err: {}", id, e)
        }
    };
    let mut tracks = page.items.clone();

    while all && page.has_next() {
        match page.fetch_page(PageDirection::Next).await {
            Ok(Some(next)) => {
                tracks.extend(next.items.iter().cloned());
                page = next;
            }
            Ok(None) => break,
            Err(e) => {
                pb.finish_and_clear();
                error!("Cannot fetch next page of album {}. Err: {}", id, e)
            }
        }
    }
    pb.finish_and_clear();

    println!("{}", Table::new(tracks.iter().map(track_row)));
    info!("{} of {} tracks", tracks.len(), page.total);
}
