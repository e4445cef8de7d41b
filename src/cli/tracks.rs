use tabled::Table;
use tokio_util::sync::CancellationToken;

use super::{album_row, connect, report_missing, track_row};
use crate::{error, info, utils};

pub async fn track(id: String, cancel: &CancellationToken) {
    let client = connect(cancel);
    let pb = utils::spinner("Fetching track...");
    let result = client.get_track(&id).await;
    pb.finish_and_clear();

    match result {
        Ok(track) => {
            println!("{}", Table::new([track_row(&track)]));
            if let Some(album) = &track.album {
                info!("From the album:");
                println!("{}", Table::new([album_row(album)]));
            }
            if let Some(popularity) = track.popularity {
                info!("Popularity: {}", popularity);
            }
        }
        Err(e) => error!("Cannot fetch track {}. Err: {}", id, e),
    }
}

pub async fn tracks(ids: Vec<String>, cancel: &CancellationToken) {
    let client = connect(cancel);
    let pb = utils::spinner("Fetching tracks...");
    let result = client.get_tracks(&ids).await;
    pb.finish_and_clear();

    match result {
        Ok(tracks) => {
            report_missing(&ids, &tracks);
            println!("{}", Table::new(tracks.iter().flatten().map(track_row)));
        }
        Err(e) => error!("Cannot fetch tracks. Err: {}", e),
    }
}
