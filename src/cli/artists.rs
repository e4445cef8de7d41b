use tabled::Table;
use tokio_util::sync::CancellationToken;

use super::{artist_row, connect, report_missing};
use crate::{error, info, utils, warning};

pub async fn artist(id: String, cancel: &CancellationToken) {
    let client = connect(cancel);
    let pb = utils::spinner("Fetching artist...");
    let result = client.get_artist(&id).await;
    pb.finish_and_clear();

    match result {
        Ok(artist) => {
            println!("{}", Table::new([artist_row(&artist)]));
            if let Some(followers) = artist.followers {
                info!("{} followers", followers);
            }
        }
        Err(e) => error!("Cannot fetch artist {}. Err: {}", id, e),
    }
}

pub async fn artists(ids: Vec<String>, cancel: &CancellationToken) {
    let client = connect(cancel);
    let pb = utils::spinner("Fetching artists...");
    let result = client.get_artists(&ids).await;
    pb.finish_and_clear();

    match result {
        Ok(artists) => {
            report_missing(&ids, &artists);
            let rows = artists.iter().flatten().map(artist_row);
            println!("{}", Table::new(rows));
        }
        Err(e) => error!("Cannot fetch artists. Err: {}", e),
    }
}

pub async fn related(id: String, cancel: &CancellationToken) {
    let client = connect(cancel);
    let pb = utils::spinner("Fetching related artists...");
    let result = client.get_related_artists(&id).await;
    pb.finish_and_clear();

    match result {
        Ok(artists) if artists.is_empty() => warning!("No related artists for {}", id),
        Ok(mut artists) => {
            artists.sort_by(|a, b| b.popularity.cmp(&a.popularity));
            println!("{}", Table::new(artists.iter().map(artist_row)));
        }
        Err(e) => error!("Cannot fetch related artists of {}. Err: {}", id, e),
    }
}
