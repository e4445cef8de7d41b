use tracing::debug;

use crate::{entity::Track, error::Result, spotify::Client};

impl Client {
    pub async fn get_track(&self, id: &str) -> Result<Track> {
        debug!("Fetching track {}", id);
        self.get_by_id(id).await
    }

    /// Retrieves 1 to 50 tracks in one request; unknown ids yield `None`.
    pub async fn get_tracks<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<Option<Track>>> {
        debug!("Fetching {} tracks", ids.len());
        self.get_bulk(ids).await
    }
}
