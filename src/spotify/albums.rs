use tracing::debug;

use crate::{
    entity::{Album, Page, Track},
    error::Result,
    mapper,
    spotify::Client,
    types::{PagingObject, TrackObject},
    utils,
};

impl Client {
    /// Retrieves a full album, including the first page of its tracks.
    pub async fn get_album(&self, id: &str) -> Result<Album> {
        debug!("Fetching album {}", id);
        self.get_by_id(id).await
    }

    /// Retrieves 1 to 50 albums in one request; unknown ids yield `None`.
    pub async fn get_albums<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<Option<Album>>> {
        debug!("Fetching {} albums", ids.len());
        self.get_bulk(ids).await
    }

    /// One page of an album's tracks, as track stubs.
    ///
    /// `limit` must be within 1..=50; it is checked before any request.
    pub async fn get_album_tracks(&self, id: &str, limit: u32, offset: u32) -> Result<Page<Track>> {
        utils::validate_id(id)?;
        utils::validate_limit(limit)?;
        debug!("Fetching tracks of album {} (limit={}, offset={})", id, limit, offset);
        let endpoint = format!("albums/{}/tracks", utils::encode_component(id));
        let paging: PagingObject<TrackObject> = self
            .get(
                &endpoint,
                &[("limit", limit.to_string()), ("offset", offset.to_string())],
            )
            .await?;
        Ok(mapper::page(paging, &self.fetcher(), None))
    }
}
