use tracing::debug;

use crate::{
    entity::{Album, Artist, Page, Track},
    error::Result,
    mapper,
    spotify::Client,
    types::{AlbumObject, PagingObject, RelatedArtistsResponse, TopTracksResponse},
    utils,
};

impl Client {
    /// Retrieves a full artist.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`](crate::Error::NotFound) for an unknown id
    /// - [`Error::Http`](crate::Error::Http) for any other non-success status
    /// - [`Error::AuthFailure`](crate::Error::AuthFailure) if no token could be obtained
    pub async fn get_artist(&self, id: &str) -> Result<Artist> {
        debug!("Fetching artist {}", id);
        self.get_by_id(id).await
    }

    /// Retrieves 1 to 50 artists in one request.
    ///
    /// The result has exactly one entry per id, in the same order, duplicates
    /// included. Ids the service does not know yield `None`.
    pub async fn get_artists<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<Option<Artist>>> {
        debug!("Fetching {} artists", ids.len());
        self.get_bulk(ids).await
    }

    /// Artists similar to the given one, as full entities.
    pub async fn get_related_artists(&self, id: &str) -> Result<Vec<Artist>> {
        utils::validate_id(id)?;
        debug!("Fetching artists related to {}", id);
        let endpoint = format!("artists/{}/related-artists", utils::encode_component(id));
        let response: RelatedArtistsResponse = self.get(&endpoint, &[]).await?;
        let fetcher = self.fetcher();
        Ok(response
            .artists
            .into_iter()
            .map(|a| mapper::artist(a, &fetcher))
            .collect())
    }

    /// Most popular tracks of an artist in `market` (ISO 3166-1 alpha-2).
    pub async fn get_artist_top_tracks(&self, id: &str, market: &str) -> Result<Vec<Track>> {
        utils::validate_id(id)?;
        debug!("Fetching top tracks of {} in {}", id, market);
        let endpoint = format!("artists/{}/top-tracks", utils::encode_component(id));
        let response: TopTracksResponse = self
            .get(&endpoint, &[("market", market.to_string())])
            .await?;
        let fetcher = self.fetcher();
        Ok(response
            .tracks
            .into_iter()
            .map(|t| mapper::track(t, &fetcher))
            .collect())
    }

    /// One page of an artist's albums, as album stubs.
    pub async fn get_artist_albums(&self, id: &str, limit: u32, offset: u32) -> Result<Page<Album>> {
        utils::validate_id(id)?;
        utils::validate_limit(limit)?;
        debug!("Fetching albums of {} (limit={}, offset={})", id, limit, offset);
        let endpoint = format!("artists/{}/albums", utils::encode_component(id));
        let paging: PagingObject<AlbumObject> = self
            .get(
                &endpoint,
                &[("limit", limit.to_string()), ("offset", offset.to_string())],
            )
            .await?;
        Ok(mapper::page(paging, &self.fetcher(), None))
    }
}
