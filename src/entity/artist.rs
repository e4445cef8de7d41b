use super::{CatalogEntity, Completeness, EntityKind, Fetcher, FromPayload, Image, Page};
use crate::{
    entity::{Album, Track},
    error::Result,
    mapper,
    types::ArtistObject,
};

#[derive(Debug, Clone)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub href: Option<String>,
    pub uri: Option<String>,
    pub external_url: Option<String>,
    /// Empty on stubs.
    pub genres: Vec<String>,
    pub popularity: Option<u32>,
    pub followers: Option<u64>,
    pub images: Vec<Image>,
    pub(crate) completeness: Completeness,
    pub(crate) fetcher: Fetcher,
}

impl Artist {
    /// Fetches the full artist if this is a stub.
    pub async fn upgrade(&self) -> Result<Artist> {
        super::upgrade(self, &self.fetcher).await
    }

    pub async fn related(&self) -> Result<Vec<Artist>> {
        self.fetcher.client()?.get_related_artists(&self.id).await
    }

    pub async fn top_tracks(&self, market: &str) -> Result<Vec<Track>> {
        self.fetcher
            .client()?
            .get_artist_top_tracks(&self.id, market)
            .await
    }

    pub async fn albums(&self, limit: u32, offset: u32) -> Result<Page<Album>> {
        self.fetcher
            .client()?
            .get_artist_albums(&self.id, limit, offset)
            .await
    }

    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }
}

impl FromPayload for Artist {
    type Payload = ArtistObject;

    fn from_payload(payload: ArtistObject, fetcher: &Fetcher) -> Self {
        mapper::artist(payload, fetcher)
    }
}

impl CatalogEntity for Artist {
    const KIND: EntityKind = EntityKind::Artist;

    fn id(&self) -> &str {
        &self.id
    }

    fn completeness(&self) -> Completeness {
        self.completeness
    }

    fn into_full(self) -> Self {
        Self {
            completeness: Completeness::Full,
            ..self
        }
    }
}
