use super::{CatalogEntity, Completeness, EntityKind, Fetcher, FromPayload, Image, Page};
use crate::{
    entity::{Artist, Track},
    error::Result,
    mapper,
    types::AlbumObject,
};

#[derive(Debug, Clone)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub href: Option<String>,
    pub uri: Option<String>,
    pub external_url: Option<String>,
    pub album_type: Option<String>,
    pub release_date: Option<String>,
    pub release_date_precision: Option<String>,
    pub total_tracks: Option<u32>,
    /// Artist stubs.
    pub artists: Vec<Artist>,
    pub images: Vec<Image>,
    pub genres: Vec<String>,
    pub label: Option<String>,
    pub popularity: Option<u32>,
    /// First page of track stubs; only present on full albums.
    pub tracks: Option<Page<Track>>,
    pub(crate) completeness: Completeness,
    pub(crate) fetcher: Fetcher,
}

impl Album {
    pub async fn upgrade(&self) -> Result<Album> {
        super::upgrade(self, &self.fetcher).await
    }

    /// The embedded first track page, fetching it when this album is a stub.
    pub async fn tracks_page(&self) -> Result<Page<Track>> {
        match &self.tracks {
            Some(page) => Ok(page.clone()),
            None => self.fetch_tracks(20, 0).await,
        }
    }

    pub async fn fetch_tracks(&self, limit: u32, offset: u32) -> Result<Page<Track>> {
        self.fetcher
            .client()?
            .get_album_tracks(&self.id, limit, offset)
            .await
    }

    pub fn artist_names(&self) -> Vec<&str> {
        self.artists.iter().map(|a| a.name.as_str()).collect()
    }

    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }
}

impl FromPayload for Album {
    type Payload = AlbumObject;

    fn from_payload(payload: AlbumObject, fetcher: &Fetcher) -> Self {
        mapper::album(payload, fetcher)
    }
}

impl CatalogEntity for Album {
    const KIND: EntityKind = EntityKind::Album;

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
