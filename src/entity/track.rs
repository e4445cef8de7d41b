use super::{CatalogEntity, Completeness, EntityKind, Fetcher, FromPayload};
use crate::{
    entity::{Album, Artist},
    error::Result,
    mapper,
    types::TrackObject,
};

#[derive(Debug, Clone)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub href: Option<String>,
    pub uri: Option<String>,
    pub external_url: Option<String>,
    pub duration_ms: Option<u64>,
    pub explicit: bool,
    pub track_number: Option<u32>,
    pub disc_number: Option<u32>,
    pub preview_url: Option<String>,
    pub popularity: Option<u32>,
    /// Artist stubs.
    pub artists: Vec<Artist>,
    /// Album stub; absent when the track is listed inside its album.
    pub album: Option<Album>,
    pub(crate) completeness: Completeness,
    pub(crate) fetcher: Fetcher,
}

impl Track {
    pub async fn upgrade(&self) -> Result<Track> {
        super::upgrade(self, &self.fetcher).await
    }

    /// Fetches the full album this track belongs to.
    ///
    /// A stub listed inside an album does not know its album; it is upgraded
    /// first, which costs one more request.
    pub async fn full_album(&self) -> Result<Option<Album>> {
        let album = match &self.album {
            Some(album) => album.clone(),
            None => match self.upgrade().await?.album {
                Some(album) => album,
                None => return Ok(None),
            },
        };
        album.upgrade().await.map(Some)
    }

    pub fn artist_names(&self) -> Vec<&str> {
        self.artists.iter().map(|a| a.name.as_str()).collect()
    }

    /// Duration formatted as `m:ss`.
    pub fn duration(&self) -> Option<String> {
        self.duration_ms.map(|ms| {
            let seconds = ms / 1000;
            format!("{}:{:02}", seconds / 60, seconds % 60)
        })
    }

    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }
}

impl FromPayload for Track {
    type Payload = TrackObject;

    fn from_payload(payload: TrackObject, fetcher: &Fetcher) -> Self {
        mapper::track(payload, fetcher)
    }
}

impl CatalogEntity for Track {
    const KIND: EntityKind = EntityKind::Track;

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
