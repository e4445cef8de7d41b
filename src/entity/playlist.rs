use super::{Fetcher, FromPayload, Image};
use crate::{mapper, types::PlaylistObject};

/// Playlist as listed in search results.
#[derive(Debug, Clone)]
pub struct PlaylistSummary {
    pub id: String,
    pub name: String,
    pub href: Option<String>,
    pub uri: Option<String>,
    pub description: Option<String>,
    /// Display name of the owner, or the owner's id when it has none.
    pub owner: Option<String>,
    pub public: Option<bool>,
    pub total_tracks: Option<u32>,
    pub images: Vec<Image>,
}

impl FromPayload for PlaylistSummary {
    type Payload = PlaylistObject;

    fn from_payload(payload: PlaylistObject, _fetcher: &Fetcher) -> Self {
        mapper::playlist(payload)
    }
}
