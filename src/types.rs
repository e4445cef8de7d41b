use serde::{Deserialize, Deserializer, Serialize};
use tabled::Tabled;

/// Drops `null` entries from a paging `items` array. Search results may
/// contain them for content that is no longer available.
fn skip_null_items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items: Vec<Option<T>> = Vec::deserialize(deserializer)?;
    Ok(items.into_iter().flatten().collect())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageObject {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Followers {
    pub total: u64,
}

/// Artist as returned by `/artists/{id}`, or embedded as a stub in albums and
/// tracks. Only `id` is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistObject {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub href: Option<String>,
    pub uri: Option<String>,
    pub external_urls: Option<ExternalUrls>,
    pub genres: Option<Vec<String>>,
    pub popularity: Option<u32>,
    pub followers: Option<Followers>,
    pub images: Option<Vec<ImageObject>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumObject {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub href: Option<String>,
    pub uri: Option<String>,
    pub external_urls: Option<ExternalUrls>,
    pub album_type: Option<String>,
    pub release_date: Option<String>,
    pub release_date_precision: Option<String>,
    pub total_tracks: Option<u32>,
    #[serde(default)]
    pub artists: Vec<ArtistObject>,
    pub images: Option<Vec<ImageObject>>,
    pub genres: Option<Vec<String>>,
    pub label: Option<String>,
    pub popularity: Option<u32>,
    pub tracks: Option<PagingObject<TrackObject>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackObject {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub href: Option<String>,
    pub uri: Option<String>,
    pub external_urls: Option<ExternalUrls>,
    pub duration_ms: Option<u64>,
    pub explicit: Option<bool>,
    pub track_number: Option<u32>,
    pub disc_number: Option<u32>,
    pub preview_url: Option<String>,
    pub popularity: Option<u32>,
    #[serde(default)]
    pub artists: Vec<ArtistObject>,
    pub album: Option<Box<AlbumObject>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerObject {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksRef {
    pub href: Option<String>,
    #[serde(default)]
    pub total: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistObject {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub href: Option<String>,
    pub uri: Option<String>,
    pub description: Option<String>,
    pub owner: Option<OwnerObject>,
    pub public: Option<bool>,
    pub tracks: Option<PlaylistTracksRef>,
    pub images: Option<Vec<ImageObject>>,
}

/// Spotify paging object. `next` and `previous` are kept as raw URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagingObject<T> {
    #[serde(
        deserialize_with = "skip_null_items",
        bound(deserialize = "T: Deserialize<'de>")
    )]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
    pub href: Option<String>,
    pub next: Option<String>,
    pub previous: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedArtistsResponse {
    pub artists: Vec<ArtistObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    pub tracks: Vec<TrackObject>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: Option<PagingObject<TrackObject>>,
    pub albums: Option<PagingObject<AlbumObject>>,
    pub artists: Option<PagingObject<ArtistObject>>,
    pub playlists: Option<PagingObject<PlaylistObject>>,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub id: String,
    pub name: String,
    pub genres: String,
    pub popularity: String,
}

#[derive(Tabled)]
pub struct AlbumTableRow {
    pub id: String,
    pub name: String,
    pub artists: String,
    pub released: String,
    pub tracks: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub id: String,
    pub name: String,
    pub artists: String,
    pub duration: String,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub tracks: String,
}
