//! Translation of catalog payloads into typed entities.
//!
//! Everything in this module is pure: the same payload and [`Fetcher`] always
//! produce the same entity, and nothing here performs I/O. Unknown JSON fields
//! are ignored.
//!
//! Whether an entity is full or a stub is decided from fields that only the
//! full representation carries:
//!
//! - artist: `popularity`, `genres` or `followers`
//! - album: `tracks`, `label` or `popularity`
//! - track: `popularity`

use serde::de::Error as _;
use serde_json::Value;

use crate::{
    entity::{
        Album, Artist, Completeness, FromPayload, Fetcher, Image, Page, PlaylistSummary,
        SearchResults, SearchType, Track,
    },
    error::Result,
    types::{
        AlbumObject, ArtistObject, ImageObject, PagingObject, PlaylistObject,
        SearchResponse, TrackObject,
    },
};

fn completeness(full: bool) -> Completeness {
    if full {
        Completeness::Full
    } else {
        Completeness::Partial
    }
}

fn images(images: Option<Vec<ImageObject>>) -> Vec<Image> {
    images
        .unwrap_or_default()
        .into_iter()
        .map(Image::from)
        .collect()
}

pub fn artist_completeness(payload: &ArtistObject) -> Completeness {
    completeness(
        payload.popularity.is_some() || payload.genres.is_some() || payload.followers.is_some(),
    )
}

pub fn album_completeness(payload: &AlbumObject) -> Completeness {
    completeness(
        payload.tracks.is_some() || payload.label.is_some() || payload.popularity.is_some(),
    )
}

pub fn track_completeness(payload: &TrackObject) -> Completeness {
    completeness(payload.popularity.is_some())
}

pub fn artist(payload: ArtistObject, fetcher: &Fetcher) -> Artist {
    let completeness = artist_completeness(&payload);
    Artist {
        id: payload.id,
        name: payload.name,
        href: payload.href,
        uri: payload.uri,
        external_url: payload.external_urls.and_then(|u| u.spotify),
        genres: payload.genres.unwrap_or_default(),
        popularity: payload.popularity,
        followers: payload.followers.map(|f| f.total),
        images: images(payload.images),
        completeness,
        fetcher: fetcher.clone(),
    }
}

pub fn album(payload: AlbumObject, fetcher: &Fetcher) -> Album {
    let completeness = album_completeness(&payload);
    Album {
        id: payload.id,
        name: payload.name,
        href: payload.href,
        uri: payload.uri,
        external_url: payload.external_urls.and_then(|u| u.spotify),
        album_type: payload.album_type,
        release_date: payload.release_date,
        release_date_precision: payload.release_date_precision,
        total_tracks: payload.total_tracks,
        artists: payload
            .artists
            .into_iter()
            .map(|a| artist(a, fetcher))
            .collect(),
        images: images(payload.images),
        genres: payload.genres.unwrap_or_default(),
        label: payload.label,
        popularity: payload.popularity,
        tracks: payload.tracks.map(|t| page(t, fetcher, None)),
        completeness,
        fetcher: fetcher.clone(),
    }
}

pub fn track(payload: TrackObject, fetcher: &Fetcher) -> Track {
    let completeness = track_completeness(&payload);
    Track {
        id: payload.id,
        name: payload.name,
        href: payload.href,
        uri: payload.uri,
        external_url: payload.external_urls.and_then(|u| u.spotify),
        duration_ms: payload.duration_ms,
        explicit: payload.explicit.unwrap_or(false),
        track_number: payload.track_number,
        disc_number: payload.disc_number,
        preview_url: payload.preview_url,
        popularity: payload.popularity,
        artists: payload
            .artists
            .into_iter()
            .map(|a| artist(a, fetcher))
            .collect(),
        album: payload.album.map(|a| album(*a, fetcher)),
        completeness,
        fetcher: fetcher.clone(),
    }
}

pub fn playlist(payload: PlaylistObject) -> PlaylistSummary {
    let owner = payload
        .owner
        .map(|o| o.display_name.unwrap_or(o.id));
    PlaylistSummary {
        id: payload.id,
        name: payload.name,
        href: payload.href,
        uri: payload.uri,
        description: payload.description.filter(|d| !d.is_empty()),
        owner,
        public: payload.public,
        total_tracks: payload.tracks.map(|t| t.total),
        images: images(payload.images),
    }
}

/// Builds a page, decoding each item with `T`'s own mapper.
///
/// `wrapper` names the key the page is nested under when its cursors are
/// followed (search results come back as `{"tracks": {...}}`).
pub fn page<T: FromPayload>(
    paging: PagingObject<T::Payload>,
    fetcher: &Fetcher,
    wrapper: Option<&'static str>,
) -> Page<T> {
    Page {
        items: paging
            .items
            .into_iter()
            .map(|item| T::from_payload(item, fetcher))
            .collect(),
        total: paging.total,
        limit: paging.limit,
        offset: paging.offset,
        href: paging.href,
        next: paging.next,
        previous: paging.previous,
        wrapper,
        fetcher: fetcher.clone(),
    }
}

/// Keeps one slot per requested id: `null` entries become `None`, duplicates
/// and order are preserved.
pub fn bulk<T: FromPayload>(entities: Vec<Option<T::Payload>>, fetcher: &Fetcher) -> Vec<Option<T>> {
    entities
        .into_iter()
        .map(|entity| entity.map(|e| T::from_payload(e, fetcher)))
        .collect()
}

/// Keeps only the categories that were requested; anything else the service
/// returned is dropped.
pub fn search(payload: SearchResponse, requested: SearchType, fetcher: &Fetcher) -> SearchResults {
    SearchResults {
        tracks: payload
            .tracks
            .filter(|_| requested.contains(SearchType::TRACK))
            .map(|p| page(p, fetcher, Some("tracks"))),
        albums: payload
            .albums
            .filter(|_| requested.contains(SearchType::ALBUM))
            .map(|p| page(p, fetcher, Some("albums"))),
        artists: payload
            .artists
            .filter(|_| requested.contains(SearchType::ARTIST))
            .map(|p| page(p, fetcher, Some("artists"))),
        playlists: payload
            .playlists
            .filter(|_| requested.contains(SearchType::PLAYLIST))
            .map(|p| page(p, fetcher, Some("playlists"))),
    }
}

/// Decodes one entity from a JSON object.
pub fn from_value<T: FromPayload>(value: Value, fetcher: &Fetcher) -> Result<T> {
    let payload: T::Payload = serde_json::from_value(value)?;
    Ok(T::from_payload(payload, fetcher))
}

/// Decodes a paging object, unwrapping it from `wrapper` first when given.
pub fn page_from_value<T: FromPayload>(
    value: Value,
    fetcher: &Fetcher,
    wrapper: Option<&'static str>,
) -> Result<Page<T>> {
    let value = match wrapper {
        Some(key) => unwrap_key(value, key)?,
        None => value,
    };
    let paging: PagingObject<T::Payload> = serde_json::from_value(value)?;
    Ok(page(paging, fetcher, wrapper))
}

/// Decodes a several-ids response whose entries sit under `key`.
pub fn bulk_from_value<T: FromPayload>(
    value: Value,
    key: &'static str,
    fetcher: &Fetcher,
) -> Result<Vec<Option<T>>> {
    let entities: Vec<Option<T::Payload>> = serde_json::from_value(unwrap_key(value, key)?)?;
    Ok(bulk(entities, fetcher))
}

fn unwrap_key(value: Value, key: &'static str) -> Result<Value> {
    match value {
        Value::Object(mut map) => Ok(map
            .remove(key)
            .ok_or_else(|| serde_json::Error::missing_field(key))?),
        _ => Err(serde_json::Error::custom("expected a JSON object").into()),
    }
}
