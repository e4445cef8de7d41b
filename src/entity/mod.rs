//! # Catalog entities
//!
//! Typed snapshots of the objects returned by the catalog endpoints. Every
//! entity is immutable once built; fetching again produces an independent
//! value.
//!
//! An entity decoded from a reference embedded in a larger payload (the artists
//! of a track, the tracks of an album) carries only a handful of fields. Such a
//! value reports [`Completeness::Partial`] and can be upgraded to its full
//! representation with one additional request through the [`Fetcher`] it was
//! built with.
//!
//! The [`Fetcher`] holds a weak reference to the client that produced the
//! entity. Once every [`Client`] handle has been dropped, upgrades and page
//! walks fail with [`Error::ClientDropped`].

mod album;
mod artist;
mod paging;
mod playlist;
mod search;
mod track;

use std::{
    fmt,
    sync::{Arc, Weak},
};

use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use crate::{
    error::{Error, Result},
    spotify::{Client, client::ClientInner},
    types::ImageObject,
};

pub use album::Album;
pub use artist::Artist;
pub use paging::{Page, PageDirection};
pub use playlist::PlaylistSummary;
pub use search::{SearchResults, SearchType};
pub use track::Track;

/// Whether an entity carries its full representation or only the reference
/// fields embedded in another payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completeness {
    Full,
    Partial,
}

/// Entity categories that can be fetched by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Artist,
    Album,
    Track,
}

impl EntityKind {
    /// Endpoint path segment, also the key wrapping bulk responses.
    pub fn path(&self) -> &'static str {
        match self {
            EntityKind::Artist => "artists",
            EntityKind::Album => "albums",
            EntityKind::Track => "tracks",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Artist => "artist",
            EntityKind::Album => "album",
            EntityKind::Track => "track",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl From<ImageObject> for Image {
    fn from(image: ImageObject) -> Self {
        Self {
            url: image.url,
            width: image.width,
            height: image.height,
        }
    }
}

/// Types built from a wire payload plus the fetch capability.
pub trait FromPayload: Sized {
    type Payload: DeserializeOwned;

    fn from_payload(payload: Self::Payload, fetcher: &Fetcher) -> Self;
}

/// Entities addressable by id through the catalog endpoints.
pub trait CatalogEntity: FromPayload + Clone {
    const KIND: EntityKind;

    fn id(&self) -> &str;

    fn completeness(&self) -> Completeness;

    /// Marks the entity as carrying its full representation. Applied to the
    /// bodies of by-id and several-ids lookups, which always return one.
    fn into_full(self) -> Self;

    fn is_partial(&self) -> bool {
        self.completeness() == Completeness::Partial
    }

    fn is_full(&self) -> bool {
        self.completeness() == Completeness::Full
    }
}

/// Capability injected into entities so they can issue follow-up requests.
///
/// It does not keep the client alive.
#[derive(Clone)]
pub struct Fetcher {
    inner: Weak<ClientInner>,
    cancel: CancellationToken,
}

impl Fetcher {
    pub(crate) fn new(inner: &Arc<ClientInner>, cancel: &CancellationToken) -> Self {
        Self {
            inner: Arc::downgrade(inner),
            cancel: cancel.clone(),
        }
    }

    /// A fetcher bound to nothing. Every request through it fails with
    /// [`Error::ClientDropped`]; used when mapping payloads offline.
    pub fn detached() -> Self {
        Self {
            inner: Weak::new(),
            cancel: CancellationToken::new(),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.inner.strong_count() > 0
    }

    /// Recovers a client handle, or fails if the client is gone.
    pub fn client(&self) -> Result<Client> {
        self.inner
            .upgrade()
            .map(|inner| Client::from_parts(inner, self.cancel.clone()))
            .ok_or(Error::ClientDropped)
    }
}

impl fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fetcher")
            .field("attached", &self.is_attached())
            .finish()
    }
}

/// Returns `entity` itself when full, otherwise fetches it by id.
pub(crate) async fn upgrade<T: CatalogEntity>(entity: &T, fetcher: &Fetcher) -> Result<T> {
    if entity.is_full() {
        return Ok(entity.clone());
    }
    fetcher.client()?.get_by_id::<T>(entity.id()).await
}
