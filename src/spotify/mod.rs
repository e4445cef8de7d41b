//! # Spotify Web API client
//!
//! This module implements the catalog side of the Spotify Web API: artists,
//! albums, tracks and search. It owns the authorization lifecycle and the
//! HTTP exchange, and hands response bodies to [`crate::mapper`] to build
//! typed entities.
//!
//! ## Architecture
//!
//! ```text
//! Caller (library user, CLI)
//!          ↓
//! Client (client.rs)
//!     ├── TokenManager: ensure a valid token (single renewal at a time)
//!     ├── GET https://api.spotify.com/v1/<endpoint>
//!     └── mapper: JSON payload → Artist / Album / Track / Page / SearchResults
//!          ↓
//! HTTP Layer (reqwest)
//! ```
//!
//! ## Authentication
//!
//! [`auth`] implements the OAuth2 client-credentials grant. The application
//! posts `grant_type=client_credentials` to the accounts token endpoint with
//! its base64 encoded `id:secret` as Basic authorization and receives a bearer
//! token valid for `expires_in` seconds. The token is renewed transparently on
//! the first call after it expires. The authorization-code grant is declared
//! but refuses construction.
//!
//! ## Endpoint coverage
//!
//! ### Artists
//! - `GET /artists/{id}`, `GET /artists?ids=`
//! - `GET /artists/{id}/related-artists`
//! - `GET /artists/{id}/top-tracks`
//! - `GET /artists/{id}/albums`
//!
//! ### Albums
//! - `GET /albums/{id}`, `GET /albums?ids=`
//! - `GET /albums/{id}/tracks`
//!
//! ### Tracks
//! - `GET /tracks/{id}`, `GET /tracks?ids=`
//!
//! ### Search
//! - `GET /search`
//!
//! Every one of them follows the same template: validate arguments, ensure
//! authorization, perform one GET, map the body. Failures are returned to the
//! caller; there are no retries and no backoff.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let client = Client::new("client-id", "client-secret")?;
//! let album = client.get_album("4aawyAB9vmqN3uQ7FjRGTy").await?;
//! for track in album.tracks_page().await?.iter() {
//!     println!("{} ({})", track.name, track.is_partial());
//! }
//! ```

mod albums;
mod artists;
pub mod auth;
pub(crate) mod client;
mod search;
mod tracks;

pub use auth::{AuthorizationSet, Authorizer, ClientCredentials, Unimplemented};
pub use client::{Client, ClientBuilder};
