//! Error type shared by every layer of the catalog client.

use thiserror::Error;

/// Result alias used throughout `spotcat`.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the client.
///
/// Every variant is returned to the caller as-is; nothing is retried.
#[derive(Error, Debug)]
pub enum Error {
    /// Argument rejected before any request was made (id count, limit, query).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The token endpoint could not be reached, refused the credentials or
    /// answered with an unusable payload.
    #[error("Authorization failed: {0}")]
    AuthFailure(String),

    /// Capability advertised by the type system but not implemented.
    #[error("Not supported: {0}")]
    NotSupported(String),

    /// Catalog endpoint answered 404.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Catalog endpoint answered with any other non-success status.
    #[error("HTTP error (status {status}): {body}")]
    Http { status: u16, body: String },

    /// Body is not JSON or does not have the expected shape.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Connection level failure on a catalog request.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The cancellation token fired while the request was in flight.
    #[error("Request cancelled")]
    Cancelled,

    /// An entity or page tried to fetch through a client that no longer exists.
    #[error("The client backing this entity has been dropped")]
    ClientDropped,
}

impl Error {
    /// Builds the error for a non-success catalog response.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        match status {
            404 => Self::NotFound(body.into()),
            _ => Self::Http {
                status,
                body: body.into(),
            },
        }
    }

    /// Returns the HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::NotFound(_) => Some(404),
            Error::Http { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::AuthFailure(_))
            || matches!(self, Error::Http { status: 401, .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}
