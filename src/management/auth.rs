use chrono::Utc;
use reqwest::Client;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::{
    error::{Error, Result},
    spotify::auth::{AuthorizationSet, Authorizer},
    utils,
};

/// Owns the current [`AuthorizationSet`] and renews it when needed.
///
/// The set lives behind an async mutex that stays locked for the whole
/// check → authorize → replace sequence. Concurrent callers that find the
/// token expired wait for the first renewal and then see its result, so a
/// single token exchange serves all of them.
pub struct TokenManager {
    authorizer: Authorizer,
    token_url: String,
    current: Mutex<Option<AuthorizationSet>>,
}

impl TokenManager {
    pub fn new(authorizer: Authorizer, token_url: impl Into<String>) -> Self {
        TokenManager {
            authorizer,
            token_url: token_url.into(),
            current: Mutex::new(None),
        }
    }

    pub fn authorizer(&self) -> &Authorizer {
        &self.authorizer
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    /// Returns a usable authorization set, renewing it first if there is none,
    /// its token is empty or its expiry is at or before now.
    ///
    /// The flag is `true` when a renewal took place during this call.
    pub async fn get_valid_token(
        &self,
        http: &Client,
        cancel: &CancellationToken,
    ) -> Result<(bool, AuthorizationSet)> {
        let mut current = utils::cancellable(cancel, async {
            Ok::<_, Error>(self.current.lock().await)
        })
        .await?;

        if let Some(set) = current.as_ref() {
            if !Self::is_expired(set) {
                return Ok((false, set.clone()));
            }
            debug!("Access token expired at {}", set.expiration_time());
        }

        let renewed =
            utils::cancellable(cancel, self.authorizer.authorize(http, &self.token_url)).await?;
        info!(
            "Obtained new access token, valid until {}",
            renewed.expiration_time()
        );
        *current = Some(renewed.clone());

        Ok((true, renewed))
    }

    /// Header value for catalog requests, renewing the token when needed.
    pub async fn authorization_header(
        &self,
        http: &Client,
        cancel: &CancellationToken,
    ) -> Result<String> {
        let (_, set) = self.get_valid_token(http, cancel).await?;
        Ok(self.authorizer.render_auth_header(&set))
    }

    /// Snapshot of the stored set, if any.
    pub async fn current_token(&self) -> Option<AuthorizationSet> {
        self.current.lock().await.clone()
    }

    /// Drops the stored set so the next request authorizes again.
    pub async fn invalidate(&self) {
        *self.current.lock().await = None;
    }

    fn is_expired(set: &AuthorizationSet) -> bool {
        !set.is_valid_at(Utc::now())
    }
}
