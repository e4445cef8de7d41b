use std::sync::Arc;

use reqwest::header::AUTHORIZATION;
use serde::de::{DeserializeOwned, Error as _};
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::{
    config,
    entity::{CatalogEntity, Fetcher, FromPayload, Page, PageDirection},
    error::{Error, Result},
    management::TokenManager,
    mapper,
    spotify::auth::{AuthorizationSet, Authorizer},
    utils,
};

pub(crate) struct ClientInner {
    http: reqwest::Client,
    api_base: String,
    tokens: TokenManager,
}

/// Entry point to the catalog.
///
/// Cloning is cheap: clones share the transport and the authorization state.
/// Every catalog call first makes sure a valid token is held (renewing it at
/// most once), then performs exactly one GET. Nothing is retried.
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
    cancel: CancellationToken,
}

impl Client {
    /// Client-credentials client from a separate id and secret.
    pub fn new(client_id: &str, client_secret: &str) -> Result<Self> {
        ClientBuilder::new(Authorizer::client_credentials(client_id, client_secret)?).build()
    }

    /// Client-credentials client from a combined `"id:secret"` string.
    pub fn from_combined(credentials: &str) -> Result<Self> {
        ClientBuilder::new(Authorizer::from_combined(credentials)?).build()
    }

    /// Client configured from the environment, see [`config`].
    pub fn from_env() -> Result<Self> {
        ClientBuilder::from_env()?.build()
    }

    pub fn builder(authorizer: Authorizer) -> ClientBuilder {
        ClientBuilder::new(authorizer)
    }

    pub(crate) fn from_parts(inner: Arc<ClientInner>, cancel: CancellationToken) -> Self {
        Client { inner, cancel }
    }

    /// A handle sharing this client's state whose requests stop with
    /// [`Error::Cancelled`] once `cancel` fires.
    pub fn with_cancellation(&self, cancel: CancellationToken) -> Client {
        Client {
            inner: Arc::clone(&self.inner),
            cancel,
        }
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    pub fn api_base(&self) -> &str {
        &self.inner.api_base
    }

    /// Renews the token when there is none or it has expired.
    ///
    /// Returns `true` when a token exchange took place.
    pub async fn ensure_authorized(&self) -> Result<bool> {
        let (renewed, _) = self
            .inner
            .tokens
            .get_valid_token(&self.inner.http, &self.cancel)
            .await?;
        Ok(renewed)
    }

    /// The authorization set currently held, without renewing it.
    pub async fn authorization(&self) -> Option<AuthorizationSet> {
        self.inner.tokens.current_token().await
    }

    /// Forgets the held token; the next call authorizes again.
    pub async fn invalidate_authorization(&self) {
        self.inner.tokens.invalidate().await
    }

    pub(crate) fn fetcher(&self) -> Fetcher {
        Fetcher::new(&self.inner, &self.cancel)
    }

    /// Fetches a single full entity.
    pub async fn get_by_id<T: CatalogEntity>(&self, id: &str) -> Result<T> {
        utils::validate_id(id)?;
        let endpoint = format!("{}/{}", T::KIND.path(), utils::encode_component(id));
        let payload: T::Payload = self.get(&endpoint, &[]).await?;
        Ok(T::from_payload(payload, &self.fetcher()).into_full())
    }

    /// Fetches 1 to 50 entities at once. The result has one slot per id, in
    /// order; unknown ids yield `None`.
    pub async fn get_bulk<T: CatalogEntity, S: AsRef<str>>(
        &self,
        ids: &[S],
    ) -> Result<Vec<Option<T>>> {
        utils::validate_ids(ids)?;
        let value: Value = self
            .get(T::KIND.path(), &[("ids", utils::join_ids(ids))])
            .await?;
        let entities: Vec<Option<T>> =
            mapper::bulk_from_value(value, T::KIND.path(), &self.fetcher())?;

        if entities.len() != ids.len() {
            warn!(
                "Expected {} {} but got {} entries",
                ids.len(),
                T::KIND.path(),
                entities.len()
            );
            return Err(
                serde_json::Error::invalid_length(entities.len(), &"one entry per requested id")
                    .into(),
            );
        }

        Ok(entities
            .into_iter()
            .map(|entity| entity.map(T::into_full))
            .collect())
    }

    /// Follows one of `page`'s cursors.
    pub async fn fetch_page<T: FromPayload>(
        &self,
        page: &Page<T>,
        direction: PageDirection,
    ) -> Result<Option<Page<T>>> {
        let Some(url) = page.cursor(direction) else {
            return Ok(None);
        };
        if !url.starts_with(self.api_base()) {
            return Err(Error::InvalidArgument(format!(
                "cursor {url} does not point at {}",
                self.api_base()
            )));
        }

        let value: Value = self.send(url).await?;
        mapper::page_from_value(value, &self.fetcher(), page.wrapper()).map(Some)
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = utils::build_url(&self.inner.api_base, endpoint, params);
        self.send(&url).await
    }

    async fn send<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let header = self
            .inner
            .tokens
            .authorization_header(&self.inner.http, &self.cancel)
            .await?;

        debug!("GET {}", url);
        let request = self.inner.http.get(url).header(AUTHORIZATION, header);
        let response = utils::cancellable(&self.cancel, async {
            request.send().await.map_err(Error::from)
        })
        .await?;

        let status = response.status();
        debug!("Response status: {}", status);

        let body = utils::cancellable(&self.cancel, async {
            response.text().await.map_err(Error::from)
        })
        .await?;

        if !status.is_success() {
            warn!("API error ({}) for {}: {}", status.as_u16(), url, body);
            return Err(Error::from_status(status.as_u16(), body));
        }

        serde_json::from_str(&body).map_err(|e| {
            warn!("Failed to parse response from {}: {}", url, e);
            Error::Decode(e)
        })
    }
}

/// Configures and builds a [`Client`].
pub struct ClientBuilder {
    authorizer: Authorizer,
    api_base: String,
    token_url: String,
    http: Option<reqwest::Client>,
    cancel: Option<CancellationToken>,
}

impl ClientBuilder {
    pub fn new(authorizer: Authorizer) -> Self {
        ClientBuilder {
            authorizer,
            api_base: config::DEFAULT_API_URL.to_string(),
            token_url: config::DEFAULT_TOKEN_URL.to_string(),
            http: None,
            cancel: None,
        }
    }

    /// Builder seeded with credentials and endpoints from the environment.
    pub fn from_env() -> Result<Self> {
        let authorizer = Authorizer::ClientCredentials(config::credentials()?);
        Ok(ClientBuilder::new(authorizer)
            .api_base(config::spotify_apiurl())
            .token_url(config::spotify_apitoken_url()))
    }

    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }

    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    pub fn cancellation_token(mut self, cancel: CancellationToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn build(self) -> Result<Client> {
        let http = match self.http {
            Some(http) => http,
            None => reqwest::Client::builder()
                .user_agent(concat!("spotcat/", env!("CARGO_PKG_VERSION")))
                .build()?,
        };

        Ok(Client {
            inner: Arc::new(ClientInner {
                http,
                api_base: self.api_base,
                tokens: TokenManager::new(self.authorizer, self.token_url),
            }),
            cancel: self.cancel.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = Client::new("id", "secret").unwrap();
        assert_eq!(client.api_base(), "https://api.spotify.com/v1");
        assert_eq!(
            client.inner.tokens.token_url(),
            "https://accounts.spotify.com/api/token"
        );
    }

    #[test]
    fn test_builder_trims_api_base() {
        let client = Client::builder(Authorizer::from_combined("id:secret").unwrap())
            .api_base("http://localhost:1234/v1/")
            .build()
            .unwrap();
        assert_eq!(client.api_base(), "http://localhost:1234/v1");
    }

    #[test]
    fn test_fetcher_follows_client_lifetime() {
        let client = Client::new("id", "secret").unwrap();
        let fetcher = client.fetcher();
        assert!(fetcher.is_attached());

        drop(client);
        assert!(!fetcher.is_attached());
        assert!(matches!(fetcher.client(), Err(Error::ClientDropped)));
    }

    #[tokio::test]
    async fn test_get_bulk_validates_before_io() {
        let client = Client::new("id", "secret").unwrap();
        let none: [&str; 0] = [];
        let result = client.get_bulk::<crate::entity::Artist, _>(&none).await;
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
        assert!(client.authorization().await.is_none());
    }
}
