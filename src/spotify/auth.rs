use std::fmt;

use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::{DateTime, Duration, Utc};
use reqwest::{Client, header::AUTHORIZATION};
use tracing::{debug, warn};

use crate::{
    error::{Error, Result},
    types::TokenResponse,
};

/// A bearer token together with its type and the instant it stops being valid.
///
/// Created once per successful token exchange and never mutated. A renewal
/// produces a new value which replaces the previous one wholesale.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthorizationSet {
    access_token: String,
    token_type: String,
    expiration_time: DateTime<Utc>,
}

impl AuthorizationSet {
    pub fn new(
        access_token: impl Into<String>,
        token_type: impl Into<String>,
        expiration_time: DateTime<Utc>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: token_type.into(),
            expiration_time,
        }
    }

    /// Builds the set from a token endpoint payload received at `issued_at`.
    ///
    /// The expiry is always `issued_at + expires_in`. A payload without
    /// `access_token` or `expires_in` is rejected as an authorization failure.
    pub fn from_response(response: TokenResponse, issued_at: DateTime<Utc>) -> Result<Self> {
        let access_token = response
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::AuthFailure("token payload lacks access_token".to_string()))?;
        let expires_in = response
            .expires_in
            .ok_or_else(|| Error::AuthFailure("token payload lacks expires_in".to_string()))?;
        let token_type = response
            .token_type
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "Bearer".to_string());

        let expiration_time = Duration::try_seconds(expires_in.max(0))
            .and_then(|lifetime| issued_at.checked_add_signed(lifetime))
            .ok_or_else(|| Error::AuthFailure(format!("expires_in {expires_in} out of range")))?;

        Ok(Self {
            access_token,
            token_type,
            expiration_time,
        })
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    pub fn expiration_time(&self) -> DateTime<Utc> {
        self.expiration_time
    }

    /// A set is usable while its token is non-empty and its expiry lies
    /// strictly after `now`.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        !self.access_token.is_empty() && self.expiration_time > now
    }
}

impl fmt::Debug for AuthorizationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthorizationSet")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("expiration_time", &self.expiration_time)
            .finish()
    }
}

/// Application credentials for the client-credentials grant.
///
/// Only the base64 encoding of `"id:secret"` is kept; it is sent verbatim as the
/// `Basic` authorization of the token request.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    encoded: String,
}

impl ClientCredentials {
    /// Joins `client_id` and `client_secret` with `:` and encodes the result.
    pub fn new(client_id: &str, client_secret: &str) -> Result<Self> {
        if client_id.is_empty() || client_secret.is_empty() {
            return Err(Error::InvalidArgument(
                "client id and client secret must not be empty".to_string(),
            ));
        }
        Self::from_combined(&format!("{client_id}:{client_secret}"))
    }

    /// Accepts an already combined `"id:secret"` string.
    ///
    /// The content is not inspected; bad credentials surface as a rejection from
    /// the token endpoint.
    pub fn from_combined(combined: &str) -> Result<Self> {
        if combined.is_empty() {
            return Err(Error::InvalidArgument(
                "combined credentials must not be empty".to_string(),
            ));
        }
        Ok(Self {
            encoded: STANDARD.encode(combined.as_bytes()),
        })
    }

    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    /// Decodes the stored credential back into its id and secret.
    ///
    /// The split happens at the first `:`, so an id must not contain one.
    pub fn decode(&self) -> Result<(String, String)> {
        let bytes = STANDARD
            .decode(&self.encoded)
            .map_err(|e| Error::Config(format!("credentials are not valid base64: {e}")))?;
        let combined = String::from_utf8(bytes)
            .map_err(|e| Error::Config(format!("credentials are not valid UTF-8: {e}")))?;
        combined
            .split_once(':')
            .map(|(id, secret)| (id.to_string(), secret.to_string()))
            .ok_or_else(|| Error::Config("credentials lack the id:secret separator".to_string()))
    }

    /// Value of the `Authorization` header sent to the token endpoint.
    pub fn basic_header(&self) -> String {
        format!("Basic {}", self.encoded)
    }
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("encoded", &"<redacted>")
            .finish()
    }
}

/// Uninhabited marker for authorizer variants that have no implementation.
///
/// No value of this type can exist, so an [`Authorizer`] holding it can never
/// be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unimplemented {}

/// Knows how to obtain an [`AuthorizationSet`] and how to render it as a
/// request header.
#[derive(Debug, Clone)]
pub enum Authorizer {
    /// OAuth2 client-credentials grant, authenticating the application itself.
    ClientCredentials(ClientCredentials),
    /// OAuth2 authorization-code grant. Reserved; see [`Authorizer::authorization_code`].
    AuthorizationCode(Unimplemented),
}

impl Authorizer {
    pub fn client_credentials(client_id: &str, client_secret: &str) -> Result<Self> {
        Ok(Self::ClientCredentials(ClientCredentials::new(
            client_id,
            client_secret,
        )?))
    }

    pub fn from_combined(combined: &str) -> Result<Self> {
        Ok(Self::ClientCredentials(ClientCredentials::from_combined(
            combined,
        )?))
    }

    /// The authorization-code flow is not implemented; construction fails
    /// immediately instead of at first use.
    pub fn authorization_code(_client_id: &str, _redirect_uri: &str) -> Result<Self> {
        Err(Error::NotSupported(
            "the authorization-code flow is not implemented".to_string(),
        ))
    }

    /// Performs the token exchange against `token_url`.
    pub async fn authorize(&self, http: &Client, token_url: &str) -> Result<AuthorizationSet> {
        match self {
            Authorizer::ClientCredentials(credentials) => {
                request_client_credentials(http, token_url, credentials).await
            }
            Authorizer::AuthorizationCode(never) => match *never {},
        }
    }

    /// Renders `"{token_type} {access_token}"`.
    pub fn render_auth_header(&self, set: &AuthorizationSet) -> String {
        format!("{} {}", set.token_type(), set.access_token())
    }
}

async fn request_client_credentials(
    http: &Client,
    token_url: &str,
    credentials: &ClientCredentials,
) -> Result<AuthorizationSet> {
    debug!("POST {} (grant_type=client_credentials)", token_url);

    let response = http
        .post(token_url)
        .header(AUTHORIZATION, credentials.basic_header())
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|e| Error::AuthFailure(format!("token endpoint unreachable: {e}")))?;

    let issued_at = Utc::now();
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| Error::AuthFailure(format!("failed to read token response: {e}")))?;

    if !status.is_success() {
        warn!("Token endpoint returned {}", status);
        return Err(Error::AuthFailure(format!(
            "token endpoint returned {status}: {body}"
        )));
    }

    let payload: TokenResponse = serde_json::from_str(&body)
        .map_err(|e| Error::AuthFailure(format!("malformed token payload: {e}")))?;

    AuthorizationSet::from_response(payload, issued_at)
}
