//! Shared HTTP transport: one client, one cookie jar, one base URL.

use std::sync::Arc;
use std::time::Duration;

use reqwest::cookie::{CookieStore, Jar};
use reqwest::{Client, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::domain::entities::AuthToken;
use crate::domain::errors::AuthError;
use crate::domain::ports::SessionPort;
use crate::infrastructure::config::ApiConfig;

const USER_AGENT: &str = concat!("skyhall/", env!("CARGO_PKG_VERSION"));

/// Endpoint paths, relative to the configured base URL.
pub mod endpoints {
    /// Credential login.
    pub const LOGIN: &str = "/login";
    /// Token-for-session exchange.
    pub const AUTH_BY_TOKEN: &str = "/authByToken";
    /// Logout.
    pub const LOGOUT: &str = "/logout";
    /// Profile retrieval.
    pub const PROFILE: &str = "/profile";
}

/// Explicitly constructed transport-and-jar object shared by the auth and
/// profile adapters. Owns the only cookie jar in the process; the session
/// cookie lives and dies here.
pub struct ApiTransport {
    client: Client,
    jar: Arc<Jar>,
    base_url: String,
    origin: Url,
    cookie_name: String,
}

impl ApiTransport {
    /// Creates the transport from configuration. Timeouts are applied once
    /// here; the core layers none of their own.
    ///
    /// # Errors
    /// Returns `AuthError::Network` if the base URL is invalid or the HTTP
    /// client cannot be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self, AuthError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let origin = Url::parse(&base_url)
            .map_err(|e| AuthError::network(format!("invalid base URL: {e}")))?;

        let jar = Arc::new(Jar::default());
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_provider(jar.clone())
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AuthError::network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            jar,
            base_url,
            origin,
            cookie_name: config.session_cookie_name.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// POSTs a JSON body and decodes the response envelope.
    ///
    /// # Errors
    /// See [`AuthError`]; transport failures map to `NoInternetConnection`
    /// or `Network`, undecodable bodies to `InvalidResponse`.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, AuthError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(map_transport_error)?;

        Self::decode(response).await
    }

    /// POSTs with a bearer token and no body, decoding the envelope.
    ///
    /// # Errors
    /// As [`Self::post_json`].
    pub async fn post_bearer<T>(&self, path: &str, token: &AuthToken) -> Result<T, AuthError>
    where
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.url(path))
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(map_transport_error)?;

        Self::decode(response).await
    }

    /// GETs and decodes the response envelope.
    ///
    /// # Errors
    /// As [`Self::post_json`].
    pub async fn get<T>(&self, path: &str) -> Result<T, AuthError>
    where
        T: DeserializeOwned,
    {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(map_transport_error)?;

        Self::decode(response).await
    }

    /// The envelope is authoritative regardless of HTTP status; the status
    /// only matters when the body fails to decode.
    async fn decode<T>(response: reqwest::Response) -> Result<T, AuthError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;

        match serde_json::from_slice(&body) {
            Ok(decoded) => Ok(decoded),
            Err(_) if !status.is_success() => {
                warn!(%status, "non-success response without a decodable envelope");
                Err(error_for_status(status))
            }
            Err(e) => {
                warn!(error = %e, "failed to decode response envelope");
                Err(AuthError::InvalidResponse)
            }
        }
    }
}

impl SessionPort for ApiTransport {
    fn has_session_cookie(&self) -> bool {
        let Some(header) = self.jar.cookies(&self.origin) else {
            return false;
        };
        let Ok(raw) = header.to_str() else {
            return false;
        };

        raw.split(';').any(|pair| {
            pair.trim()
                .split_once('=')
                .is_some_and(|(name, value)| name == self.cookie_name && !value.is_empty())
        })
    }

    fn clear_session(&self) {
        // reqwest's Jar has no removal API; overwriting with an already
        // expired cookie evicts it from the store
        let expired = format!("{}=; Max-Age=0; Path=/", self.cookie_name);
        self.jar.add_cookie_str(&expired, &self.origin);
        debug!("session cookies cleared");
    }
}

fn map_transport_error(e: reqwest::Error) -> AuthError {
    if e.is_timeout() || e.is_connect() {
        warn!(error = %e, "no response from the backend");
        AuthError::NoInternetConnection
    } else {
        warn!(error = %e, "transport error");
        AuthError::network(e.to_string())
    }
}

fn error_for_status(status: StatusCode) -> AuthError {
    if status.is_server_error() {
        AuthError::network(format!("backend unavailable: HTTP {status}"))
    } else {
        AuthError::network(format!("HTTP {status}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport() -> ApiTransport {
        let config = ApiConfig {
            base_url: "https://gate.test.example/api/v1/".to_string(),
            ..ApiConfig::default()
        };
        ApiTransport::new(&config).unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let t = transport();
        assert_eq!(t.url(endpoints::LOGIN), "https://gate.test.example/api/v1/login");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let config = ApiConfig {
            base_url: "not a url".to_string(),
            ..ApiConfig::default()
        };
        assert!(ApiTransport::new(&config).is_err());
    }

    #[test]
    fn test_session_cookie_lifecycle() {
        let t = transport();
        assert!(!t.has_session_cookie());

        t.jar
            .add_cookie_str("session_id=abc123; Path=/", &t.origin);
        assert!(t.has_session_cookie());

        t.clear_session();
        assert!(!t.has_session_cookie());
    }

    #[test]
    fn test_unrelated_cookie_is_not_a_session() {
        let t = transport();
        t.jar.add_cookie_str("tracking=xyz; Path=/", &t.origin);

        assert!(!t.has_session_cookie());
    }
}
