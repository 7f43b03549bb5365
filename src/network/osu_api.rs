//! osu! API v2 client: users and recent scores.

use crate::models::{ScoreRecord, User};
use crate::network::USER_AGENT;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Requests the lazer score format (mod objects, lazer statistics keys).
const API_VERSION: &str = "20220705";

/// Refresh tokens a little before they actually expire.
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The requested user (or other entity) does not exist.
    NotFound(String),
    /// Network failure or unexpected HTTP status.
    Transport(String),
    /// The response body did not have the expected shape.
    Decode(String),
    /// Missing or rejected client credentials.
    Auth(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NotFound(what) => write!(f, "Not found: {}", what),
            ApiError::Transport(msg) => write!(f, "API request failed: {}", msg),
            ApiError::Decode(msg) => write!(f, "Unexpected API response: {}", msg),
            ApiError::Auth(msg) => write!(f, "API authentication failed: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Provider of users and their scores.
pub trait ScoreProvider: Send + Sync {
    fn user(&self, username: &str) -> impl Future<Output = Result<User, ApiError>> + Send;

    fn recent_scores(
        &self,
        user_id: u32,
        limit: u32,
        include_fails: bool,
    ) -> impl Future<Output = Result<Vec<ScoreRecord>, ApiError>> + Send;
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

#[derive(Debug, Clone)]
struct AccessToken {
    value: String,
    expires_at: Instant,
}

/// Client-credentials client for the osu! API v2.
#[derive(Debug)]
pub struct OsuApi {
    client: Client,
    base_url: String,
    client_id: String,
    client_secret: String,
    token: Mutex<Option<AccessToken>>,
}

impl OsuApi {
    pub fn new(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            token: Mutex::new(None),
        })
    }

    /// Returns a valid access token, requesting a new one when needed.
    async fn access_token(&self) -> Result<String, ApiError> {
        let mut cached = self.token.lock().await;

        if let Some(token) = cached.as_ref() {
            if token.expires_at > Instant::now() {
                return Ok(token.value.clone());
            }
        }

        let url = format!("{}/oauth/token", self.base_url);
        let form = [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("grant_type", "client_credentials"),
            ("scope", "public"),
        ];

        let response = self
            .client
            .post(&url)
            .form(&form)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ApiError::Auth(format!("token request returned {}", response.status())));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        let lifetime = Duration::from_secs(body.expires_in).saturating_sub(TOKEN_EXPIRY_MARGIN);
        log::info!("API: Obtained access token valid for {}s", lifetime.as_secs());

        *cached = Some(AccessToken {
            value: body.access_token.clone(),
            expires_at: Instant::now() + lifetime,
        });

        Ok(body.access_token)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        what: &str,
    ) -> Result<T, ApiError> {
        let token = self.access_token().await?;

        let response = request
            .bearer_auth(token)
            .header("x-api-version", API_VERSION)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        decode_response(response, what).await
    }
}

async fn decode_response<T: DeserializeOwned>(response: Response, what: &str) -> Result<T, ApiError> {
    match response.status() {
        StatusCode::NOT_FOUND => Err(ApiError::NotFound(what.to_string())),
        StatusCode::UNAUTHORIZED => Err(ApiError::Auth("access token rejected".to_string())),
        status if !status.is_success() => Err(ApiError::Transport(format!(
            "{} returned {}",
            what, status
        ))),
        _ => response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string())),
    }
}

impl ScoreProvider for OsuApi {
    async fn user(&self, username: &str) -> Result<User, ApiError> {
        let url = format!("{}/api/v2/users/{}/osu", self.base_url, username);
        let request = self.client.get(&url).query(&[("key", "username")]);

        self.get_json(request, &format!("user '{}'", username)).await
    }

    async fn recent_scores(
        &self,
        user_id: u32,
        limit: u32,
        include_fails: bool,
    ) -> Result<Vec<ScoreRecord>, ApiError> {
        let url = format!("{}/api/v2/users/{}/scores/recent", self.base_url, user_id);
        let include_fails = if include_fails { "1" } else { "0" };
        let limit = limit.to_string();
        let request = self.client.get(&url).query(&[
            ("include_fails", include_fails),
            ("mode", "osu"),
            ("limit", limit.as_str()),
        ]);

        self.get_json(request, &format!("recent scores of user {}", user_id))
            .await
    }
}
