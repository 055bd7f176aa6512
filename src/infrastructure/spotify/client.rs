//! Spotify backend HTTP client.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use super::dto::{ErrorResponse, ProfileResponse, TopItemResponse};
use crate::domain::entities::{AccessToken, ContentInstance, SelectionType};
use crate::domain::errors::FetchError;
use crate::domain::ports::ContentPort;

/// Default backend base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8888";

/// Custom header carrying the opaque access token.
const TOKEN_HEADER: &str = "x-token-key";

/// HTTP client for the top content backend.
///
/// Requests carry no timeout and are never retried; failures surface
/// as [`FetchError`] and are handled by the resolvers.
pub struct SpotifyWebClient {
    client: Client,
    base_url: String,
}

impl SpotifyWebClient {
    /// Creates new client with the default base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(DEFAULT_API_URL)
    }

    /// Creates client with custom base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .build()
            .map_err(|e| FetchError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn map_send_error(e: &reqwest::Error) -> FetchError {
        if e.is_connect() {
            FetchError::network("failed to connect to backend")
        } else {
            FetchError::network(e.to_string())
        }
    }

    async fn handle_error_response(status: StatusCode, response: reqwest::Response) -> FetchError {
        let message = match response.json::<ErrorResponse>().await {
            Ok(error) => error.message,
            Err(_) => format!("HTTP {status}"),
        };

        FetchError::api(status.as_u16(), message)
    }
}

#[async_trait]
impl ContentPort for SpotifyWebClient {
    async fn fetch_top(
        &self,
        token: &AccessToken,
        selection: SelectionType,
        limit: usize,
    ) -> Result<Vec<ContentInstance>, FetchError> {
        let url = format!("{}/{}", self.base_url, selection.endpoint());

        debug!(selection = %selection, limit, "Fetching top content");

        let response = self
            .client
            .get(&url)
            .header(TOKEN_HEADER, token.as_str())
            .query(&[("limit", limit)])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to reach backend");
                Self::map_send_error(&e)
            })?;

        let status = response.status();

        if !status.is_success() {
            return Err(Self::handle_error_response(status, response).await);
        }

        let items: Vec<TopItemResponse> = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse top content response");
            FetchError::malformed(e.to_string())
        })?;

        debug!(selection = %selection, count = items.len(), "Fetched top content");

        Ok(items.into_iter().map(ContentInstance::from).collect())
    }

    async fn fetch_profile_picture(&self, token: &AccessToken) -> Result<String, FetchError> {
        let url = format!("{}/profile", self.base_url);

        debug!("Fetching profile picture");

        let response = self
            .client
            .get(&url)
            .header(TOKEN_HEADER, token.as_str())
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to reach backend");
                Self::map_send_error(&e)
            })?;

        let status = response.status();

        if !status.is_success() {
            return Err(Self::handle_error_response(status, response).await);
        }

        let profile: ProfileResponse = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse profile response");
            FetchError::malformed(e.to_string())
        })?;

        Ok(profile.profile_picture_url)
    }
}
