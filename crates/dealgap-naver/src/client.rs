//! HTTP client for the Naver shopping search API.
//!
//! Wraps `reqwest` with credential headers, typed error handling, and
//! response deserialization. Authentication uses the two header-based
//! credentials issued by the Naver developer console.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::NaverError;
use crate::rank::rank_listings;
use crate::types::{RankedResults, SearchQuery, ShopSearchResponse};

const DEFAULT_BASE_URL: &str = "https://openapi.naver.com/";

/// Listings requested per search. The provider caps `display` at 100; 20
/// keeps responses small while giving the ranker a wide enough candidate
/// pool.
const SEARCH_PAGE_SIZE: u32 = 20;

/// Provider sort mode for the candidate pool. Similarity order; the final
/// order is always computed locally by [`rank_listings`].
const SEARCH_SORT: &str = "sim";

/// Client credentials issued by the Naver developer console.
#[derive(Clone)]
pub struct NaverCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl NaverCredentials {
    #[must_use]
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl std::fmt::Debug for NaverCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NaverCredentials")
            .field("client_id", &"[redacted]")
            .field("client_secret", &"[redacted]")
            .finish()
    }
}

/// Client for the Naver shopping search API.
///
/// Manages the HTTP client, credentials, and endpoint URL. Use
/// [`NaverShopClient::new`] for production or
/// [`NaverShopClient::with_base_url`] to point at a mock server in tests.
pub struct NaverShopClient {
    client: Client,
    credentials: NaverCredentials,
    search_endpoint: Url,
}

impl NaverShopClient {
    /// Creates a new client pointed at the production Naver API.
    ///
    /// # Errors
    ///
    /// Returns [`NaverError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(credentials: NaverCredentials, timeout_secs: u64) -> Result<Self, NaverError> {
        Self::with_base_url(credentials, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`NaverError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`NaverError::InvalidBaseUrl`] if `base_url`
    /// is not a valid URL base.
    pub fn with_base_url(
        credentials: NaverCredentials,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, NaverError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("dealgap/0.1 (price-comparison)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // join() appends the endpoint path rather than replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let search_endpoint = Url::parse(&normalised)
            .and_then(|base| base.join("v1/search/shop.json"))
            .map_err(|e| NaverError::InvalidBaseUrl(format!("'{base_url}': {e}")))?;

        Ok(Self {
            client,
            credentials,
            search_endpoint,
        })
    }

    /// Searches the shopping index and returns the raw provider response.
    ///
    /// # Errors
    ///
    /// - [`NaverError::Unauthorized`] — the provider rejected the credentials.
    /// - [`NaverError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`NaverError::Http`] — network or TLS failure.
    /// - [`NaverError::Deserialize`] — the body does not match the expected
    ///   shape.
    pub async fn search(&self, query: &str) -> Result<ShopSearchResponse, NaverError> {
        let url = self.search_url(query);
        tracing::debug!(query, "searching shopping index");

        let response = self
            .client
            .get(url)
            .header("X-Naver-Client-Id", &self.credentials.client_id)
            .header("X-Naver-Client-Secret", &self.credentials.client_secret)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(NaverError::Unauthorized);
        }
        if !status.is_success() {
            return Err(NaverError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| NaverError::Deserialize {
            context: format!("shop search (query={query})"),
            source: e,
        })
    }

    /// Searches and returns normalized, filtered, ranked listings.
    ///
    /// Composition of [`NaverShopClient::search`] and [`rank_listings`]; see
    /// the latter for filter and ordering semantics.
    ///
    /// # Errors
    ///
    /// Same as [`NaverShopClient::search`].
    pub async fn search_ranked(&self, query: &SearchQuery) -> Result<RankedResults, NaverError> {
        let response = self.search(&query.text).await?;
        Ok(rank_listings(response, query.reference_price))
    }

    /// Builds the full search URL with properly percent-encoded parameters.
    fn search_url(&self, query: &str) -> Url {
        let mut url = self.search_endpoint.clone();
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("display", &SEARCH_PAGE_SIZE.to_string())
            .append_pair("sort", SEARCH_SORT);
        url
    }
}
