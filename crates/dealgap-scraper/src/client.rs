//! HTTP client for fetching Coupang product pages.

use std::time::Duration;

use reqwest::Client;

use crate::error::ExtractError;
use crate::extract::extract_product;
use crate::types::ExtractedProduct;

/// Host whose product pages this client accepts.
const PRODUCT_PAGE_HOST: &str = "coupang.com";

/// Coupang serves a bot interstitial to unknown agents, so requests present
/// a desktop Chrome identity.
const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// HTTP client that fetches a Coupang product page and extracts its details.
///
/// URLs are validated against the marketplace host before any request is
/// sent; non-2xx responses and pages missing a product name surface as typed
/// errors.
pub struct ProductPageClient {
    client: Client,
    reference_host: String,
}

impl ProductPageClient {
    /// Creates a `ProductPageClient` with the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64) -> Result<Self, ExtractError> {
        Self::with_reference_host(timeout_secs, PRODUCT_PAGE_HOST)
    }

    /// Creates a client that accepts product URLs on `reference_host` (or a
    /// subdomain of it) instead of the production marketplace host.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_reference_host(
        timeout_secs: u64,
        reference_host: &str,
    ) -> Result<Self, ExtractError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(BROWSER_USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            reference_host: reference_host.to_string(),
        })
    }

    /// Fetches a product page and extracts name, price, and image.
    ///
    /// The URL host is checked before any network activity: an off-domain
    /// URL never produces an outbound request.
    ///
    /// # Errors
    ///
    /// - [`ExtractError::InvalidUrl`] — the URL does not parse or has no host.
    /// - [`ExtractError::UnsupportedDomain`] — the host is not the marketplace.
    /// - [`ExtractError::PageUnavailable`] — the page returned a non-2xx status.
    /// - [`ExtractError::Unparseable`] — no product name in any known location.
    /// - [`ExtractError::Http`] — network or TLS failure.
    pub async fn fetch_product(&self, url: &str) -> Result<ExtractedProduct, ExtractError> {
        self.ensure_supported_host(url)?;

        tracing::debug!(url, "fetching product page");
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "text/html,application/xhtml+xml")
            .header(reqwest::header::ACCEPT_LANGUAGE, "ko-KR,ko;q=0.9")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::PageUnavailable {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let html = response.text().await?;
        extract_product(&html, url).ok_or_else(|| ExtractError::Unparseable {
            url: url.to_string(),
        })
    }

    /// Rejects URLs whose host is not `reference_host` or a subdomain of it.
    ///
    /// A suffix match alone would accept look-alike hosts such as
    /// `evilcoupang.com`, so the leading dot is required.
    fn ensure_supported_host(&self, url: &str) -> Result<(), ExtractError> {
        let parsed = reqwest::Url::parse(url).map_err(|e| ExtractError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        let host = parsed.host_str().ok_or_else(|| ExtractError::InvalidUrl {
            url: url.to_string(),
            reason: "URL has no host".to_string(),
        })?;

        if host != self.reference_host && !host.ends_with(&format!(".{}", self.reference_host)) {
            return Err(ExtractError::UnsupportedDomain {
                url: url.to_string(),
            });
        }
        Ok(())
    }
}
