use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid product URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("unsupported product URL \"{url}\": host is not a Coupang product page")]
    UnsupportedDomain { url: String },

    #[error("product page returned HTTP status {status} for {url}")]
    PageUnavailable { status: u16, url: String },

    #[error("could not extract product details from {url}")]
    Unparseable { url: String },
}
