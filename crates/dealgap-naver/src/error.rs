use thiserror::Error;

/// Errors returned by the Naver shopping search client.
#[derive(Debug, Error)]
pub enum NaverError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API rejected the client credentials (HTTP 401).
    #[error("Naver API rejected the client credentials")]
    Unauthorized,

    /// Any other non-2xx HTTP status from the API.
    #[error("unexpected HTTP status {status} from Naver shopping search")]
    UnexpectedStatus { status: u16 },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL is not a valid URL base.
    #[error("invalid base URL {0}")]
    InvalidBaseUrl(String),
}
