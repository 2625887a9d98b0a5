use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Timeout applied to every outbound HTTP call (page fetch and search).
    pub request_timeout_secs: u64,
    /// Naver open-API credentials. Optional at startup: the extractor works
    /// without them and the search route reports a configuration error.
    pub naver_client_id: Option<String>,
    pub naver_client_secret: Option<String>,
}

impl AppConfig {
    /// Returns `true` when both provider credentials are present.
    #[must_use]
    pub fn has_naver_credentials(&self) -> bool {
        self.naver_client_id.is_some() && self.naver_client_secret.is_some()
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field(
                "naver_client_id",
                &self.naver_client_id.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "naver_client_secret",
                &self.naver_client_secret.as_ref().map(|_| "[redacted]"),
            )
            .finish()
    }
}
