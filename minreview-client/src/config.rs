//! Client configuration

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::ClientResult;
use crate::http::NetworkHttpClient;
use crate::storage::{ADMIN_TOKEN_KEY, KeyValueStorage, USER_TOKEN_KEY};

/// Which side of the platform a client talks for.
///
/// The two sides share the backend but differ in where the bearer token is
/// persisted, how long a request may take, and what a 401 means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiFlavor {
    /// User-facing site
    #[default]
    User,
    /// Admin back-office
    Admin,
}

impl ApiFlavor {
    /// Storage key holding this side's bearer token
    pub fn token_key(self) -> &'static str {
        match self {
            ApiFlavor::User => USER_TOKEN_KEY,
            ApiFlavor::Admin => ADMIN_TOKEN_KEY,
        }
    }

    /// Default request timeout in seconds
    pub fn default_timeout(self) -> u64 {
        match self {
            ApiFlavor::User => 5,
            ApiFlavor::Admin => 10,
        }
    }

    /// Login page to navigate to when the server rejects the token.
    /// Only the admin side drops its session on 401.
    pub fn unauthorized_redirect(self) -> Option<&'static str> {
        match self {
            ApiFlavor::User => None,
            ApiFlavor::Admin => Some("/admin/login"),
        }
    }
}

/// Client configuration for connecting to the MinReview backend
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | MINREVIEW_BASE_URL | http://localhost:8080/api | Backend base URL, `/api` prefix included |
/// | MINREVIEW_TIMEOUT_SECS | per flavor (5 user, 10 admin) | Request timeout override |
/// | MINREVIEW_STORAGE | ./minreview-session.json | Durable session file |
/// | LOG_LEVEL | info | Default tracing filter when `RUST_LOG` is unset |
/// | LOG_JSON | false | JSON log output |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL including the `/api` prefix
    pub base_url: String,

    /// Request timeout in seconds, `None` uses the flavor default
    pub timeout: Option<u64>,

    /// Durable session storage file
    pub storage_path: PathBuf,

    /// Default log level
    pub log_level: String,

    /// Emit JSON logs
    pub log_json: bool,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
            storage_path: PathBuf::from("./minreview-session.json"),
            log_level: "info".to_string(),
            log_json: false,
        }
    }

    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        let mut config = Self::new(
            std::env::var("MINREVIEW_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080/api".into()),
        );
        config.timeout = std::env::var("MINREVIEW_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok());
        if let Ok(path) = std::env::var("MINREVIEW_STORAGE") {
            config.storage_path = PathBuf::from(path);
        }
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            config.log_level = level;
        }
        config.log_json = std::env::var("LOG_JSON")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(false);
        config
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Set the storage file
    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = path.into();
        self
    }

    /// Effective timeout for a flavor
    pub fn timeout_for(&self, flavor: ApiFlavor) -> u64 {
        self.timeout.unwrap_or_else(|| flavor.default_timeout())
    }

    /// Create an HTTP client for one side of the platform
    pub fn build_http_client(
        &self,
        flavor: ApiFlavor,
        storage: Arc<dyn KeyValueStorage>,
    ) -> ClientResult<NetworkHttpClient> {
        NetworkHttpClient::new(&self.base_url, flavor, self.timeout_for(flavor), storage)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080/api")
    }
}
