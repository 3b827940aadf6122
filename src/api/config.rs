//! API configuration: base URL, endpoints, auth scheme, messages.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use super::endpoint::Endpoint;
use super::messages::Messages;

/// Base URL of a local development backend.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// How many times a failed request may be retried.
pub const DEFAULT_RETRY_ATTEMPTS: u32 = 3;

/// Errors from loading or validating an [`ApiConfig`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configuration document is not valid JSON for this schema.
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The base URL does not parse, or is not an http(s) URL with a host.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The configured base URL.
        url: String,
        /// Parse error or the constraint it breaks.
        reason: String,
    },

    /// A zero timeout would fail every request.
    #[error("timeout must be greater than zero")]
    InvalidTimeout,

    /// An endpoint override names an endpoint that does not exist.
    #[error("unknown endpoint '{0}'")]
    UnknownEndpoint(String),

    /// An endpoint override path is not a rooted path of non-empty segments.
    #[error("path for endpoint '{key}' must be '/'-rooted with no empty, '.' or '..' segments, got '{path}'")]
    InvalidEndpointPath {
        /// Endpoint configuration key.
        key: String,
        /// The offending path.
        path: String,
    },
}

/// Value scheme of the `Authorization` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthScheme {
    /// `Authorization: Token <key>` (Django REST framework token auth).
    #[default]
    Token,
    /// `Authorization: Bearer <token>`.
    Bearer,
}

impl AuthScheme {
    /// Header keyword for this scheme.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Token => "Token",
            Self::Bearer => "Bearer",
        }
    }

    /// Full `Authorization` header value for `token`.
    pub fn header_value(&self, token: &str) -> String {
        format!("{} {token}", self.keyword())
    }
}

/// Configuration for talking to the backend.
///
/// Every field has a default, so a configuration document only needs
/// the values that differ. Endpoint overrides are keyed by
/// [`Endpoint::key`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Absolute base URL, e.g. `https://erp.example.com/api`.
    pub base_url: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Retries after a failed request.
    pub retry_attempts: u32,
    /// `Authorization` header scheme.
    pub auth_scheme: AuthScheme,
    /// Per-deployment path overrides, keyed by endpoint key.
    pub endpoints: BTreeMap<String, String>,
    /// User-facing messages.
    pub messages: Messages,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            auth_scheme: AuthScheme::default(),
            endpoints: BTreeMap::new(),
            messages: Messages::default(),
        }
    }
}

impl ApiConfig {
    /// Load a configuration from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants `from_json` enforces.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.base()?;
        if self.timeout_ms == 0 {
            return Err(ConfigError::InvalidTimeout);
        }
        for (key, path) in &self.endpoints {
            if Endpoint::from_key(key).is_none() {
                return Err(ConfigError::UnknownEndpoint(key.clone()));
            }
            if override_segments(path).is_none() {
                return Err(ConfigError::InvalidEndpointPath {
                    key: key.clone(),
                    path: path.clone(),
                });
            }
        }
        Ok(())
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the `Authorization` scheme.
    pub fn with_auth_scheme(mut self, scheme: AuthScheme) -> Self {
        self.auth_scheme = scheme;
        self
    }

    /// Override one endpoint's path.
    pub fn with_endpoint_override(mut self, endpoint: Endpoint, path: impl Into<String>) -> Self {
        self.endpoints.insert(endpoint.key().into(), path.into());
        self
    }

    /// Effective path of `endpoint`: the override if any, else the default.
    pub fn endpoint_path(&self, endpoint: Endpoint) -> &str {
        self.endpoints
            .get(endpoint.key())
            .map(|p| p.trim_end_matches('/'))
            .unwrap_or_else(|| endpoint.path())
    }

    /// Parsed base URL; must be http(s) with a host.
    fn base(&self) -> Result<Url, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason,
        };
        let url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(invalid("missing host".into()));
        }
        Ok(url)
    }

    /// Base URL with the endpoint's segments and `extra` appended, ending in `/`.
    ///
    /// Each `extra` entry is one percent-encoded segment, so ids and
    /// actions cannot introduce new path levels or a query.
    fn join(&self, endpoint: Endpoint, extra: &[&str]) -> Result<Url, ConfigError> {
        let mut url = self.base()?;
        let base: Vec<String> = url
            .path_segments()
            .map(|segs| segs.filter(|s| !s.is_empty()).map(String::from).collect())
            .unwrap_or_default();
        let path = self.endpoint_path(endpoint);
        let endpoint_segs = override_segments(path).unwrap_or_else(|| {
            endpoint.path().trim_start_matches('/').split('/').collect()
        });
        url.path_segments_mut()
            .map_err(|()| ConfigError::InvalidBaseUrl {
                url: self.base_url.clone(),
                reason: "URL cannot be a base".into(),
            })?
            .clear()
            .extend(&base)
            .extend(endpoint_segs)
            .extend(extra.iter().filter(|s| !s.is_empty()))
            .push("");
        Ok(url)
    }

    /// URL of a collection, e.g. `{base}/clients/`.
    ///
    /// All backend routes end in a slash.
    pub fn collection_url(&self, endpoint: Endpoint) -> Result<Url, ConfigError> {
        self.join(endpoint, &[])
    }

    /// URL of one resource, e.g. `{base}/clients/42/`.
    pub fn resource_url(
        &self,
        endpoint: Endpoint,
        id: impl std::fmt::Display,
    ) -> Result<Url, ConfigError> {
        self.join(endpoint, &[id.to_string().as_str()])
    }

    /// URL of a resource action, e.g. `{base}/clients/42/change_status/`.
    ///
    /// Surrounding slashes on `action` are ignored.
    pub fn action_url(
        &self,
        endpoint: Endpoint,
        id: impl std::fmt::Display,
        action: &str,
    ) -> Result<Url, ConfigError> {
        self.join(endpoint, &[id.to_string().as_str(), action.trim_matches('/')])
    }

    /// `Authorization` header value, `None` when there is no token.
    pub fn authorization(&self, token: &str) -> Option<String> {
        let token = token.trim();
        (!token.is_empty()).then(|| self.auth_scheme.header_value(token))
    }

    /// User-facing message for an HTTP status, `None` for success.
    pub fn status_message(&self, status: u16) -> Option<&str> {
        self.messages.for_status(status)
    }

    /// User-facing message for a failed response.
    ///
    /// Prefers the backend's own explanation (`detail`, `message` or
    /// `error` in a JSON body), then the status message, then the
    /// generic error text.
    pub fn error_message(&self, status: u16, body: &str) -> String {
        if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(body) {
            let found = ["detail", "message", "error"]
                .iter()
                .find_map(|k| map.get(*k).and_then(|v| v.as_str()))
                .filter(|s| !s.is_empty());
            if let Some(msg) = found {
                return msg.to_string();
            }
        }
        self.status_message(status)
            .unwrap_or(self.messages.error.as_str())
            .to_string()
    }
}

/// Segments of an override path like `/ledger/v2/`, or `None` if the
/// path is not rooted or has an empty, `.` or `..` segment.
fn override_segments(path: &str) -> Option<Vec<&str>> {
    let rest = path.strip_prefix('/')?;
    let rest = rest.strip_suffix('/').unwrap_or(rest);
    let segs: Vec<&str> = rest.split('/').collect();
    segs.iter()
        .all(|s| !s.is_empty() && *s != "." && *s != "..")
        .then_some(segs)
}
