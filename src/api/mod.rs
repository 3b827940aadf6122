//! Typed configuration for the REST backend.
//!
//! One [`ApiConfig`] value is built at startup and handed to whatever
//! performs the HTTP calls. It owns the base URL, the endpoint table,
//! the authorization scheme, and the user-facing messages for failed
//! requests. Nothing here touches the network.
//!
//! # Example
//!
//! ```rust
//! use cadastro::api::*;
//!
//! let config = ApiConfig::from_json(r#"{ "base_url": "https://erp.example.com/api/" }"#).unwrap();
//! let url = config.collection_url(Endpoint::Clients).unwrap();
//! assert_eq!(url.as_str(), "https://erp.example.com/api/clients/");
//! assert_eq!(
//!     config.resource_url(Endpoint::Clients, "42").unwrap().path(),
//!     "/api/clients/42/"
//! );
//! assert_eq!(config.authorization("abc").as_deref(), Some("Token abc"));
//! assert_eq!(config.status_message(404), Some("Recurso não encontrado"));
//! ```

mod config;
mod endpoint;
mod messages;

pub use config::{
    ApiConfig, AuthScheme, ConfigError, DEFAULT_BASE_URL, DEFAULT_RETRY_ATTEMPTS,
    DEFAULT_TIMEOUT_MS,
};
pub use endpoint::Endpoint;
pub use messages::Messages;
pub use url::Url;
