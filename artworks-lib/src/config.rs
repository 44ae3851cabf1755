//! Catalog configuration

use std::time::Duration;

use url::Url;

use crate::api::validate_page_size;
use crate::api::DEFAULT_PAGE_SIZE;
use crate::error::ConfigError;

/// Public Art Institute of Chicago artworks collection.
pub const DEFAULT_ENDPOINT: &str = "https://api.artic.edu/api/v1/artworks";

/// Environment variable overriding the catalog endpoint.
pub const ENDPOINT_VAR: &str = "ARTWORKS_ENDPOINT";

/// Environment variable overriding the initial page size.
pub const PAGE_SIZE_VAR: &str = "ARTWORKS_PAGE_SIZE";

/// Settings for talking to the catalog and sizing the first page.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use artworks_lib::config::CatalogConfig;
///
/// let config = CatalogConfig::default()
///     .with_default_page_size(25)
///     .with_timeout(Duration::from_secs(10));
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.endpoint.host_str(), Some("api.artic.edu"));
/// ```
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Collection endpoint; `page` and `limit` are appended as query parameters.
    pub endpoint: Url,

    /// Page size used when the view mounts.
    ///
    /// Default: 10
    pub default_page_size: u32,

    /// Timeout for a whole page request.
    ///
    /// Default: none
    pub timeout: Option<Duration>,

    /// Timeout for establishing the connection.
    ///
    /// Default: none
    pub connect_timeout: Option<Duration>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            default_page_size: DEFAULT_PAGE_SIZE,
            timeout: None,
            connect_timeout: None,
        }
    }
}

impl CatalogConfig {
    /// Creates a config for the given endpoint with default settings otherwise.
    pub fn new(endpoint: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            endpoint: parse_endpoint(endpoint)?,
            ..Self::default()
        })
    }

    /// Builds a config from `ARTWORKS_ENDPOINT` and `ARTWORKS_PAGE_SIZE`.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(endpoint) = lookup(ENDPOINT_VAR).filter(|v| !v.trim().is_empty()) {
            config.endpoint = parse_endpoint(endpoint.trim())?;
        }

        if let Some(size) = lookup(PAGE_SIZE_VAR).filter(|v| !v.trim().is_empty()) {
            config.default_page_size = size.trim().parse().map_err(|_| ConfigError::InvalidVariable {
                key: PAGE_SIZE_VAR,
                value: size.clone(),
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Sets the initial page size.
    pub fn with_default_page_size(mut self, size: u32) -> Self {
        self.default_page_size = size;
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Checks that the page size is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_page_size(self.default_page_size)?;
        Ok(())
    }
}

/// Parses an absolute http(s) endpoint URL.
pub fn parse_endpoint(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|source| ConfigError::InvalidEndpoint {
        value: value.to_string(),
        source,
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}
