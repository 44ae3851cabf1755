//! Main CatalogClient

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::api::PageRequest;
use crate::config::CatalogConfig;
use crate::error::FetchError;

/// Default `User-Agent` sent with every request.
const USER_AGENT: &str = concat!("artworks-lib/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the artworks collection endpoint.
///
/// This client is cheap to clone (uses `Arc` internally) and can be shared
/// across tasks. It implements [`PageSource`](crate::api::PageSource).
///
/// # Example
///
/// ```ignore
/// use artworks_lib::CatalogClient;
/// use artworks_lib::api::{PageRequest, PageSource};
///
/// let client = CatalogClient::builder()
///     .endpoint(Url::parse("https://api.artic.edu/api/v1/artworks")?)
///     .timeout(Duration::from_secs(10))
///     .build()?;
///
/// let page = client.fetch_page(PageRequest::new(1, 10)?).await?;
/// ```
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    endpoint: Url,
    http_client: Client,
    timeout: Option<Duration>,
}

impl CatalogClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> CatalogClientBuilder<Missing> {
        CatalogClientBuilder::new()
    }

    /// Creates a client from a [`CatalogConfig`].
    pub fn from_config(config: &CatalogConfig) -> Result<Self, FetchError> {
        let mut builder = Self::builder().endpoint(config.endpoint.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        builder.build()
    }

    /// Returns the collection endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }

    /// Returns the URL for one page: the endpoint plus `page` and `limit`.
    pub fn page_url(&self, request: PageRequest) -> Url {
        let mut url = self.inner.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("page", &request.index().to_string())
            .append_pair("limit", &request.size().to_string());
        url
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.inner.http_client
    }

    pub(crate) fn timeout(&self) -> Option<Duration> {
        self.inner.timeout
    }

    /// Maps a reqwest failure, reporting timeouts with the configured duration.
    pub(crate) fn transport_error(&self, err: reqwest::Error) -> FetchError {
        match self.inner.timeout {
            Some(timeout) if err.is_timeout() => FetchError::Timeout(timeout),
            _ => FetchError::Network(err),
        }
    }
}

impl std::fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("endpoint", &self.inner.endpoint.as_str())
            .field("timeout", &self.inner.timeout)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing a [`CatalogClient`].
///
/// Uses the typestate pattern so that `build` only exists once the endpoint
/// has been set.
pub struct CatalogClientBuilder<Endpoint> {
    endpoint: Endpoint,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: String,
    http_client: Option<Client>,
}

impl CatalogClientBuilder<Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            endpoint: Missing,
            timeout: None,
            connect_timeout: None,
            user_agent: USER_AGENT.to_string(),
            http_client: None,
        }
    }

    /// Sets the collection endpoint.
    pub fn endpoint(self, endpoint: Url) -> CatalogClientBuilder<Set<Url>> {
        CatalogClientBuilder {
            endpoint: Set(endpoint),
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            user_agent: self.user_agent,
            http_client: self.http_client,
        }
    }
}

impl Default for CatalogClientBuilder<Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> CatalogClientBuilder<E> {
    /// Sets the timeout for a whole page request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// Only applied when the builder creates the HTTP client itself.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Overrides the `User-Agent` header.
    ///
    /// Only applied when the builder creates the HTTP client itself.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets a custom HTTP client.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl CatalogClientBuilder<Set<Url>> {
    /// Builds the [`CatalogClient`].
    pub fn build(self) -> Result<CatalogClient, FetchError> {
        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder().user_agent(self.user_agent);
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(CatalogClient {
            inner: Arc::new(CatalogClientInner {
                endpoint: self.endpoint.0,
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(endpoint: &str) -> CatalogClient {
        CatalogClient::builder()
            .endpoint(Url::parse(endpoint).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_page_url() {
        let client = client("https://api.artic.edu/api/v1/artworks");
        let url = client.page_url(PageRequest::new(3, 12).unwrap());
        assert_eq!(
            url.as_str(),
            "https://api.artic.edu/api/v1/artworks?page=3&limit=12"
        );
    }

    #[test]
    fn test_page_url_keeps_existing_query() {
        let client = client("http://localhost:9000/artworks?fields=id,title");
        let url = client.page_url(PageRequest::new(1, 10).unwrap());
        assert_eq!(
            url.as_str(),
            "http://localhost:9000/artworks?fields=id,title&page=1&limit=10"
        );
    }

    #[test]
    fn test_from_config() {
        let config = CatalogConfig::default().with_timeout(Duration::from_secs(3));
        let client = CatalogClient::from_config(&config).unwrap();
        assert_eq!(client.endpoint(), &config.endpoint);
        assert_eq!(client.timeout(), Some(Duration::from_secs(3)));
    }
}
