//! HTTP page fetches against the catalog endpoint.

use async_trait::async_trait;
use log::debug;
use reqwest::header::ACCEPT;
use serde::Deserialize;

use crate::CatalogClient;
use crate::error::FetchError;
use crate::model::Record;

use super::Page;
use super::PageRequest;
use super::PageSource;

#[async_trait]
impl PageSource for CatalogClient {
    async fn fetch_page(&self, request: PageRequest) -> Result<Page, FetchError> {
        let url = self.page_url(request);
        debug!("GET {}", url);

        let mut builder = self
            .http_client()
            .get(url)
            .header(ACCEPT, "application/json");

        if let Some(timeout) = self.timeout() {
            builder = builder.timeout(timeout);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::http(status.as_u16(), body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        let parsed: CatalogResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(e) => return Err(FetchError::parse_with_body(e.to_string(), body)),
        };

        debug!(
            "page {} (size {}) returned {} records of {}",
            request.index(),
            request.size(),
            parsed.data.len(),
            parsed.pagination.total
        );

        Ok(Page::new(request, parsed.data).with_total_count(parsed.pagination.total))
    }
}

/// Response body of the collection endpoint.
#[derive(Debug, Deserialize)]
struct CatalogResponse {
    /// The records in this page.
    data: Vec<Record>,
    /// Paging metadata; only the total is used.
    pagination: PaginationInfo,
}

#[derive(Debug, Deserialize)]
struct PaginationInfo {
    total: u64,
}
