use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::FeedConfig;
use crate::data_source::{CurrencySource, FetchFuture, SourceError};
use crate::feed::parse_feed;
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::{CurrencyId, CurrencyResult, FeedSnapshot};

/// Central Bank of Russia daily rates adapter.
///
/// Every call to [`fetch`](CurrencySource::fetch) issues exactly one request;
/// nothing is cached between calls.
#[derive(Clone)]
pub struct CbrAdapter {
    http_client: Arc<dyn HttpClient>,
    config: FeedConfig,
}

impl Default for CbrAdapter {
    fn default() -> Self {
        Self {
            http_client: Arc::new(ReqwestHttpClient::default()),
            config: FeedConfig::from_env(),
        }
    }
}

impl CbrAdapter {
    pub fn new(http_client: Arc<dyn HttpClient>, config: FeedConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    pub fn with_http_client(http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            http_client,
            ..Self::default()
        }
    }

    pub fn with_config(config: FeedConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Download and parse the whole feed document.
    pub async fn snapshot(&self) -> Result<FeedSnapshot, SourceError> {
        let url = self.config.request_url();
        if !has_http_scheme(&url) {
            return Err(SourceError::invalid_request(format!(
                "cbr feed url must be http(s): '{}'",
                url
            )));
        }

        debug!(%url, "requesting cbr feed");
        let request = HttpRequest::get(url)
            .with_header("accept", "application/xml, text/xml")
            .with_timeout_ms(self.config.timeout_ms);

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| SourceError::unavailable(format!("cbr transport error: {}", e.message())))?;

        if !response.is_success() {
            warn!(status = response.status, "cbr feed returned non-success status");
            return Err(SourceError::unavailable(format!(
                "cbr feed returned status {}",
                response.status
            )));
        }

        let snapshot = parse_feed(&response.body)?;
        debug!(
            date = snapshot.date.as_deref().unwrap_or("unknown"),
            entries = snapshot.records.len(),
            "parsed cbr feed"
        );
        Ok(snapshot)
    }
}

fn has_http_scheme(url: &str) -> bool {
    url.split_once("://").is_some_and(|(scheme, _)| {
        scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")
    })
}

impl CurrencySource for CbrAdapter {
    type Output = CurrencyResult;

    fn fetch<'a>(&'a self, ids: &'a [CurrencyId]) -> FetchFuture<'a, CurrencyResult> {
        Box::pin(async move {
            let result = self.snapshot().await?.select(ids);

            let missing = ids
                .iter()
                .filter(|id| !result.contains(id))
                .map(CurrencyId::as_str)
                .collect::<Vec<_>>();
            if !missing.is_empty() {
                debug!(?missing, "requested ids not present in cbr feed");
            }

            Ok(result)
        })
    }
}
