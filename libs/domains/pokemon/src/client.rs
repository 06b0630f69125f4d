//! Request execution shared by the upstream adapters.
//!
//! Every adapter call follows the same shape: send, branch on status, parse
//! the body. Only an exact `200 OK` body is parsed; any other status is handed
//! back to the adapter to classify.

use core_config::upstream::UpstreamConfig;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{PokemonError, PokemonResult};

/// Result of one upstream round trip.
#[derive(Debug)]
pub(crate) enum UpstreamResponse<T> {
    /// `200 OK` with a parsed body
    Success(T),
    /// Any other status; the body was not read
    Failure(StatusCode),
}

/// HTTP client bound to one upstream base URL.
#[derive(Debug, Clone)]
pub(crate) struct UpstreamClient {
    http: Client,
    base_url: String,
}

impl UpstreamClient {
    /// Rejects an empty or unparseable base URL with `InvalidConfiguration`.
    pub(crate) fn new(name: &str, config: &UpstreamConfig) -> PokemonResult<Self> {
        let base_url = config.base_url.trim().trim_end_matches('/');
        if base_url.is_empty() || Url::parse(base_url).is_err() {
            return Err(PokemonError::InvalidConfiguration(format!("{name} url")));
        }

        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.to_string(),
        })
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.http.get(self.url(path))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.http.post(self.url(path))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends `request` as JSON and parses a `200 OK` body into `T`.
    ///
    /// Connection and body-read failures become `Request`, an unparseable
    /// success body becomes `Format`.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> PokemonResult<UpstreamResponse<T>> {
        let mut request = request.build()?;
        request
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        debug!(method = %request.method(), url = %request.url(), "Calling upstream");
        let response = self.http.execute(request).await?;
        let status = response.status();

        if status != StatusCode::OK {
            debug!(%status, "Upstream returned non-success status");
            return Ok(UpstreamResponse::Failure(status));
        }

        let body = response.bytes().await?;
        Ok(UpstreamResponse::Success(serde_json::from_slice(&body)?))
    }
}
