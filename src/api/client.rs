use std::time::Duration;

use reqwest::{Client, Method, Url};
use serde_json::Value;

use crate::config::ApiConfig;

use super::envelope::Envelope;
use super::error::ApiError;

/// Thin HTTP client bound to the API origin.
///
/// One instance is shared by every slice; cloning is cheap because
/// `reqwest::Client` is reference counted internally. With
/// `with_credentials` the client keeps a cookie jar so the session cookie
/// set at login accompanies every later request.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder().cookie_store(config.with_credentials);

        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.connect_timeout_seconds {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|source| ApiError::ClientBuild { source })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the absolute URL for `path` with `query` appended in order.
    ///
    /// `path` is appended to the base URL verbatim (no RFC 3986 resolution),
    /// so a base of `http://host/api` and path `/events` yield
    /// `http://host/api/events`.
    pub fn endpoint(&self, path: &str, query: &[(String, String)]) -> Result<Url, ApiError> {
        let raw = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        Ok(url)
    }

    /// GET `path?query` and parse the envelope.
    pub async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Envelope, ApiError> {
        let url = self.endpoint(path, query)?;
        self.execute(Method::GET, url, None).await
    }

    /// Send `body` as JSON with `method` and parse the envelope.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Envelope, ApiError> {
        let url = self.endpoint(path, &[])?;
        self.execute(method, url, body).await
    }

    async fn execute(
        &self,
        method: Method,
        url: Url,
        body: Option<&Value>,
    ) -> Result<Envelope, ApiError> {
        let method_name = method.to_string();
        let url_text = url.to_string();
        let transport = |source: reqwest::Error| ApiError::Transport {
            method: method_name.clone(),
            url: url_text.clone(),
            source,
        };

        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!(method = %method, url = %url, "API request");

        let response = request.send().await.map_err(&transport)?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(&transport)?;

        tracing::debug!(method = %method, url = %url, status, "API response");

        Envelope::parse(status, &bytes)
    }
}
