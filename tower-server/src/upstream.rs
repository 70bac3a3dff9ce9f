//! HTTP client for the upstream competition API
//!
//! Implements the core's `UpstreamGateway` over reqwest. Every call carries
//! the `X-Auth-Token` header and asks for JSON. No retries here: a failed
//! call surfaces as a `GatewayError` and the caller decides.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use tower_core::gateway::{GatewayError, GatewayResult, UpstreamGateway};
use tower_core::model::{ExtendedWordPool, RoundList, UpstreamWordPool};

const AUTH_HEADER: &str = "X-Auth-Token";

#[derive(Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
    auth_token: String,
}

impl HttpGateway {
    pub fn new(
        base_url: impl Into<String>,
        auth_token: impl Into<String>,
        timeout: Duration,
    ) -> GatewayResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth_token: auth_token.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn request<T: DeserializeOwned>(&self, method: Method, endpoint: &str) -> GatewayResult<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%method, %url, "upstream request");

        let resp = self
            .client
            .request(method, &url)
            .header(ACCEPT, "application/json")
            .header(AUTH_HEADER, &self.auth_token)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Unavailable(format!("{url} timed out"))
                } else {
                    GatewayError::Transport(e.to_string())
                }
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        resp.json::<T>()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))
    }
}

#[async_trait]
impl UpstreamGateway for HttpGateway {
    async fn fetch_rounds(&self) -> GatewayResult<RoundList> {
        self.request(Method::GET, "/rounds").await
    }

    async fn fetch_word_pool(&self) -> GatewayResult<Vec<String>> {
        let pool: UpstreamWordPool = self.request(Method::POST, "/shuffle").await?;
        debug!(
            upstream_shuffle_left = pool.shuffle_left,
            words = pool.words.len(),
            "upstream shuffle"
        );
        Ok(pool.words)
    }

    async fn fetch_raw_words(&self) -> GatewayResult<ExtendedWordPool> {
        self.request(Method::GET, "/words").await
    }
}
