//! Meraki Dashboard API client implementation

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::{Client as HttpClient, Method, StatusCode};
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{DashboardApi, NewNetwork, Network, Organization};
use crate::config::Config;
use crate::error::{ApiError, Result};

/// Header carrying the Dashboard API key
const API_KEY_HEADER: &str = "X-Cisco-Meraki-API-Key";

/// Meraki Dashboard API client
pub struct DashboardClient {
    http: HttpClient,
    base_url: String,
    api_key: String,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

/// Error body returned by the Dashboard API
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<String>,
}

/// Pull the messages of the `errors` array out of an error body,
/// falling back to the raw text.
fn api_error_message(body: &str, fallback: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.errors.is_empty() => parsed.errors.join("; "),
        _ if !body.trim().is_empty() => body.trim().to_string(),
        _ => fallback.to_string(),
    }
}

impl DashboardClient {
    /// Create a client for one API key
    pub fn new(api_key: impl Into<String>, config: &Config) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("merakiop/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let per_second = NonZeroU32::new(config.rate_limit_per_second).unwrap_or(NonZeroU32::MIN);
        let rate_limiter = Arc::new(RateLimiter::direct(Quota::per_second(per_second)));

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            rate_limiter,
        })
    }

    /// Make an authenticated API request
    async fn request<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.rate_limiter.until_ready().await;

        let url = format!("{}{}", self.base_url, path);
        log::debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method, &url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(reqwest::header::ACCEPT, "application/json");

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        log::debug!("{} -> {}", url, status);

        match status {
            status if status.is_success() => {
                let data = response.json::<T>().await.map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
                })?;
                Ok(data)
            }
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden.into()),
            StatusCode::NOT_FOUND => {
                let text = response.text().await.unwrap_or_default();
                Err(ApiError::NotFound(api_error_message(&text, path)).into())
            }
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(1);
                Err(ApiError::RateLimit(Duration::from_secs(retry_after)).into())
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let text = response.text().await.unwrap_or_default();
                Err(ApiError::BadRequest(api_error_message(&text, "Bad request")).into())
            }
            status if status.is_server_error() => {
                let text = response.text().await.unwrap_or_default();
                let fallback = format!("Server error: {}", status);
                Err(ApiError::ServerError(api_error_message(&text, &fallback)).into())
            }
            _ => {
                let error_msg = format!("Unexpected status code: {}", status);
                Err(ApiError::InvalidResponse(error_msg).into())
            }
        }
    }
}

#[async_trait]
impl DashboardApi for DashboardClient {
    async fn list_organizations(&self) -> Result<Vec<Organization>> {
        self.request::<_, ()>(Method::GET, "/organizations", None).await
    }

    async fn list_networks(&self, org_id: &str) -> Result<Vec<Network>> {
        let path = format!("/organizations/{}/networks", org_id);
        self.request::<_, ()>(Method::GET, &path, None).await
    }

    async fn create_network(&self, org_id: &str, network: &NewNetwork) -> Result<Network> {
        let path = format!("/organizations/{}/networks", org_id);
        self.request(Method::POST, &path, Some(network)).await
    }
}
