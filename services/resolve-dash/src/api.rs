// services/resolve-dash/src/api.rs
//
// API client for fetching analytics from the Resolve backend

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use svckit::config::ApiConfig;
use svckit::types::{DashboardData, SummaryStats, TrendSeries};
use svckit::{DashError, DashResult};
use tracing::debug;

pub const HEALTH_PATH: &str = "/api/health";
pub const DASHBOARD_PATH: &str = "/api/analytics/dashboard";
pub const SUMMARY_PATH: &str = "/api/stats/summary";
pub const TRENDS_PATH: &str = "/api/analytics/trends";

/// Everything the dashboard reads from the backend.
#[async_trait]
pub trait AnalyticsApi: Send + Sync {
    /// Succeeds on any 2xx.
    async fn health(&self) -> DashResult<()>;

    async fn dashboard(&self) -> DashResult<DashboardData>;

    async fn summary(&self) -> DashResult<SummaryStats>;

    async fn trends(&self, days: u32) -> DashResult<TrendSeries>;
}

pub struct HttpAnalyticsApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAnalyticsApi {
    pub fn new(config: &ApiConfig) -> DashResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, path: &str) -> DashResult<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DashError::HttpStatus {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> DashResult<T> {
        let body = self.get(path).await?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl AnalyticsApi for HttpAnalyticsApi {
    async fn health(&self) -> DashResult<()> {
        self.get(HEALTH_PATH).await.map(|_| ())
    }

    async fn dashboard(&self) -> DashResult<DashboardData> {
        self.get_json(DASHBOARD_PATH).await
    }

    async fn summary(&self) -> DashResult<SummaryStats> {
        self.get_json(SUMMARY_PATH).await
    }

    async fn trends(&self, days: u32) -> DashResult<TrendSeries> {
        self.get_json(&format!("{}?days={}", TRENDS_PATH, days)).await
    }
}
