use std::time::Duration;

use futures::stream::{self, StreamExt, TryStreamExt};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::api::error::ApiError;
use crate::api::types::{ListPage, RecordPayload};
use crate::catalog::{Page, Record, RecordKey};
use crate::config::ApiConfig;

/// Connection settings for [`CatalogClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub base_url: String,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    /// Upper bound on detail requests in flight during a roster load.
    pub max_concurrent: usize,
}

impl From<&ApiConfig> for ClientOptions {
    fn from(api: &ApiConfig) -> Self {
        Self {
            base_url: api.base_url.clone(),
            request_timeout: Duration::from_secs(api.timeout_seconds),
            connect_timeout: Duration::from_secs(api.connect_timeout_seconds),
            max_concurrent: api.max_concurrent_requests,
        }
    }
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self::from(&ApiConfig::default())
    }
}

pub struct CatalogClient {
    http: Client,
    base_url: String,
    max_concurrent: usize,
}

impl CatalogClient {
    pub fn new(options: ClientOptions) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(options.request_timeout)
            .connect_timeout(options.connect_timeout)
            .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| ApiError::Client { source })?;

        Ok(Self {
            http,
            base_url: options.base_url.trim_end_matches('/').to_string(),
            max_concurrent: options.max_concurrent.max(1),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One page of the list endpoint.
    pub async fn list(&self, page: Page) -> Result<ListPage, ApiError> {
        let url = format!(
            "{}/pokemon?limit={}&offset={}",
            self.base_url, page.limit, page.offset
        );
        self.get_json(&url, None).await
    }

    /// Full detail for one record, by name or numeric id.
    pub async fn record(&self, key: &RecordKey) -> Result<Record, ApiError> {
        let url = format!("{}/pokemon/{}", self.base_url, key);
        let payload: RecordPayload = self.get_json(&url, Some(key)).await?;
        Ok(Record::from(payload))
    }

    /// List a page, then fetch every listed record.
    ///
    /// Detail requests run concurrently, at most `max_concurrent` at a time,
    /// and the result keeps listing order. The first failure aborts the
    /// whole load and drops the requests still in flight.
    pub async fn roster(&self, page: Page) -> Result<Vec<Record>, ApiError> {
        let listing = self.list(page).await?;
        let keys: Vec<RecordKey> = listing
            .results
            .into_iter()
            .map(|entry| RecordKey::Name(entry.name))
            .collect();
        debug!(
            entries = keys.len(),
            concurrency = self.max_concurrent,
            "Fetching roster details"
        );

        let records: Vec<Record> = stream::iter(keys)
            .map(|key| async move { self.record(&key).await })
            .buffered(self.max_concurrent)
            .try_collect()
            .await?;

        info!(records = records.len(), "Roster loaded");
        Ok(records)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        key: Option<&RecordKey>,
    ) -> Result<T, ApiError> {
        debug!(url, "GET");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(url, e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                key: key.map_or_else(|| url.to_string(), ToString::to_string),
            });
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::from_reqwest(url, e))
    }
}
