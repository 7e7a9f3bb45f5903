//! Client for the upstream feedback data API.

use autosent_core::{AppConfig, RawFeedbackRecord, SummaryQuery};
use chrono::NaiveDate;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::ClientError;
use crate::http::{build_http_client, endpoint, parse_base_url, read_json};

const DEFAULT_USER_AGENT: &str = "autosent/0.1 (feedback-dashboard)";

/// `GET /detailed-summary` answers with either shape.
#[derive(Deserialize)]
#[serde(untagged)]
enum SummaryPayload {
    Wrapped { data: Vec<RawFeedbackRecord> },
    Bare(Vec<RawFeedbackRecord>),
}

/// Client for the feedback data API.
///
/// Use [`DataApiClient::from_config`] in binaries or
/// [`DataApiClient::with_base_url`] to point at a mock server in tests.
pub struct DataApiClient {
    client: Client,
    base_url: Url,
}

impl DataApiClient {
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`ClientError::InvalidBaseUrl`] for a malformed base URL.
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::build(&config.api_base_url, config.http_timeout_secs, &config.user_agent)
    }

    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if `base_url` is not a valid URL.
    pub fn with_base_url(base_url: &str, timeout_secs: u64) -> Result<Self, ClientError> {
        Self::build(base_url, timeout_secs, DEFAULT_USER_AGENT)
    }

    fn build(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ClientError> {
        Ok(Self {
            client: build_http_client(timeout_secs, user_agent)?,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Fetches the full raw dataset from `GET /data`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure or timeout.
    /// - [`ClientError::Api`] on a non-2xx status.
    /// - [`ClientError::Deserialize`] if the body is not a JSON array of records.
    pub async fn fetch_records(&self) -> Result<Vec<RawFeedbackRecord>, ClientError> {
        let url = endpoint(&self.base_url, &["data"])?;
        let records: Vec<RawFeedbackRecord> = self.get_json(url, "GET /data").await?;
        tracing::debug!(count = records.len(), "fetched feedback records");
        Ok(records)
    }

    /// Fetches summary records for one chart cell.
    ///
    /// # Errors
    ///
    /// Same as [`DataApiClient::fetch_records`].
    pub async fn detailed_summary(
        &self,
        query: &SummaryQuery,
    ) -> Result<Vec<RawFeedbackRecord>, ClientError> {
        let mut url = endpoint(&self.base_url, &["detailed-summary"])?;
        url.query_pairs_mut().extend_pairs(query.query_pairs());
        let payload: SummaryPayload = self.get_json(url, "GET /detailed-summary").await?;
        Ok(match payload {
            SummaryPayload::Wrapped { data } | SummaryPayload::Bare(data) => data,
        })
    }

    /// Fetches every record mentioning `feature`.
    ///
    /// # Errors
    ///
    /// Same as [`DataApiClient::fetch_records`].
    pub async fn feature_feedback(
        &self,
        feature: &str,
    ) -> Result<Vec<RawFeedbackRecord>, ClientError> {
        let url = endpoint(&self.base_url, &["feature-feedback", feature])?;
        self.get_json(url, &format!("GET /feature-feedback/{feature}"))
            .await
    }

    /// Fetches a single record; `date` is sent as `DD-MM-YYYY`.
    ///
    /// # Errors
    ///
    /// Same as [`DataApiClient::fetch_records`].
    pub async fn feedback_details(
        &self,
        model: &str,
        index: usize,
        date: NaiveDate,
    ) -> Result<RawFeedbackRecord, ClientError> {
        let index = index.to_string();
        let date = date.format("%d-%m-%Y").to_string();
        let url = endpoint(&self.base_url, &["feedback", "details", model, &index, &date])?;
        self.get_json(url, &format!("GET /feedback/details/{model}/{index}/{date}"))
            .await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: Url,
        context: &str,
    ) -> Result<T, ClientError> {
        let result = match self.client.get(url).send().await {
            Ok(response) => read_json(response, context).await,
            Err(e) => Err(ClientError::Http(e)),
        };
        result.inspect_err(|e| tracing::warn!(request = context, error = %e, "data API request failed"))
    }
}
