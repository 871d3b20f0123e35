//! HTTP client layer for the dashboard server.
//!
//! This module defines the [`TaskApi`] trait the rest of the crate talks to,
//! along with the reqwest-backed implementation and common error handling.
//! Keeping the trait at this seam lets the reconciler run against an
//! in-memory fake in tests.

use async_trait::async_trait;
use serde_json::Value;

use crate::constants::{CSRF_FIELD, CSRF_HEADER, TASK_ACK_FIELD};
use crate::model::TaskRecord;

/// Common error types for server operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Invalid response data: {0}")]
    InvalidData(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::InvalidData(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Server operations the dashboard depends on.
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Fetch the current ordered task list.
    async fn fetch_tasks(&self) -> Result<Vec<TaskRecord>, ApiError>;

    /// Acknowledge one or more tasks so the server stops reporting them.
    /// The response body is not consumed.
    async fn ack_tasks(&self, ids: &[String]) -> Result<(), ApiError>;

    /// Issue a bulk action POST and return the parsed response body.
    async fn bulk_action(&self, url: &str, body: &Value) -> Result<Value, ApiError>;
}

/// reqwest-backed [`TaskApi`] bound to one task endpoint and CSRF token.
#[derive(Clone)]
pub struct HttpTaskApi {
    http: reqwest::Client,
    task_url: String,
    csrf_token: String,
}

impl HttpTaskApi {
    pub fn new(task_url: String, csrf_token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            task_url,
            csrf_token,
        }
    }

    fn check_status(resp: &reqwest::Response) -> Result<(), ApiError> {
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(ApiError::Status {
                status: resp.status().as_u16(),
                url: resp.url().to_string(),
            })
        }
    }
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn fetch_tasks(&self) -> Result<Vec<TaskRecord>, ApiError> {
        // The server expects the CSRF token in the GET body, not the query
        // string; this mirrors what the dashboard pages send.
        let resp = self
            .http
            .get(&self.task_url)
            .body(format!("{CSRF_FIELD}={}", self.csrf_token))
            .send()
            .await?;
        Self::check_status(&resp)?;

        let records: Vec<TaskRecord> = resp.json().await?;
        Ok(records)
    }

    async fn ack_tasks(&self, ids: &[String]) -> Result<(), ApiError> {
        let mut form: Vec<(&str, &str)> = vec![(CSRF_FIELD, self.csrf_token.as_str())];
        for id in ids {
            form.push((TASK_ACK_FIELD, id.as_str()));
        }

        let resp = self.http.post(&self.task_url).form(&form).send().await?;
        Self::check_status(&resp)?;
        Ok(())
    }

    async fn bulk_action(&self, url: &str, body: &Value) -> Result<Value, ApiError> {
        let resp = self
            .http
            .post(url)
            .header(CSRF_HEADER, &self.csrf_token)
            .json(body)
            .send()
            .await?;
        Self::check_status(&resp)?;

        let body = resp.json().await.unwrap_or(Value::Null);
        Ok(body)
    }
}
