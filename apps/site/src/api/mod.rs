use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::AppConfig;
use crate::models::DemoRequest;

pub type ClientResult<T> = Result<T, ClientError>;

/// Client for the two backend routes the site talks to.
#[derive(Clone)]
pub struct BackendClient {
    inner: reqwest::Client,
    config: Arc<AppConfig>,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: AppConfig) -> ClientResult<Self> {
        let base_url = config.api_base_url();
        let client = reqwest::Client::builder()
            .build()
            .map_err(ClientError::from)?;

        Ok(Self {
            inner: client,
            config: Arc::new(config),
            base_url,
        })
    }

    pub fn config(&self) -> Arc<AppConfig> {
        Arc::clone(&self.config)
    }

    /// `GET /api/`: liveness probe.
    pub async fn ping(&self) -> ClientResult<PingResponse> {
        let response = self
            .request(Method::GET, "")
            .send()
            .await
            .map_err(ClientError::from)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(ClientError::from)?;

        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status,
                body: bytes.to_vec(),
            });
        }

        if bytes.is_empty() {
            return Err(ClientError::EmptyResponse(status));
        }

        serde_json::from_slice(&bytes).map_err(ClientError::from)
    }

    /// `POST /api/demo-requests`. Only a 200 counts as accepted.
    pub async fn post_demo_request(&self, payload: &DemoRequest) -> ClientResult<()> {
        let response = self
            .request(Method::POST, "demo-requests")
            .json(payload)
            .send()
            .await
            .map_err(ClientError::from)?;
        let status = response.status();

        if status == StatusCode::OK {
            return Ok(());
        }

        let body = response
            .bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .unwrap_or_default();
        Err(ClientError::UnexpectedStatus { status, body })
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        self.inner.request(method, join_path(&self.base_url, path))
    }
}

fn join_path(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Where a finished demo request is delivered.
#[async_trait(?Send)]
pub trait DemoRequestSink {
    async fn submit_demo_request(&self, request: &DemoRequest) -> ClientResult<()>;
}

#[async_trait(?Send)]
impl DemoRequestSink for BackendClient {
    async fn submit_demo_request(&self, request: &DemoRequest) -> ClientResult<()> {
        self.post_demo_request(request).await
    }
}

/// A missing client fails every submission, which sends it down the offline path.
#[async_trait(?Send)]
impl<B: DemoRequestSink> DemoRequestSink for Option<B> {
    async fn submit_demo_request(&self, request: &DemoRequest) -> ClientResult<()> {
        match self {
            Some(sink) => sink.submit_demo_request(request).await,
            None => Err(ClientError::NotConfigured),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PingResponse {
    pub message: String,
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("empty response body: {0}")]
    EmptyResponse(StatusCode),
    #[error("unexpected status {status}: {body:?}")]
    UnexpectedStatus { status: StatusCode, body: Vec<u8> },
    #[error("backend client not initialized")]
    NotConfigured,
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::EmptyResponse(status) => Some(*status),
            Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Transport(err) => err.status(),
            Self::Decode(_) | Self::NotConfigured => None,
        }
    }
}
