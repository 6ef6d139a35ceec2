// SPDX-License-Identifier: GPL-3.0-only

//! HTTP seam between the sprite pipeline and the network.
//!
//! Every request the pipeline makes is a plain GET, so the trait is kept that
//! small. [`MockHttpClient`] answers from canned responses so the pipeline can
//! be exercised without touching PokéApi.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::{FetchError, Result};

/// Response of a GET request, fully buffered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Performs a GET request and buffers the whole body.
    ///
    /// Only failures to get a response at all are errors; any status code is
    /// returned as is.
    async fn get(&self, url: &str) -> Result<HttpResponse>;
}

#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new(user_agent: &str, timeout: Duration) -> std::result::Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    #[tracing::instrument(skip(self))]
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        let transport = |e: reqwest::Error| FetchError::Transport {
            url: url.to_string(),
            reason: e.to_string(),
        };

        let response = self.client.get(url).send().await.map_err(transport)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(transport)?.to_vec();

        tracing::debug!(status, body_len = body.len(), "GET completed");

        Ok(HttpResponse { status, body })
    }
}

// ============================================================================
// Test/Mock Implementation
// ============================================================================

/// Mock HTTP client answering from predetermined responses.
///
/// Responses are keyed by the exact URL. Several responses can be queued for
/// the same URL and are handed out in FIFO order; the last one is then
/// repeated. A URL without any response yields a transport error.
#[derive(Clone, Default)]
pub struct MockHttpClient {
    responses: Arc<Mutex<HashMap<String, Vec<HttpResponse>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_response(&self, url: &str, status: u16, body: impl Into<Vec<u8>>) {
        self.responses
            .lock()
            .entry(url.to_string())
            .or_default()
            .push(HttpResponse {
                status,
                body: body.into(),
            });
    }

    /// Queues a 200 OK with a JSON body
    pub fn add_json(&self, url: &str, body: &serde_json::Value) {
        self.add_response(url, 200, body.to_string());
    }

    /// Every URL requested so far, in order
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self, url: &str) -> usize {
        self.calls.lock().iter().filter(|call| *call == url).count()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        self.calls.lock().push(url.to_string());

        let mut responses = self.responses.lock();
        match responses.get_mut(url) {
            Some(queue) if queue.len() > 1 => Ok(queue.remove(0)),
            Some(queue) if !queue.is_empty() => Ok(queue[0].clone()),
            _ => Err(FetchError::Transport {
                url: url.to_string(),
                reason: "no mock response configured".to_string(),
            }),
        }
    }
}
