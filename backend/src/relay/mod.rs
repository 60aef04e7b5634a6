//! Shared upstream plumbing for the relay handlers.
//!
//! [`RelayState`] is injected into every handler as `web::Data`. It owns a
//! single pooled `reqwest::Client` and the startup configuration, and knows
//! how to authenticate and forward a request to the remote API.

mod response;

use std::sync::Arc;

use actix_web::HttpResponse;
use common::workflow::RequestKind;
use log::{debug, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder};

use crate::config::RelayConfig;
use crate::error::RelayError;

pub use response::build_reply;

#[derive(Clone)]
pub struct RelayState {
    client: Client,
    config: Arc<RelayConfig>,
}

impl RelayState {
    pub fn new(config: RelayConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// An authenticated `POST {api_base}/{route}`.
    pub fn post(&self, route: &str) -> RequestBuilder {
        self.client
            .post(self.config.endpoint(route))
            .bearer_auth(&self.config.api_key)
    }

    /// Sends `request` and converts the upstream reply into the relay reply.
    pub async fn forward(
        &self,
        kind: RequestKind,
        request_id: &str,
        request: RequestBuilder,
    ) -> Result<HttpResponse, RelayError> {
        let response = request.send().await.map_err(|err| {
            warn!("[{request_id}] {kind} could not reach upstream: {err}");
            RelayError::upstream(kind)(err)
        })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = response.bytes().await.map_err(RelayError::upstream(kind))?;

        if (200..300).contains(&status) {
            debug!("[{request_id}] {kind} answered {status} ({} bytes)", body.len());
        } else {
            warn!("[{request_id}] {kind} answered {status}");
        }
        Ok(build_reply(kind, status, &content_type, body))
    }
}
