//! [`GenerationApi`] over the same-origin relay.
//!
//! The relay answers with the remote body on success and with a
//! [`RelayFailure`] on error, so decoding is the same for every route: read
//! the text, then either parse the expected schema or turn the failure into a
//! [`WorkflowError::Http`] carrying its most specific message.

use std::time::Duration;

use async_trait::async_trait;
use gloo_console::log;
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use common::requests::{
    DownloadRequest, DownloadResponse, RelayFailure, StatusRequest, StatusResponse, SubmitResponse,
};
use common::workflow::{GenerationApi, RequestKind, Sleeper, Submission, WorkflowError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayApi {
    base: String,
}

impl RelayApi {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, route: &str) -> String {
        format!("{}/{}", self.base, route)
    }
}

impl Default for RelayApi {
    fn default() -> Self {
        Self::new(crate::config::RELAY_BASE)
    }
}

#[async_trait(?Send)]
impl GenerationApi for RelayApi {
    async fn submit(&self, submission: &Submission) -> Result<SubmitResponse, WorkflowError> {
        let kind = RequestKind::Submit;
        let form = build_form(submission).map_err(|err| js_failure(kind, err))?;
        let response = Request::post(&self.url("rodin"))
            .body(form)
            .map_err(|err| network(kind, err))?
            .send()
            .await
            .map_err(|err| network(kind, err))?;
        decode(kind, response).await
    }

    async fn status(&self, request: &StatusRequest) -> Result<StatusResponse, WorkflowError> {
        let kind = RequestKind::Status;
        let response = Request::post(&self.url("status"))
            .json(request)
            .map_err(|err| network(kind, err))?
            .send()
            .await
            .map_err(|err| network(kind, err))?;
        decode(kind, response).await
    }

    async fn download(&self, request: &DownloadRequest) -> Result<DownloadResponse, WorkflowError> {
        let kind = RequestKind::Download;
        let response = Request::post(&self.url("download"))
            .json(request)
            .map_err(|err| network(kind, err))?
            .send()
            .await
            .map_err(|err| network(kind, err))?;
        decode(kind, response).await
    }
}

/// Multipart body with the images first, then the prompt and option fields.
fn build_form(submission: &Submission) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    for image in submission.images() {
        let blob = gloo_file::Blob::new_with_options(image.bytes.as_slice(), Some(&image.content_type));
        let blob: web_sys::Blob = blob.into();
        form.append_with_blob_and_filename(submission.image_field(), &blob, &image.file_name)?;
    }
    for (name, value) in submission.text_fields() {
        form.append_with_str(name, &value)?;
    }
    Ok(form)
}

async fn decode<T: DeserializeOwned>(kind: RequestKind, response: Response) -> Result<T, WorkflowError> {
    let status = response.status();
    let body = response.text().await.map_err(|err| network(kind, err))?;
    log!(format!("{kind} responded with {status}"));
    parse_reply(kind, status, &body)
}

fn parse_reply<T: DeserializeOwned>(kind: RequestKind, status: u16, body: &str) -> Result<T, WorkflowError> {
    if !(200..300).contains(&status) {
        return Err(WorkflowError::Http {
            kind,
            status,
            details: failure_details(status, body),
        });
    }
    serde_json::from_str(body).map_err(|err| WorkflowError::Malformed(err.to_string()))
}

/// Text shown for a failed relay call: the relay's `details`, its `error`,
/// the raw body, or the bare status, whichever is available first.
fn failure_details(status: u16, body: &str) -> String {
    match serde_json::from_str::<RelayFailure>(body) {
        Ok(failure) => failure.describe().to_string(),
        Err(_) if !body.trim().is_empty() => body.trim().to_string(),
        Err(_) => format!("HTTP {status}"),
    }
}

fn network(kind: RequestKind, err: gloo_net::Error) -> WorkflowError {
    WorkflowError::Network {
        kind,
        details: err.to_string(),
    }
}

fn js_failure(kind: RequestKind, err: JsValue) -> WorkflowError {
    WorkflowError::Network {
        kind,
        details: err.as_string().unwrap_or_else(|| format!("{err:?}")),
    }
}

/// Waits on the browser timer queue.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooSleeper;

#[async_trait(?Send)]
impl Sleeper for GlooSleeper {
    async fn sleep(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_details_prefer_the_relay_body() {
        let body = r#"{"error":"Status check failed: 500","details":"upstream exploded"}"#;
        assert_eq!(failure_details(500, body), "upstream exploded");
        assert_eq!(failure_details(400, r#"{"error":"Missing task_uuid"}"#), "Missing task_uuid");
        assert_eq!(failure_details(502, "Bad Gateway\n"), "Bad Gateway");
        assert_eq!(failure_details(504, "  "), "HTTP 504");
    }

    #[test]
    fn non_success_replies_become_http_errors() {
        let result: Result<StatusResponse, _> =
            parse_reply(RequestKind::Status, 503, r#"{"error":"Status check failed: 503"}"#);
        assert_eq!(
            result,
            Err(WorkflowError::Http {
                kind: RequestKind::Status,
                status: 503,
                details: "Status check failed: 503".into(),
            })
        );
    }

    #[test]
    fn success_bodies_are_parsed_or_reported_malformed() {
        let parsed: DownloadResponse =
            parse_reply(RequestKind::Download, 200, r#"{"error":"OK","list":[]}"#).unwrap();
        assert_eq!(parsed.error.as_deref(), Some("OK"));

        let broken: Result<DownloadResponse, _> = parse_reply(RequestKind::Download, 200, "<html>");
        assert!(matches!(broken, Err(WorkflowError::Malformed(_))));
    }

    #[test]
    fn routes_hang_off_the_base() {
        assert_eq!(RelayApi::new("/api/").url("status"), "/api/status");
        assert_eq!(RelayApi::default().url("rodin"), "/api/rodin");
    }
}
