//! `GET /api/proxy-download?url=...`: streams a generated file through the
//! relay so the browser can save it without a cross-origin request.
//!
//! Only `http(s)` URLs are accepted. When an allow-list is configured the
//! host must be on it; without one, internal addresses are refused. The API key is never sent to these hosts.

use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse};
use common::workflow::RequestKind;
use log::info;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use url::Url;
use uuid::Uuid;

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::relay::{build_reply, RelayState};

const FALLBACK_FILE_NAME: &str = "model.glb";

#[derive(Debug, Deserialize)]
pub struct ProxyQuery {
    url: Option<String>,
}

pub async fn process(
    state: web::Data<RelayState>,
    query: web::Query<ProxyQuery>,
) -> Result<HttpResponse, RelayError> {
    let raw = query
        .into_inner()
        .url
        .filter(|url| !url.trim().is_empty())
        .ok_or(RelayError::MissingField("url"))?;
    let target = check_target(state.config(), &raw)?;
    let file_name = file_name(&target);

    let request_id = Uuid::new_v4().to_string();
    info!("[{request_id}] Proxying download from {}", target.host_str().unwrap_or_default());

    let response = state
        .client()
        .get(target)
        .send()
        .await
        .map_err(RelayError::upstream(RequestKind::Download))?;

    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    if !response.status().is_success() {
        let body = response
            .bytes()
            .await
            .map_err(RelayError::upstream(RequestKind::Download))?;
        return Ok(build_reply(RequestKind::Download, status, "", body));
    }

    let mut reply = HttpResponse::Ok();
    reply.content_type(content_type.unwrap_or_else(|| "application/octet-stream".to_string()));
    reply.insert_header(ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![DispositionParam::Filename(file_name)],
    });
    Ok(reply.streaming(response.bytes_stream()))
}

/// Parses and vets a proxy target.
fn check_target(config: &RelayConfig, raw: &str) -> Result<Url, RelayError> {
    let url = Url::parse(raw).map_err(|err| RelayError::InvalidUrl(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(RelayError::InvalidUrl(format!("unsupported scheme {}", url.scheme())));
    }
    let host = url
        .host_str()
        .ok_or_else(|| RelayError::InvalidUrl("missing host".to_string()))?;
    if !config.allows_proxy_host(host) {
        return Err(RelayError::HostNotAllowed(host.to_string()));
    }
    Ok(url)
}

fn file_name(url: &Url) -> String {
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|name| !name.is_empty())
        .unwrap_or(FALLBACK_FILE_NAME)
        .to_string()
}
