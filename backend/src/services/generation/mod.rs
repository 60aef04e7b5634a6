//! # Generation Relay Service
//!
//! Same-origin endpoints that forward the browser's generation workflow to the
//! remote 3D API, adding the bearer key on the way. The browser never sees the
//! key or talks to the remote host directly.
//!
//! The provided routes are:
//! - `POST /api/rodin`: multipart submission (prompt, option fields, up to five
//!   `images` file parts). The form is rebuilt part by part and sent to
//!   `{api_base}/rodin`.
//! - `POST /api/status`: `{ subscription_key }` forwarded to `{api_base}/status`.
//! - `POST /api/download`: `{ task_uuid }` forwarded to `{api_base}/download`.
//! - `GET /api/proxy-download?url=...`: streams a generated file from an
//!   allowed host so the browser can fetch it same-origin.
//!
//! Upstream replies are mapped by [`crate::relay::build_reply`]; relay-side
//! failures by [`crate::error::RelayError`].

use actix_web::web::{get, post, scope};
use actix_web::Scope;

mod download;
mod proxy;
mod status;
mod submit;

const API_PATH: &str = "/api";

/// Configures and returns the Actix scope for the relay routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/rodin", post().to(submit::process))
        .route("/status", post().to(status::process))
        .route("/download", post().to(download::process))
        .route("/proxy-download", get().to(proxy::process))
}
