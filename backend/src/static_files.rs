//! Serves the browser application.
//!
//! The compiled frontend bundle is embedded into the binary at build time
//! (see `build.rs`). Unknown paths fall back to `index.html` so client-side
//! routes survive a reload. `RELAY_STATIC_DIR` swaps the embedded copy for a
//! directory on disk, which is handy while iterating on the frontend.

use std::path::{Path, PathBuf};

use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use actix_web::{web, HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

/// Maps a request path onto a file inside the bundle.
fn requested_file(path: &str) -> &str {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        INDEX
    } else {
        path
    }
}

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let file_path = requested_file(req.path());

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file(INDEX) {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

/// Mounts `dir` at `/` when an override directory is configured.
pub fn configure(cfg: &mut web::ServiceConfig, dir: Option<&Path>) {
    let Some(dir) = dir else {
        return;
    };
    let index: PathBuf = dir.join(INDEX);
    cfg.service(
        Files::new("/", dir)
            .index_file(INDEX)
            .default_handler(fn_service(move |req: ServiceRequest| {
                let index = index.clone();
                async move {
                    let (req, _) = req.into_parts();
                    let file = NamedFile::open_async(index).await?;
                    let res = file.into_response(&req);
                    Ok(ServiceResponse::new(req, res))
                }
            })),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_maps_to_index() {
        assert_eq!(requested_file("/"), "index.html");
        assert_eq!(requested_file(""), "index.html");
        assert_eq!(requested_file("/frontend-1a2b.wasm"), "frontend-1a2b.wasm");
    }
}
