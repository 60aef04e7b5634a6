//! Test helpers: a throwaway upstream server that records what the relay sends.

use std::sync::{Arc, Mutex};

use actix_web::body::BoxBody;
use actix_web::dev::{ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};

use crate::config::RelayConfig;
use crate::relay::RelayState;
use crate::services;

pub const TEST_KEY: &str = "test-key";

#[derive(Debug, Clone)]
pub struct Seen {
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

pub struct MockUpstream {
    pub base: String,
    seen: Arc<Mutex<Vec<Seen>>>,
    handle: ServerHandle,
}

impl MockUpstream {
    /// Answers every request with the same status, content type and body.
    pub async fn start(status: u16, content_type: &'static str, body: &'static str) -> Self {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&seen);

        let server = HttpServer::new(move || {
            let recorded = Arc::clone(&recorded);
            App::new().default_service(web::to(move |req: HttpRequest, payload: web::Bytes| {
                let recorded = Arc::clone(&recorded);
                async move {
                    let header = |name: &str| {
                        req.headers()
                            .get(name)
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string)
                    };
                    recorded.lock().unwrap().push(Seen {
                        path: req.path().to_string(),
                        authorization: header("authorization"),
                        content_type: header("content-type"),
                        body: payload.to_vec(),
                    });
                    HttpResponse::build(StatusCode::from_u16(status).unwrap())
                        .content_type(content_type)
                        .body(body)
                }
            }))
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .unwrap();

        let base = format!("http://{}", server.addrs()[0]);
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        Self { base, seen, handle }
    }

    pub fn seen(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }

    /// The only request received; fails the test otherwise.
    pub fn single(&self) -> Seen {
        let seen = self.seen();
        assert_eq!(seen.len(), 1, "expected exactly one upstream call");
        seen[0].clone()
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        drop(self.handle.stop(false));
    }
}

pub fn test_config(base: &str) -> RelayConfig {
    RelayConfig {
        api_base: base.to_string(),
        api_key: TEST_KEY.to_string(),
        open_browser: false,
        ..RelayConfig::default()
    }
}

pub fn relay_app(
    base: &str,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<BoxBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    relay_app_with(test_config(base))
}

pub fn relay_app_with(
    config: RelayConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<BoxBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = RelayState::new(config).unwrap();
    App::new().configure(|cfg| services::configure(cfg, &state))
}
