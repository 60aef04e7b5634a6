use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::web::Bytes;
use actix_web::HttpResponse;
use common::requests::{RelayFailure, RelayMessage};
use common::workflow::RequestKind;

/// Maps an upstream reply onto the relay reply.
///
/// - non-2xx: same status, `{ error: "<kind> failed: <status>", details: <body> }`
/// - JSON: body passed through unchanged
/// - anything else: `{ message: <body> }`
pub fn build_reply(kind: RequestKind, status: u16, content_type: &str, body: Bytes) -> HttpResponse {
    let status_code = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);

    if !status_code.is_success() {
        return HttpResponse::build(status_code).json(RelayFailure {
            error: format!("{kind} failed: {status}"),
            details: Some(String::from_utf8_lossy(&body).into_owned()),
        });
    }

    if content_type.to_ascii_lowercase().contains("application/json") {
        HttpResponse::Ok().content_type(ContentType::json()).body(body)
    } else {
        HttpResponse::Ok().json(RelayMessage {
            message: String::from_utf8_lossy(&body).into_owned(),
        })
    }
}
