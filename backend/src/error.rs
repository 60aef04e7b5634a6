//! Errors raised by the relay itself, as opposed to errors reported by the
//! upstream API (those are passed on by [`crate::relay::build_reply`]).
//!
//! Every variant renders as the JSON body the browser expects:
//! `{ "error": ..., "details": ... }`.

use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use common::requests::RelayFailure;
use common::workflow::RequestKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Missing {0}")]
    MissingField(&'static str),
    #[error("Too many images: at most {max} can be submitted")]
    TooManyImages { max: usize },
    #[error("Invalid request body")]
    InvalidBody(String),
    #[error("Invalid download URL")]
    InvalidUrl(String),
    #[error("Downloads from {0} are not allowed")]
    HostNotAllowed(String),
    #[error("{kind} failed: upstream unreachable")]
    Upstream {
        kind: RequestKind,
        #[source]
        source: reqwest::Error,
    },
}

impl RelayError {
    pub fn upstream(kind: RequestKind) -> impl FnOnce(reqwest::Error) -> Self {
        move |source| RelayError::Upstream { kind, source }
    }

    fn details(&self) -> Option<String> {
        match self {
            RelayError::InvalidBody(details) | RelayError::InvalidUrl(details) => Some(details.clone()),
            RelayError::Upstream { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MissingField(_)
            | RelayError::TooManyImages { .. }
            | RelayError::InvalidBody(_)
            | RelayError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
            RelayError::HostNotAllowed(_) => StatusCode::FORBIDDEN,
            RelayError::Upstream { source, .. } if source.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            RelayError::Upstream { .. } => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(RelayFailure {
            error: self.to_string(),
            details: self.details(),
        })
    }
}

/// `JsonConfig` error handler: malformed JSON bodies get the same shape as
/// every other relay error.
pub fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    RelayError::InvalidBody(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn missing_field_is_a_bare_400() {
        let response = RelayError::MissingField("task_uuid").error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body()).await.unwrap();
        assert_eq!(&body[..], br#"{"error":"Missing task_uuid"}"#);
    }

    #[test]
    fn statuses_follow_the_variant() {
        assert_eq!(
            RelayError::TooManyImages { max: 5 }.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RelayError::HostNotAllowed("evil.test".into()).status_code(),
            StatusCode::FORBIDDEN
        );
    }
}
