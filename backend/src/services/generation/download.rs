//! `POST /api/download`: lists the files produced by a finished task.

use actix_web::{web, HttpResponse};
use common::requests::DownloadRequest;
use common::workflow::RequestKind;
use log::info;
use uuid::Uuid;

use crate::error::RelayError;
use crate::relay::RelayState;

pub async fn process(
    state: web::Data<RelayState>,
    payload: web::Json<DownloadRequest>,
) -> Result<HttpResponse, RelayError> {
    let task_uuid = payload.into_inner().task_uuid;
    if task_uuid.trim().is_empty() {
        return Err(RelayError::MissingField("task_uuid"));
    }

    let request_id = Uuid::new_v4().to_string();
    info!("[{request_id}] Listing results of task {task_uuid}");

    let request = state.post("download").json(&DownloadRequest::new(task_uuid));
    state.forward(RequestKind::Download, &request_id, request).await
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{json, Value};

    use crate::testing::{relay_app, MockUpstream};

    #[actix_web::test]
    async fn text_replies_are_wrapped() {
        let upstream = MockUpstream::start(200, "text/plain", "not ready").await;
        let app = test::init_service(relay_app(&upstream.base)).await;

        let request = test::TestRequest::post()
            .uri("/api/download")
            .set_json(json!({ "task_uuid": "task-1" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, request).await;

        assert_eq!(body, json!({ "message": "not ready" }));
        let seen = upstream.single();
        assert_eq!(seen.path, "/download");
        let sent: Value = serde_json::from_slice(&seen.body).unwrap();
        assert_eq!(sent, json!({ "task_uuid": "task-1" }));
    }

    #[actix_web::test]
    async fn missing_task_is_rejected() {
        let upstream = MockUpstream::start(200, "application/json", "{}").await;
        let app = test::init_service(relay_app(&upstream.base)).await;

        let request = test::TestRequest::post()
            .uri("/api/download")
            .set_json(json!({ "task_uuid": "" }))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(upstream.seen().is_empty());
    }

    #[actix_web::test]
    async fn malformed_json_gets_a_json_error() {
        let upstream = MockUpstream::start(200, "application/json", "{}").await;
        let app = test::init_service(relay_app(&upstream.base)).await;

        let request = test::TestRequest::post()
            .uri("/api/download")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["error"], "Invalid request body");
    }
}
