//! `POST /api/status`: asks the remote API how the sub-jobs of a task are doing.

use actix_web::{web, HttpResponse};
use common::requests::StatusRequest;
use common::workflow::RequestKind;
use log::{debug, info};
use uuid::Uuid;

use crate::error::RelayError;
use crate::relay::RelayState;

pub async fn process(
    state: web::Data<RelayState>,
    payload: web::Json<StatusRequest>,
) -> Result<HttpResponse, RelayError> {
    let subscription_key = payload.into_inner().subscription_key;
    if subscription_key.trim().is_empty() {
        return Err(RelayError::MissingField("subscription_key"));
    }

    let request_id = Uuid::new_v4().to_string();
    info!("[{request_id}] Checking status of subscription {}", key_hint(&subscription_key));
    debug!("[{request_id}] Subscription key length {}", subscription_key.len());

    let request = state.post("status").json(&StatusRequest::new(subscription_key));
    state.forward(RequestKind::Status, &request_id, request).await
}

/// First characters of a subscription key, enough to correlate log lines.
fn key_hint(key: &str) -> String {
    const SHOWN: usize = 6;
    match key.char_indices().nth(SHOWN) {
        Some((cut, _)) => format!("{}…", &key[..cut]),
        None => "…".to_string(),
    }
}
