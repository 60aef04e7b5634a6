//! Wire schemas of the relay endpoints and of the remote service behind them.
//!
//! The relay passes remote bodies through verbatim, so these types describe
//! both hops. Every field the remote side may omit is optional here; deciding
//! whether a missing field is an error belongs to the workflow.

use serde::{Deserialize, Serialize};

use crate::jobs::{JobHandle, SubJob};
use crate::workflow::WorkflowError;

/// Body of the remote submission response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmitResponse {
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub jobs: Option<SubmittedJobs>,
    /// Set when the relay wrapped a non-JSON body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmittedJobs {
    #[serde(default)]
    pub uuids: Vec<String>,
    #[serde(default)]
    pub subscription_key: Option<String>,
}

impl SubmitResponse {
    /// Extracts the identifiers needed to poll and download.
    pub fn into_handle(self) -> Result<JobHandle, WorkflowError> {
        let key = self.jobs.and_then(|jobs| jobs.subscription_key);
        match (self.uuid, key) {
            (Some(id), Some(subscription_key)) if !id.is_empty() && !subscription_key.is_empty() => {
                Ok(JobHandle {
                    id,
                    subscription_key,
                })
            }
            _ => Err(WorkflowError::Malformed(
                "Missing required data for status checking".to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRequest {
    #[serde(default)]
    pub subscription_key: String,
}

impl StatusRequest {
    pub fn new(subscription_key: impl Into<String>) -> Self {
        Self {
            subscription_key: subscription_key.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub jobs: Option<Vec<SubJob>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadRequest {
    #[serde(default)]
    pub task_uuid: String,
}

impl DownloadRequest {
    pub fn new(task_uuid: impl Into<String>) -> Self {
        Self {
            task_uuid: task_uuid.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DownloadResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub list: Option<Vec<OutputFile>>,
}

/// One generated file offered for download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFile {
    pub name: String,
    pub url: String,
}

/// Error body produced by the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayFailure {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl RelayFailure {
    /// The most specific text available, as the browser shows it.
    pub fn describe(&self) -> &str {
        self.details
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(&self.error)
    }
}

/// Wrapper the relay puts around non-JSON upstream bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayMessage {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::SubJobStatus;

    #[test]
    fn submit_response_yields_a_handle() {
        let response: SubmitResponse = serde_json::from_str(
            r#"{"uuid":"task-1","jobs":{"uuids":["a","b"],"subscription_key":"sub-1"}}"#,
        )
        .unwrap();
        let handle = response.into_handle().unwrap();
        assert_eq!(handle.id, "task-1");
        assert_eq!(handle.subscription_key, "sub-1");
    }

    #[test]
    fn submit_response_without_key_is_malformed() {
        let response: SubmitResponse = serde_json::from_str(r#"{"uuid":"task-1"}"#).unwrap();
        assert!(matches!(response.into_handle(), Err(WorkflowError::Malformed(_))));

        let wrapped: SubmitResponse = serde_json::from_str(r#"{"message":"rate limited"}"#).unwrap();
        assert!(wrapped.into_handle().is_err());
    }

    #[test]
    fn status_response_tolerates_missing_jobs() {
        let empty: StatusResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.jobs, None);

        let full: StatusResponse =
            serde_json::from_str(r#"{"jobs":[{"uuid":"a","status":"Done"}]}"#).unwrap();
        assert_eq!(full.jobs.unwrap()[0].status, SubJobStatus::Done);
    }

    #[test]
    fn failure_prefers_details() {
        let failure = RelayFailure {
            error: "Status check failed: 500".into(),
            details: Some("upstream exploded".into()),
        };
        assert_eq!(failure.describe(), "upstream exploded");

        let bare = RelayFailure {
            error: "Missing task_uuid".into(),
            details: None,
        };
        assert_eq!(bare.describe(), "Missing task_uuid");
    }
}
