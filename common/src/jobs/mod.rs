//! Generation jobs as seen by the client.
//!
//! A job is created from the submission response and then mutated by the
//! status poller. Its sub-jobs are reported by the remote service, each with
//! a free-form status string of which only `"Done"` and `"Failed"` carry
//! meaning; anything else means the sub-job is still running.

use serde::{Deserialize, Serialize};

use crate::model::generation::GenerationOptions;

/// Status of a single sub-job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SubJobStatus {
    Done,
    Failed,
    /// Any other value, kept verbatim for display (`"Waiting"`, `"Generating"`, ...).
    InProgress(String),
}

impl SubJobStatus {
    pub fn as_str(&self) -> &str {
        match self {
            SubJobStatus::Done => "Done",
            SubJobStatus::Failed => "Failed",
            SubJobStatus::InProgress(other) => other,
        }
    }
}

impl From<String> for SubJobStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Done" => SubJobStatus::Done,
            "Failed" => SubJobStatus::Failed,
            _ => SubJobStatus::InProgress(value),
        }
    }
}

impl From<SubJobStatus> for String {
    fn from(value: SubJobStatus) -> Self {
        match value {
            SubJobStatus::InProgress(other) => other,
            terminal => terminal.as_str().to_string(),
        }
    }
}

/// One unit of work inside a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubJob {
    /// Empty when the service omits it; only the status drives the poller.
    #[serde(default)]
    pub uuid: String,
    pub status: SubJobStatus,
}

/// Aggregate state of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    /// Submitted, no status received yet.
    Pending,
    /// At least one status response received, not all sub-jobs terminal.
    Processing,
    Done,
    Failed,
}

/// Identifiers returned by a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobHandle {
    /// Task uuid, used for the download request.
    pub id: String,
    /// Key used for status requests.
    pub subscription_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub subscription_key: String,
    pub options: GenerationOptions,
    pub status: JobStatus,
    pub sub_jobs: Vec<SubJob>,
}

impl Job {
    pub fn new(handle: JobHandle, options: GenerationOptions) -> Self {
        Self {
            id: handle.id,
            subscription_key: handle.subscription_key,
            options,
            status: JobStatus::Pending,
            sub_jobs: Vec::new(),
        }
    }

    /// Records the sub-jobs of the latest status response.
    pub fn record(&mut self, sub_jobs: Vec<SubJob>, status: JobStatus) {
        self.sub_jobs = sub_jobs;
        self.status = status;
    }
}
