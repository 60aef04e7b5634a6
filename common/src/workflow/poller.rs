//! Status poll classification.
//!
//! Polling has three logical states: still polling, succeeded, failed. Each
//! status response is classified by [`evaluate`]; the runner owns the loop and
//! the delay between queries.

use std::time::Duration;

use crate::jobs::{JobStatus, SubJobStatus};
use crate::requests::StatusResponse;

use super::WorkflowError;

/// Fixed delay between two status queries.
pub const POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Default ceiling on status queries for one job (about twenty minutes).
pub const DEFAULT_MAX_ATTEMPTS: u32 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    /// `None` polls until a terminal state, however long that takes.
    pub max_attempts: Option<u32>,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: POLL_INTERVAL,
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
        }
    }
}

impl PollPolicy {
    pub fn exhausted(&self, attempts: u32) -> bool {
        self.max_attempts.is_some_and(|max| attempts >= max)
    }
}

/// What to do after one status response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollDecision {
    /// Sub-jobs still running; query again after the interval.
    Continue,
    /// Every sub-job reported `Done`.
    Succeeded,
    Failed(WorkflowError),
}

impl PollDecision {
    pub fn job_status(&self) -> JobStatus {
        match self {
            PollDecision::Continue => JobStatus::Processing,
            PollDecision::Succeeded => JobStatus::Done,
            PollDecision::Failed(_) => JobStatus::Failed,
        }
    }
}

/// Classifies a status response. A missing or empty job list is a failure.
pub fn evaluate(response: &StatusResponse) -> PollDecision {
    let jobs = match response.jobs.as_deref() {
        Some(jobs) if !jobs.is_empty() => jobs,
        _ => return PollDecision::Failed(WorkflowError::NoJobs),
    };

    if jobs.iter().all(|job| job.status == SubJobStatus::Done) {
        return PollDecision::Succeeded;
    }

    let failed: Vec<String> = jobs
        .iter()
        .filter(|job| job.status == SubJobStatus::Failed)
        .map(|job| job.uuid.clone())
        .collect();
    if !failed.is_empty() {
        return PollDecision::Failed(WorkflowError::GenerationFailed { failed });
    }

    PollDecision::Continue
}
