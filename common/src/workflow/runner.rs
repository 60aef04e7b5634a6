//! Drives one job from submission to a displayable asset.
//!
//! The runner is generic over the transport ([`GenerationApi`]) and the timer
//! ([`Sleeper`]): the browser plugs in `gloo-net` and `gloo-timers`, tests plug
//! in in-memory fakes. Both traits are `?Send` because the browser futures are
//! not `Send`.

use std::time::Duration;

use async_trait::async_trait;

use crate::jobs::{Job, JobStatus};
use crate::model::asset::Asset;
use crate::requests::{DownloadRequest, DownloadResponse, StatusRequest, StatusResponse, SubmitResponse};

use super::poller::{evaluate, PollDecision, PollPolicy};
use super::resolver::resolve_asset;
use super::{JobToken, Submission, WorkflowError};

/// The three relay calls.
#[async_trait(?Send)]
pub trait GenerationApi {
    async fn submit(&self, submission: &Submission) -> Result<SubmitResponse, WorkflowError>;
    async fn status(&self, request: &StatusRequest) -> Result<StatusResponse, WorkflowError>;
    async fn download(&self, request: &DownloadRequest) -> Result<DownloadResponse, WorkflowError>;
}

#[async_trait(?Send)]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}

pub struct JobRunner<'a, A: ?Sized, S: ?Sized> {
    api: &'a A,
    sleeper: &'a S,
    policy: PollPolicy,
}

impl<'a, A, S> JobRunner<'a, A, S>
where
    A: GenerationApi + ?Sized,
    S: Sleeper + ?Sized,
{
    pub fn new(api: &'a A, sleeper: &'a S) -> Self {
        Self {
            api,
            sleeper,
            policy: PollPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: PollPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Submits, polls until a terminal state and resolves the asset.
    ///
    /// `on_update` sees the job after the submission and after every status
    /// response. The token is checked around every await; a superseded run
    /// returns [`WorkflowError::Superseded`] without issuing further requests.
    pub async fn run<F>(
        &self,
        submission: &Submission,
        token: &JobToken,
        mut on_update: F,
    ) -> Result<Asset, WorkflowError>
    where
        F: FnMut(&Job),
    {
        token.check()?;
        let response = self.api.submit(submission).await;
        token.check()?;

        let handle = response?.into_handle()?;
        let mut job = Job::new(handle, submission.options().clone());
        on_update(&job);

        self.poll(&mut job, token, &mut on_update).await?;

        token.check()?;
        let files = self.api.download(&DownloadRequest::new(job.id.clone())).await;
        token.check()?;
        resolve_asset(&files?)
    }

    async fn poll<F>(&self, job: &mut Job, token: &JobToken, on_update: &mut F) -> Result<(), WorkflowError>
    where
        F: FnMut(&Job),
    {
        let mut attempts = 0u32;
        loop {
            token.check()?;
            attempts += 1;
            let response = self
                .api
                .status(&StatusRequest::new(job.subscription_key.clone()))
                .await;
            token.check()?;

            let response = match response {
                Ok(response) => response,
                Err(err) => {
                    job.status = JobStatus::Failed;
                    on_update(job);
                    return Err(err);
                }
            };

            let decision = evaluate(&response);
            job.record(response.jobs.unwrap_or_default(), decision.job_status());
            on_update(job);

            match decision {
                PollDecision::Succeeded => return Ok(()),
                PollDecision::Failed(err) => return Err(err),
                PollDecision::Continue if self.policy.exhausted(attempts) => {
                    job.status = JobStatus::Failed;
                    on_update(job);
                    return Err(WorkflowError::TimedOut { attempts });
                }
                PollDecision::Continue => self.sleeper.sleep(self.policy.interval).await,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    use futures::executor::block_on;

    use super::*;
    use crate::jobs::SubJob;
    use crate::model::generation::GenerationOptions;
    use crate::requests::{OutputFile, SubmittedJobs};
    use crate::workflow::JobTracker;

    #[derive(Default)]
    struct FakeApi {
        submit_reply: RefCell<Option<Result<SubmitResponse, WorkflowError>>>,
        statuses: RefCell<VecDeque<Result<StatusResponse, WorkflowError>>>,
        files: Vec<&'static str>,
        submit_calls: Cell<u32>,
        status_calls: Cell<u32>,
        download_calls: Cell<u32>,
        on_status: Option<Box<dyn Fn(u32)>>,
    }

    impl FakeApi {
        fn with_statuses(statuses: &[&[&str]]) -> Self {
            Self {
                statuses: RefCell::new(statuses.iter().map(|s| Ok(status(s))).collect()),
                files: vec!["model.obj", "model.glb"],
                ..Self::default()
            }
        }
    }

    fn status(statuses: &[&str]) -> StatusResponse {
        StatusResponse {
            jobs: Some(
                statuses
                    .iter()
                    .enumerate()
                    .map(|(i, s)| SubJob {
                        uuid: format!("sub-{i}"),
                        status: s.to_string().into(),
                    })
                    .collect(),
            ),
        }
    }

    #[async_trait(?Send)]
    impl GenerationApi for FakeApi {
        async fn submit(&self, _submission: &Submission) -> Result<SubmitResponse, WorkflowError> {
            self.submit_calls.set(self.submit_calls.get() + 1);
            self.submit_reply.borrow_mut().take().unwrap_or_else(|| {
                Ok(SubmitResponse {
                    uuid: Some("task-1".into()),
                    jobs: Some(SubmittedJobs {
                        uuids: vec!["sub-0".into()],
                        subscription_key: Some("key-1".into()),
                    }),
                    message: None,
                })
            })
        }

        async fn status(&self, request: &StatusRequest) -> Result<StatusResponse, WorkflowError> {
            assert_eq!(request.subscription_key, "key-1");
            let call = self.status_calls.get() + 1;
            self.status_calls.set(call);
            if let Some(hook) = &self.on_status {
                hook(call);
            }
            self.statuses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Ok(status(&["Generating"])))
        }

        async fn download(&self, request: &DownloadRequest) -> Result<DownloadResponse, WorkflowError> {
            assert_eq!(request.task_uuid, "task-1");
            self.download_calls.set(self.download_calls.get() + 1);
            Ok(DownloadResponse {
                error: Some("OK".into()),
                list: Some(
                    self.files
                        .iter()
                        .map(|name| OutputFile {
                            name: name.to_string(),
                            url: format!("https://cdn.example.com/{name}"),
                        })
                        .collect(),
                ),
            })
        }
    }

    #[derive(Default)]
    struct CountingSleeper {
        sleeps: Cell<u32>,
    }

    #[async_trait(?Send)]
    impl Sleeper for CountingSleeper {
        async fn sleep(&self, duration: Duration) {
            assert_eq!(duration, crate::workflow::POLL_INTERVAL);
            self.sleeps.set(self.sleeps.get() + 1);
        }
    }

    fn submission() -> Submission {
        Submission::new("a wooden chair", GenerationOptions::default())
    }

    #[test]
    fn completes_after_running_statuses() {
        let api = FakeApi::with_statuses(&[&["Waiting"], &["Done", "Generating"], &["Done", "Done"]]);
        let sleeper = CountingSleeper::default();
        let token = JobTracker::new().begin();
        let mut done_updates = 0;

        let asset = block_on(JobRunner::new(&api, &sleeper).run(&submission(), &token, |job| {
            if job.status == JobStatus::Done {
                done_updates += 1;
            }
        }))
        .unwrap();

        assert_eq!(asset.name, "model.glb");
        assert_eq!(done_updates, 1);
        assert_eq!(api.status_calls.get(), 3);
        assert_eq!(api.download_calls.get(), 1);
        assert_eq!(sleeper.sleeps.get(), 2);
    }

    #[test]
    fn failed_sub_job_stops_polling() {
        let api = FakeApi::with_statuses(&[&["Done", "Failed"], &["Done", "Done"]]);
        let sleeper = CountingSleeper::default();
        let token = JobTracker::new().begin();
        let mut last = None;

        let result = block_on(JobRunner::new(&api, &sleeper).run(&submission(), &token, |job| {
            last = Some(job.status)
        }));

        assert!(matches!(result, Err(WorkflowError::GenerationFailed { .. })));
        assert_eq!(last, Some(JobStatus::Failed));
        assert_eq!(api.status_calls.get(), 1);
        assert_eq!(api.download_calls.get(), 0);
        assert_eq!(sleeper.sleeps.get(), 0);
    }

    #[test]
    fn empty_job_list_stops_polling() {
        let api = FakeApi::with_statuses(&[&[]]);
        let sleeper = CountingSleeper::default();
        let token = JobTracker::new().begin();

        let result = block_on(JobRunner::new(&api, &sleeper).run(&submission(), &token, |_| {}));

        assert_eq!(result, Err(WorkflowError::NoJobs));
        assert_eq!(api.status_calls.get(), 1);
        assert_eq!(api.download_calls.get(), 0);
    }

    #[test]
    fn status_error_fails_the_job() {
        let api = FakeApi::default();
        api.statuses.borrow_mut().push_back(Err(WorkflowError::Http {
            kind: crate::workflow::RequestKind::Status,
            status: 500,
            details: "boom".into(),
        }));
        let sleeper = CountingSleeper::default();
        let token = JobTracker::new().begin();

        let result = block_on(JobRunner::new(&api, &sleeper).run(&submission(), &token, |_| {}));

        assert!(matches!(result, Err(WorkflowError::Http { status: 500, .. })));
        assert_eq!(api.status_calls.get(), 1);
        assert_eq!(sleeper.sleeps.get(), 0);
    }

    #[test]
    fn malformed_submission_never_polls() {
        let api = FakeApi::default();
        *api.submit_reply.borrow_mut() = Some(Ok(SubmitResponse {
            message: Some("quota exceeded".into()),
            ..SubmitResponse::default()
        }));
        let sleeper = CountingSleeper::default();
        let token = JobTracker::new().begin();

        let result = block_on(JobRunner::new(&api, &sleeper).run(&submission(), &token, |_| {}));

        assert!(matches!(result, Err(WorkflowError::Malformed(_))));
        assert_eq!(api.status_calls.get(), 0);
    }

    #[test]
    fn superseded_run_stops_without_downloading() {
        let tracker = JobTracker::new();
        let token = tracker.begin();
        let newer = tracker.clone();
        let api = FakeApi {
            on_status: Some(Box::new(move |call| {
                if call == 2 {
                    newer.begin();
                }
            })),
            ..FakeApi::with_statuses(&[&["Generating"], &["Done"]])
        };
        let sleeper = CountingSleeper::default();

        let result = block_on(JobRunner::new(&api, &sleeper).run(&submission(), &token, |_| {}));

        assert_eq!(result, Err(WorkflowError::Superseded));
        assert_eq!(api.status_calls.get(), 2);
        assert_eq!(api.download_calls.get(), 0);
    }

    #[test]
    fn stale_token_makes_no_requests() {
        let tracker = JobTracker::new();
        let token = tracker.begin();
        tracker.begin();
        let api = FakeApi::default();
        let sleeper = CountingSleeper::default();

        let result = block_on(JobRunner::new(&api, &sleeper).run(&submission(), &token, |_| {}));

        assert_eq!(result, Err(WorkflowError::Superseded));
        assert_eq!(api.submit_calls.get(), 0);
    }

    #[test]
    fn gives_up_after_max_attempts() {
        let api = FakeApi::default();
        let sleeper = CountingSleeper::default();
        let token = JobTracker::new().begin();
        let policy = PollPolicy {
            max_attempts: Some(3),
            ..PollPolicy::default()
        };

        let result = block_on(
            JobRunner::new(&api, &sleeper)
                .with_policy(policy)
                .run(&submission(), &token, |_| {}),
        );

        assert_eq!(result, Err(WorkflowError::TimedOut { attempts: 3 }));
        assert_eq!(api.status_calls.get(), 3);
        assert_eq!(sleeper.sleeps.get(), 2);
    }

    #[test]
    fn missing_glb_is_reported_after_success() {
        let api = FakeApi {
            files: vec!["model.obj"],
            ..FakeApi::with_statuses(&[&["Done"]])
        };
        let sleeper = CountingSleeper::default();
        let token = JobTracker::new().begin();

        let result = block_on(JobRunner::new(&api, &sleeper).run(&submission(), &token, |_| {}));

        assert_eq!(result, Err(WorkflowError::NoMatchingFile { extension: ".glb".into() }));
        assert_eq!(api.download_calls.get(), 1);
    }
}
