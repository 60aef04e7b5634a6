//! View-side state of the generation screen.
//!
//! Every result handed to [`GenerationState`] carries the id of the token it
//! was produced under. Results from superseded runs are dropped, so a late
//! reply from an older job can never overwrite the current one.

use crate::jobs::Job;
use crate::model::asset::Asset;

use super::{JobToken, JobTracker, WorkflowError};

#[derive(Debug, Clone, Default)]
pub struct GenerationState {
    tracker: JobTracker,
    active: Option<u64>,
    job: Option<Job>,
    asset: Option<Asset>,
    error: Option<WorkflowError>,
}

impl GenerationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a run: clears the previous result and error, supersedes any
    /// running job and hands out the new token.
    pub fn begin(&mut self) -> JobToken {
        let token = self.tracker.begin();
        self.active = Some(token.id());
        self.job = None;
        self.asset = None;
        self.error = None;
        token
    }

    /// Records a job snapshot. Returns `false` when the token is stale.
    pub fn update(&mut self, token_id: u64, job: Job) -> bool {
        if !self.owns(token_id) {
            return false;
        }
        self.job = Some(job);
        true
    }

    /// Ends the run. Returns `false` when the token is stale.
    pub fn finish(&mut self, token_id: u64, result: Result<Asset, WorkflowError>) -> bool {
        if !self.owns(token_id) {
            return false;
        }
        self.active = None;
        match result {
            Ok(asset) => self.asset = Some(asset),
            Err(err) if err.is_superseded() => {}
            Err(err) => self.error = Some(err),
        }
        true
    }

    /// Stops the running job, if any, and keeps whatever was shown.
    pub fn cancel(&mut self) {
        self.tracker.cancel();
        self.active = None;
    }

    /// Shows an asset that did not come from a run, e.g. a saved model.
    pub fn show(&mut self, asset: Asset) {
        self.cancel();
        self.error = None;
        self.asset = Some(asset);
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn is_loading(&self) -> bool {
        self.active.is_some()
    }

    pub fn job(&self) -> Option<&Job> {
        self.job.as_ref()
    }

    pub fn asset(&self) -> Option<&Asset> {
        self.asset.as_ref()
    }

    pub fn error(&self) -> Option<&WorkflowError> {
        self.error.as_ref()
    }

    fn owns(&self, token_id: u64) -> bool {
        self.active == Some(token_id) && self.tracker.is_current(token_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::JobHandle;
    use crate::model::generation::GenerationOptions;

    fn asset(name: &str) -> Asset {
        Asset {
            url: format!("https://cdn.example.com/{name}"),
            name: name.to_string(),
            format: "glb".to_string(),
        }
    }

    fn job(id: &str) -> Job {
        Job::new(
            JobHandle {
                id: id.to_string(),
                subscription_key: format!("{id}-key"),
            },
            GenerationOptions::default(),
        )
    }

    #[test]
    fn begin_clears_previous_outcome() {
        let mut state = GenerationState::new();
        let first = state.begin();
        assert!(state.is_loading());
        state.finish(first.id(), Err(WorkflowError::NoJobs));
        assert_eq!(state.error(), Some(&WorkflowError::NoJobs));

        let second = state.begin();
        assert!(state.error().is_none());
        assert!(state.finish(second.id(), Ok(asset("a.glb"))));
        assert_eq!(state.asset().map(|a| a.name.as_str()), Some("a.glb"));
        assert!(!state.is_loading());

        state.begin();
        assert!(state.asset().is_none());
        assert!(state.job().is_none());
    }

    #[test]
    fn stale_results_are_ignored() {
        let mut state = GenerationState::new();
        let old = state.begin();
        let new = state.begin();
        assert!(!old.is_current());

        assert!(!state.update(old.id(), job("old")));
        assert!(state.update(new.id(), job("new")));
        assert!(!state.finish(old.id(), Ok(asset("old.glb"))));
        assert!(state.asset().is_none());
        assert!(state.is_loading());

        assert!(state.finish(new.id(), Ok(asset("new.glb"))));
        assert_eq!(state.job().map(|j| j.id.as_str()), Some("new"));
        assert_eq!(state.asset().map(|a| a.name.as_str()), Some("new.glb"));
    }

    #[test]
    fn cancel_supersedes_running_job() {
        let mut state = GenerationState::new();
        let token = state.begin();
        state.cancel();
        assert!(!token.is_current());
        assert!(!state.is_loading());
        assert!(!state.finish(token.id(), Err(WorkflowError::Superseded)));
    }

    #[test]
    fn showing_a_saved_model_replaces_the_error() {
        let mut state = GenerationState::new();
        let token = state.begin();
        state.finish(token.id(), Err(WorkflowError::NoFiles));
        state.show(asset("saved.glb"));
        assert!(state.error().is_none());
        assert_eq!(state.asset().map(|a| a.format.as_str()), Some("glb"));
    }
}
