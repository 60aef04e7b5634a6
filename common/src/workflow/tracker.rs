//! Supersession of in-flight jobs.
//!
//! The browser runs one job at a time, but nothing stops the user from
//! submitting again while an older poll chain is still sleeping. Each
//! submission takes a fresh [`JobToken`] from the shared [`JobTracker`]; once
//! a newer token exists, the older one reports itself stale and its runner
//! stops at the next checkpoint.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::WorkflowError;

#[derive(Debug, Clone, Default)]
pub struct JobTracker {
    current: Arc<AtomicU64>,
}

impl JobTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new generation, superseding every earlier token.
    pub fn begin(&self) -> JobToken {
        let id = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        JobToken {
            id,
            current: Arc::clone(&self.current),
        }
    }

    /// Supersedes the active token without starting anything new.
    pub fn cancel(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_current(&self, id: u64) -> bool {
        self.current.load(Ordering::SeqCst) == id
    }
}

#[derive(Debug, Clone)]
pub struct JobToken {
    id: u64,
    current: Arc<AtomicU64>,
}

impl JobToken {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.id
    }

    /// `Err(Superseded)` once a newer submission has started.
    pub fn check(&self) -> Result<(), WorkflowError> {
        if self.is_current() {
            Ok(())
        } else {
            Err(WorkflowError::Superseded)
        }
    }
}

impl PartialEq for JobToken {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && Arc::ptr_eq(&self.current, &other.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_token_supersedes_older() {
        let tracker = JobTracker::new();
        let first = tracker.begin();
        assert!(first.check().is_ok());

        let second = tracker.begin();
        assert_eq!(first.check(), Err(WorkflowError::Superseded));
        assert!(second.is_current());
        assert!(tracker.is_current(second.id()));
        assert!(!tracker.is_current(first.id()));
    }

    #[test]
    fn cancel_invalidates_without_new_token() {
        let tracker = JobTracker::new();
        let token = tracker.begin();
        tracker.cancel();
        assert!(!token.is_current());
    }
}
