//! The submit → poll → download workflow.
//!
//! - `submission`: the prompt/images/options bundle and the five-image cap.
//! - `poller`: classification of a status response into the next poll step.
//! - `resolver`: selection of the displayable file from the download list.
//! - `tracker`: job tokens that let a newer submission supersede an older one.
//! - `runner`: drives one job end to end through a [`GenerationApi`].
//! - `state`: the view-side record of the current job, result and error.

mod error;
mod poller;
mod resolver;
mod runner;
mod state;
mod submission;
mod tracker;

pub use error::{RequestKind, WorkflowError};
pub use poller::{evaluate, PollDecision, PollPolicy, POLL_INTERVAL};
pub use resolver::{resolve_asset, select_file, VIEWER_EXTENSION};
pub use runner::{GenerationApi, JobRunner, Sleeper};
pub use state::GenerationState;
pub use submission::Submission;
pub use tracker::{JobToken, JobTracker};
