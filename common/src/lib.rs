//! Types and logic shared by the relay server (`backend`) and the browser
//! application (`frontend`).
//!
//! Nothing in this crate touches the network directly. The generation workflow
//! in [`workflow`] talks to the outside world through the [`workflow::GenerationApi`]
//! and [`workflow::Sleeper`] traits, and the account layer through
//! [`account::AccountService`], so every decision the application makes can be
//! exercised natively in tests.

pub mod account;
pub mod i18n;
pub mod jobs;
pub mod model;
pub mod requests;
pub mod theme;
pub mod workflow;
