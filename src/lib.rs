//! Counts the participants listed on a GitHub pull request page.
//!
//! The crate validates environment-provided pull request coordinates,
//! confirms the pull request exists through the GitHub REST API, then fetches
//! the rendered pull request page and scrapes the participant count from its
//! sidebar. Each stage either produces a value or fails the whole run with a
//! [`ParticipantsError`]; there are no retries and no partial results.

pub mod config;
pub mod github;

pub use config::Configuration;
pub use github::{
    HttpGateway, ParticipantExtractor, ParticipantsError, PullRequestGateway, PullRequestPage,
};
