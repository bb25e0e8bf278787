//! Trait-based gateways for talking to GitHub.
//!
//! The trait seam enables mocking in tests while the reqwest-backed
//! implementation performs real HTTP requests. Both pipeline suspension
//! points (the existence probe and the page fetch) live behind this trait.

mod client;

pub use client::HttpGateway;

use async_trait::async_trait;
use url::Url;

use crate::config::Configuration;
use crate::github::error::ParticipantsError;

/// A pull request page fetched from GitHub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestPage {
    /// Address the page was fetched from.
    pub url: Url,
    /// Raw HTML body of the page.
    pub body: String,
}

/// Gateway that can probe a pull request and fetch its rendered page.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PullRequestGateway: Send + Sync {
    /// Confirm the pull request exists through the REST API.
    ///
    /// Issues exactly one request; any status other than 200 is a failure.
    async fn assert_pull_request_exists(
        &self,
        config: &Configuration,
    ) -> Result<(), ParticipantsError>;

    /// Fetch the rendered pull request page as text.
    ///
    /// The response status is not inspected; whatever body comes back is
    /// handed to the scraper.
    async fn fetch_pull_request_page(
        &self,
        config: &Configuration,
    ) -> Result<PullRequestPage, ParticipantsError>;
}
