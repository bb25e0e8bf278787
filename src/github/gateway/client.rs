//! Reqwest-backed gateway implementation.

use std::time::Duration;

use async_trait::async_trait;
use http::StatusCode;
use url::Url;

use super::{PullRequestGateway, PullRequestPage};
use crate::config::Configuration;
use crate::github::error::ParticipantsError;

/// Public GitHub REST API endpoint.
const DEFAULT_API_BASE: &str = "https://api.github.com/";
/// Public GitHub web frontend.
const DEFAULT_WEB_BASE: &str = "https://github.com/";

/// Upper bound on each outbound request. A hardening default; the fetch
/// contract itself defines no timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Identifies the tool to GitHub; api.github.com rejects agent-less requests.
const USER_AGENT: &str = concat!("pr-participants/", env!("CARGO_PKG_VERSION"));

/// Gateway backed by a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    api_base: Url,
    web_base: Url,
}

impl HttpGateway {
    /// Creates a gateway pointed at github.com.
    ///
    /// # Errors
    ///
    /// Returns [`ParticipantsError::Request`] when the HTTP client cannot be
    /// constructed.
    pub fn new() -> Result<Self, ParticipantsError> {
        let api_base = Url::parse(DEFAULT_API_BASE).map_err(|error| request_error(&error))?;
        let web_base = Url::parse(DEFAULT_WEB_BASE).map_err(|error| request_error(&error))?;
        Self::with_bases(api_base, web_base)
    }

    /// Creates a gateway with custom API and web endpoints, for test servers
    /// or GitHub Enterprise-style hosts.
    ///
    /// # Errors
    ///
    /// Returns [`ParticipantsError::Request`] when the HTTP client cannot be
    /// constructed.
    pub fn with_bases(api_base: Url, web_base: Url) -> Result<Self, ParticipantsError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|error| request_error(&error))?;

        Ok(Self {
            client,
            api_base,
            web_base,
        })
    }

    fn pull_request_api_url(&self, config: &Configuration) -> Result<Url, ParticipantsError> {
        let path = format!(
            "repos/{}/{}/pulls/{}",
            config.user(),
            config.repository(),
            config.number()
        );
        self.api_base.join(&path).map_err(|error| request_error(&error))
    }

    fn pull_request_page_url(&self, config: &Configuration) -> Result<Url, ParticipantsError> {
        let path = format!(
            "{}/{}/pull/{}",
            config.user(),
            config.repository(),
            config.number()
        );
        self.web_base.join(&path).map_err(|error| request_error(&error))
    }
}

#[async_trait]
impl PullRequestGateway for HttpGateway {
    async fn assert_pull_request_exists(
        &self,
        config: &Configuration,
    ) -> Result<(), ParticipantsError> {
        let url = self.pull_request_api_url(config)?;
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|error| fetch_error(&url, error))?;

        let status = response.status();
        if status != StatusCode::OK {
            if let Some(message) = api_error_message(response).await {
                tracing::debug!("GitHub API reported: {message}");
            }
            return Err(ParticipantsError::PullRequestUnavailable {
                user: config.user().to_owned(),
                repository: config.repository().to_owned(),
                number: config.number().to_owned(),
                status,
            });
        }
        Ok(())
    }

    async fn fetch_pull_request_page(
        &self,
        config: &Configuration,
    ) -> Result<PullRequestPage, ParticipantsError> {
        let url = self.pull_request_page_url(config)?;
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|error| fetch_error(&url, error))?;
        let body = response
            .text()
            .await
            .map_err(|error| fetch_error(&url, error))?;

        Ok(PullRequestPage { url, body })
    }
}

fn request_error(error: &dyn std::fmt::Display) -> ParticipantsError {
    ParticipantsError::Request {
        message: error.to_string(),
    }
}

fn fetch_error(url: &Url, error: reqwest::Error) -> ParticipantsError {
    ParticipantsError::Fetch {
        url: url.to_string(),
        source: Box::new(error),
    }
}

/// Pulls the `message` field out of a REST API error body, if there is one.
async fn api_error_message(response: reqwest::Response) -> Option<String> {
    let body = response.text().await.ok()?;
    let value: serde_json::Value = serde_json::from_str(&body).ok()?;
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
}
