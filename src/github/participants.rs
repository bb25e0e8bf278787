//! Participant counting pipeline over a pull request gateway.

use super::error::ParticipantsError;
use super::gateway::PullRequestGateway;
use super::scrape;
use crate::config::Configuration;

/// Counts the participants shown on a pull request page.
///
/// Composes the gateway operations into a forward-only pipeline: confirm the
/// pull request exists, fetch its rendered page, scrape the participant
/// count out of the sidebar. The second fetch never starts before the first
/// completes.
pub struct ParticipantExtractor<'client, Gateway>
where
    Gateway: PullRequestGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> ParticipantExtractor<'client, Gateway>
where
    Gateway: PullRequestGateway,
{
    /// Create a new extractor using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Count the participants on the target pull request.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures ([`ParticipantsError::PullRequestUnavailable`],
    /// [`ParticipantsError::Fetch`]) and scraping failures
    /// ([`ParticipantsError::Parse`], [`ParticipantsError::MissingParticipantString`],
    /// [`ParticipantsError::MissingParticipantCount`]).
    pub async fn count(&self, config: &Configuration) -> Result<String, ParticipantsError> {
        self.client.assert_pull_request_exists(config).await?;
        let page = self.client.fetch_pull_request_page(config).await?;
        scrape::participant_count(&page)
    }
}

/// Formats the stdout summary line for a counted pull request.
#[must_use]
pub fn summary(config: &Configuration, participants: &str) -> String {
    format!(
        "Number of participants on PR #{} on the {}/{} repository: {participants}",
        config.number(),
        config.user(),
        config.repository(),
    )
}

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use url::Url;

    use super::{ParticipantExtractor, summary};
    use crate::config::Configuration;
    use crate::github::error::ParticipantsError;
    use crate::github::gateway::{MockPullRequestGateway, PullRequestPage};

    const SIDEBAR_PAGE: &str = r#"<html>
  <body>
    <div id="partial-users-participants">
      <div class="participation">
        <div class="discussion-sidebar-heading">
          2 participants
        </div>
      </div>
    </div>
  </body>
</html>"#;

    fn configuration() -> Configuration {
        Configuration::new("octocat", "hello-world", "42").expect("valid configuration")
    }

    fn fixture_page() -> PullRequestPage {
        PullRequestPage {
            url: Url::parse("https://github.com/octocat/hello-world/pull/42")
                .expect("page URL should parse"),
            body: SIDEBAR_PAGE.to_owned(),
        }
    }

    #[tokio::test]
    async fn counts_participants_when_the_pull_request_exists() {
        let mut gateway = MockPullRequestGateway::new();
        gateway
            .expect_assert_pull_request_exists()
            .times(1)
            .returning(|_| Ok(()));
        gateway
            .expect_fetch_pull_request_page()
            .times(1)
            .returning(|_| Ok(fixture_page()));

        let extractor = ParticipantExtractor::new(&gateway);
        let count = extractor
            .count(&configuration())
            .await
            .expect("count should succeed");

        assert_eq!(count, "2");
    }

    #[tokio::test]
    async fn stops_before_fetching_when_the_probe_fails() {
        let mut gateway = MockPullRequestGateway::new();
        gateway
            .expect_assert_pull_request_exists()
            .times(1)
            .returning(|_| {
                Err(ParticipantsError::PullRequestUnavailable {
                    user: "octocat".to_owned(),
                    repository: "hello-world".to_owned(),
                    number: "42".to_owned(),
                    status: StatusCode::NOT_FOUND,
                })
            });
        gateway.expect_fetch_pull_request_page().never();

        let extractor = ParticipantExtractor::new(&gateway);
        let result = extractor.count(&configuration()).await;

        assert!(
            matches!(
                &result,
                Err(ParticipantsError::PullRequestUnavailable { status, .. })
                    if *status == StatusCode::NOT_FOUND
            ),
            "expected the probe failure to propagate, got {result:?}"
        );
    }

    #[test]
    fn formats_the_summary_line() {
        let line = summary(&configuration(), "104");

        assert_eq!(
            line,
            "Number of participants on PR #42 on the octocat/hello-world repository: 104"
        );
    }
}
