//! Error types surfaced by the participant counting pipeline.

use http::StatusCode;
use thiserror::Error;

/// Errors surfaced while validating input or talking to GitHub.
///
/// Every variant is terminal: the pipeline never retries, so each error
/// propagates to the top level and fails the run with its message.
#[derive(Debug, Error)]
pub enum ParticipantsError {
    /// A required environment variable is absent.
    #[error("input key \"{key}\" was not declared")]
    MissingKey {
        /// Name of the absent environment variable.
        key: &'static str,
    },

    /// The configured username contains characters GitHub does not allow.
    #[error("\"{value}\" could not be interpreted as a valid GitHub username")]
    InvalidUsername {
        /// The rejected raw value.
        value: String,
    },

    /// The configured repository name contains characters GitHub does not
    /// allow.
    #[error("\"{value}\" could not be interpreted as a valid GitHub repository")]
    InvalidRepository {
        /// The rejected raw value.
        value: String,
    },

    /// The configured pull request number is not a positive integer.
    #[error("\"{value}\" could not be interpreted as a valid pull request number")]
    InvalidPullRequestNumber {
        /// The rejected raw value.
        value: String,
    },

    /// The REST API did not confirm the pull request exists.
    #[error(
        "the pull request #{number} on the {user}/{repository} repository could not be fetched ({} error)",
        .status.as_u16()
    )]
    PullRequestUnavailable {
        /// Owner of the repository.
        user: String,
        /// Name of the repository.
        repository: String,
        /// Pull request number.
        number: String,
        /// Status the API answered with.
        status: StatusCode,
    },

    /// A page or API endpoint could not be retrieved over the network.
    #[error("cannot fetch the pull request page at {url}")]
    Fetch {
        /// Address of the attempted fetch.
        url: String,
        /// Transport-level cause.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The fetched body could not be interpreted as an HTML document.
    #[error("cannot parse the pull request page at {url}: {message}")]
    Parse {
        /// Address of the fetched page.
        url: String,
        /// Detail of the parse failure.
        message: String,
    },

    /// The participants heading was absent from the page sidebar, or empty.
    #[error("cannot parse participant string in the pull request page")]
    MissingParticipantString,

    /// The heading text did not contain a participant count.
    #[error("cannot parse the number of participants in participant string {heading:?}")]
    MissingParticipantCount {
        /// The heading text that failed to match.
        heading: String,
    },

    /// A fixed selector or pattern failed to compile.
    #[error("invalid scraping pattern: {message}")]
    Pattern {
        /// Description of the pattern failure.
        message: String,
    },

    /// The HTTP client or a request URL could not be constructed.
    #[error("cannot prepare the GitHub request: {message}")]
    Request {
        /// Detail from the underlying client.
        message: String,
    },

    /// Local I/O failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use http::StatusCode;

    use super::ParticipantsError;

    #[test]
    fn missing_key_names_the_variable() {
        let error = ParticipantsError::MissingKey {
            key: "GITHUB_REPOSITORY",
        };

        assert_eq!(
            error.to_string(),
            "input key \"GITHUB_REPOSITORY\" was not declared"
        );
    }

    #[test]
    fn invalid_username_names_the_raw_value() {
        let error = ParticipantsError::InvalidUsername {
            value: "octo cat".to_owned(),
        };

        assert_eq!(
            error.to_string(),
            "\"octo cat\" could not be interpreted as a valid GitHub username"
        );
    }

    #[test]
    fn unavailable_pull_request_names_status_and_coordinates() {
        let error = ParticipantsError::PullRequestUnavailable {
            user: "just1not2".to_owned(),
            repository: "fake-repository".to_owned(),
            number: "1".to_owned(),
            status: StatusCode::NOT_FOUND,
        };

        assert_eq!(
            error.to_string(),
            "the pull request #1 on the just1not2/fake-repository repository could not be fetched (404 error)"
        );
    }
}
