//! Participant extraction from pull request page HTML.
//!
//! The extraction walks a fixed structural path to the participants sidebar
//! heading and captures the digit run out of its text. It is coupled to the
//! page's current markup: structural drift surfaces as an extraction error,
//! never as a wrong count.

use regex::Regex;
use scraper::{Html, Selector};

use super::error::ParticipantsError;
use super::gateway::PullRequestPage;

/// Structural path to the participants heading in the page sidebar.
const PARTICIPANTS_SELECTOR: &str =
    "div#partial-users-participants div.participation div.discussion-sidebar-heading";

/// Captures the digit run out of a heading such as ` 3 participants `.
const PARTICIPANTS_PATTERN: &str = r" (\d+) participant";

/// Scrape the participant count out of a fetched pull request page.
pub(crate) fn participant_count(page: &PullRequestPage) -> Result<String, ParticipantsError> {
    let document = parse_page(page)?;
    let heading = heading_text(&document)?;
    count_in_heading(&heading)
}

/// HTML5 parsing is error-recovering, so the parse stage can only reject a
/// body with nothing in it.
fn parse_page(page: &PullRequestPage) -> Result<Html, ParticipantsError> {
    if page.body.is_empty() {
        return Err(ParticipantsError::Parse {
            url: page.url.to_string(),
            message: "response body is empty".to_owned(),
        });
    }
    Ok(Html::parse_document(&page.body))
}

/// First text chunk of the sidebar heading node.
fn heading_text(document: &Html) -> Result<String, ParticipantsError> {
    let selector =
        Selector::parse(PARTICIPANTS_SELECTOR).map_err(|error| ParticipantsError::Pattern {
            message: error.to_string(),
        })?;

    let heading = document
        .select(&selector)
        .next()
        .ok_or(ParticipantsError::MissingParticipantString)?;
    let text = heading
        .text()
        .next()
        .ok_or(ParticipantsError::MissingParticipantString)?;
    Ok(text.to_owned())
}

fn count_in_heading(heading: &str) -> Result<String, ParticipantsError> {
    let pattern = Regex::new(PARTICIPANTS_PATTERN).map_err(|error| ParticipantsError::Pattern {
        message: error.to_string(),
    })?;

    pattern
        .captures(heading)
        .and_then(|captures| captures.get(1))
        .map(|digits| digits.as_str().to_owned())
        .ok_or_else(|| ParticipantsError::MissingParticipantCount {
            heading: heading.to_owned(),
        })
}
