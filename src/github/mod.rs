//! GitHub-facing modules: errors, gateways, and the participant pipeline.

pub mod error;
pub mod gateway;
pub mod participants;
pub(crate) mod scrape;

pub use error::ParticipantsError;
pub use gateway::{HttpGateway, PullRequestGateway, PullRequestPage};
pub use participants::ParticipantExtractor;
