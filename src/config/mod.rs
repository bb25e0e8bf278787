//! Application configuration read from the process environment.
//!
//! Three variables identify the pull request to inspect:
//!
//! - `GITHUB_USER`: repository owner; alphanumeric characters or hyphens
//! - `GITHUB_REPOSITORY`: repository name; additionally allows underscores
//! - `GITHUB_PR_NUMBER`: pull request number; a positive integer
//!
//! Keys are read and validated one at a time, in the order above; the first
//! failure aborts loading without touching later keys. Values are used
//! verbatim: no defaults, no trimming, no case normalisation.

use std::env;

use regex::Regex;

use crate::github::error::ParticipantsError;

/// Environment variable naming the repository owner.
const USER_KEY: &str = "GITHUB_USER";
/// Environment variable naming the repository.
const REPOSITORY_KEY: &str = "GITHUB_REPOSITORY";
/// Environment variable naming the pull request number.
const NUMBER_KEY: &str = "GITHUB_PR_NUMBER";

/// Usernames may only contain alphanumeric characters or hyphens.
const USERNAME_PATTERN: &str = "^[A-Za-z0-9-]+$";
/// Repository names may also contain underscores.
const REPOSITORY_PATTERN: &str = "^[A-Za-z0-9_-]+$";

/// Validated pull request coordinates, constructed once at startup.
///
/// The record is immutable after construction and is passed to every
/// downstream stage; nothing else reads the environment. The pull request
/// number is kept in its original string form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    user: String,
    repository: String,
    number: String,
}

impl Configuration {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ParticipantsError::MissingKey`] when a variable is absent
    /// and the matching invalid-value variant when a present value fails its
    /// per-key validation. Keys are checked in declaration order and the
    /// first failure wins.
    pub fn from_env() -> Result<Self, ParticipantsError> {
        Ok(Self {
            user: validated_user(read_key(USER_KEY)?)?,
            repository: validated_repository(read_key(REPOSITORY_KEY)?)?,
            number: validated_number(read_key(NUMBER_KEY)?)?,
        })
    }

    /// Validates explicit values, applying the same rules and ordering as
    /// [`Configuration::from_env`].
    ///
    /// # Errors
    ///
    /// Returns the invalid-value variant for the first field that fails
    /// validation.
    pub fn new(
        user: impl Into<String>,
        repository: impl Into<String>,
        number: impl Into<String>,
    ) -> Result<Self, ParticipantsError> {
        Ok(Self {
            user: validated_user(user.into())?,
            repository: validated_repository(repository.into())?,
            number: validated_number(number.into())?,
        })
    }

    /// Repository owner.
    #[must_use]
    pub const fn user(&self) -> &str {
        self.user.as_str()
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &str {
        self.repository.as_str()
    }

    /// Pull request number, in its original string form.
    #[must_use]
    pub const fn number(&self) -> &str {
        self.number.as_str()
    }
}

fn read_key(key: &'static str) -> Result<String, ParticipantsError> {
    match env::var(key) {
        Ok(value) => Ok(value),
        Err(env::VarError::NotPresent) => Err(ParticipantsError::MissingKey { key }),
        // Lossy values fall through to the per-key validators, which reject
        // the replacement character.
        Err(env::VarError::NotUnicode(raw)) => Ok(raw.to_string_lossy().into_owned()),
    }
}

fn validated_user(value: String) -> Result<String, ParticipantsError> {
    if matches_pattern(USERNAME_PATTERN, &value)? {
        Ok(value)
    } else {
        Err(ParticipantsError::InvalidUsername { value })
    }
}

fn validated_repository(value: String) -> Result<String, ParticipantsError> {
    if matches_pattern(REPOSITORY_PATTERN, &value)? {
        Ok(value)
    } else {
        Err(ParticipantsError::InvalidRepository { value })
    }
}

/// Accepts any string that reads as a positive whole number under float
/// syntax; the original string is what gets stored.
fn validated_number(value: String) -> Result<String, ParticipantsError> {
    let Ok(parsed) = value.parse::<f64>() else {
        return Err(ParticipantsError::InvalidPullRequestNumber { value });
    };
    if !parsed.is_finite() || parsed.fract() != 0.0 || parsed < 1.0 {
        return Err(ParticipantsError::InvalidPullRequestNumber { value });
    }
    Ok(value)
}

fn matches_pattern(pattern: &'static str, value: &str) -> Result<bool, ParticipantsError> {
    let compiled = Regex::new(pattern).map_err(|error| ParticipantsError::Pattern {
        message: error.to_string(),
    })?;
    Ok(compiled.is_match(value))
}
