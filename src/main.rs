//! CLI entrypoint that counts the participants on a GitHub pull request.

use std::io::{self, Write};
use std::process::ExitCode;

use pr_participants::github::participants;
use pr_participants::{Configuration, HttpGateway, ParticipantExtractor, ParticipantsError};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ParticipantsError> {
    let config = Configuration::from_env()?;

    let gateway = HttpGateway::new()?;
    let extractor = ParticipantExtractor::new(&gateway);
    let count = extractor.count(&config).await?;

    write_summary(&config, &count)
}

fn write_summary(config: &Configuration, count: &str) -> Result<(), ParticipantsError> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", participants::summary(config, count)).map_err(|error| {
        ParticipantsError::Io {
            message: error.to_string(),
        }
    })
}
