//! ghsecret - seal a secret for the GitHub secrets API.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ghsecret::cli::output;
use ghsecret::cli::{execute, Cli};
use ghsecret::core::constants::LOG_ENV;
use ghsecret::error::{ConfigError, Error, KeyError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("ghsecret=debug")
        } else {
            EnvFilter::new("ghsecret=warn")
        }
    });

    // Logs share stderr with diagnostics; stdout carries only the JSON.
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Config(ConfigError::MissingKey { .. })
            | Error::Config(ConfigError::MissingKeyId { .. }) => {
                Some("fetch them with: gh api repos/OWNER/REPO/actions/secrets/public-key")
            }
            Error::Key(KeyError::InvalidLength { .. }) => {
                Some("the key must be the base64 `key` field of the public-key response")
            }
            Error::Usage(_) => Some("run: ghsecret --help"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(e.exit_code());
    }
}
