//! Command-line interface.

pub mod completions;
pub mod output;
pub mod seal;

use clap::Parser;

use crate::core::constants::{DEFAULT_KEY_ID_VAR, DEFAULT_KEY_VAR};
use crate::core::EnvNames;

const HELP_TEMPLATE: &str = "\
{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}";

/// ghsecret - seal a secret for the GitHub secrets API.
#[derive(Parser, Debug)]
#[command(
    name = "ghsecret",
    version,
    about = "Seal a secret for the GitHub secrets API",
    long_about = "Encrypts the value of VALUE_VAR, or stdin if no argument is provided, \
                  using the public key stored in GH_KEY with the key ID in GH_KEY_ID. \
                  The result is a JSON object that can be consumed by the GitHub secrets \
                  API via e.g. the gh CLI client.",
    help_template = HELP_TEMPLATE,
    after_help = "\
Example:
  export GH_KEY=$(gh api repos/OWNER/REPO/actions/secrets/public-key --jq .key)
  export GH_KEY_ID=$(gh api repos/OWNER/REPO/actions/secrets/public-key --jq .key_id)
  ghsecret API_TOKEN | gh api -X PUT repos/OWNER/REPO/actions/secrets/API_TOKEN --input -"
)]
pub struct Cli {
    /// Name of the env var holding the base64 public key
    #[arg(long = "key", value_name = "ENV_NAME", default_value = DEFAULT_KEY_VAR)]
    pub key_var: String,

    /// Name of the env var holding the key ID
    #[arg(long = "key-id", value_name = "ENV_NAME", default_value = DEFAULT_KEY_ID_VAR)]
    pub key_id_var: String,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Env var holding the value to seal (reads stdin when omitted)
    #[arg(value_name = "VALUE_VAR")]
    pub value_var: Vec<String>,
}

impl Cli {
    /// Env var names selected on the command line.
    pub fn env_names(&self) -> EnvNames {
        EnvNames {
            key: self.key_var.clone(),
            key_id: self.key_id_var.clone(),
        }
    }
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

/// Execute the parsed command line.
pub fn execute(cli: Cli) -> crate::error::Result<()> {
    if let Some(shell) = cli.completions {
        return completions::execute(shell);
    }

    seal::execute(&cli.env_names(), &cli.value_var)
}
