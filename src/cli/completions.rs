//! `--completions SHELL`: completion scripts covering `--key`, `--key-id`,
//! `--verbose` and the optional `VALUE_VAR` argument.

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::Shell as CompletionShell;

use crate::cli::{Cli, Shell};
use crate::error::Result;

const BIN_NAME: &str = "ghsecret";

impl From<Shell> for CompletionShell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => CompletionShell::Bash,
            Shell::Zsh => CompletionShell::Zsh,
            Shell::Fish => CompletionShell::Fish,
            Shell::PowerShell => CompletionShell::PowerShell,
            Shell::Elvish => CompletionShell::Elvish,
        }
    }
}

/// Print the script for `shell` to stdout.
pub fn execute(shell: Shell) -> Result<()> {
    let stdout = io::stdout();
    write_script(shell, &mut stdout.lock())
}

/// Write the script for `shell` to `out`.
pub fn write_script(shell: Shell, out: &mut impl Write) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(CompletionShell::from(shell), &mut cmd, BIN_NAME, &mut *out);
    out.flush()?;
    Ok(())
}
