//! The seal command: collect inputs, seal, print one JSON line.

use std::io::{self, Read, Write};

use tracing::debug;

use crate::cli::output;
use crate::core::{Config, EnvNames, Environment, PlaintextSource, ProcessEnv, SealedSecret};
use crate::error::Result;

/// Seal the selected value using the real environment and standard streams.
pub fn execute(names: &EnvNames, args: &[String]) -> Result<()> {
    let source = PlaintextSource::from_args(args)?;

    if source == PlaintextSource::Stdin && atty::is(atty::Stream::Stdin) {
        output::hint("reading secret from stdin, finish with Ctrl-D");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let sealed = run(names, &source, &ProcessEnv, stdin.lock(), stdout.lock())?;

    debug!(key_id = %sealed.key_id, "wrote sealed secret");
    Ok(())
}

/// Run the pipeline against explicit handles.
///
/// Configuration is loaded before the plaintext is read, so a broken setup
/// never consumes stdin. Nothing is written to `out` unless sealing succeeds.
pub fn run(
    names: &EnvNames,
    source: &PlaintextSource,
    env: &impl Environment,
    input: impl Read,
    mut out: impl Write,
) -> Result<SealedSecret> {
    let config = Config::load(names, env)?;
    let plaintext = source.read(env, input)?;

    if plaintext.is_empty() {
        output::warn("sealing an empty value");
    }

    let sealed = config.sealer().seal(&plaintext)?;
    let json = sealed.to_json()?;

    writeln!(out, "{}", json)?;
    out.flush()?;

    Ok(sealed)
}
