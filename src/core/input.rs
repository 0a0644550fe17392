//! Plaintext input.
//!
//! The value to seal comes from standard input, or from an env var named by
//! the single positional argument.

use std::ffi::OsString;
use std::io::Read;

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::config::Environment;
use crate::error::{InputError, Result, UsageError};

/// Where the plaintext is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaintextSource {
    /// Read until end of stream.
    Stdin,
    /// Value of the named env var.
    Env(String),
}

impl PlaintextSource {
    /// Pick the source from the positional arguments.
    ///
    /// # Errors
    ///
    /// Returns `UsageError::TooManyArguments` for more than one argument.
    pub fn from_args(args: &[String]) -> Result<Self> {
        match args {
            [] => Ok(Self::Stdin),
            [name] => Ok(Self::Env(name.clone())),
            _ => Err(UsageError::TooManyArguments { count: args.len() }.into()),
        }
    }

    /// Read the plaintext.
    ///
    /// `stdin` is only consumed for [`PlaintextSource::Stdin`]. Env var
    /// values are taken byte for byte.
    ///
    /// # Errors
    ///
    /// - `InputError::Stdin` if reading the stream fails
    /// - `InputError::MissingVariable` if the named env var is unset
    pub fn read(
        &self,
        env: &impl Environment,
        mut stdin: impl Read,
    ) -> Result<Zeroizing<Vec<u8>>> {
        let plaintext = match self {
            Self::Stdin => {
                let mut buf = Zeroizing::new(Vec::new());
                stdin.read_to_end(&mut buf).map_err(InputError::Stdin)?;
                buf
            }
            Self::Env(name) => {
                let value = env
                    .var_os(name)
                    .ok_or_else(|| InputError::MissingVariable { var: name.clone() })?;
                Zeroizing::new(os_bytes(value))
            }
        };

        debug!(source = ?self, plaintext_len = plaintext.len(), "read plaintext");
        Ok(plaintext)
    }
}

#[cfg(unix)]
fn os_bytes(value: OsString) -> Vec<u8> {
    use std::os::unix::ffi::OsStringExt;
    value.into_vec()
}

#[cfg(not(unix))]
fn os_bytes(value: OsString) -> Vec<u8> {
    value.to_string_lossy().into_owned().into_bytes()
}
