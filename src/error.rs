//! Error types for ghsecret.
//!
//! Each failure class has its own enum; [`Error`] wraps them so the binary
//! can pick a diagnostic and exit code at a single boundary.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error("couldn't encode secret: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit code for this error.
    ///
    /// Usage errors share clap's exit code; everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage(_) => 2,
            _ => 1,
        }
    }
}

/// Required configuration is missing from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("required env var \"{var}\" with key data not found")]
    MissingKey { var: String },

    #[error("required env var \"{var}\" with key ID not found")]
    MissingKeyId { var: String },

    #[error("env var \"{var}\" is not valid UTF-8")]
    NotUnicode { var: String },
}

/// Recipient key material could not be decoded.
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("key did not decode (base64): {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("key must be {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// The plaintext could not be read.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("reading standard input: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("provided env var \"{var}\" with value not found")]
    MissingVariable { var: String },
}

/// Wrong command-line shape.
#[derive(Error, Debug)]
pub enum UsageError {
    #[error("either no or exactly one argument is required, got {count}")]
    TooManyArguments { count: usize },
}

/// The sealing primitive failed.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("encrypt didn't work: {0}")]
    EncryptionFailed(String),
}

pub type Result<T> = std::result::Result<T, Error>;
