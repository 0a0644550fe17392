//! Runtime configuration.
//!
//! Everything the sealer needs comes from environment variables whose names
//! can be overridden on the command line. The values are read once at
//! start-up into a [`Config`] that is passed down explicitly.

use std::collections::{BTreeMap, HashMap};
use std::ffi::OsString;

use tracing::debug;

use crate::core::constants::{DEFAULT_KEY_ID_VAR, DEFAULT_KEY_VAR};
use crate::core::key::RecipientKey;
use crate::core::sealer::{KeyId, Sealer};
use crate::error::{ConfigError, Result};

/// Source of environment variables.
///
/// Lets tests supply a map instead of mutating the process environment.
pub trait Environment {
    /// Look up a variable, returning `None` when it is unset.
    fn var_os(&self, name: &str) -> Option<OsString>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var_os(&self, name: &str) -> Option<OsString> {
        std::env::var_os(name)
    }
}

impl Environment for BTreeMap<String, String> {
    fn var_os(&self, name: &str) -> Option<OsString> {
        self.get(name).map(OsString::from)
    }
}

impl Environment for HashMap<String, String> {
    fn var_os(&self, name: &str) -> Option<OsString> {
        self.get(name).map(OsString::from)
    }
}

/// Names of the env vars carrying the key and key ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvNames {
    pub key: String,
    pub key_id: String,
}

impl Default for EnvNames {
    fn default() -> Self {
        Self {
            key: DEFAULT_KEY_VAR.to_string(),
            key_id: DEFAULT_KEY_ID_VAR.to_string(),
        }
    }
}

/// Resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub key: RecipientKey,
    pub key_id: KeyId,
}

impl Config {
    /// Read and decode the key and key ID.
    ///
    /// # Errors
    ///
    /// - `ConfigError::MissingKey` / `MissingKeyId` if a variable is unset
    /// - `ConfigError::NotUnicode` if a variable is not valid UTF-8
    /// - `KeyError` if the key does not decode to 32 bytes
    pub fn load(names: &EnvNames, env: &impl Environment) -> Result<Self> {
        let encoded_key = env
            .var_os(&names.key)
            .ok_or_else(|| ConfigError::MissingKey {
                var: names.key.clone(),
            })?;
        let encoded_key = into_string(encoded_key, &names.key)?;

        let key_id = env
            .var_os(&names.key_id)
            .ok_or_else(|| ConfigError::MissingKeyId {
                var: names.key_id.clone(),
            })?;
        let key_id = into_string(key_id, &names.key_id)?;

        let key = RecipientKey::from_base64(&encoded_key)?;

        debug!(key_var = %names.key, key_id_var = %names.key_id, "loaded config");

        Ok(Self { key, key_id })
    }

    /// Build a sealer bound to this key and key ID.
    pub fn sealer(&self) -> Sealer {
        Sealer::new(self.key, self.key_id.clone())
    }
}

fn into_string(value: OsString, var: &str) -> Result<String> {
    value.into_string().map_err(|_| {
        ConfigError::NotUnicode {
            var: var.to_string(),
        }
        .into()
    })
}
