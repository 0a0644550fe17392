//! Constants used throughout ghsecret.
//!
//! Centralizes magic strings and sizes.

/// Default name of the env var holding the base64 recipient public key.
pub const DEFAULT_KEY_VAR: &str = "GH_KEY";

/// Default name of the env var holding the key identifier.
pub const DEFAULT_KEY_ID_VAR: &str = "GH_KEY_ID";

/// Env var carrying a `tracing` filter directive.
pub const LOG_ENV: &str = "GHSECRET_LOG";

/// Length of an X25519 public key in bytes.
pub const KEY_SIZE: usize = 32;

/// Poly1305 authentication tag length in bytes.
pub const TAG_SIZE: usize = 16;

/// Bytes a sealed box adds to the plaintext: ephemeral public key plus tag.
pub const SEAL_OVERHEAD: usize = KEY_SIZE + TAG_SIZE;
