//! Test support utilities for ghsecret integration tests.
//!
//! Provides a recipient keypair and helpers to run the binary against it.

#![allow(dead_code)]

pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use crypto_box::SecretKey;
use rand::rngs::OsRng;

/// Test environment with a freshly generated recipient keypair.
///
/// The binary runs with a cleared environment, so tests never depend on
/// variables set in the developer's shell and can run in parallel.
pub struct Test {
    /// Recipient secret key, used to open what the binary seals
    pub secret: SecretKey,
    /// Key ID passed through GH_KEY_ID
    pub key_id: String,
}

impl Test {
    /// Create a new test environment.
    pub fn new() -> Self {
        Self::with_key_id(DEFAULT_KEY_ID)
    }

    /// Create a test environment with a specific key ID.
    pub fn with_key_id(key_id: &str) -> Self {
        Self {
            secret: SecretKey::generate(&mut OsRng),
            key_id: key_id.to_string(),
        }
    }

    /// Base64 form of the recipient public key.
    pub fn public_key_b64(&self) -> String {
        STANDARD.encode(self.secret.public_key().as_bytes())
    }

    /// Open a sealed box with the recipient secret key.
    pub fn open(&self, ciphertext: &[u8]) -> Vec<u8> {
        self.secret
            .unseal(ciphertext)
            .expect("sealed value should open with the recipient key")
    }
}
